use crate::db::DatabaseError;

/// Macro to generate a string-backed enum with as_str + std::str::FromStr.
///
/// Serde goes through the string label rather than the variant name, so
/// persisted JSON carries the same labels the app has always written
/// (e.g. "As Needed", "pending").
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Self, D::Error> {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

str_enum!(TimeOfDay {
    Morning => "Morning",
    Afternoon => "Afternoon",
    Evening => "Evening",
    Night => "Night",
    AsNeeded => "As Needed",
});

str_enum!(DoseStatus {
    Pending => "pending",
    Taken => "taken",
    Skipped => "skipped",
    Missed => "missed",
});

str_enum!(VitalStatus {
    Normal => "normal",
    Warning => "warning",
    Critical => "critical",
    Unknown => "unknown",
});

str_enum!(VitalType {
    BloodPressure => "Blood Pressure",
    BloodSugar => "Blood Sugar",
    HeartRate => "Heart Rate",
    Spo2 => "SpO2",
    Weight => "Weight",
    Temperature => "Temperature",
});

str_enum!(VitalSource {
    Extracted => "extracted",
    Manual => "manual",
});

impl VitalType {
    /// Default unit for this vital type.
    pub fn default_unit(self) -> &'static str {
        match self {
            VitalType::BloodPressure => "mmHg",
            VitalType::BloodSugar => "mg/dL",
            VitalType::HeartRate => "bpm",
            VitalType::Spo2 => "%",
            VitalType::Weight => "kg",
            VitalType::Temperature => "°C",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn time_of_day_round_trip() {
        for (variant, s) in [
            (TimeOfDay::Morning, "Morning"),
            (TimeOfDay::Afternoon, "Afternoon"),
            (TimeOfDay::Evening, "Evening"),
            (TimeOfDay::Night, "Night"),
            (TimeOfDay::AsNeeded, "As Needed"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(TimeOfDay::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn dose_status_round_trip() {
        for (variant, s) in [
            (DoseStatus::Pending, "pending"),
            (DoseStatus::Taken, "taken"),
            (DoseStatus::Skipped, "skipped"),
            (DoseStatus::Missed, "missed"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(DoseStatus::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn vital_type_round_trip() {
        for (variant, s) in [
            (VitalType::BloodPressure, "Blood Pressure"),
            (VitalType::BloodSugar, "Blood Sugar"),
            (VitalType::HeartRate, "Heart Rate"),
            (VitalType::Spo2, "SpO2"),
            (VitalType::Weight, "Weight"),
            (VitalType::Temperature, "Temperature"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(VitalType::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn serde_uses_string_labels() {
        let json = serde_json::to_string(&TimeOfDay::AsNeeded).unwrap();
        assert_eq!(json, "\"As Needed\"");
        let back: TimeOfDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TimeOfDay::AsNeeded);

        assert_eq!(serde_json::to_string(&DoseStatus::Pending).unwrap(), "\"pending\"");
        assert_eq!(serde_json::to_string(&VitalType::Spo2).unwrap(), "\"SpO2\"");
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(TimeOfDay::from_str("Midnight").is_err());
        assert!(DoseStatus::from_str("unknown-status").is_err());
        assert!(VitalStatus::from_str("").is_err());
    }

    #[test]
    fn default_units() {
        assert_eq!(VitalType::BloodPressure.default_unit(), "mmHg");
        assert_eq!(VitalType::Spo2.default_unit(), "%");
        assert_eq!(VitalType::HeartRate.default_unit(), "bpm");
    }
}
