use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{VitalSource, VitalStatus, VitalType};
use crate::vitals::classify_vital;

/// A single vital-sign observation. Immutable after creation; the severity
/// status is computed once from the raw value and stored with the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VitalRecord {
    pub id: Uuid,
    pub vital_type: VitalType,
    /// Raw value as entered or extracted. Compound for some types,
    /// e.g. "120/80" for blood pressure.
    pub value: String,
    pub unit: String,
    pub recorded_at: NaiveDateTime,
    pub status: VitalStatus,
    pub source: VitalSource,
}

impl VitalRecord {
    /// Build a record, classifying the raw value into a severity bucket.
    /// Malformed values classify as `Unknown` rather than failing.
    pub fn new(
        vital_type: VitalType,
        value: impl Into<String>,
        unit: impl Into<String>,
        recorded_at: NaiveDateTime,
        source: VitalSource,
    ) -> Self {
        let value = value.into();
        let status = classify_vital(vital_type, &value);
        Self {
            id: Uuid::new_v4(),
            vital_type,
            value,
            unit: unit.into(),
            recorded_at,
            status,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at_noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn new_record_classifies_value() {
        let record = VitalRecord::new(
            VitalType::BloodPressure,
            "150/95",
            VitalType::BloodPressure.default_unit(),
            at_noon(),
            VitalSource::Manual,
        );
        assert_eq!(record.status, VitalStatus::Critical);
        assert_eq!(record.unit, "mmHg");
    }

    #[test]
    fn malformed_value_records_as_unknown() {
        let record = VitalRecord::new(
            VitalType::HeartRate,
            "n/a",
            "bpm",
            at_noon(),
            VitalSource::Extracted,
        );
        assert_eq!(record.status, VitalStatus::Unknown);
    }
}
