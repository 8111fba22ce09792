//! Vital-sign severity classification.
//!
//! Threshold rules over raw reading strings. The classifier is total:
//! any value that fails to parse resolves to `Unknown`, which the UI
//! renders as a neutral, unflagged state. Rule order matters — the
//! critical thresholds are checked before the low and elevated ones.

use crate::models::enums::{VitalStatus, VitalType};

/// Classify a raw vital reading into a severity bucket.
pub fn classify_vital(vital_type: VitalType, value: &str) -> VitalStatus {
    match vital_type {
        VitalType::BloodPressure => classify_blood_pressure(value),
        VitalType::BloodSugar => classify_blood_sugar(value),
        VitalType::HeartRate => classify_heart_rate(value),
        VitalType::Spo2 => classify_spo2(value),
        // No reference ranges defined for these types.
        VitalType::Weight | VitalType::Temperature => VitalStatus::Unknown,
    }
}

/// Parse a "sys/dia" blood pressure string into its two integer parts.
fn parse_blood_pressure(value: &str) -> Option<(i32, i32)> {
    let mut parts = value.split('/');
    let sys = parts.next()?.trim().parse::<i32>().ok()?;
    let dia = parts.next()?.trim().parse::<i32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((sys, dia))
}

fn classify_blood_pressure(value: &str) -> VitalStatus {
    let Some((sys, dia)) = parse_blood_pressure(value) else {
        return VitalStatus::Unknown;
    };

    if sys > 140 || dia > 90 {
        VitalStatus::Critical // hypertensive
    } else if sys < 90 || dia < 60 {
        VitalStatus::Warning // low
    } else if sys > 120 || dia > 80 {
        VitalStatus::Warning // elevated
    } else {
        VitalStatus::Normal
    }
}

/// Random / post-prandial glucose thresholds in mg/dL.
fn classify_blood_sugar(value: &str) -> VitalStatus {
    let Ok(num) = value.trim().parse::<f64>() else {
        return VitalStatus::Unknown;
    };

    if num > 200.0 {
        VitalStatus::Critical
    } else if num > 140.0 || num < 70.0 {
        VitalStatus::Warning
    } else {
        VitalStatus::Normal
    }
}

/// Resting heart rate in bpm. Tachycardia and bradycardia both flag as
/// warnings; no critical tier is defined for heart rate.
fn classify_heart_rate(value: &str) -> VitalStatus {
    let Ok(num) = value.trim().parse::<f64>() else {
        return VitalStatus::Unknown;
    };

    if num > 100.0 || num < 60.0 {
        VitalStatus::Warning
    } else {
        VitalStatus::Normal
    }
}

fn classify_spo2(value: &str) -> VitalStatus {
    let Ok(num) = value.trim().parse::<f64>() else {
        return VitalStatus::Unknown;
    };

    if num < 90.0 {
        VitalStatus::Critical
    } else if num < 95.0 {
        VitalStatus::Warning
    } else {
        VitalStatus::Normal
    }
}
