use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::TimeOfDay;

/// A prescribed (or patient-reported) medication.
///
/// The id is stable for the lifetime of the medication and is the anchor
/// for schedule reconciliation; edits never reassign it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medication {
    pub id: Uuid,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub instructions: String,
    pub duration: Option<String>,
    pub times: Vec<TimeOfDay>,
    pub color: Option<String>,
    pub category: Option<String>,
    pub general_use: Option<String>,
}

impl Medication {
    /// Minimal constructor for manual entry; optional fields start empty.
    pub fn new(
        name: impl Into<String>,
        dosage: impl Into<String>,
        frequency: impl Into<String>,
        instructions: impl Into<String>,
        times: Vec<TimeOfDay>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            dosage: dosage.into(),
            frequency: frequency.into(),
            instructions: instructions.into(),
            duration: None,
            times,
            color: None,
            category: None,
            general_use: None,
        }
    }
}
