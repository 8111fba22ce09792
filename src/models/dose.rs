use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{DoseStatus, TimeOfDay};

/// One concrete scheduled administration of a medication on one date.
///
/// Display fields (name, dosage, instructions, label) are frozen copies of
/// the medication at generation time, not a live join. The row id is
/// storage identity only; schedule reconciliation matches on
/// `(medication_id, time)` via [`DoseInstance::slot_key`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoseInstance {
    pub id: Uuid,
    pub medication_id: Uuid,
    pub medication_name: String,
    pub dosage: String,
    pub instructions: String,
    pub label: TimeOfDay,
    pub time: NaiveTime,
    pub date: NaiveDate,
    pub status: DoseStatus,
    /// Set only while the dose is taken; cleared on revert.
    pub action_time: Option<NaiveDateTime>,
}

impl DoseInstance {
    /// Reconciliation match key. Survives medication edits (names can
    /// change, the id and slot time pairing cannot) and regeneration
    /// (which reassigns row ids).
    pub fn slot_key(&self) -> (Uuid, NaiveTime) {
        (self.medication_id, self.time)
    }
}
