//! Schedule reconciliation — merges a freshly generated schedule with
//! previously recorded dose history so user actions survive regeneration.
//!
//! The schedule is regenerated from scratch on every load and on every
//! medication mutation. Without reconciliation a regeneration would reset
//! every dose to pending; with it, any slot the user already acted on
//! keeps its recorded status.

use std::collections::HashMap;

use chrono::NaiveTime;
use uuid::Uuid;

use crate::models::dose::DoseInstance;

/// Merge fresh dose instances with recorded history for the same date.
///
/// Matching is by `(medication_id, time)`. A matched slot keeps the
/// historical row id, status, and action time, while its display fields
/// (name, dosage, instructions, label) and date come from the fresh
/// instance — an edited medication updates what the user sees without
/// discarding what they already did. Unmatched slots stand as generated,
/// pending. History rows with no fresh counterpart (a removed slot or
/// medication) drop off the working schedule but remain in the store.
pub fn reconcile(fresh: Vec<DoseInstance>, history: &[DoseInstance]) -> Vec<DoseInstance> {
    let by_slot: HashMap<(Uuid, NaiveTime), &DoseInstance> =
        history.iter().map(|dose| (dose.slot_key(), dose)).collect();

    fresh
        .into_iter()
        .map(|mut dose| {
            if let Some(recorded) = by_slot.get(&dose.slot_key()) {
                dose.id = recorded.id;
                dose.status = recorded.status;
                dose.action_time = recorded.action_time;
            }
            dose
        })
        .collect()
}
