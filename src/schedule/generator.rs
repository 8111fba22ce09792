//! Daily schedule generation — expands medication time-of-day slots into
//! concrete dose instances for one date.

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::models::dose::DoseInstance;
use crate::models::enums::{DoseStatus, TimeOfDay};
use crate::models::medication::Medication;

/// Clock time a named slot resolves to. As-needed doses have no slot on
/// the timeline and resolve to `None`.
pub fn slot_time(slot: TimeOfDay) -> Option<NaiveTime> {
    let (hour, minute) = match slot {
        TimeOfDay::Morning => (8, 0),
        TimeOfDay::Afternoon => (13, 0),
        TimeOfDay::Evening => (18, 0),
        TimeOfDay::Night => (21, 0),
        TimeOfDay::AsNeeded => return None,
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Fallback for a scheduled slot with no clock mapping. With the current
/// enum only `AsNeeded` resolves to `None`, and the generator filters that
/// out first, so this only fires if a new slot is added without a time.
fn fallback_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).expect("09:00 is a valid time")
}

/// Expand medications into pending dose instances for `today`.
///
/// One instance per (medication, slot) pair, skipping as-needed slots.
/// Display fields are copied from the medication at generation time.
/// Output is sorted ascending by clock time; medications scheduled at the
/// same time stay in input order (the sort is stable). Each instance gets
/// a fresh row id — reconciliation matches on the slot key, not the id.
pub fn generate_doses(medications: &[Medication], today: NaiveDate) -> Vec<DoseInstance> {
    let mut doses = Vec::new();

    for med in medications {
        for &slot in &med.times {
            if slot == TimeOfDay::AsNeeded {
                continue;
            }

            let time = slot_time(slot).unwrap_or_else(fallback_time);

            doses.push(DoseInstance {
                id: Uuid::new_v4(),
                medication_id: med.id,
                medication_name: med.name.clone(),
                dosage: med.dosage.clone(),
                instructions: med.instructions.clone(),
                label: slot,
                time,
                date: today,
                status: DoseStatus::Pending,
                action_time: None,
            });
        }
    }

    doses.sort_by_key(|d| d.time);
    doses
}

#[cfg(test)]
mod tests {
    use super::*;

    fn med(name: &str, times: Vec<TimeOfDay>) -> Medication {
        Medication::new(name, "500mg", "Daily", "With food", times)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn one_dose_per_scheduled_slot() {
        let meds = vec![med(
            "Metformin",
            vec![TimeOfDay::Morning, TimeOfDay::Evening],
        )];
        let doses = generate_doses(&meds, today());

        assert_eq!(doses.len(), 2);
        assert_eq!(doses[0].time, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(doses[1].time, NaiveTime::from_hms_opt(18, 0, 0).unwrap());
        for dose in &doses {
            assert_eq!(dose.status, DoseStatus::Pending);
            assert_eq!(dose.date, today());
            assert_eq!(dose.medication_name, "Metformin");
            assert_eq!(dose.medication_id, meds[0].id);
            assert!(dose.action_time.is_none());
        }
    }

    #[test]
    fn as_needed_only_yields_nothing() {
        let meds = vec![med("Paracetamol", vec![TimeOfDay::AsNeeded])];
        assert!(generate_doses(&meds, today()).is_empty());
    }

    #[test]
    fn as_needed_slot_skipped_among_scheduled() {
        let meds = vec![med(
            "Ibuprofen",
            vec![TimeOfDay::Morning, TimeOfDay::AsNeeded, TimeOfDay::Night],
        )];
        let doses = generate_doses(&meds, today());
        assert_eq!(doses.len(), 2);
        assert!(doses.iter().all(|d| d.label != TimeOfDay::AsNeeded));
    }

    #[test]
    fn output_sorted_by_time_across_medications() {
        let meds = vec![
            med("Night med", vec![TimeOfDay::Night]),
            med("Morning med", vec![TimeOfDay::Morning]),
            med("Afternoon med", vec![TimeOfDay::Afternoon]),
        ];
        let doses = generate_doses(&meds, today());
        let times: Vec<_> = doses.iter().map(|d| d.time).collect();
        let mut sorted = times.clone();
        sorted.sort();
        assert_eq!(times, sorted);
    }

    #[test]
    fn ties_keep_input_order() {
        let meds = vec![
            med("First", vec![TimeOfDay::Morning]),
            med("Second", vec![TimeOfDay::Morning]),
        ];
        let doses = generate_doses(&meds, today());
        assert_eq!(doses[0].medication_name, "First");
        assert_eq!(doses[1].medication_name, "Second");
    }

    #[test]
    fn no_slots_no_doses() {
        let meds = vec![med("Unscheduled", vec![])];
        assert!(generate_doses(&meds, today()).is_empty());
    }

    #[test]
    fn row_ids_are_unique_per_generation() {
        let meds = vec![med("Metformin", vec![TimeOfDay::Morning])];
        let first = generate_doses(&meds, today());
        let second = generate_doses(&meds, today());
        assert_ne!(first[0].id, second[0].id);
        // But the slot key is stable across regenerations.
        assert_eq!(first[0].slot_key(), second[0].slot_key());
    }

    #[test]
    fn slot_mapping() {
        assert_eq!(
            slot_time(TimeOfDay::Morning),
            NaiveTime::from_hms_opt(8, 0, 0)
        );
        assert_eq!(
            slot_time(TimeOfDay::Afternoon),
            NaiveTime::from_hms_opt(13, 0, 0)
        );
        assert_eq!(
            slot_time(TimeOfDay::Evening),
            NaiveTime::from_hms_opt(18, 0, 0)
        );
        assert_eq!(
            slot_time(TimeOfDay::Night),
            NaiveTime::from_hms_opt(21, 0, 0)
        );
        assert_eq!(slot_time(TimeOfDay::AsNeeded), None);
    }
}
