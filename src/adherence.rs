//! Adherence statistics over the recorded dose history.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::dose::DoseInstance;
use crate::models::enums::DoseStatus;

/// Summary of how reliably doses were taken over a trailing window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdherenceStats {
    /// Taken share of the window, rounded to a whole percent.
    pub percentage: u32,
    pub taken: u32,
    pub missed: u32,
    pub total: u32,
}

/// Compute adherence over the trailing `days` days ending at `today`.
///
/// An empty window reports 100% — no scheduled doses is not a lapse.
/// Pending and skipped doses count toward the total but toward neither
/// taken nor missed.
pub fn compute_adherence(
    history: &[DoseInstance],
    today: NaiveDate,
    days: u64,
) -> AdherenceStats {
    let cutoff = today
        .checked_sub_days(Days::new(days))
        .unwrap_or(NaiveDate::MIN);

    let window: Vec<&DoseInstance> =
        history.iter().filter(|d| d.date >= cutoff).collect();

    let total = window.len() as u32;
    if total == 0 {
        return AdherenceStats {
            percentage: 100,
            taken: 0,
            missed: 0,
            total: 0,
        };
    }

    let taken = window
        .iter()
        .filter(|d| d.status == DoseStatus::Taken)
        .count() as u32;
    let missed = window
        .iter()
        .filter(|d| d.status == DoseStatus::Missed)
        .count() as u32;

    AdherenceStats {
        percentage: ((f64::from(taken) / f64::from(total)) * 100.0).round() as u32,
        taken,
        missed,
        total,
    }
}
