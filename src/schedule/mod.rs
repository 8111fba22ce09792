//! Daily dose schedule engine.
//!
//! Four pieces, all pure over caller-owned collections:
//! - `generator`: expand medications into today's pending dose instances
//! - `reconcile`: merge a regenerated schedule with recorded history
//! - `reminder`: due-now detection plus the background poller thread
//! - `toggle_dose_status`: the taken/pending transition
//!
//! Nothing here touches storage; the tracker owns the read-modify-persist
//! cycle around these functions.

pub mod generator;
pub mod reconcile;
pub mod reminder;

pub use generator::{generate_doses, slot_time};
pub use reconcile::reconcile;
pub use reminder::{scan_due_reminders, start_reminder_poller, ReminderPollerHandle};

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::models::dose::DoseInstance;
use crate::models::enums::DoseStatus;

/// Toggle a dose between taken and pending in the working list.
///
/// A taken dose reverts to pending with its action time cleared; any
/// other status becomes taken, stamped with `now`. Returns a clone of
/// the updated instance for the caller to upsert into dose history, or
/// `None` when no dose in the list has that row id. If the toggled dose
/// was the subject of an active reminder the caller clears it.
pub fn toggle_dose_status(
    doses: &mut [DoseInstance],
    id: Uuid,
    now: NaiveDateTime,
) -> Option<DoseInstance> {
    let dose = doses.iter_mut().find(|d| d.id == id)?;

    if dose.status == DoseStatus::Taken {
        dose.status = DoseStatus::Pending;
        dose.action_time = None;
    } else {
        dose.status = DoseStatus::Taken;
        dose.action_time = Some(now);
    }

    Some(dose.clone())
}
