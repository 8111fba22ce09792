//! Due-dose detection and the background reminder poller.
//!
//! Reminders are a polled snapshot check, not scheduled alarms: the
//! scanner is run repeatedly against the live working schedule and
//! reports pending doses whose slot time is within one minute of the
//! clock. A window that passes entirely between polls does not fire
//! retroactively, and doses are never auto-marked missed — they stay
//! pending until the user acts.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{NaiveTime, Timelike};

use crate::models::dose::DoseInstance;
use crate::models::enums::DoseStatus;

/// Poll interval for the background reminder thread.
const POLL_INTERVAL_SECS: u64 = 30;

/// Sleep granularity for shutdown responsiveness (1 second).
const SLEEP_GRANULARITY_SECS: u64 = 1;

/// Tolerance window around a dose's slot time, in minutes.
const DUE_WINDOW_MINUTES: i64 = 1;

/// Return the pending doses due at `now`, in input order.
///
/// Seconds are ignored on both sides: 08:01:59 is still within the
/// window of an 08:00 dose. Callers decide which due doses to surface
/// and clear a surfaced reminder once the dose is acted on.
pub fn scan_due_reminders(doses: &[DoseInstance], now: NaiveTime) -> Vec<DoseInstance> {
    let now_minutes = i64::from(now.hour()) * 60 + i64::from(now.minute());

    doses
        .iter()
        .filter(|dose| {
            if dose.status != DoseStatus::Pending {
                return false;
            }
            let dose_minutes =
                i64::from(dose.time.hour()) * 60 + i64::from(dose.time.minute());
            (now_minutes - dose_minutes).abs() <= DUE_WINDOW_MINUTES
        })
        .cloned()
        .collect()
}

/// Handle for the background reminder poller thread.
///
/// Supports graceful shutdown via `shutdown()` or automatic cleanup on
/// `Drop`. The hosting view stores this and drops it on teardown so no
/// timer leaks past the screen that started it.
pub struct ReminderPollerHandle {
    shutdown: Arc<AtomicBool>,
    handle: Option<std::thread::JoinHandle<()>>,
}

impl ReminderPollerHandle {
    /// Request graceful shutdown. The poller exits within one sleep
    /// granule; a callback already in flight completes first.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }
}

impl Drop for ReminderPollerHandle {
    fn drop(&mut self) {
        self.shutdown();
        if let Some(h) = self.handle.take() {
            let _ = h.join();
        }
    }
}

/// Start the reminder poller against a shared working dose list.
///
/// Every 30 seconds the poller snapshots the list under its lock, scans
/// it against the local wall clock, and invokes `on_due` with any due
/// doses. The callback runs on the poller thread.
pub fn start_reminder_poller<F>(
    doses: Arc<Mutex<Vec<DoseInstance>>>,
    on_due: F,
) -> ReminderPollerHandle
where
    F: Fn(Vec<DoseInstance>) + Send + 'static,
{
    start_with_interval(doses, on_due, Duration::from_secs(POLL_INTERVAL_SECS))
}

fn start_with_interval<F>(
    doses: Arc<Mutex<Vec<DoseInstance>>>,
    on_due: F,
    interval: Duration,
) -> ReminderPollerHandle
where
    F: Fn(Vec<DoseInstance>) + Send + 'static,
{
    let shutdown = Arc::new(AtomicBool::new(false));
    let flag = shutdown.clone();

    let handle = std::thread::spawn(move || {
        tracing::debug!("Reminder poller started (interval {}s)", interval.as_secs());
        poller_loop(&doses, &on_due, interval, &flag);
    });

    ReminderPollerHandle {
        shutdown,
        handle: Some(handle),
    }
}

fn poller_loop<F>(
    doses: &Mutex<Vec<DoseInstance>>,
    on_due: &F,
    interval: Duration,
    shutdown: &AtomicBool,
) where
    F: Fn(Vec<DoseInstance>),
{
    loop {
        let now = chrono::Local::now().time();
        let due = match doses.lock() {
            Ok(guard) => scan_due_reminders(&guard, now),
            Err(poisoned) => {
                tracing::warn!("Dose list lock poisoned; scanning recovered data");
                scan_due_reminders(&poisoned.into_inner(), now)
            }
        };

        if !due.is_empty() {
            tracing::debug!("{} dose(s) due", due.len());
            on_due(due);
        }

        // Sleep in small increments for responsive shutdown
        let granules = interval.as_secs().div_ceil(SLEEP_GRANULARITY_SECS).max(1);
        for _ in 0..granules {
            if shutdown.load(Ordering::Relaxed) {
                tracing::debug!("Reminder poller shutting down");
                return;
            }
            std::thread::sleep(interval.min(Duration::from_secs(SLEEP_GRANULARITY_SECS)));
        }
    }
}
