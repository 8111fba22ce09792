//! CareSync Core — backend engine of a consumer medication-management
//! app: daily dose scheduling, history reconciliation, reminder
//! detection, vital-sign classification, and the local store behind
//! them. The UI and the AI extraction service live outside this crate
//! and talk to it through [`tracker::MedicationTracker`] and the typed
//! [`models::ExtractionResult`] boundary.

pub mod adherence;
pub mod config;
pub mod db;
pub mod models;
pub mod schedule;
pub mod tracker;
pub mod vitals;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for a hosting application. Respects RUST_LOG,
/// falling back to the crate default filter.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} core starting v{}", config::APP_NAME, config::APP_VERSION);
}
