use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "CareSync";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Days of history the adherence summary covers by default.
pub const DEFAULT_ADHERENCE_WINDOW_DAYS: u64 = 7;

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    "info,caresync_core=debug".to_string()
}

/// Get the application data directory
/// ~/CareSync/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("CareSync")
}

/// Path of the local store.
pub fn database_path() -> PathBuf {
    app_data_dir().join("caresync.db")
}
