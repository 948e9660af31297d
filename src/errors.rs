use thiserror::Error;

/// Errors emitted while persisting settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file IO failed")]
    Io(#[from] std::io::Error),
    #[error("settings document is not writable as JSON")]
    Json(#[from] serde_json::Error),
}
