//! Error types for SoundOxide
//!
//! The chart pipeline itself has no failure modes; these errors only cover the ambient
//! concerns around it (configuration and window start-up).

use thiserror::Error;

/// Main error type for SoundOxide operations
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration file could not be read
    #[error("Failed to read configuration: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Configuration file is not valid JSON for the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration value out of its allowed domain
    #[error("Configuration error: {0}")]
    Config(String),

    /// Native window failed to start
    #[error("Failed to start window: {0}")]
    Startup(String),
}

/// Result type alias for SoundOxide operations
pub type Result<T> = std::result::Result<T, DashboardError>;

impl DashboardError {
    /// Get a message suitable for the log
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::ConfigIo(e) => format!("Config file error: {}", e),
            DashboardError::Json(e) => format!("Config parse error: {}", e),
            DashboardError::Config(msg) => format!("Config error: {}", msg),
            DashboardError::Startup(msg) => format!("Startup error: {}", msg),
        }
    }

    /// Get a short title for the error
    pub fn title(&self) -> &'static str {
        match self {
            DashboardError::ConfigIo(_) => "File Error",
            DashboardError::Json(_) => "JSON Error",
            DashboardError::Config(_) => "Configuration Error",
            DashboardError::Startup(_) => "Startup Error",
        }
    }
}

impl From<eframe::Error> for DashboardError {
    fn from(err: eframe::Error) -> Self {
        DashboardError::Startup(err.to_string())
    }
}
