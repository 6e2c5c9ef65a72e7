// Error types
// All core failures are caller contract violations; nothing here is retried.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HumanizerError {
    #[error("Invalid intensity: {0}. Must be 'light', 'medium', or 'heavy'")]
    InvalidIntensity(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HumanizerError>;
