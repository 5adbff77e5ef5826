use std::io;
use thiserror::Error;

/// Engine-wide error type, consolidating all possible errors into a single enum.
///
/// Query processing itself never returns an error: degenerate inputs resolve
/// to a low-confidence but well-formed result. These variants cover
/// construction and knowledge-base loading only.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Represents standard input/output errors (e.g. reading a knowledge document).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents an unreadable or malformed knowledge document.
    #[error("Knowledge error: {0}")]
    Knowledge(String),

    /// Represents configuration-related errors (e.g. out-of-range weights).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents data validation errors (e.g. invalid input format).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Knowledge(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for EngineError {
    fn from(err: validator::ValidationErrors) -> Self {
        EngineError::Config(format!("Validation errors: {}", err))
    }
}
