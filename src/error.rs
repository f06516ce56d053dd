use std::io;
use thiserror::Error;

/// Custom error type for statline
#[derive(Error, Debug)]
pub enum StatlineError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("`{program}` exited with {status}")]
    CommandFailed { program: String, status: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type alias for statline
pub type Result<T> = std::result::Result<T, StatlineError>;

impl StatlineError {
    /// Create a command failure error
    pub fn command_failed<P: Into<String>, S: ToString>(program: P, status: S) -> Self {
        StatlineError::CommandFailed {
            program: program.into(),
            status: status.to_string(),
        }
    }

    /// Create a parse error
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        StatlineError::Parse(msg.into())
    }
}
