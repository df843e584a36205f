//! Error and outcome types shared across the engine.

use thiserror::Error;

/// Outcome of a player command. Validation failures are reported here rather
/// than raised, and a failed command leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub success: bool,
    pub message: String,
}

impl CommandResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Failures at the persistence boundary.
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unrecognized save header")]
    BadMagic,

    #[error("save file checksum mismatch")]
    ChecksumMismatch,

    #[error("save file truncated")]
    Truncated,

    #[error("migration failed: {0}")]
    Migration(String),
}

pub type SaveResult<T> = std::result::Result<T, SaveError>;
