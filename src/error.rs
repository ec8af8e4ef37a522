use std::fmt;
use thiserror::Error;

/// Status returned when an encode completes without a warning.
pub const STATUS_OK: i32 = 0;
/// Non-fatal: an option or symbology was replaced by a usable default.
pub const WARN_INVALID_OPTION: i32 = 2;
pub const ERROR_TOO_LONG: i32 = 5;
pub const ERROR_INVALID_DATA: i32 = 6;
pub const ERROR_INVALID_OPTION: i32 = 8;
pub const ERROR_FILE_ACCESS: i32 = 10;
pub const ERROR_MEMORY: i32 = 11;

/// Hard failures. Output left on the symbol after one of these must not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("{0}")]
    TooLong(String),
    #[error("{0}")]
    InvalidData(String),
    /// A byte outside the symbology's alphabet; `position` is the first offender.
    #[error("Invalid characters in data")]
    InvalidCharacter { position: usize },
    #[error("{0}")]
    InvalidOption(String),
    #[error("{0}")]
    Memory(String),
    #[error("{0}")]
    FileAccess(String),
}

impl EncodeError {
    pub fn too_long() -> Self {
        EncodeError::TooLong("Input too long".to_string())
    }

    /// Numeric status class (always >= 5).
    pub fn code(&self) -> i32 {
        match self {
            EncodeError::TooLong(_) => ERROR_TOO_LONG,
            EncodeError::InvalidData(_) | EncodeError::InvalidCharacter { .. } => {
                ERROR_INVALID_DATA
            }
            EncodeError::InvalidOption(_) => ERROR_INVALID_OPTION,
            EncodeError::Memory(_) => ERROR_MEMORY,
            EncodeError::FileAccess(_) => ERROR_FILE_ACCESS,
        }
    }
}

/// A non-fatal condition; the encode continued with a corrected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    message: String,
}

impl Warning {
    pub fn invalid_option<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> i32 {
        WARN_INVALID_OPTION
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of a full encode: a usable symbol (possibly with a warning) or a hard error.
pub type EncodeOutcome = Result<Option<Warning>, EncodeError>;

/// Collapse an outcome into its numeric status: 0, a warning class (1-4) or an error class (>= 5).
pub fn status_code(outcome: &EncodeOutcome) -> i32 {
    match outcome {
        Ok(None) => STATUS_OK,
        Ok(Some(warning)) => warning.code(),
        Err(err) => err.code(),
    }
}

/// Prefix a message with its severity, the way it is stored in the symbol's message buffer.
pub fn tag_message(code: i32, message: &str) -> String {
    match code {
        STATUS_OK => message.to_string(),
        1..=4 => format!("warning: {}", message),
        _ => format!("error: {}", message),
    }
}
