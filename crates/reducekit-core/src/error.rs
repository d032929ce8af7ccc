use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReduceError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReduceError {
    #[error("empty input: {0}")]
    EmptyInput(String),

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("integer overflow: {0}")]
    Overflow(String),

    #[error("validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub operation: String,
}

impl ReduceError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput(_) => "EMPTY_INPUT",
            Self::MalformedInput(_) => "MALFORMED_INPUT",
            Self::Overflow(_) => "OVERFLOW",
            Self::Validation(_) => "VALIDATION_FAILED",
        }
    }

    pub fn to_payload(&self, operation: impl Into<String>) -> ErrorPayload {
        ErrorPayload {
            code: self.code().to_string(),
            message: self.to_string(),
            operation: operation.into(),
        }
    }
}
