use thiserror::Error;

use crate::data_source::SourceError;

/// Validation errors exposed by `valcurs-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("currency id cannot be empty")]
    EmptyCurrencyId,
    #[error("currency id length {len} exceeds max {max}")]
    CurrencyIdTooLong { len: usize, max: usize },
    #[error("currency id contains invalid character '{ch}' at index {index}")]
    CurrencyIdInvalidChar { ch: char, index: usize },

    #[error("reference date must be YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}
