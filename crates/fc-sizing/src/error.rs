//! Error types for sizing calculations.

use fc_core::error::FcError;
use thiserror::Error;

/// An input measurement that is missing, non-finite or outside its range.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} = {value} is out of range ({reason})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("{field} requires at least one measurement")]
    Empty { field: &'static str },

    #[error("{left} has {left_len} entries but {right} has {right_len}")]
    LengthMismatch {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },

    #[error("Unknown {field} rating: '{value}'")]
    UnknownRating { field: &'static str, value: String },
}

impl ValidationError {
    /// Name of the offending input field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NonFinite { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::Empty { field }
            | ValidationError::UnknownRating { field, .. } => field,
            ValidationError::LengthMismatch { right, .. } => right,
        }
    }
}

impl From<FcError> for ValidationError {
    fn from(e: FcError) -> Self {
        match e {
            FcError::NonFinite { what, value } => ValidationError::NonFinite { field: what, value },
            FcError::NonPositive { what, value } => ValidationError::OutOfRange {
                field: what,
                value,
                reason: "must be greater than zero",
            },
            FcError::Negative { what, value } => ValidationError::OutOfRange {
                field: what,
                value,
                reason: "must not be negative",
            },
        }
    }
}

/// Errors that can occur during a sizing calculation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SizingError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Inputs were individually valid but produced a degenerate intermediate.
    #[error("Computation error: {what} = {value}")]
    Computation { what: &'static str, value: f64 },
}

pub type EngineResult<T> = Result<T, SizingError>;

impl From<FcError> for SizingError {
    fn from(e: FcError) -> Self {
        SizingError::Validation(e.into())
    }
}
