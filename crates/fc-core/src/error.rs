use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FcError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Value for {what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("Value for {what} must not be negative, got {value}")]
    Negative { what: &'static str, value: f64 },
}
