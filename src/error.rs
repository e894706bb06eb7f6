use thiserror::Error;

/// Errors raised while turning sensor packages into training summaries
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackerError {
    #[error("Unknown workout type: {0}")]
    UnknownWorkoutType(String),

    #[error("Wrong number of values for {code}: expected {expected}, got {actual}")]
    WrongArity {
        code: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("{training} {quantity} is not a finite number")]
    NonFiniteResult {
        training: &'static str,
        quantity: &'static str,
    },

    #[error("Calorie computation is not implemented for {0}")]
    NotImplemented(&'static str),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
