use thiserror::Error;

use crate::input::Field;

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum NumericError {
    #[error("math domain error: {base} ^ {exponent}")]
    PowerDomain { base: f64, exponent: f64 },

    #[error("math domain error: log10({0})")]
    LogarithmDomain(f64),

    #[error("numerical result out of range: {base} ^ {exponent}")]
    PowerOverflow { base: f64, exponent: f64 },

    #[error("invalid result: {0} (a finite, non-negative number is required)")]
    InvalidResult(f64),
}

pub type NumericResult<T> = Result<T, NumericError>;

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum CalculationError {
    #[error("missing required input: {0}")]
    MissingInput(Field),

    #[error("{0}")]
    Numeric(#[from] NumericError),
}

pub type CalculationResult<T> = Result<T, CalculationError>;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum InputError {
    #[error("invalid number for {field}: '{text}'")]
    InvalidNumber { field: Field, text: String },

    #[error("{field} must be a finite number, received '{text}'")]
    NonFiniteNumber { field: Field, text: String },
}

impl InputError {
    pub fn field(&self) -> Field {
        match self {
            InputError::InvalidNumber { field, .. } => *field,
            InputError::NonFiniteNumber { field, .. } => *field,
        }
    }
}

pub type InputResult<T> = Result<T, InputError>;
