//! Checked versions of the floating point operations the formulas rely on. Plain `f64`
//! arithmetic silently produces NaN or infinity; these helpers report such results as
//! [NumericError]s instead, so callers can decide whether to drop a value or reset a table.

use crate::error::{NumericError, NumericResult};

/// Computes `base ^ exponent`.
///
/// A NaN result from non-NaN operands (e.g. a negative base with a fractional exponent) is a
/// domain error. An infinite result from finite operands is an overflow. Results that are
/// infinite or NaN because an operand already was are passed through unchanged.
pub fn checked_powf(base: f64, exponent: f64) -> NumericResult<f64> {
    let result = base.powf(exponent);

    if result.is_nan() && !base.is_nan() && !exponent.is_nan() {
        Err(NumericError::PowerDomain { base, exponent })
    }
    else if result.is_infinite() && base.is_finite() && exponent.is_finite() {
        if base == 0.0 {
            Err(NumericError::PowerDomain { base, exponent })
        }
        else {
            Err(NumericError::PowerOverflow { base, exponent })
        }
    }
    else {
        Ok(result)
    }
}

/// Computes the base-10 logarithm of `value`, which must be positive.
pub fn checked_log10(value: f64) -> NumericResult<f64> {
    if value <= 0.0 {
        Err(NumericError::LogarithmDomain(value))
    }
    else {
        Ok(value.log10())
    }
}
