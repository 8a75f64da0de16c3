use crate::error::{CalculationResult, NumericResult};
use crate::input::{Field, ZodiacInput};
use crate::numeric::checked_powf;

/// Luck below this value is used as-is, above it is softly capped.
pub const LUCK_SOFT_CAP: f64 = 18.0;

const SOFT_CAP_EXPONENT: f64 = 0.3;

/// Transforms raw luck into the zodiac luck that drives the rarity weights.
pub fn soft_capped_luck(luck: f64) -> NumericResult<f64> {
    if luck < LUCK_SOFT_CAP {
        Ok(luck)
    }
    else {
        Ok(checked_powf(luck - LUCK_SOFT_CAP, SOFT_CAP_EXPONENT)? * LUCK_SOFT_CAP)
    }
}

pub fn zodiac_luck(input: &ZodiacInput) -> CalculationResult<f64> {
    let luck = input.require(Field::Luck)?;

    Ok(soft_capped_luck(luck)?)
}
