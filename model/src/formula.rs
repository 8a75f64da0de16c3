//! The basic zodiac formulas. Each takes the full [ZodiacInput] and fails with
//! [CalculationError::MissingInput](crate::error::CalculationError::MissingInput) for the first
//! required field that is absent.

use crate::error::{CalculationResult, NumericResult};
use crate::input::{Field, ZodiacInput};
use crate::numeric::{checked_log10, checked_powf};

/// Rarities strictly above this value double the score.
pub const HIGH_RARITY_THRESHOLD: f64 = 8.0;

/// Levels at or above this value receive an additional level multiplier.
pub const LEVEL_SCALING_THRESHOLD: f64 = 100.0;

pub fn rarity_multiplier(rarity: f64) -> f64 {
    if rarity > HIGH_RARITY_THRESHOLD {
        2.0
    }
    else {
        1.0
    }
}

pub fn level_multiplier(level: f64) -> NumericResult<f64> {
    if level >= LEVEL_SCALING_THRESHOLD {
        checked_powf((level - 90.0) / 10.0, 2.5)
    }
    else {
        Ok(1.0)
    }
}

fn raw_score(rarity: f64, quality: f64, level: f64) -> NumericResult<f64> {
    Ok(checked_powf(1.125, rarity)?
        * quality
        * (9.0 + checked_powf(level, 2.0)?)
        * rarity_multiplier(rarity)
        * level_multiplier(level)?)
}

fn raw_sale_price(rarity: f64, quality: f64, level: f64) -> NumericResult<f64> {
    let score = raw_score(rarity, quality, level)?;

    Ok(checked_powf(score / 10.0, 0.75)? * checked_powf(1.1, rarity)?)
}

/// `1.125^r * q * (9 + l^2) * rarity_mult * level_mult`
pub fn score(input: &ZodiacInput) -> CalculationResult<f64> {
    let rarity = input.require(Field::Rarity)?;
    let quality = input.require(Field::Quality)?;
    let level = input.require(Field::Level)?;

    Ok(raw_score(rarity, quality, level)?)
}

/// The base sale price, `(score / 10)^0.75 * 1.1^r`. The in-game price is further scaled by
/// relics, which are not modelled.
pub fn sale_price(input: &ZodiacInput) -> CalculationResult<f64> {
    let rarity = input.require(Field::Rarity)?;
    let quality = input.require(Field::Quality)?;
    let level = input.require(Field::Level)?;

    Ok(raw_sale_price(rarity, quality, level)?)
}

/// `sale_price * 2 * 1.3^log10(1 + q)`
pub fn enhance_price(input: &ZodiacInput) -> CalculationResult<f64> {
    let sale_price = sale_price(input)?;
    let quality = input.require(Field::Quality)?;
    let quality_factor = checked_powf(1.3, checked_log10(1.0 + quality)?)?;

    Ok(sale_price * 2.0 * quality_factor)
}

/// The chance for an enhancement to succeed in percent, `0.9^(log10(1 + q)^2) * 100`.
pub fn enhance_chance(input: &ZodiacInput) -> CalculationResult<f64> {
    let quality = input.require(Field::Quality)?;
    let exponent = checked_powf(checked_log10(1.0 + quality)?, 2.0)?;

    Ok(checked_powf(0.9, exponent)? * 100.0)
}
