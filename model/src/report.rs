use tracing::{debug, error};

use crate::error::{CalculationError, CalculationResult};
use crate::formula;
use crate::input::ZodiacInput;
use crate::luck;
use crate::rarity::{self, RarityChances, RarityWeights};

/// Zodiac luck together with the rarity weights and chances derived from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RarityAnalysis {
    pub zodiac_luck: f64,
    pub weights: RarityWeights,
    pub chances: RarityChances,
}

impl RarityAnalysis {

    pub fn for_zodiac_luck(zodiac_luck: f64) -> RarityAnalysis {
        let weights = rarity::rarity_weights(zodiac_luck);

        RarityAnalysis {
            zodiac_luck,
            weights,
            chances: weights.chances(),
        }
    }
}

/// Everything that could be computed from one [ZodiacInput]. Values whose inputs were missing
/// or whose computation failed are `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ZodiacReport {
    pub sale_price: Option<f64>,
    pub enhance_price: Option<f64>,
    pub enhance_chance: Option<f64>,
    pub score: Option<f64>,
    pub rarity_analysis: Option<RarityAnalysis>,
}

impl ZodiacReport {

    pub fn evaluate(input: &ZodiacInput) -> ZodiacReport {
        let rarity_analysis = available("zodiac luck", luck::zodiac_luck(input))
            .map(RarityAnalysis::for_zodiac_luck);

        ZodiacReport {
            sale_price: available("zodiac sale price", formula::sale_price(input)),
            enhance_price: available("zodiac enhance price", formula::enhance_price(input)),
            enhance_chance: available("zodiac enhance chance", formula::enhance_chance(input)),
            score: available("zodiac score", formula::score(input)),
            rarity_analysis,
        }
    }

    pub fn has_basic_values(&self) -> bool {
        self.sale_price.is_some()
            || self.enhance_price.is_some()
            || self.enhance_chance.is_some()
            || self.score.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_basic_values() && self.rarity_analysis.is_none()
    }
}

fn available(name: &str, result: CalculationResult<f64>) -> Option<f64> {
    match result {
        Ok(value) => {
            debug!("{name} calculated successfully");
            Some(value)
        },
        Err(CalculationError::MissingInput(field)) => {
            debug!("Missing required input {field} for {name} calculation");
            None
        },
        Err(CalculationError::Numeric(err)) => {
            error!("Error calculating {name}: {err}");
            None
        },
    }
}
