use std::fmt;
use std::fmt::{Display, Formatter};

use crate::error::{CalculationError, CalculationResult, InputError, InputResult};

pub const FIELD_COUNT: usize = 5;

/// One of the optional values a user can supply.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Field {
    Rarity,
    Quality,
    Level,
    Luck,
    ImmoNumber,
}

impl Field {

    /// All fields in the order in which they are requested.
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Rarity,
        Field::Quality,
        Field::Level,
        Field::Luck,
        Field::ImmoNumber
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Rarity => "Zodiac Rarity",
            Field::Quality => "Zodiac Quality",
            Field::Level => "Zodiac Level",
            Field::Luck => "Luck",
            Field::ImmoNumber => "Immo+ Number",
        }
    }

    /// Parses user-entered text for this field. Blank text means the field is skipped and
    /// yields `Ok(None)`. Anything else must be a finite number.
    pub fn parse_value(self, text: &str) -> InputResult<Option<f64>> {
        let text = text.trim();

        if text.is_empty() {
            return Ok(None);
        }

        let value = text.parse::<f64>()
            .map_err(|_| InputError::InvalidNumber {
                field: self,
                text: text.to_owned(),
            })?;

        if !value.is_finite() {
            return Err(InputError::NonFiniteNumber {
                field: self,
                text: text.to_owned(),
            });
        }

        Ok(Some(value))
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The values supplied for one calculation round. Every field is optional.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ZodiacInput {
    pub rarity: Option<f64>,
    pub quality: Option<f64>,
    pub level: Option<f64>,
    pub luck: Option<f64>,
    pub immo_number: Option<f64>,
}

impl ZodiacInput {

    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::Rarity => self.rarity,
            Field::Quality => self.quality,
            Field::Level => self.level,
            Field::Luck => self.luck,
            Field::ImmoNumber => self.immo_number,
        }
    }

    pub fn with(mut self, field: Field, value: Option<f64>) -> ZodiacInput {
        let slot = match field {
            Field::Rarity => &mut self.rarity,
            Field::Quality => &mut self.quality,
            Field::Level => &mut self.level,
            Field::Luck => &mut self.luck,
            Field::ImmoNumber => &mut self.immo_number,
        };

        *slot = value;
        self
    }

    /// Returns the value of `field`, or a [CalculationError::MissingInput] if it was skipped.
    pub fn require(&self, field: Field) -> CalculationResult<f64> {
        self.get(field).ok_or(CalculationError::MissingInput(field))
    }

    pub fn provided_count(&self) -> usize {
        Field::ALL.iter()
            .filter(|&&field| self.get(field).is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.provided_count() == 0
    }
}
