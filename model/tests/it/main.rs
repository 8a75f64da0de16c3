use zodiac_model::input::ZodiacInput;
use zodiac_model::rarity::RarityChances;

mod formulas;
mod rarity_model;
mod report;

pub const EPS: f64 = 1e-9;

pub fn input(rarity: f64, quality: f64, level: f64) -> ZodiacInput {
    ZodiacInput {
        rarity: Some(rarity),
        quality: Some(quality),
        level: Some(level),
        ..ZodiacInput::default()
    }
}

pub fn luck_input(luck: f64) -> ZodiacInput {
    ZodiacInput {
        luck: Some(luck),
        ..ZodiacInput::default()
    }
}

pub fn chance_sum(chances: &RarityChances) -> f64 {
    chances.iter().sum()
}
