use kernal::prelude::*;
use zodiac_model::input::ZodiacInput;
use zodiac_model::rarity::{Rarity, RarityChances, RarityWeights};
use zodiac_model::report::ZodiacReport;

use crate::*;

#[test]
fn missing_all_inputs_computes_nothing() {
    let report = ZodiacReport::evaluate(&ZodiacInput::default());

    assert_that!(report.is_empty()).is_true();
    assert_that!(report.has_basic_values()).is_false();
}

#[test]
fn report_contains_values_of_individual_formulas() {
    let input = ZodiacInput {
        luck: Some(30.0),
        ..input(9.0, 10.0, 50.0)
    };
    let report = ZodiacReport::evaluate(&input);
    let analysis = report.rarity_analysis.unwrap();

    assert_that!(report.score.unwrap()).is_close_to(144_844.95, 0.01);
    assert_that!(report.enhance_chance.unwrap()).is_close_to(89.20, 0.01);
    assert_that!(analysis.zodiac_luck).is_close_to(12.0f64.powf(0.3) * 18.0, EPS);
    assert_that!(chance_sum(&analysis.chances)).is_close_to(100.0, EPS);
}

#[test]
fn rarity_overflow_yields_zero_analysis() {
    let report = ZodiacReport::evaluate(&luck_input(1e15));
    let analysis = report.rarity_analysis.unwrap();

    assert_that!(analysis.weights).is_equal_to(RarityWeights::default());
    assert_that!(analysis.chances).is_equal_to(RarityChances::default());
    assert_that!(analysis.chances[Rarity::Immortal]).is_equal_to(0.0);
}
