use kernal::prelude::*;
use rstest::rstest;
use zodiac_model::formula;
use zodiac_model::input::Field;

use crate::*;

#[rstest]
#[case::low_everything(1.0, 1.0, 1.0)]
#[case::high_rarity(9.0, 10.0, 50.0)]
#[case::level_threshold(4.0, 100.0, 100.0)]
#[case::high_level(10.0, 1_234.0, 180.0)]
#[case::fractional(7.5, 33.3, 12.25)]
fn sale_price_matches_score_substitution(
    #[case] rarity: f64,
    #[case] quality: f64,
    #[case] level: f64,
) {
    let input = input(rarity, quality, level);
    let score = formula::score(&input).unwrap();
    let sale_price = formula::sale_price(&input).unwrap();
    let expected = (score / 10.0).powf(0.75) * 1.1f64.powf(rarity);

    assert_that!(sale_price).is_close_to(expected, expected * EPS);
}

#[test]
fn rarity_9_quality_10_level_50() {
    let input = input(9.0, 10.0, 50.0);
    let rarity_mult = 2.0;
    let level_mult = 1.0;
    let expected_score = 1.125f64.powf(9.0) * 10.0 * (9.0 + 50.0 * 50.0) * rarity_mult * level_mult;
    let expected_sale_price = (expected_score / 10.0).powf(0.75) * 1.1f64.powf(9.0);

    assert_that!(formula::rarity_multiplier(9.0)).is_equal_to(rarity_mult);
    assert_that!(formula::level_multiplier(50.0).unwrap()).is_equal_to(level_mult);
    assert_that!(formula::score(&input).unwrap())
        .is_close_to(expected_score, expected_score * EPS);
    assert_that!(formula::sale_price(&input).unwrap())
        .is_close_to(expected_sale_price, expected_sale_price * EPS);
    assert_that!(expected_score).is_close_to(144_844.95, 0.01);
}

#[test]
fn enhance_values_for_quality_10() {
    let input = input(9.0, 10.0, 50.0);
    let log = 11.0f64.log10();
    let expected_price = formula::sale_price(&input).unwrap() * 2.0 * 1.3f64.powf(log);
    let expected_chance = 0.9f64.powf(log * log) * 100.0;

    assert_that!(formula::enhance_price(&input).unwrap())
        .is_close_to(expected_price, expected_price * EPS);
    assert_that!(formula::enhance_chance(&input).unwrap()).is_close_to(expected_chance, EPS);
}

#[test]
fn enhance_chance_decreases_with_quality() {
    let chances = [0.0, 1.0, 10.0, 100.0, 10_000.0]
        .into_iter()
        .map(|quality| {
            formula::enhance_chance(&input(1.0, quality, 1.0)).unwrap()
        })
        .collect::<Vec<_>>();

    for pair in chances.windows(2) {
        assert_that!(pair[1]).is_less_than(pair[0]);
    }
}

#[test]
fn enhance_price_requires_level_through_sale_price() {
    let input = input(1.0, 1.0, 1.0).with(Field::Level, None);

    assert_that!(formula::enhance_price(&input)).is_err();
    assert_that!(formula::enhance_chance(&input)).is_ok();
}
