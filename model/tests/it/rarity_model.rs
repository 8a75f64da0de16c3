use kernal::prelude::*;
use rstest::rstest;
use zodiac_model::luck;
use zodiac_model::rarity::{self, Rarity, RarityChances};
use zodiac_model::weight::Weight;

use crate::*;

#[rstest]
#[case::zero(0.0, 0.0)]
#[case::seventeen(17.0, 17.0)]
#[case::eighteen(18.0, 0.0)]
#[case::hundred_eighteen(118.0, 71.659_290_699_629_5)]
fn zodiac_luck_examples(#[case] luck: f64, #[case] expected: f64) {
    assert_that!(luck::zodiac_luck(&luck_input(luck)).unwrap()).is_close_to(expected, EPS);
}

#[rstest]
#[case(1.0)]
#[case(1.5)]
#[case(2.0)]
#[case(3.7)]
#[case(6.0)]
#[case(11.0)]
#[case(17.0)]
#[case(25.0)]
#[case(45.0)]
#[case(60.0)]
#[case(69.99)]
#[case(500.0)]
fn chances_sum_to_hundred(#[case] zodiac_luck: f64) {
    let chances = rarity::rarity_weights(zodiac_luck).chances();

    assert_that!(chance_sum(&chances)).is_close_to(100.0, 1e-9);
}

#[rstest]
#[case::below_one(0.0)]
#[case::soft_capped_eighteen(luck::soft_capped_luck(18.0).unwrap())]
#[case::overflow(1e9)]
fn chances_without_weight_are_zero(#[case] zodiac_luck: f64) {
    let chances = rarity::rarity_weights(zodiac_luck).chances();

    assert_that!(chances).is_equal_to(RarityChances::default());
    assert_that!(chance_sum(&chances)).is_equal_to(0.0);
}

#[test]
fn divine_has_three_phases() {
    let curve = Rarity::Divine.curve();
    let base = |l: f64| 200.0 * 1.2f64.powf(l - 12.0) - 300.0;

    assert_that!(curve.evaluate(39.0).unwrap()).is_close_to(base(39.0), 1e-6);
    assert_that!(curve.evaluate(45.0).unwrap())
        .is_close_to(base(45.0) * 0.92f64.powf(5.0), 1e-6);
    assert_that!(curve.evaluate(60.0).unwrap())
        .is_close_to(base(60.0) * 0.92f64.powf(20.0) * 0.75f64.powf(10.0), 1e-6);
    assert_that!(curve.evaluate(70.0).unwrap()).is_equal_to(0.0);
}

#[test]
fn floored_tiers_start_at_zero() {
    let weights = rarity::rarity_weights(2.0);

    assert_that!(weights[Rarity::Epic]).is_equal_to(Weight::ZERO);
    assert_that!(weights[Rarity::Legendary]).is_equal_to(Weight::ZERO);
    assert_that!(weights[Rarity::Mythic]).is_equal_to(Weight::ZERO);
    assert_that!(weights[Rarity::Godly]).is_equal_to(Weight::ZERO);
    assert_that!(weights[Rarity::Divine]).is_equal_to(Weight::ZERO);
    assert_that!(weights[Rarity::Immortal]).is_equal_to(Weight::ZERO);
}

#[test]
fn higher_luck_shifts_chances_to_higher_tiers() {
    let low = rarity::rarity_weights(3.0).chances();
    let high = rarity::rarity_weights(30.0).chances();

    assert_that!(high[Rarity::Common]).is_less_than(low[Rarity::Common]);
    assert_that!(high[Rarity::Godly]).is_greater_than(low[Rarity::Godly]);
}

#[test]
fn soft_capped_luck_feeds_rarity_model() {
    let zodiac_luck = luck::zodiac_luck(&luck_input(118.0)).unwrap();
    let chances = rarity::rarity_weights(zodiac_luck).chances();

    assert_that!(chances[Rarity::Immortal]).is_greater_than(0.0);
    assert_that!(chances[Rarity::Garbage]).is_equal_to(0.0);
    assert_that!(chance_sum(&chances)).is_close_to(100.0, 1e-9);
}
