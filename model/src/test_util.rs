use crate::rarity::{RarityChances, RarityMap, RarityWeights, Rarity, RARITY_COUNT};
use crate::weight::Weight;

use kernal::abs_diff::AbsDiff;
use kernal::prelude::*;

/// Creates a map whose first `LEN` tiers (in tier order) have the given values. All remaining
/// tiers are default.
pub fn create_rarity_map<T: Copy + Default, const LEN: usize>(
    values: [T; LEN]
) -> RarityMap<T> {
    assert_that!(LEN).is_less_than_or_equal_to(RARITY_COUNT);

    let mut map = RarityMap::<T>::default();

    for (index, rarity) in Rarity::ALL.iter().cloned().enumerate().take(LEN) {
        map[rarity] = values[index];
    }

    map
}

pub fn create_rarity_weights<const LEN: usize>(values: [f64; LEN]) -> RarityWeights {
    create_rarity_map(values.map(|value| Weight::new(value).unwrap()))
}

impl AbsDiff for Weight {
    type ReturnType = f64;

    fn abs_diff(&self, other: &Weight) -> f64 {
        self.as_f64().abs_diff(&other.as_f64())
    }
}

impl AbsDiff for RarityWeights {
    type ReturnType = f64;

    fn abs_diff(&self, other: &RarityWeights) -> f64 {
        self.iter()
            .zip(other.iter())
            .map(|(a, b)| a.abs_diff(b))
            .reduce(f64::max)
            .unwrap()
    }
}

impl AbsDiff for RarityChances {
    type ReturnType = f64;

    fn abs_diff(&self, other: &RarityChances) -> f64 {
        self.iter()
            .zip(other.iter())
            .map(|(a, b)| a.abs_diff(b))
            .reduce(f64::max)
            .unwrap()
    }
}
