/// An unnormalized rarity weight. Always finite and non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);

    pub const fn new(weight: f64) -> Option<Weight> {
        if !weight.is_finite() || weight < 0.0 {
            return None;
        }

        Some(Weight(weight))
    }

    pub fn checked_add(self, other: Weight) -> Option<Weight> {
        Weight::new(self.0 + other.0)
    }

    /// This weight's share of `total` in percent. Zero if `total` is zero.
    pub fn percentage_of(self, total: Weight) -> f64 {
        if total == Weight::ZERO {
            0.0
        }
        else {
            self.0 / total.0 * 100.0
        }
    }

    pub fn as_f64(self) -> f64 {
        self.0
    }
}
