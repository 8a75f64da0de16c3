use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use tracing::{debug, error, warn};

use crate::error::{NumericError, NumericResult};
use crate::numeric::checked_powf;
use crate::weight::Weight;

pub const RARITY_COUNT: usize = 10;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Rarity {
    Garbage,
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythic,
    Godly,
    Divine,
    Immortal,
}

impl Rarity {

    pub const ALL: [Rarity; RARITY_COUNT] = [
        Rarity::Garbage,
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythic,
        Rarity::Godly,
        Rarity::Divine,
        Rarity::Immortal
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rarity::Garbage => "Garbage",
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
            Rarity::Godly => "Godly",
            Rarity::Divine => "Divine",
            Rarity::Immortal => "Immortal",
        }
    }

    pub fn curve(self) -> &'static WeightCurve {
        &CURVES[self.index()]
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl Display for Rarity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A value for every [Rarity], iterated in tier order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RarityMap<T>([T; RARITY_COUNT]);

impl<T> RarityMap<T> {

    pub fn from_fn(f: impl FnMut(Rarity) -> T) -> RarityMap<T> {
        RarityMap(Rarity::ALL.map(f))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.0.iter()
    }

    pub fn entries(&self) -> impl Iterator<Item = (Rarity, &T)> {
        Rarity::ALL.into_iter().zip(self.0.iter())
    }
}

impl<T: Copy + Default> RarityMap<T> {

    pub fn try_from_fn<E>(
        mut f: impl FnMut(Rarity) -> Result<T, E>
    ) -> Result<RarityMap<T>, E> {
        let mut map = RarityMap::<T>::default();

        for rarity in Rarity::ALL {
            map[rarity] = f(rarity)?;
        }

        Ok(map)
    }
}

impl<T> Index<Rarity> for RarityMap<T> {
    type Output = T;

    fn index(&self, index: Rarity) -> &T {
        &self.0[index.index()]
    }
}

impl<T> IndexMut<Rarity> for RarityMap<T> {
    fn index_mut(&mut self, index: Rarity) -> &mut T {
        &mut self.0[index.index()]
    }
}

pub type RarityWeights = RarityMap<Weight>;

/// Percentages per tier. Sum to 100, or are all zero if no tier has any weight.
pub type RarityChances = RarityMap<f64>;

impl RarityMap<Weight> {

    /// The sum of all weights, or `None` if it is not representable.
    pub fn total(&self) -> Option<Weight> {
        self.iter().try_fold(Weight::ZERO, |sum, &weight| sum.checked_add(weight))
    }

    pub fn chances(&self) -> RarityChances {
        let total = self.total().unwrap_or(Weight::ZERO);

        if total == Weight::ZERO {
            warn!("Total weight is zero, returning zero chances");
            return RarityChances::default();
        }

        let chances = self.map_values(|weight| weight.percentage_of(total));
        debug!("Rarity chances calculated successfully");
        chances
    }

    fn map_values(&self, mut f: impl FnMut(Weight) -> f64) -> RarityChances {
        RarityMap::from_fn(|rarity| f(self[rarity]))
    }
}

/// A multiplicative decay `base^(L - breakpoint)` that applies from `breakpoint` onwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decay {
    pub breakpoint: f64,
    pub base: f64,
}

/// The piecewise weight of one tier as a function of zodiac luck `L`.
///
/// Inside `[start, end)` the weight is `scale * growth^(L - offset) - subtrahend`, floored at
/// zero if `floored` is set, then multiplied by every [Decay] whose breakpoint is at most `L`.
/// Outside that range the weight is zero. Since every decay factor is one at its breakpoint, the
/// weight is continuous across breakpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightCurve {
    pub scale: f64,
    pub growth: f64,
    pub offset: f64,
    pub subtrahend: f64,
    pub floored: bool,
    pub start: f64,
    pub end: f64,
    pub decays: &'static [Decay],
}

impl WeightCurve {

    pub fn is_defined_at(&self, luck: f64) -> bool {
        self.start <= luck && luck < self.end
    }

    fn base(&self, luck: f64) -> NumericResult<f64> {
        let raw = self.scale * checked_powf(self.growth, luck - self.offset)? - self.subtrahend;

        if self.floored {
            Ok(raw.max(0.0))
        }
        else {
            Ok(raw)
        }
    }

    pub fn evaluate(&self, luck: f64) -> NumericResult<f64> {
        if !self.is_defined_at(luck) {
            return Ok(0.0);
        }

        let mut weight = self.base(luck)?;

        for decay in self.decays.iter().filter(|decay| luck >= decay.breakpoint) {
            weight *= checked_powf(decay.base, luck - decay.breakpoint)?;
        }

        Ok(weight)
    }
}

const fn decay(breakpoint: f64, base: f64) -> Decay {
    Decay { breakpoint, base }
}

static CURVES: [WeightCurve; RARITY_COUNT] = [
    // Garbage
    WeightCurve {
        scale: 5.0,
        growth: 0.8,
        offset: 1.0,
        subtrahend: 0.0,
        floored: false,
        start: 1.0,
        end: 3.0,
        decays: &[decay(2.0, 0.4)],
    },
    // Common
    WeightCurve {
        scale: 15.0,
        growth: 1.0,
        offset: 0.0,
        subtrahend: 0.0,
        floored: false,
        start: 1.0,
        end: 5.0,
        decays: &[decay(2.0, 0.45)],
    },
    // Uncommon
    WeightCurve {
        scale: 20.0,
        growth: 1.5,
        offset: 1.0,
        subtrahend: 12.0,
        floored: false,
        start: 1.0,
        end: 8.0,
        decays: &[decay(3.0, 0.5)],
    },
    // Rare
    WeightCurve {
        scale: 30.0,
        growth: 1.45,
        offset: 1.0,
        subtrahend: 28.0,
        floored: false,
        start: 1.0,
        end: 12.0,
        decays: &[decay(5.0, 0.55)],
    },
    // Epic
    WeightCurve {
        scale: 45.0,
        growth: 1.4,
        offset: 2.0,
        subtrahend: 50.0,
        floored: true,
        start: 1.0,
        end: 20.0,
        decays: &[decay(8.0, 0.6)],
    },
    // Legendary
    WeightCurve {
        scale: 80.0,
        growth: 1.36,
        offset: 3.0,
        subtrahend: 100.0,
        floored: true,
        start: 1.0,
        end: 30.0,
        decays: &[decay(12.0, 0.64)],
    },
    // Mythic
    WeightCurve {
        scale: 120.0,
        growth: 1.3,
        offset: 5.0,
        subtrahend: 140.0,
        floored: true,
        start: 1.0,
        end: 50.0,
        decays: &[decay(20.0, 0.67)],
    },
    // Godly
    WeightCurve {
        scale: 150.0,
        growth: 1.25,
        offset: 8.0,
        subtrahend: 200.0,
        floored: true,
        start: 1.0,
        end: 60.0,
        decays: &[decay(30.0, 0.7)],
    },
    // Divine
    WeightCurve {
        scale: 200.0,
        growth: 1.2,
        offset: 12.0,
        subtrahend: 300.0,
        floored: true,
        start: 1.0,
        end: 70.0,
        decays: &[decay(40.0, 0.92), decay(50.0, 0.75)],
    },
    // Immortal
    WeightCurve {
        scale: 300.0,
        growth: 1.1,
        offset: 20.0,
        subtrahend: 500.0,
        floored: true,
        start: f64::NEG_INFINITY,
        end: f64::INFINITY,
        decays: &[],
    },
];

/// Computes all tier weights, failing on the first tier that cannot be evaluated or if the
/// weights cannot be summed.
pub fn try_rarity_weights(zodiac_luck: f64) -> NumericResult<RarityWeights> {
    let weights = RarityWeights::try_from_fn(|rarity| {
        let value = rarity.curve().evaluate(zodiac_luck)?;

        Weight::new(value).ok_or(NumericError::InvalidResult(value))
    })?;

    if weights.total().is_none() {
        return Err(NumericError::InvalidResult(f64::INFINITY));
    }

    Ok(weights)
}

/// Computes all tier weights. If any weight cannot be computed, all weights are zero.
pub fn rarity_weights(zodiac_luck: f64) -> RarityWeights {
    match try_rarity_weights(zodiac_luck) {
        Ok(weights) => {
            debug!("Rarity weights calculated successfully");
            weights
        },
        Err(err) => {
            error!("Error calculating rarity weights: {err}");
            RarityWeights::default()
        },
    }
}
