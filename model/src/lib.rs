pub mod error;
pub mod formula;
pub mod input;
pub mod luck;
pub mod numeric;
pub mod rarity;
pub mod report;
pub mod weight;

#[cfg(feature = "test-util")]
pub mod test_util;
