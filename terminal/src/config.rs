use std::path::PathBuf;

use clap::Parser;
use tracing::Level;
use zodiac_model::input::ZodiacInput;

/// Revolution Idle zodiac calculator
///
/// Without any zodiac values, the calculator asks for them interactively. If at least one value
/// is given on the command line, a single report is printed for those values instead.
#[derive(Debug, Parser)]
#[command(name = "zodiac-calculator")]
#[command(version)]
pub struct Config {
    /// Directory the log file is written to
    #[arg(long, env = "ZODIAC_LOG_DIR", default_value = "logs")]
    pub log_dir: PathBuf,

    /// Level of detail in the log file (`RUST_LOG` takes precedence)
    #[arg(long, env = "ZODIAC_LOG_LEVEL", default_value_t = Level::INFO)]
    pub log_level: Level,

    /// Zodiac rarity
    #[arg(long, allow_negative_numbers = true, value_parser = finite_number)]
    pub rarity: Option<f64>,

    /// Zodiac quality
    #[arg(long, allow_negative_numbers = true, value_parser = finite_number)]
    pub quality: Option<f64>,

    /// Zodiac level
    #[arg(long, allow_negative_numbers = true, value_parser = finite_number)]
    pub level: Option<f64>,

    /// Luck
    #[arg(long, allow_negative_numbers = true, value_parser = finite_number)]
    pub luck: Option<f64>,

    /// Immo+ number
    #[arg(long, allow_negative_numbers = true, value_parser = finite_number)]
    pub immo: Option<f64>,
}

impl Config {

    /// The zodiac values given on the command line, or `None` if there are none.
    pub fn one_shot_input(&self) -> Option<ZodiacInput> {
        let input = ZodiacInput {
            rarity: self.rarity,
            quality: self.quality,
            level: self.level,
            luck: self.luck,
            immo_number: self.immo,
        };

        if input.is_empty() {
            None
        }
        else {
            Some(input)
        }
    }
}

fn finite_number(text: &str) -> Result<f64, String> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(format!("'{text}' is not a finite number")),
        Err(err) => Err(format!("'{text}' is not a number: {err}")),
    }
}
