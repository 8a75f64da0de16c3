use std::fmt;
use std::fmt::{Display, Formatter};

use zodiac_model::report::{RarityAnalysis, ZodiacReport};

pub const SEPARATOR: &str = "==================================================";

const SALE_PRICE_NOTE: &str =
    "  Note: This is the base sale price, multiplied by the 'Wolf Skull' Relic";

/// Formats a number for display. Very large numbers use scientific notation, small ones get
/// more decimal places.
pub fn format_number(number: f64) -> String {
    let magnitude = number.abs();

    if number.is_infinite() {
        "∞ (Infinity)".to_owned()
    }
    else if number.is_nan() {
        "NaN (Invalid)".to_owned()
    }
    else if magnitude >= 1e6 {
        format_scientific(number)
    }
    else if magnitude >= 1_000.0 {
        format!("{number:.2}")
    }
    else if magnitude >= 1.0 {
        format!("{number:.6}")
    }
    else {
        format!("{number:.8}")
    }
}

/// Two decimal places and an exponent with explicit sign and at least two digits, e.g.
/// `1.23e+06`.
fn format_scientific(number: f64) -> String {
    let formatted = format!("{number:.2e}");

    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };

            format!("{mantissa}e{sign}{digits:0>2}")
        },
        None => formatted,
    }
}

pub struct EnumerationDisplay<'enumeration, T> {
    enumeration: &'enumeration [T],
    conjunction: String,
}

impl<'enumeration, T> EnumerationDisplay<'enumeration, T> {
    pub fn new(
        enumeration: &'enumeration [T],
        conjunction: impl Into<String>,
    ) -> EnumerationDisplay<'enumeration, T> {
        EnumerationDisplay {
            enumeration,
            conjunction: conjunction.into(),
        }
    }
}

impl<'enumeration, T: Display> Display for EnumerationDisplay<'enumeration, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.enumeration {
            [] => Ok(()),
            [single] => write!(f, "{single}"),
            [first, second] => write!(f, "{first} {} {second}", self.conjunction),
            [init @ .., last] => {
                let init = init.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");

                write!(f, "{init}, {} {last}", self.conjunction)
            },
        }
    }
}

/// Renders a [ZodiacReport] the way the calculator prints its results.
pub struct ReportDisplay<'report> {
    report: &'report ZodiacReport,
}

impl<'report> ReportDisplay<'report> {
    pub fn new(report: &'report ZodiacReport) -> ReportDisplay<'report> {
        ReportDisplay { report }
    }

    fn fmt_basic_values(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n--- Basic Zodiac Calculations ---")?;

        if let Some(sale_price) = self.report.sale_price {
            writeln!(f, "Zodiac Sale Price: {}", format_number(sale_price))?;
            writeln!(f, "{SALE_PRICE_NOTE}")?;
        }

        if let Some(enhance_price) = self.report.enhance_price {
            writeln!(f, "Zodiac Enhance Price: {}", format_number(enhance_price))?;
        }

        if let Some(enhance_chance) = self.report.enhance_chance {
            writeln!(f, "Zodiac Enhance Chance: {enhance_chance:.2}%")?;
        }

        if let Some(score) = self.report.score {
            writeln!(f, "Zodiac Score: {}", format_number(score))?;
        }

        Ok(())
    }

    fn fmt_rarity_analysis(analysis: &RarityAnalysis, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n--- Rarity Analysis ---")?;
        writeln!(f, "Zodiac Luck: {}", format_number(analysis.zodiac_luck))?;

        writeln!(f, "\nRarity Weights:")?;

        for (rarity, weight) in analysis.weights.entries() {
            writeln!(f, "  {rarity}: {}", format_number(weight.as_f64()))?;
        }

        writeln!(f, "\nRarity Chances:")?;

        for (rarity, chance) in analysis.chances.entries() {
            writeln!(f, "  {rarity}: {chance:.4}%")?;
        }

        Ok(())
    }

    fn fmt_nothing_computed(f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nNo calculations could be performed with the provided inputs.")?;
        writeln!(f, "Please provide the required inputs for the calculations you want to see:")?;
        writeln!(
            f,
            "- Sale Price/Score: Requires {}",
            EnumerationDisplay::new(&["rarity", "quality", "level"], "and")
        )?;
        writeln!(f, "- Enhance Price/Chance: Requires quality (and rarity/level for price)")?;
        writeln!(f, "- Rarity Analysis: Requires luck")
    }
}

impl Display for ReportDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n{SEPARATOR}")?;
        writeln!(f, "CALCULATION RESULTS")?;
        writeln!(f, "{SEPARATOR}")?;

        if self.report.has_basic_values() {
            self.fmt_basic_values(f)?;
        }

        if let Some(analysis) = &self.report.rarity_analysis {
            ReportDisplay::fmt_rarity_analysis(analysis, f)?;
        }

        if self.report.is_empty() {
            ReportDisplay::fmt_nothing_computed(f)?;
        }

        Ok(())
    }
}
