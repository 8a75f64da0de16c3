use std::io;
use std::io::Write;

use thiserror::Error;
use tracing::{debug, error};
use zodiac_model::input::{Field, ZodiacInput};
use zodiac_model::report::ZodiacReport;

use crate::display::{ReportDisplay, SEPARATOR};
use crate::prompt::{PromptError, Prompter};

const BANNER: &str = "\
=== Revolution Idle Zodiac Calculator ===
Note: All inputs are optional. Press Enter to skip any field.

DISCLAIMER: All calculations are approximate and based on formulas from:
- https://revolutionidle.wiki.gg/wiki/Zodiacs
- https://revolutionidle.wiki.gg/wiki/Planet_Shop
Results may not exactly match in-game values due to potential formula changes
or undocumented game mechanics.
";

pub const INVALID_NUMBER_MESSAGE: &str = "Error: Please enter valid numbers.";
pub const NO_INPUT_MESSAGE: &str =
    "No inputs provided. Please provide at least one value to perform calculations.";
pub const RETRY_MESSAGE: &str = "Please try again with valid inputs.";
pub const REPEAT_PROMPT: &str = "Calculate again? (y/n): ";
pub const INTERRUPTED_MESSAGE: &str = "Program interrupted by user.";
pub const FAREWELL_MESSAGE: &str = "Thank you for using the Revolution Idle Zodiac Calculator!";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0}")]
    Prompt(#[from] PromptError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;

pub fn field_prompt(field: Field) -> String {
    format!("Enter {} (or press Enter to skip): ", field.label())
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// The interactive calculator loop. Every round starts from an empty [ZodiacInput], reads all
/// fields, prints the resulting report and asks whether to go again.
pub struct Session<P, W> {
    prompter: P,
    out: W,
}

impl<P: Prompter, W: Write> Session<P, W> {

    pub fn new(prompter: P, out: W) -> Session<P, W> {
        Session { prompter, out }
    }

    /// Runs rounds until the user declines to continue or interrupts the input. Only output
    /// failures and unexpected prompt failures are returned as errors.
    pub fn run(&mut self) -> SessionResult<()> {
        debug!("Starting Revolution Idle Zodiac Calculator");

        match self.run_rounds() {
            Ok(()) => {},
            Err(SessionError::Prompt(PromptError::Interrupted)) => {
                debug!("Program interrupted by user");
                writeln!(self.out, "\n{INTERRUPTED_MESSAGE}")?;
            },
            Err(err) => return Err(err),
        }

        writeln!(self.out, "{FAREWELL_MESSAGE}")?;
        self.out.flush()?;
        debug!("Program ended successfully");
        Ok(())
    }

    fn run_rounds(&mut self) -> SessionResult<()> {
        loop {
            match self.read_input()? {
                Some(input) => {
                    let report = ZodiacReport::evaluate(&input);
                    write!(self.out, "{}", ReportDisplay::new(&report))?;
                    debug!("Results displayed successfully");
                },
                None => writeln!(self.out, "{RETRY_MESSAGE}")?,
            }

            writeln!(self.out, "\n{SEPARATOR}")?;

            if !is_affirmative(&self.ask(REPEAT_PROMPT)?) {
                return Ok(());
            }
        }
    }

    /// Reads one round of input. Returns `None` if the round was aborted because some value was
    /// not a number or because no value was entered at all.
    pub fn read_input(&mut self) -> SessionResult<Option<ZodiacInput>> {
        writeln!(self.out, "{BANNER}")?;

        let mut input = ZodiacInput::default();

        for field in Field::ALL {
            let line = self.ask(&field_prompt(field))?;

            match field.parse_value(&line) {
                Ok(value) => {
                    if let Some(value) = value {
                        debug!("{field} set to: {value}");
                    }

                    input = input.with(field, value);
                },
                Err(err) => {
                    error!(field = %err.field(), "Invalid input provided: {err}");
                    writeln!(self.out, "{INVALID_NUMBER_MESSAGE}")?;
                    return Ok(None);
                },
            }
        }

        if input.is_empty() {
            debug!("No inputs provided by user");
            writeln!(self.out, "{NO_INPUT_MESSAGE}")?;
            return Ok(None);
        }

        debug!("Successfully collected {} inputs", input.provided_count());
        Ok(Some(input))
    }

    fn ask(&mut self, prompt: &str) -> SessionResult<String> {
        self.out.flush()?;
        Ok(self.prompter.read_line(prompt)?)
    }
}
