use std::io;
use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use zodiac_model::report::ZodiacReport;
use zodiac_terminal::config::Config;
use zodiac_terminal::display::ReportDisplay;
use zodiac_terminal::logging;
use zodiac_terminal::prompt::TerminalPrompter;
use zodiac_terminal::session::Session;

fn main() -> Result<()> {
    let config = Config::parse();
    let _guard = logging::init(&config.log_dir, config.log_level)?;

    if let Some(input) = config.one_shot_input() {
        info!("Calculating a single report from command-line values");
        let report = ZodiacReport::evaluate(&input);
        let mut stdout = io::stdout();
        write!(stdout, "{}", ReportDisplay::new(&report))?;
        stdout.flush()?;
        return Ok(());
    }

    let prompter = TerminalPrompter::new().context("failed to open terminal for input")?;

    Session::new(prompter, io::stdout())
        .run()
        .context("calculator session failed")
}
