use std::collections::VecDeque;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("interrupted by user")]
    Interrupted,

    #[error("{0}")]
    Readline(#[from] ReadlineError),
}

pub type PromptResult<T> = Result<T, PromptError>;

/// A source of user-entered lines.
pub trait Prompter {

    /// Shows `prompt` and returns the line entered in response, without the line terminator.
    /// Cancelling the input (Ctrl-C or end of input) yields [PromptError::Interrupted].
    fn read_line(&mut self, prompt: &str) -> PromptResult<String>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn read_line(&mut self, prompt: &str) -> PromptResult<String> {
        (**self).read_line(prompt)
    }
}

pub struct TerminalPrompter {
    editor: DefaultEditor,
}

impl TerminalPrompter {
    pub fn new() -> PromptResult<TerminalPrompter> {
        Ok(TerminalPrompter {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str) -> PromptResult<String> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Err(PromptError::Interrupted),
            Err(err) => Err(err.into()),
        }
    }
}

/// Answers prompts from a fixed list of lines and records every prompt it was shown. Once the
/// lines run out it behaves like a closed input and reports an interruption.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPrompter {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(lines: impl IntoIterator<Item: Into<String>>) -> ScriptedPrompter {
        ScriptedPrompter {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining_lines(&self) -> usize {
        self.lines.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, prompt: &str) -> PromptResult<String> {
        self.prompts.push(prompt.to_owned());
        self.lines.pop_front().ok_or(PromptError::Interrupted)
    }
}
