//! Prompt helpers shared by the handlers

use colored::Colorize;
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::InvalidNumberPolicy;
use crate::domain::parse_int;
use crate::infrastructure::traits::Terminal;

/// Shown before asking again under `InvalidNumberPolicy::Reprompt`.
pub const INVALID_NUMBER_WARNING: &str = "Please enter a whole number.";

/// Read one line of free text. End of input is an error.
pub fn read_text(terminal: &mut dyn Terminal, prompt: &str) -> ApplicationResult<String> {
    terminal
        .read_line(prompt)
        .with_context("read input")?
        .ok_or_else(|| ApplicationError::InputClosed {
            prompt: prompt.trim_end().to_string(),
        })
}

/// Read a whole number, applying `policy` when the text does not parse.
pub fn read_number(
    terminal: &mut dyn Terminal,
    prompt: &str,
    policy: InvalidNumberPolicy,
) -> ApplicationResult<i64> {
    loop {
        let input = read_text(terminal, prompt)?;
        match parse_int(&input) {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!("read_number: rejected {:?}", input);
                match policy {
                    InvalidNumberPolicy::Abort => return Err(e.into()),
                    InvalidNumberPolicy::Reprompt => {
                        let warning = INVALID_NUMBER_WARNING.yellow().to_string();
                        write_line(terminal, &warning)?;
                    }
                }
            }
        }
    }
}

pub fn write_line(terminal: &mut dyn Terminal, line: &str) -> ApplicationResult<()> {
    terminal.write_line(line).with_context("write output")
}
