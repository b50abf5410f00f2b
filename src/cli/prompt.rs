//! Interactive prompt session
//!
//! Asks for a sentence date and a sentence length, prints the result and
//! starts over. `clear` drops the entry in progress; `quit` or end of input
//! ends the session.

use crate::application::CalculateService;
use crate::cli::output::format_calculation;
use crate::error::Result;
use std::io::{BufRead, Write};
use tracing::debug;

const DATE_PROMPT: &str = "Sentence date (YYYY-MM-DD): ";
const DURATION_PROMPT: &str = "Sentence length (e.g., 2y 3m 10d): ";

/// What the user typed at a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Value(String),
    Clear,
    Quit,
}

impl Entry {
    fn from_line(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "quit" | "exit" | "q" => Entry::Quit,
            "clear" | "reset" => Entry::Clear,
            _ => Entry::Value(trimmed.to_string()),
        }
    }
}

/// Run prompts until the user quits. Returns the number of calculations shown.
pub fn run_session<R, W>(service: &CalculateService, mut input: R, output: &mut W) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut shown = 0;

    loop {
        let start = match read_entry(&mut input, output, DATE_PROMPT)? {
            Entry::Quit => break,
            Entry::Clear => {
                writeln!(output, "Cleared.")?;
                continue;
            }
            Entry::Value(text) if text.is_empty() => continue,
            Entry::Value(text) => text,
        };

        let duration = match read_entry(&mut input, output, DURATION_PROMPT)? {
            Entry::Quit => break,
            Entry::Clear => {
                writeln!(output, "Cleared.")?;
                continue;
            }
            Entry::Value(text) => text,
        };

        match service.execute_input(&start, &duration) {
            Ok(result) => {
                let rendered = format_calculation(&result, &service.config().date_format)?;
                writeln!(output)?;
                write!(output, "{}", rendered)?;
                writeln!(output)?;
                shown += 1;
            }
            Err(e) => {
                debug!(error = %e, "rejected input");
                writeln!(output, "Error: {}\n", e.display_with_suggestions())?;
            }
        }
    }

    Ok(shown)
}

fn read_entry<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<Entry>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(Entry::Quit);
    }
    Ok(Entry::from_line(&line))
}
