//! CLI command definitions

use crate::domain::SentenceDuration;
use crate::error::{RemitError, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "remit")]
#[command(about = "Remission and discharge date calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./remit.toml when present)
    #[arg(long, global = true, env = "REMIT_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate discharge dates for a sentence
    Calc {
        /// Sentence date (YYYY-MM-DD or DD-MM-YYYY)
        start: String,

        /// Sentence length (e.g., 2y 3m 10d)
        duration: Vec<String>,

        /// Years of the sentence (overrides the duration text)
        #[arg(short, long)]
        years: Option<u32>,

        /// Months of the sentence, 0-11 (overrides the duration text)
        #[arg(short, long)]
        months: Option<u32>,

        /// Days of the sentence, 0-29 (overrides the duration text)
        #[arg(short, long)]
        days: Option<u32>,

        /// Short-sentence policy (return-lpd, add-day)
        #[arg(long)]
        policy: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Enter sentences at a prompt
    Interactive,

    /// Show effective configuration
    Config {
        /// Config key to show
        key: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

/// Combine duration text and per-unit flags into one duration.
///
/// Flags replace the matching part of the text. At least one of the two
/// must be given. Range checks are left to the caller.
pub fn duration_from_args(
    words: &[String],
    years: Option<u32>,
    months: Option<u32>,
    days: Option<u32>,
) -> Result<SentenceDuration> {
    let text = words.join(" ");
    let no_flags = years.is_none() && months.is_none() && days.is_none();

    let base = if text.trim().is_empty() {
        if no_flags {
            return Err(RemitError::InvalidDuration(
                "no sentence length given".to_string(),
            ));
        }
        SentenceDuration::default()
    } else {
        SentenceDuration::parse(&text)?
    };

    Ok(SentenceDuration::unchecked(
        years.unwrap_or(base.years()),
        months.unwrap_or(base.months()),
        days.unwrap_or(base.days()),
    ))
}
