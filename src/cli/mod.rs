//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod prompt;

pub use commands::{duration_from_args, Cli, Commands};
pub use output::{format_calculation, format_json};
pub use prompt::run_session;
