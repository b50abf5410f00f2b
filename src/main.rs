use clap::Parser;
use remit::application::{CalculateService, ConfigService};
use remit::cli::{duration_from_args, format_calculation, format_json, run_session, Cli, Commands};
use remit::domain::{CalendarDate, ShortSentencePolicy};
use remit::error::RemitError;
use remit::infrastructure::Config;
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    remit::logging::init(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), RemitError> {
    let current_dir = std::env::current_dir()?;
    let mut config = Config::discover(cli.config.as_deref(), &current_dir)?;

    match cli.command {
        Commands::Calc {
            start,
            duration,
            years,
            months,
            days,
            policy,
            json,
        } => {
            if let Some(p) = policy {
                config.short_sentence_policy =
                    ShortSentencePolicy::from_str(&p).map_err(RemitError::Config)?;
            }

            let start = CalendarDate::parse(&start)?;
            let duration = duration_from_args(&duration, years, months, days)?;

            let service = CalculateService::new(config);
            let result = service.execute(start, duration)?;

            if json {
                println!("{}", format_json(&result)?);
            } else {
                print!(
                    "{}",
                    format_calculation(&result, &service.config().date_format)?
                );
            }
            Ok(())
        }
        Commands::Interactive => {
            let service = CalculateService::new(config);
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            run_session(&service, stdin.lock(), &mut stdout)?;
            Ok(())
        }
        Commands::Config { key, list } => {
            let service = ConfigService::new(config);

            if list {
                print!("{}", service.list()?);
                Ok(())
            } else if let Some(k) = key {
                println!("{}", service.get(&k)?);
                Ok(())
            } else {
                // No key provided, show usage
                println!("Usage: remit config [--list | <key>]");
                println!("Valid keys: short_sentence_policy, date_format, strict_ranges");
                Ok(())
            }
        }
    }
}
