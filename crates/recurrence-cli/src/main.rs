//! `recur` CLI — expand recurring events and inspect occurrence dates.
//!
//! ## Usage
//!
//! ```sh
//! # Expand one event template (stdin → stdout)
//! recur expand < template.json
//!
//! # Expand from file to file with a custom cap and ceiling
//! recur expand -i template.json -o events.json --max-occurrences 50 --ceiling 2026-12-31
//!
//! # Deterministic ids for fixtures
//! recur expand -i template.json --sequential-ids evt
//!
//! # Build the bulk-save payload for a list of templates
//! recur bulk -i templates.json
//!
//! # Step a date once
//! recur next 2024-01-31 monthly --interval 1
//!
//! # Check whether a candidate belongs to a series
//! recur check 2020-02-29 2024-02-29 yearly
//!
//! # Report overlapping occurrences
//! recur conflicts -i events.json
//! ```

mod config;
mod logging;

use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use recurrence_engine::{
    calculate_next_date, find_conflicts_within, is_valid_occurrence_date, CalendarDate, Event,
    EventTemplate, Frequency, IdGenerator, RecurrenceExpander, SequentialIdGenerator,
    TempIdGenerator,
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "recur",
    version,
    about = "Recurring calendar event expansion CLI"
)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Limits and id options shared by the expanding subcommands.
#[derive(Args)]
pub struct ExpansionArgs {
    /// TOML file with `max_occurrences` and/or `end_date_ceiling`
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Maximum number of candidate dates examined per template
    #[arg(long)]
    pub max_occurrences: Option<usize>,
    /// Latest date a bounded series may reach (YYYY-MM-DD)
    #[arg(long)]
    pub ceiling: Option<CalendarDate>,
    /// Issue `<PREFIX>-1`, `<PREFIX>-2`, ... instead of random ids
    #[arg(long, value_name = "PREFIX")]
    pub sequential_ids: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand one event template into its occurrences
    Expand {
        /// Input JSON template (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[command(flatten)]
        expansion: ExpansionArgs,
    },
    /// Build a bulk-save payload from a JSON array of templates
    Bulk {
        /// Input JSON array (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[command(flatten)]
        expansion: ExpansionArgs,
    },
    /// Print the next candidate date after DATE
    Next {
        /// Current date (YYYY-MM-DD)
        date: String,
        /// daily, weekly, monthly or yearly
        frequency: Frequency,
        /// Units to advance; values <= 0 count as 1
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        interval: i64,
    },
    /// Print whether CANDIDATE is an occurrence of a series anchored at ORIGINAL
    Check {
        /// Anchor date (YYYY-MM-DD)
        original: String,
        /// Candidate date (YYYY-MM-DD)
        candidate: String,
        /// daily, weekly, monthly or yearly
        frequency: Frequency,
    },
    /// Report overlapping occurrences in a JSON array of events
    Conflicts {
        /// Input JSON array (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Expand {
            input,
            output,
            expansion,
        } => {
            let json = read_input(input.as_deref())?;
            let template: EventTemplate =
                serde_json::from_str(&json).context("Failed to parse event template")?;
            let expander = build_expander(&expansion)?;

            let events = expander.expand(&template);
            info!(count = events.len(), "expanded template");
            write_output(output.as_deref(), &serde_json::to_string_pretty(&events)?)?;
        }
        Commands::Bulk {
            input,
            output,
            expansion,
        } => {
            let json = read_input(input.as_deref())?;
            let templates: Vec<EventTemplate> =
                serde_json::from_str(&json).context("Failed to parse template list")?;
            let expander = build_expander(&expansion)?;

            let payload = expander.prepare_bulk_save(&templates);
            info!(count = payload.events.len(), "prepared bulk payload");
            write_output(output.as_deref(), &serde_json::to_string_pretty(&payload)?)?;
        }
        Commands::Next {
            date,
            frequency,
            interval,
        } => {
            println!("{}", calculate_next_date(&date, frequency, interval));
        }
        Commands::Check {
            original,
            candidate,
            frequency,
        } => {
            println!(
                "{}",
                is_valid_occurrence_date(&original, &candidate, frequency)
            );
        }
        Commands::Conflicts { input } => {
            let json = read_input(input.as_deref())?;
            let events: Vec<Event> =
                serde_json::from_str(&json).context("Failed to parse event list")?;

            let conflicts = find_conflicts_within(&events);
            info!(count = conflicts.len(), "conflict scan finished");
            println!("{}", serde_json::to_string_pretty(&conflicts)?);
        }
    }

    Ok(())
}

/// Build an expander from the resolved config and the requested id scheme.
fn build_expander(args: &ExpansionArgs) -> Result<RecurrenceExpander<Box<dyn Fn() -> String>>> {
    let config = config::resolve(args)?;

    let ids: Box<dyn Fn() -> String> = match &args.sequential_ids {
        Some(prefix) => {
            let ids = SequentialIdGenerator::new(prefix.clone());
            Box::new(move || ids.next_id())
        }
        None => Box::new(|| TempIdGenerator.next_id()),
    };

    Ok(RecurrenceExpander::with_id_generator(config, ids))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
