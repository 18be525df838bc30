//! `availability` CLI — resolve a week of free booking slots from a JSON event list.
//!
//! ## Usage
//!
//! ```sh
//! # Events from a file, week starting 2014-08-10
//! availability 2014-08-10 --events events.json
//!
//! # Events on stdin, pretty-printed output
//! cat events.json | availability 2014-08-10 --pretty
//!
//! # Show per-event debug logs on stderr
//! RUST_LOG=availability_engine=trace availability 2014-08-10 -e events.json
//! ```
//!
//! The event file is a JSON array of records:
//!
//! ```json
//! [{"id": 1, "starts_at": "2014-08-04 09:30", "ends_at": "2014-08-04 12:30",
//!   "kind": "opening", "weekly_recurring": true}]
//! ```

use anyhow::{Context, Result};
use availability_engine::{get_availabilities_str, InMemoryEventSource};
use clap::Parser;
use std::io::{self, Read};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "availability",
    version,
    about = "Resolve free 30-minute slots for the week starting at a date"
)]
struct Cli {
    /// First day of the week to resolve (YYYY-MM-DD)
    date: String,

    /// JSON file with event records (reads from stdin if omitted)
    #[arg(short, long)]
    events: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let json = read_input(cli.events.as_deref())?;
    let source = InMemoryEventSource::from_json(&json).context("Failed to load event records")?;
    debug!(records = source.len(), "loaded event records");

    let week = get_availabilities_str(&source, &cli.date)
        .with_context(|| format!("Failed to resolve availability for '{}'", cli.date))?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&week)?
    } else {
        serde_json::to_string(&week)?
    };
    println!("{}", output);

    Ok(())
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
