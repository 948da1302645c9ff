use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::PathBuf;

use cadence_core::config::Settings;
use cadence_recur::{Event, Expander, describe, group_by_date};
use chrono::NaiveDate;
use clap::Parser;
use serde::Serialize;

use crate::error::AppResult;

/// Expand a recurring calendar event into its dated occurrences.
///
/// Reads one event as JSON and writes the occurrences as JSON to stdout.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "cadence", version, about)]
pub struct Args {
    /// Event JSON file; reads stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Configuration file (defaults to ./cadence.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Group occurrences by date
    #[arg(long)]
    pub group: bool,

    /// Reject rules whose end date precedes the start or whose interval exceeds the cap
    #[arg(long)]
    pub strict: bool,

    /// Include a human-readable description of the rule
    #[arg(long)]
    pub summary: bool,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Occurrences {
    List(Vec<Event>),
    ByDate(BTreeMap<NaiveDate, Vec<Event>>),
}

#[derive(Debug, Serialize)]
struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
    occurrences: Occurrences,
}

/// ## Summary
/// Reads an event from `input`, expands it and writes the report to `output`.
///
/// ## Errors
/// Returns `AppError::CoreError` if the settings are invalid, and an error if
/// the input is not a valid event, `--strict` validation fails, or writing the
/// output fails.
pub fn run<R: Read, W: Write>(
    args: &Args,
    settings: &Settings,
    input: R,
    mut output: W,
) -> AppResult<()> {
    settings.validate()?;

    let event: Event = serde_json::from_reader(input)?;
    let expander = Expander::try_from(&settings.expansion)?;

    tracing::debug!(
        title = %event.title,
        repeat_type = %event.repeat.repeat_type,
        "Read event"
    );

    if args.strict {
        expander.validate(&event)?;
    }

    let summary = args.summary.then(|| describe(&event.repeat, event.date));
    let expanded = expander.expand(&event);

    tracing::info!(occurrences = expanded.len(), "Expanded event");

    let occurrences = if args.group {
        Occurrences::ByDate(group_by_date(expanded))
    } else {
        Occurrences::List(expanded)
    };

    serde_json::to_writer_pretty(&mut output, &Report { summary, occurrences })?;
    writeln!(output)?;

    Ok(())
}
