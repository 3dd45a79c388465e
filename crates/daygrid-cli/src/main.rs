//! `daygrid` CLI — pack day-view events and inspect the hour grid from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Pack events (stdin → stdout)
//! echo '[{"start":"2026-03-01T09:00:00Z","end":"2026-03-01T10:00:00Z","title":"Standup"}]' \
//!   | daygrid pack
//!
//! # Pack from file to file with an explicit column width
//! daygrid pack -i events.json -o layout.json --width 360
//!
//! # Start the rendered range at 8 AM instead of midnight
//! daygrid pack -i events.json --day-start 8
//!
//! # Print the hour grid for a 9-to-5 range
//! daygrid grid --day-start 9 --day-end 17
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use clap::{Parser, Subcommand};
use daygrid::{hour_lines, pack_events, Event, Geometry};
use serde::{Deserialize, Serialize};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "daygrid", version, about = "Day-view event layout CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a JSON array of events into day-column layout geometry
    Pack {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Total pixel width available for the day column
        #[arg(long, default_value_t = 400.0)]
        width: f64,
        /// Hour of day (0-23) at the top of the rendered range
        #[arg(long, default_value_t = 0)]
        day_start: u32,
    },
    /// Print the hour grid (labels and pixel offsets) for a day range
    Grid {
        /// Hour of day at the top of the range
        #[arg(long, default_value_t = 0)]
        day_start: u32,
        /// Hour of day at the bottom of the range
        #[arg(long, default_value_t = 24)]
        day_end: u32,
        /// Use 24-hour labels instead of AM/PM
        #[arg(long)]
        format24h: bool,
    },
}

/// Wire format for one input event: the two instants plus whatever display
/// fields the caller attached. The extra fields ride through packing as the
/// opaque payload.
#[derive(Deserialize)]
struct EventInput {
    start: String,
    end: String,
    #[serde(flatten)]
    display: serde_json::Map<String, serde_json::Value>,
}

/// Wire format for one packed event: the geometry, the input position, the
/// instants echoed back in RFC 3339, and the untouched display fields.
#[derive(Serialize)]
struct PackedEventOutput {
    top: f64,
    height: f64,
    left: f64,
    width: f64,
    index: usize,
    start: String,
    end: String,
    #[serde(flatten)]
    display: serde_json::Map<String, serde_json::Value>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Pack {
            input,
            output,
            width,
            day_start,
        } => {
            let json = read_input(input.as_deref())?;
            let inputs: Vec<EventInput> =
                serde_json::from_str(&json).context("Failed to parse events JSON")?;

            let events = inputs
                .into_iter()
                .map(|ev| {
                    let start = parse_datetime(&ev.start)?;
                    let end = parse_datetime(&ev.end)?;
                    Ok(Event::with_payload(start, end, ev.display))
                })
                .collect::<Result<Vec<_>>>()?;

            let packed = pack_events(&events, width, day_start).context("Failed to pack events")?;

            let outputs: Vec<PackedEventOutput> = packed
                .into_iter()
                .map(|p| PackedEventOutput {
                    top: p.top,
                    height: p.height,
                    left: p.left,
                    width: p.width,
                    start: events[p.index].start.to_rfc3339(),
                    end: events[p.index].end.to_rfc3339(),
                    index: p.index,
                    display: p.payload,
                })
                .collect();

            let pretty = serde_json::to_string_pretty(&outputs)?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Grid {
            day_start,
            day_end,
            format24h,
        } => {
            anyhow::ensure!(
                day_end > day_start,
                "day range is empty: {}..{}",
                day_start,
                day_end
            );
            for line in hour_lines(day_start, day_end, format24h, &Geometry::default()) {
                println!("{:>5} | {:>6.0} px", line.label, line.label_offset);
            }
        }
    }

    Ok(())
}

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts both RFC 3339 (with timezone offset, e.g., "2026-03-01T09:00:00Z")
/// and naive local time (e.g., "2026-03-01T09:00:00"), which is interpreted
/// as UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .with_context(|| format!("Invalid datetime: '{}'", s))
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
