//! `slots` CLI — query a specialist availability table from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Bookable dates of November 2026 for specialist 1
//! slots --table specialists.json dates --provider 1 --year 2026 --month 11
//!
//! # Slots on one of those dates, as JSON
//! slots --table specialists.json slots --provider 1 --date 2026-11-02 --json
//!
//! # Pin "now" for reproducible output
//! slots --table specialists.json --now 2026-11-02T10:15 slots --provider 1 --date 2026-11-02
//!
//! # Table path from the environment
//! SLOTS_TABLE=specialists.json slots providers
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand, ValueEnum};
use slot_engine::window::{format_date, format_time};
use slot_engine::{
    AvailabilityTable, Clock, FallbackPolicy, FixedClock, OverlapPolicy, PastDatePolicy,
    SlotOptions, SystemClock, TimeSlot,
};
use tracing::{debug, info};

mod logging;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Bookable dates and 30-minute slots from a specialist availability table"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Availability table (JSON array of window records)
    #[arg(long, global = true, env = "SLOTS_TABLE")]
    table: Option<String>,

    /// Treat this local datetime as "now" (e.g. 2026-11-02T10:15)
    #[arg(long, global = true)]
    now: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the bookable dates of a month
    Dates {
        #[arg(short, long)]
        provider: String,
        #[arg(short, long)]
        year: i32,
        /// Month, 1-12
        #[arg(short, long)]
        month: u32,
        /// Print a JSON array instead of one date per line
        #[arg(long)]
        json: bool,
    },
    /// List the 30-minute slots of a date
    Slots {
        #[arg(short, long)]
        provider: String,
        /// Date as YYYY-MM-DD
        #[arg(short, long)]
        date: String,
        /// Print a JSON array of slot objects
        #[arg(long)]
        json: bool,
        /// Do not synthesize a 09:00-17:00 window when none is configured
        #[arg(long)]
        no_fallback: bool,
        /// Merge overlapping windows before cutting slots
        #[arg(long)]
        merge_overlaps: bool,
        /// How to answer a date before today
        #[arg(long, value_enum, default_value_t = PastDates::Retain)]
        past_dates: PastDates,
    },
    /// List providers and their weekly hours
    Providers,
}

#[derive(Clone, Copy, ValueEnum)]
enum PastDates {
    Retain,
    Empty,
    Reject,
}

impl From<PastDates> for PastDatePolicy {
    fn from(p: PastDates) -> Self {
        match p {
            PastDates::Retain => PastDatePolicy::Retain,
            PastDates::Empty => PastDatePolicy::Empty,
            PastDates::Reject => PastDatePolicy::Reject,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let table = load_table(cli.table.as_deref())?;
    let now = resolve_now(cli.now.as_deref())?;
    debug!(%now, windows = table.len(), "loaded availability table");

    match cli.command {
        Commands::Dates {
            provider,
            year,
            month,
            json,
        } => {
            let dates = slot_engine::resolve_available_dates(&table, &provider, year, month, now.date())
                .context("Failed to resolve available dates")?;
            let rendered: Vec<String> = dates.into_iter().map(format_date).collect();
            info!(provider = %provider, count = rendered.len(), "dates");

            if json {
                println!("{}", serde_json::to_string(&rendered)?);
            } else if rendered.is_empty() {
                println!("no availability");
            } else {
                for d in rendered {
                    println!("{}", d);
                }
            }
        }
        Commands::Slots {
            provider,
            date,
            json,
            no_fallback,
            merge_overlaps,
            past_dates,
        } => {
            let options = SlotOptions {
                fallback: if no_fallback {
                    FallbackPolicy::None
                } else {
                    FallbackPolicy::DefaultWindow
                },
                overlap: if merge_overlaps {
                    OverlapPolicy::Merge
                } else {
                    OverlapPolicy::Keep
                },
                past_dates: past_dates.into(),
            };
            let slots = slot_engine::generate_slots_for_date_str(&table, &provider, &date, now, &options)
                .with_context(|| format!("Failed to generate slots for {}", date))?;
            info!(provider = %provider, count = slots.len(), "slots");

            if json {
                println!("{}", serde_json::to_string_pretty(&slots)?);
            } else if slots.is_empty() {
                println!("no availability");
            } else {
                for slot in &slots {
                    println!("{}", render_slot(slot));
                }
            }
        }
        Commands::Providers => {
            if table.is_empty() {
                println!("no availability");
            }
            for provider in table.providers() {
                println!("{}\t{}", provider, weekly_hours(&table, provider));
            }
        }
    }

    Ok(())
}

fn load_table(path: Option<&str>) -> Result<AvailabilityTable> {
    let path = path.context("No availability table given. Pass --table FILE or set SLOTS_TABLE")?;
    let json = std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?;
    AvailabilityTable::from_json(&json).with_context(|| format!("Failed to load availability table: {}", path))
}

fn resolve_now(now: Option<&str>) -> Result<NaiveDateTime> {
    match now {
        Some(s) => Ok(FixedClock::at(s).context("Invalid --now")?.now()),
        None => Ok(SystemClock.now()),
    }
}

fn render_slot(slot: &TimeSlot) -> String {
    format!(
        "{}-{}\t{}",
        format_time(slot.start_time),
        format_time(slot.end_time),
        slot.id
    )
}

/// `"Mon 09:00-12:00, Wed 14:00-17:00 (inactive)"`
fn weekly_hours(table: &AvailabilityTable, provider: &str) -> String {
    table
        .windows_for(provider)
        .map(|w| {
            let mut s = format!(
                "{} {}-{}",
                WEEKDAYS.get(w.day_of_week as usize).unwrap_or(&"?"),
                format_time(w.start_time),
                format_time(w.end_time)
            );
            if !w.is_active {
                s.push_str(" (inactive)");
            }
            s
        })
        .collect::<Vec<_>>()
        .join(", ")
}
