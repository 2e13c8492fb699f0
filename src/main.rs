use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use log::info;
use uuid::Uuid;

mod channel;
mod engine;
mod error;
mod history;
mod models;
mod parser;
mod protocol;
mod report;
mod requirement;
mod store;
mod urgency;

use crate::error::PlanError;
use crate::store::HistoryStore;

const STORE_ENV: &str = "STAFFING_HISTORY_PATH";
const DEFAULT_STORE: &str = "staffing-history.json";

#[derive(Parser)]
#[command(name = "staffing-planner")]
#[command(about = "Weekly teacher hiring planner driven by coverage deficits", long_about = None)]
struct Cli {
    /// History file (defaults to $STAFFING_HISTORY_PATH, then ./staffing-history.json)
    #[arg(long, global = true)]
    store: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the hiring plan for a pasted coverage table
    Plan {
        /// Coverage table file, or `-` for stdin
        #[arg(long)]
        input: PathBuf,
        /// Target week start (YYYY-MM-DD); defaults to next Monday
        #[arg(long)]
        week: Option<NaiveDate>,
        #[arg(long)]
        json: bool,
    },
    /// Compute the plan and record it in the history log
    Save {
        /// Coverage table file, or `-` for stdin
        #[arg(long, conflicts_with = "manual_hires")]
        input: Option<PathBuf>,
        /// Record a hire count directly instead of parsing a table
        #[arg(long)]
        manual_hires: Option<u32>,
        #[arg(long)]
        week: Option<NaiveDate>,
    },
    /// List recorded weeks, most recent first
    History,
    /// Delete one history record
    Delete {
        #[arg(long)]
        id: Uuid,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Clear the history log and restore the channel catalog
    Reset {
        #[arg(long)]
        yes: bool,
    },
    /// Generate a markdown history report
    Report {
        #[arg(long, default_value = "hiring-report.md")]
        out: PathBuf,
    },
    /// Export the history log as CSV
    Export {
        #[arg(long)]
        csv: PathBuf,
    },
    /// Show the recruiting channel catalog
    Channels {
        /// Show the catalog band covering this many hires
        #[arg(long)]
        hires: Option<u32>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(cli, Utc::now(), &mut stdin.lock(), &mut stdout.lock())
}

fn store_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os(STORE_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE))
}

fn open_store(path: &Path) -> anyhow::Result<HistoryStore> {
    HistoryStore::open(path)
        .with_context(|| format!("failed to open history store {}", path.display()))
}

/// Runs one subcommand. Only the arms that read or write history open the
/// store; `plan` never touches it.
fn run(
    cli: Cli,
    now: DateTime<Utc>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let store_path = store_path(cli.store);
    let today = now.date_naive();

    match cli.command {
        Commands::Plan {
            input: source,
            week,
            json,
        } => {
            let raw = read_input(&source, input)?;
            let week = week.unwrap_or_else(|| requirement::next_monday(today));
            let plan = engine::compute(&raw, Some(week), now);

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&plan)?)?;
            } else {
                write!(out, "{}", report::render_plan(&plan, week))?;
            }
        }
        Commands::Save {
            input: source,
            manual_hires,
            week,
        } => {
            let week = week.unwrap_or_else(|| requirement::next_monday(today));
            let plan = match (manual_hires, source) {
                (Some(hires), _) => {
                    let days = requirement::days_until(Some(week), now);
                    engine::assess(Vec::new(), Some(requirement::manual_requirement(hires, days)))
                }
                (None, Some(source)) => {
                    engine::compute(&read_input(&source, input)?, Some(week), now)
                }
                (None, None) => engine::compute("", Some(week), now),
            };

            let record = match history::build_record(&plan, week, now) {
                Ok(record) => record,
                Err(PlanError::NothingToSave) => {
                    writeln!(out, "{}", PlanError::NothingToSave)?;
                    return Ok(());
                }
                Err(err) => return Err(err.into()),
            };
            let saved = open_store(&store_path)?.upsert_by_week(record)?;
            writeln!(out, "{}", history::saved_message(&saved))?;
            writeln!(out, "Record id: {}", saved.id)?;
        }
        Commands::History => {
            let records = open_store(&store_path)?.list_recent_first()?;
            if records.is_empty() {
                writeln!(out, "No historical data available.")?;
                return Ok(());
            }

            writeln!(out, "Recorded weeks:")?;
            for record in records.iter() {
                writeln!(
                    out,
                    "- {} target {} hired {} remaining {} via {} [{}] ({})",
                    record.week_start_date,
                    record.target_hires,
                    record.hired,
                    record.remaining,
                    record.recommended_platform,
                    history::badges(record).join(", "),
                    record.id
                )?;
            }
        }
        Commands::Delete { id, yes } => {
            if !yes && !confirm("Are you sure you want to delete this record?", input, out)? {
                writeln!(out, "Nothing deleted.")?;
                return Ok(());
            }
            match open_store(&store_path)?.delete_by_id(id) {
                Ok(()) => writeln!(out, "Record deleted successfully!")?,
                Err(PlanError::RecordNotFound { id }) => writeln!(out, "No record with id {id}.")?,
                Err(err) => return Err(err.into()),
            }
        }
        Commands::Reset { yes } => {
            if !yes && !confirm("Clear all hiring history?", input, out)? {
                writeln!(out, "Nothing cleared.")?;
                return Ok(());
            }
            let store = open_store(&store_path)?;
            store.reset()?;
            writeln!(out, "History cleared at {}.", store.path().display())?;
        }
        Commands::Report { out: report_path } => {
            let records = open_store(&store_path)?.list()?;
            let report = report::build_report(today, &records);
            std::fs::write(&report_path, report)
                .with_context(|| format!("failed to write {}", report_path.display()))?;
            writeln!(out, "Report written to {}.", report_path.display())?;
        }
        Commands::Export { csv: csv_path } => {
            let records = open_store(&store_path)?.list_recent_first()?;
            let mut writer = csv::Writer::from_path(&csv_path)
                .with_context(|| format!("failed to create {}", csv_path.display()))?;
            for record in records.iter() {
                writer.serialize(record)?;
            }
            writer.flush()?;
            info!("exported {} records", records.len());
            writeln!(
                out,
                "Exported {} records to {}.",
                records.len(),
                csv_path.display()
            )?;
        }
        Commands::Channels { hires } => {
            let catalog = open_store(&store_path)?.catalog()?;
            match hires {
                Some(hires) => match channel::channel_for_volume(&catalog, hires) {
                    Some(entry) => writeln!(
                        out,
                        "{hires} hires -> {} ({}): {}",
                        entry.name,
                        entry.cost,
                        channel::channel_description(&entry.name)
                    )?,
                    None => writeln!(out, "Channel catalog is empty.")?,
                },
                None => {
                    for entry in catalog.iter() {
                        let range = match entry.max_hires {
                            Some(max) => format!("{}-{}", entry.min_hires, max),
                            None => format!("{}+", entry.min_hires),
                        };
                        writeln!(out, "- {} ({}) for {} hires", entry.name, entry.cost, range)?;
                    }
                }
            }
        }
    }

    Ok(())
}

fn read_input(path: &Path, stdin: &mut impl BufRead) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut raw = String::new();
        stdin
            .read_to_string(&mut raw)
            .context("failed to read coverage table from stdin")?;
        return Ok(raw);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read coverage table {}", path.display()))
}

/// Anything but an explicit yes, including end of input, declines.
fn confirm(prompt: &str, input: &mut impl BufRead, out: &mut impl Write) -> anyhow::Result<bool> {
    write!(out, "{prompt} [y/N] ")?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
