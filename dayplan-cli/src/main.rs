mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use dayplan_core::config::DayplanConfig;
use dayplan_core::{Category, EventStore, TimeOfDay};
use tracing_subscriber::EnvFilter;

use crate::commands::add::NewEvent;
use crate::commands::edit::EventChanges;
use crate::commands::export::ExportFormat;
use crate::utils::dates::{parse_date, parse_month, to_index};

#[derive(Parser)]
#[command(name = "dayplan")]
#[command(about = "Record time-boxed events and browse them month by month")]
struct Cli {
    /// Use this config file instead of ~/.config/dayplan/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the events of a day
    List {
        /// YYYY-MM-DD, "today", "tomorrow" or "yesterday"
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
    },
    /// Add an event (prompts for anything missing)
    Add {
        #[arg(value_parser = parse_date)]
        date: NaiveDate,

        name: Option<String>,

        /// Start time (HH:MM)
        #[arg(short, long)]
        start: Option<TimeOfDay>,

        /// End time (HH:MM)
        #[arg(short, long)]
        end: Option<TimeOfDay>,

        #[arg(short, long)]
        description: Option<String>,

        /// work, personal or others
        #[arg(short, long)]
        category: Option<Category>,
    },
    /// Change an event; unspecified fields keep their value
    Edit {
        #[arg(value_parser = parse_date)]
        date: NaiveDate,

        /// Event number as shown by `list`
        number: usize,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        start: Option<TimeOfDay>,

        #[arg(short, long)]
        end: Option<TimeOfDay>,

        /// New description ("" to clear)
        #[arg(short, long)]
        description: Option<String>,

        #[arg(short, long)]
        category: Option<Category>,
    },
    /// Delete an event
    Delete {
        #[arg(value_parser = parse_date)]
        date: NaiveDate,

        /// Event number as shown by `list`
        number: usize,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Find events by name
    Search { query: String },
    /// Show a month at a glance (defaults to the current month)
    Month {
        /// YYYY-MM
        #[arg(value_parser = parse_month)]
        month: Option<NaiveDate>,
    },
    /// Export all events
    Export {
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Replace all events with a JSON export
    Import { path: PathBuf },
    /// Show where configuration and events live, optionally changing them
    Config {
        /// Store events in this directory from now on
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Store events under this snapshot name from now on
        #[arg(long)]
        storage_key: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => DayplanConfig::config_path()?,
    };
    let config = DayplanConfig::load_from(&config_path)?;
    tracing::debug!(
        config = %config_path.display(),
        data = %config.data_path().display(),
        "Loaded configuration"
    );

    let mut store = EventStore::open(config.gateway(), config.storage_key.clone());

    match cli.command {
        Commands::List { date } => commands::list::run(&store, date),
        Commands::Add {
            date,
            name,
            start,
            end,
            description,
            category,
        } => {
            let new = NewEvent {
                name,
                start,
                end,
                description,
                category,
            };
            commands::add::run(&mut store, date, new)
        }
        Commands::Edit {
            date,
            number,
            name,
            start,
            end,
            description,
            category,
        } => {
            let changes = EventChanges {
                name,
                start,
                end,
                description,
                category,
            };
            let index = to_index(number).map_err(anyhow::Error::msg)?;
            commands::edit::run(&mut store, date, index, changes)
        }
        Commands::Delete {
            date,
            number,
            force,
        } => {
            let index = to_index(number).map_err(anyhow::Error::msg)?;
            commands::delete::run(&mut store, date, index, force)
        }
        Commands::Search { query } => commands::search::run(&store, &query),
        Commands::Month { month } => {
            let first = month.unwrap_or_else(current_month);
            commands::month::run(&store, first)
        }
        Commands::Export { format, output } => {
            commands::export::run(&store, format, output.as_deref())
        }
        Commands::Import { path } => commands::import::run(&mut store, &path),
        Commands::Config {
            data_dir,
            storage_key,
        } => {
            let changes = commands::config::ConfigChanges {
                data_dir,
                storage_key,
            };
            commands::config::run(config, &config_path, changes)
        }
    }
}

/// Log to stderr, filtered by `DAYPLAN_LOG` (e.g. `DAYPLAN_LOG=debug`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("DAYPLAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn current_month() -> NaiveDate {
    let today = Local::now().date_naive();
    today.with_day(1).unwrap_or(today)
}
