mod commands;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use daymark_core::config::DaymarkConfig;
use daymark_core::event::parse_date;
use daymark_core::planner::Planner;
use daymark_core::storage::FileStore;

#[derive(Parser)]
#[command(name = "daymark")]
#[command(about = "Month and year calendar with notes pinned to days")]
struct Cli {
    /// Store events in this directory instead of the configured data_dir
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month with its events (defaults to the current month)
    Show {
        /// Month to show (1-12)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Year to show
        #[arg(short, long)]
        year: Option<i32>,

        /// Step this many months back
        #[arg(long, default_value_t = 0)]
        prev: u32,

        /// Step this many months forward
        #[arg(long, default_value_t = 0)]
        next: u32,
    },
    /// Show all twelve months of a year
    Year {
        /// Year to show (defaults to the current year)
        year: Option<i32>,
    },
    /// Pin a note to a day; prompts for anything not given
    Add {
        title: Option<String>,

        /// Day of the note (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Longer description
        #[arg(long)]
        description: Option<String>,

        /// Color as #rrggbb
        #[arg(short, long)]
        color: Option<String>,
    },
    /// List the notes on one day
    On {
        /// Day to list (YYYY-MM-DD)
        date: String,
    },
    /// Navigate the calendar interactively
    Browse,
    /// Print the current month (or year) without colors
    Print {
        /// Print the whole year instead of one month
        #[arg(long)]
        year_view: bool,

        /// Month to print (1-12)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Year to print
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Export all notes
    Export {
        /// ics, json, text, pdf or image
        #[arg(short, long, default_value = "ics")]
        format: String,

        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Lay out the whole year in text exports
        #[arg(long)]
        year_view: bool,

        /// Month for text exports (1-12)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Year for text exports
        #[arg(short, long)]
        year: Option<i32>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = DaymarkConfig::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data_path());
    let mut planner = open_planner(data_dir);

    match cli.command.unwrap_or(Commands::Show {
        month: None,
        year: None,
        prev: 0,
        next: 0,
    }) {
        Commands::Show {
            month,
            year,
            prev,
            next,
        } => commands::show::run(&mut planner, month, year, prev, next),
        Commands::Year { year } => commands::year::run(&mut planner, year),
        Commands::Add {
            title,
            date,
            description,
            color,
        } => {
            let date = date.as_deref().map(parse_date).transpose()?;
            commands::add::run(&mut planner, &config, title, date, description, color)
        }
        Commands::On { date } => commands::on::run(&planner, parse_date(&date)?),
        Commands::Browse => commands::browse::run(&mut planner, &config),
        Commands::Print {
            year_view,
            month,
            year,
        } => commands::print::run(&mut planner, year_view, month, year),
        Commands::Export {
            format,
            output,
            year_view,
            month,
            year,
        } => {
            let format = format.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            commands::export::run(&mut planner, format, output, year_view, month, year)
        }
    }
}

fn open_planner(data_dir: PathBuf) -> Planner {
    log::debug!("using data directory {}", data_dir.display());
    Planner::open(Box::new(FileStore::new(data_dir)), today())
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Write `content` to `path`, creating parent directories.
pub fn write_output(path: &std::path::Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))
}
