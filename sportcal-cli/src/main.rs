mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use sportcal_core::config::SportCalConfig;
use sportcal_core::date::{parse_month, shift_month};
use sportcal_core::{EventStore, FileStorage};

#[derive(Parser)]
#[command(name = "sportcal")]
#[command(about = "Browse and add sports fixtures in a month calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid
    Month {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,

        /// Move this many months forward (or back, if negative)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i32,

        /// Only show these sports (repeatable)
        #[arg(short, long = "sport")]
        sports: Vec<String>,
    },
    /// Add an event
    Add {
        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Kick-off time (HH:MM)
        #[arg(short, long)]
        time: String,

        #[arg(short, long, default_value = "football")]
        sport: String,

        #[arg(long)]
        home: String,

        #[arg(long)]
        away: String,

        /// Competition phase, e.g. "Quarter Finals"
        #[arg(long)]
        stage: Option<String>,
    },
    /// List every event on one day
    Day {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Show one event in detail
    Show { id: String },
    /// List sports that have events
    Sports,
    /// Drop added events and go back to the seed data
    Reset {
        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Show or change settings
    Config {
        /// Seed dataset to use on first run and on reset
        #[arg(long)]
        seed_file: Option<PathBuf>,

        /// Events shown per day in the month view before "+N"
        #[arg(long)]
        max_events_per_cell: Option<usize>,
    },
    /// Write a synthetic October to December seed file
    /// (use it with `sportcal config --seed-file` and `sportcal reset`)
    Generate {
        #[arg(short, long)]
        out: PathBuf,

        #[arg(long, default_value_t = 2025)]
        year: i32,

        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Month {
            month,
            offset,
            sports,
        } => {
            let (config, store) = load()?;
            let reference = match month {
                Some(m) => parse_month(&m)?,
                None => chrono::Local::now().date_naive(),
            };
            let reference = shift_month(reference, offset);
            commands::month::run(&store, reference, &sports, config.max_events_per_cell)
        }
        Commands::Add {
            date,
            time,
            sport,
            home,
            away,
            stage,
        } => {
            let (_, mut store) = load()?;
            commands::add::run(&mut store, &date, &time, &sport, home, away, stage)
        }
        Commands::Day { date } => {
            let (_, store) = load()?;
            commands::day::run(&store, &date)
        }
        Commands::Show { id } => {
            let (_, store) = load()?;
            commands::show::run(&store, &id)
        }
        Commands::Sports => {
            let (_, store) = load()?;
            commands::sports::run(&store)
        }
        Commands::Reset { yes } => {
            let (_, mut store) = load()?;
            commands::reset::run(&mut store, yes)
        }
        Commands::Config {
            seed_file,
            max_events_per_cell,
        } => commands::config::run(seed_file, max_events_per_cell),
        Commands::Generate { out, year, seed } => commands::generate::run(&out, year, seed),
    }
}

/// Load the config and open the event store it points at.
fn load() -> Result<(SportCalConfig, EventStore<FileStorage>)> {
    let config = SportCalConfig::load()?;
    let seed = config.seed()?;
    let store = EventStore::initialize(config.storage(), seed);
    Ok((config, store))
}
