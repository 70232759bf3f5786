use std::path::PathBuf;

use anyhow::Result;
use owo_colors::OwoColorize;
use sportcal_core::config::SportCalConfig;

/// Show config paths, optionally updating settings first.
pub fn run(seed_file: Option<PathBuf>, max_events_per_cell: Option<usize>) -> Result<()> {
    let config_path = SportCalConfig::config_path()?;
    let mut config = SportCalConfig::load()?;

    if seed_file.is_some() || max_events_per_cell.is_some() {
        if let Some(path) = seed_file {
            config.seed_file = Some(path);
        }
        if let Some(max) = max_events_per_cell {
            config.max_events_per_cell = max;
        }
        config.save()?;
        println!("{}", "  Config updated".green());
    }

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Data:    {}", config.data_path().display());
    match &config.seed_file {
        Some(path) => println!("  Seed:    {}", path.display()),
        None => println!("  Seed:    {}", "(bundled)".dimmed()),
    }
    println!("{}", "Month view".bold());
    println!("  Events per day:  {}", config.max_events_per_cell);

    Ok(())
}
