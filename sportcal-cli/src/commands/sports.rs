use anyhow::Result;
use owo_colors::OwoColorize;
use sportcal_core::sport::sport_info;
use sportcal_core::{EventStore, Storage};

pub fn run<S: Storage>(store: &EventStore<S>) -> Result<()> {
    let sports = store.available_sports();

    if sports.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for sport in sports {
        let info = sport_info(&sport);
        let count = store.events().iter().filter(|e| e.sport == sport).count();
        println!(
            "{} {:<12} {}",
            info.symbol,
            info.name,
            format!("{} events ({})", count, sport).dimmed()
        );
    }

    Ok(())
}
