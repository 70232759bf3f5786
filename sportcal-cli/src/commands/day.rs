use anyhow::Result;
use owo_colors::OwoColorize;
use sportcal_core::date::parse_iso_date;
use sportcal_core::{EventStore, Storage};

use crate::render::Render;

/// Every event on one day, without the month view's truncation.
pub fn run<S: Storage>(store: &EventStore<S>, date: &str) -> Result<()> {
    let date = parse_iso_date(date)?;
    let index = store.events_by_date();
    let events = index.get(date);

    println!("{}", date.format("%A, %B %-d %Y").bold());

    if events.is_empty() {
        println!("{}", "  No events".dimmed());
        return Ok(());
    }

    for event in events {
        println!("  {}", event.render());
    }

    Ok(())
}
