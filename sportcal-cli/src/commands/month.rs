use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use sportcal_core::{EventStore, SportSelection, Storage, build_grid};

use crate::render::render_grid;

pub fn run<S: Storage>(
    store: &EventStore<S>,
    reference: NaiveDate,
    sports: &[String],
    max_per_cell: usize,
) -> Result<()> {
    let requested = SportSelection::new(sports);

    let mut selection = requested.clone();
    selection.reconcile(&store.available_sports());

    for sport in requested.sports() {
        if !selection.contains(sport) {
            eprintln!("{}", format!("No events for sport '{}'", sport).yellow());
        }
    }

    // Every requested sport was unknown: an empty selection would mean "all"
    if !requested.is_empty() && selection.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    let index = store.events_by_date();
    let filtered = selection.apply(&index);
    let grid = build_grid(reference, &filtered);

    println!("{}", render_grid(&grid, max_per_cell));

    Ok(())
}
