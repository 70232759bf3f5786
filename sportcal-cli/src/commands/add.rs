use anyhow::Result;
use owo_colors::OwoColorize;
use sportcal_core::date::{parse_iso_date, parse_time};
use sportcal_core::sport::is_known;
use sportcal_core::{EventStore, NewEvent, Storage};

use crate::render::Render;

pub fn run<S: Storage>(
    store: &mut EventStore<S>,
    date: &str,
    time: &str,
    sport: &str,
    home: String,
    away: String,
    stage: Option<String>,
) -> Result<()> {
    let date = parse_iso_date(date)?;
    let time = parse_time(time)?;
    let sport = sport.trim().to_lowercase();

    if !is_known(&sport) {
        println!(
            "{}",
            format!("  '{}' is not a known sport, it will get a generic badge", sport).dimmed()
        );
    }

    let event = store.add(NewEvent {
        time: Some(time),
        sport: Some(sport),
        home_team: Some(home),
        away_team: Some(away),
        stage,
        ..NewEvent::on(date)
    });

    println!(
        "{}",
        format!("  Created: {} on {}", event.title, event.date).green()
    );
    println!("  {}", event.render());

    Ok(())
}
