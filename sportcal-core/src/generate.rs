//! Synthetic fixtures for demos and load testing.
//!
//! Produces a few dozen seed records per month for October to December of
//! a given year. October fixtures before the 27th are already played and
//! carry a random score. The output is itself a seed document, so it can
//! be pointed at by `seed_file` and loaded on reset.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rand::Rng;
use serde::Serialize;

use crate::date::month_end;
use crate::event::EventStatus;
use crate::seed::{RawNamed, RawRecord, RawResult};

const SPORTS: [&str; 5] = ["football", "basketball", "hockey", "volleyball", "tennis"];

const FOOTBALL: &[(&str, &str)] = &[
    ("Real Madrid", "Barcelona"),
    ("Manchester United", "Liverpool"),
    ("Bayern Munich", "Borussia Dortmund"),
    ("PSG", "Lyon"),
    ("Juventus", "AC Milan"),
    ("Ajax", "Feyenoord"),
];
const BASKETBALL: &[(&str, &str)] = &[
    ("Lakers", "Celtics"),
    ("Warriors", "Nets"),
    ("Bulls", "Heat"),
    ("Mavericks", "Suns"),
    ("Bucks", "Knicks"),
    ("Clippers", "Nuggets"),
];
const HOCKEY: &[(&str, &str)] = &[
    ("Rangers", "Bruins"),
    ("Maple Leafs", "Canadiens"),
    ("Penguins", "Capitals"),
    ("Blackhawks", "Red Wings"),
    ("Avalanche", "Wild"),
    ("Flames", "Oilers"),
];
const VOLLEYBALL: &[(&str, &str)] = &[
    ("Zenit Kazan", "Lube Civitanova"),
    ("Perugia", "Modena"),
    ("Fenerbahce", "Vakifbank"),
    ("Berlin", "Friedrichshafen"),
];
const TENNIS: &[(&str, &str)] = &[
    ("Djokovic", "Nadal"),
    ("Federer", "Murray"),
    ("Alcaraz", "Sinner"),
    ("Medvedev", "Zverev"),
];

const STAGES: [&str; 6] = [
    "Group Stage",
    "Round of 16",
    "Quarter Finals",
    "Semi Finals",
    "Finals",
    "Regular Season",
];

const MONTHS: [u32; 3] = [10, 11, 12];
const PLAYED_BEFORE_DAY: u32 = 27;

/// Generator output as written to disk: a seed document with a little
/// provenance next to `data`.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedSeed {
    pub data: Vec<RawRecord>,
    pub generated: DateTime<Utc>,
    pub count: usize,
}

fn named(name: &str) -> Option<RawNamed> {
    Some(RawNamed {
        name: Some(name.to_string()),
    })
}

fn teams_for(sport: &str) -> &'static [(&'static str, &'static str)] {
    match sport {
        "football" => FOOTBALL,
        "basketball" => BASKETBALL,
        "hockey" => HOCKEY,
        "volleyball" => VOLLEYBALL,
        _ => TENNIS,
    }
}

pub fn generate_events<R: Rng + ?Sized>(rng: &mut R, year: i32) -> GeneratedSeed {
    let mut data = Vec::new();

    for month in MONTHS {
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            continue;
        };
        let days = month_end(first).day();
        let per_month = 20 + rng.random_range(0..11);

        for _ in 0..per_month {
            let day = rng.random_range(1..=days);
            let sport = SPORTS[rng.random_range(0..SPORTS.len())];
            let pairs = teams_for(sport);
            let (home, away) = pairs[rng.random_range(0..pairs.len())];
            let stage = STAGES[rng.random_range(0..STAGES.len())];

            let played = month == MONTHS[0] && day < PLAYED_BEFORE_DAY;
            let (home_goals, away_goals): (i64, i64) = if played {
                (rng.random_range(0..5), rng.random_range(0..5))
            } else {
                (0, 0)
            };
            let winner = match home_goals.cmp(&away_goals) {
                _ if !played => None,
                std::cmp::Ordering::Greater => Some(home.to_string()),
                std::cmp::Ordering::Less => Some(away.to_string()),
                std::cmp::Ordering::Equal => None,
            };
            let status = if played {
                EventStatus::Played
            } else {
                EventStatus::Scheduled
            };

            let minutes = if rng.random_bool(0.5) { "00" } else { "30" };
            let date = first.with_day(day).unwrap_or(first);

            data.push(RawRecord {
                date_venue: Some(date.format("%Y-%m-%d").to_string()),
                time_venue_utc: Some(format!("{}:{}:00", 10 + rng.random_range(0..10), minutes)),
                sport: Some(sport.to_string()),
                home_team: named(home),
                away_team: named(away),
                stage: named(stage),
                status: Some(status.into()),
                result: Some(RawResult {
                    home_goals: Some(home_goals),
                    away_goals: Some(away_goals),
                    winner,
                }),
                origin_competition_name: None,
            });
        }
    }

    // ISO dates order the same as strings.
    data.sort_by(|a, b| a.date_venue.cmp(&b.date_venue));

    GeneratedSeed {
        count: data.len(),
        data,
        generated: Utc::now(),
    }
}
