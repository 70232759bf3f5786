//! Raw record normalization.
//!
//! Normalization is total: every raw record yields exactly one [`Event`].
//! Missing fields fall back to fixed defaults and nothing here can fail.

use chrono::NaiveDate;
use log::warn;

use crate::date::parse_iso_date;
use crate::event::{Event, EventStatus, MatchResult, NewEvent};
use crate::seed::{RawNamed, RawRecord, RawResult, RawSeed};

pub const DEFAULT_TIME: &str = "00:00";
pub const DEFAULT_SPORT: &str = "unknown";
pub const UNKNOWN_TEAM: &str = "TBA";
pub const UNTITLED: &str = "Untitled Event";

/// Normalize a whole seed. Ids are 1-based seed positions.
pub fn normalize_seed(seed: &RawSeed) -> Vec<Event> {
    normalize(seed.records())
}

pub fn normalize(records: &[RawRecord]) -> Vec<Event> {
    records
        .iter()
        .enumerate()
        .map(|(i, raw)| normalize_record((i + 1).to_string(), raw))
        .collect()
}

pub fn normalize_record(id: String, raw: &RawRecord) -> Event {
    let date = match raw.date_venue.as_deref() {
        Some(s) => parse_iso_date(s).unwrap_or_else(|_| {
            warn!("Event {}: unparseable date '{}', using {}", id, s, fallback_date());
            fallback_date()
        }),
        None => {
            warn!("Event {}: missing date, using {}", id, fallback_date());
            fallback_date()
        }
    };

    let home = name_of(raw.home_team.as_ref());
    let away = name_of(raw.away_team.as_ref());

    Event {
        date,
        time: clip_time(raw.time_venue_utc.as_deref()),
        sport: sport_tag(raw.sport.as_deref()),
        home_team: home.unwrap_or(UNKNOWN_TEAM).to_string(),
        away_team: away.unwrap_or(UNKNOWN_TEAM).to_string(),
        title: derive_title(home, away, raw.origin_competition_name.as_deref()),
        stage: name_of(raw.stage.as_ref()).map(String::from),
        status: raw
            .status
            .as_deref()
            .map(EventStatus::from)
            .unwrap_or_default(),
        result: raw.result.as_ref().map(to_match_result),
        id,
    }
}

/// Merge a manual addition over the normalizer defaults.
pub fn normalize_new(id: String, new: NewEvent) -> Event {
    let home = non_empty(new.home_team.as_deref());
    let away = non_empty(new.away_team.as_deref());

    let title = match non_empty(new.title.as_deref()) {
        Some(t) => t.to_string(),
        None => derive_title(home, away, None),
    };

    Event {
        date: new.date,
        time: clip_time(new.time.as_deref()),
        sport: sport_tag(new.sport.as_deref()),
        home_team: home.unwrap_or(UNKNOWN_TEAM).to_string(),
        away_team: away.unwrap_or(UNKNOWN_TEAM).to_string(),
        title,
        stage: non_empty(new.stage.as_deref()).map(String::from),
        status: new.status.unwrap_or_default(),
        result: new.result,
        id,
    }
}

/// "{home} vs {away}" when either side is named, else the competition name.
pub fn derive_title(home: Option<&str>, away: Option<&str>, competition: Option<&str>) -> String {
    if home.is_some() || away.is_some() {
        return format!("{} vs {}", home.unwrap_or(UNKNOWN_TEAM), away.unwrap_or(""))
            .trim()
            .to_string();
    }
    non_empty(competition).unwrap_or(UNTITLED).to_string()
}

/// Records without a usable date land on the Unix epoch.
fn fallback_date() -> NaiveDate {
    NaiveDate::default()
}

/// First five characters of a time-of-day string ("18:30:00" -> "18:30").
fn clip_time(raw: Option<&str>) -> String {
    match present(raw) {
        Some(t) => t.chars().take(5).collect(),
        None => DEFAULT_TIME.to_string(),
    }
}

fn sport_tag(raw: Option<&str>) -> String {
    present(raw).unwrap_or(DEFAULT_SPORT).to_lowercase()
}

fn name_of(named: Option<&RawNamed>) -> Option<&str> {
    non_empty(named.and_then(|n| n.name.as_deref()))
}

/// Absent or exactly `""`. Whitespace counts as a value.
fn present(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// Absent, empty or whitespace-only.
fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

fn to_match_result(raw: &RawResult) -> MatchResult {
    MatchResult {
        home_goals: raw.home_goals.unwrap_or(0),
        away_goals: raw.away_goals.unwrap_or(0),
        winner: raw.winner.clone(),
    }
}
