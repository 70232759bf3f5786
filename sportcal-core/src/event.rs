//! Canonical event types.
//!
//! Every raw record and every manual addition ends up as an [`Event`].
//! The index, the sport filter and the month grid only ever see this shape.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One sports fixture, scheduled or played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub date: NaiveDate,
    /// Wall-clock `HH:MM`, advisory only
    pub time: String,
    /// Lower-cased sport tag (open set)
    pub sport: String,
    pub home_team: String,
    pub away_team: String,
    pub title: String,
    /// Competition phase, e.g. "Quarter Finals"
    pub stage: Option<String>,
    pub status: EventStatus,
    pub result: Option<MatchResult>,
}

impl Event {
    pub fn is_played(&self) -> bool {
        self.status == EventStatus::Played
    }

    /// Final score as "2 - 1", only for played events that carry a result.
    pub fn score(&self) -> Option<String> {
        if !self.is_played() {
            return None;
        }
        self.result
            .as_ref()
            .map(|r| format!("{} - {}", r.home_goals, r.away_goals))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Event lifecycle status.
///
/// Serialized as a lower-case string. Unrecognized values are kept
/// verbatim in `Other` so snapshots round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventStatus {
    #[default]
    Scheduled,
    Played,
    Other(String),
}

impl EventStatus {
    pub fn as_str(&self) -> &str {
        match self {
            EventStatus::Scheduled => "scheduled",
            EventStatus::Played => "played",
            EventStatus::Other(s) => s,
        }
    }
}

impl From<String> for EventStatus {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "scheduled" => EventStatus::Scheduled,
            "played" => EventStatus::Played,
            _ => EventStatus::Other(s),
        }
    }
}

impl From<&str> for EventStatus {
    fn from(s: &str) -> Self {
        EventStatus::from(s.to_string())
    }
}

impl From<EventStatus> for String {
    fn from(status: EventStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Final score of a played event. `winner` is `None` on a draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub home_goals: i64,
    pub away_goals: i64,
    pub winner: Option<String>,
}

/// Caller-supplied fields for a manual addition.
///
/// Only the date is required. Everything else is merged over the same
/// defaults the seed normalizer uses, and `status` defaults to scheduled.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub date: NaiveDate,
    pub time: Option<String>,
    pub sport: Option<String>,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    /// Explicit title; derived from the teams when absent
    pub title: Option<String>,
    pub stage: Option<String>,
    pub status: Option<EventStatus>,
    pub result: Option<MatchResult>,
}

impl NewEvent {
    /// An otherwise empty addition on `date`.
    pub fn on(date: NaiveDate) -> Self {
        NewEvent {
            date,
            time: None,
            sport: None,
            home_team: None,
            away_team: None,
            title: None,
            stage: None,
            status: None,
            result: None,
        }
    }
}
