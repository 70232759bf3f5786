//! Raw seed records.
//!
//! The seed is a loosely-typed JSON document (`{ "data": [...] }`) where
//! every field may be missing. It is only ever read through
//! [`crate::normalize`], which turns each record into a canonical event.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{SportCalError, SportCalResult};

static BUNDLED_SEED: &str = include_str!("../data/seed.json");

/// The whole seed document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSeed {
    #[serde(default, deserialize_with = "lenient_records")]
    pub data: Option<Vec<RawRecord>>,
}

impl RawSeed {
    pub fn from_json(content: &str) -> SportCalResult<Self> {
        serde_json::from_str(content).map_err(|e| SportCalError::Seed(e.to_string()))
    }

    pub fn load(path: &Path) -> SportCalResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
            .map_err(|e| SportCalError::Seed(format!("{}: {}", path.display(), e)))
    }

    /// The dataset shipped with the crate.
    pub fn bundled() -> SportCalResult<Self> {
        Self::from_json(BUNDLED_SEED)
    }

    /// Records in seed order; an absent `data` array reads as empty.
    pub fn records(&self) -> &[RawRecord] {
        self.data.as_deref().unwrap_or_default()
    }
}

/// One fixture as it appears in the seed file.
///
/// A field holding the wrong JSON type reads as missing, so one sloppy
/// field never costs the rest of the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRecord {
    /// `YYYY-MM-DD`
    #[serde(deserialize_with = "lenient")]
    pub date_venue: Option<String>,
    /// `HH:MM:SS`
    #[serde(rename = "timeVenueUTC", deserialize_with = "lenient")]
    pub time_venue_utc: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub sport: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub home_team: Option<RawNamed>,
    #[serde(deserialize_with = "lenient")]
    pub away_team: Option<RawNamed>,
    #[serde(deserialize_with = "lenient")]
    pub stage: Option<RawNamed>,
    #[serde(deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub result: Option<RawResult>,
    #[serde(deserialize_with = "lenient")]
    pub origin_competition_name: Option<String>,
}

/// Nested `{ "name": ... }` object used for teams and stages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawNamed {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawResult {
    #[serde(deserialize_with = "lenient")]
    pub home_goals: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub away_goals: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub winner: Option<String>,
}

/// Any JSON value; `None` when it does not fit `T`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// The `data` array, where an entry that is not an object at all still
/// counts as one (empty) record.
fn lenient_records<'de, D>(deserializer: D) -> Result<Option<Vec<RawRecord>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(entries) = value else {
        return Ok(None);
    };

    let records = entries
        .into_iter()
        .map(|entry| serde_json::from_value(entry).unwrap_or_default())
        .collect();
    Ok(Some(records))
}
