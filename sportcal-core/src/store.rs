//! The event store: sole owner and mutator of the canonical collection.
//!
//! On construction the store restores the last persisted snapshot, falling
//! back to the normalized seed when there is none or it cannot be read.
//! Every mutation writes the full collection back under [`STORAGE_KEY`].
//! Persistence failures are logged and never reach the caller; the
//! in-memory collection stays authoritative for the session.

use std::collections::HashSet;

use log::{debug, info, warn};

use crate::error::{SportCalError, SportCalResult};
use crate::event::{Event, NewEvent};
use crate::filter::available_sports;
use crate::id::IdGenerator;
use crate::index::DateIndex;
use crate::normalize::{normalize_new, normalize_seed};
use crate::seed::RawSeed;
use crate::storage::Storage;

/// Key the snapshot is stored under.
pub const STORAGE_KEY: &str = "sports-calendar-events";

pub struct EventStore<S: Storage> {
    storage: S,
    seed: RawSeed,
    events: Vec<Event>,
    ids: IdGenerator,
}

impl<S: Storage> EventStore<S> {
    /// Restore the persisted collection, or start from `seed`.
    pub fn initialize(storage: S, seed: RawSeed) -> Self {
        let events = match restore(&storage) {
            Ok(Some(events)) => {
                debug!("Restored {} events from storage", events.len());
                events
            }
            Ok(None) => {
                info!("No saved events found, starting from seed");
                normalize_seed(&seed)
            }
            Err(e) => {
                warn!("Could not restore saved events, starting from seed: {}", e);
                normalize_seed(&seed)
            }
        };

        let ids = IdGenerator::after(&events);

        EventStore {
            storage,
            seed,
            events,
            ids,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Fresh date index over the current collection.
    pub fn events_by_date(&self) -> DateIndex<'_> {
        DateIndex::build(&self.events)
    }

    pub fn available_sports(&self) -> Vec<String> {
        available_sports(&self.events)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Append a new event with a fresh id and persist.
    pub fn add(&mut self, new: NewEvent) -> Event {
        let id = self.fresh_id();
        let event = normalize_new(id, new);
        debug!("Adding event {} ({}) on {}", event.id, event.title, event.date);

        self.events.push(event.clone());
        self.persist();
        event
    }

    /// Discard every change and go back to the normalized seed.
    pub fn reset(&mut self) -> &[Event] {
        self.events = normalize_seed(&self.seed);
        info!("Reset to {} seed events", self.events.len());

        self.persist();
        &self.events
    }

    /// Next generated id not already held by the collection.
    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.ids.next_id();
            if self.get_by_id(&id).is_none() {
                return id;
            }
            warn!("Generated id {} is already taken, trying another", id);
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self) {
        let result = serde_json::to_string_pretty(&self.events)
            .map_err(SportCalError::from)
            .and_then(|snapshot| self.storage.write(STORAGE_KEY, &snapshot));

        if let Err(e) = result {
            warn!("Could not save events, keeping them in memory only: {}", e);
        }
    }
}

fn restore<S: Storage>(storage: &S) -> SportCalResult<Option<Vec<Event>>> {
    let Some(content) = storage.read(STORAGE_KEY)? else {
        return Ok(None);
    };

    let events: Vec<Event> = serde_json::from_str(&content)?;

    let mut seen = HashSet::new();
    if let Some(dup) = events.iter().find(|e| !seen.insert(e.id.as_str())) {
        return Err(SportCalError::Storage(format!(
            "Snapshot contains duplicate event id '{}'",
            dup.id
        )));
    }

    Ok(Some(events))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventStatus;
    use crate::grid::build_grid;
    use crate::storage::MemoryStorage;
    use chrono::NaiveDate;

    const SEED: &str = r#"{"data": [
        {"dateVenue": "2025-10-15", "timeVenueUTC": "18:30:00", "sport": "football",
         "homeTeam": {"name": "Salzburg"}, "awayTeam": {"name": "Sturm"}, "status": "played",
         "result": {"homeGoals": 1, "awayGoals": 0, "winner": "Salzburg"}},
        {"dateVenue": "2025-10-23", "sport": "Hockey",
         "homeTeam": {"name": "KAC"}, "awayTeam": {"name": "Capitals"}, "status": "scheduled"}
    ]}"#;

    fn seed() -> RawSeed {
        RawSeed::from_json(SEED).unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    /// Fails every read and/or write.
    struct BrokenStorage {
        fail_reads: bool,
        writes: usize,
    }

    impl Storage for BrokenStorage {
        fn read(&self, _key: &str) -> SportCalResult<Option<String>> {
            if self.fail_reads {
                Err(SportCalError::Storage("disk on fire".to_string()))
            } else {
                Ok(None)
            }
        }

        fn write(&mut self, _key: &str, _value: &str) -> SportCalResult<()> {
            self.writes += 1;
            Err(SportCalError::Storage("quota exceeded".to_string()))
        }
    }

    fn a_vs_b() -> NewEvent {
        NewEvent {
            time: Some("19:00".to_string()),
            sport: Some("football".to_string()),
            home_team: Some("A".to_string()),
            away_team: Some("B".to_string()),
            ..NewEvent::on(d(2025, 11, 3))
        }
    }

    #[test]
    fn empty_storage_starts_from_seed() {
        let store = EventStore::initialize(MemoryStorage::new(), seed());

        assert_eq!(store.events(), normalize_seed(&seed()).as_slice());
        // initialization alone does not write
        assert!(store.storage().get(STORAGE_KEY).is_none());
    }

    #[test]
    fn corrupt_snapshot_falls_back_to_seed() {
        let storage = MemoryStorage::with_entry(STORAGE_KEY, "{not json");
        let store = EventStore::initialize(storage, seed());

        assert_eq!(store.events(), normalize_seed(&seed()).as_slice());
    }

    #[test]
    fn snapshot_with_bad_date_falls_back_to_seed() {
        let snapshot = r#"[{"id": "1", "date": "2025-02-31", "time": "00:00", "sport": "x",
            "homeTeam": "A", "awayTeam": "B", "title": "A vs B", "stage": null,
            "status": "scheduled", "result": null}]"#;
        let store = EventStore::initialize(MemoryStorage::with_entry(STORAGE_KEY, snapshot), seed());

        assert_eq!(store.events().len(), 2);
    }

    #[test]
    fn snapshot_with_duplicate_ids_falls_back_to_seed() {
        let mut events = normalize_seed(&seed());
        events[1].id = events[0].id.clone();
        let snapshot = serde_json::to_string(&events).unwrap();

        let store = EventStore::initialize(MemoryStorage::with_entry(STORAGE_KEY, &snapshot), seed());

        assert_eq!(store.events(), normalize_seed(&seed()).as_slice());
    }

    #[test]
    fn read_failure_falls_back_to_seed() {
        let storage = BrokenStorage {
            fail_reads: true,
            writes: 0,
        };
        let store = EventStore::initialize(storage, seed());

        assert_eq!(store.events().len(), 2);
    }

    #[test]
    fn added_event_is_retrievable_by_id() {
        let mut store = EventStore::initialize(MemoryStorage::new(), seed());

        let created = store.add(a_vs_b());
        let found = store.get_by_id(&created.id).unwrap();

        assert_eq!(found.title, "A vs B");
        assert_eq!(found.status, EventStatus::Scheduled);
        assert_eq!(found.date, d(2025, 11, 3));
        assert_eq!(found, &created);
    }

    #[test]
    fn add_assigns_unique_ids() {
        let mut store = EventStore::initialize(MemoryStorage::new(), seed());

        let first = store.add(a_vs_b());
        let second = store.add(a_vs_b());

        assert_ne!(first.id, second.id);
        let ids: HashSet<_> = store.events().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), store.events().len());
    }

    #[test]
    fn add_persists_full_snapshot() {
        let mut store = EventStore::initialize(MemoryStorage::new(), seed());
        let created = store.add(a_vs_b());

        let snapshot = store.storage().get(STORAGE_KEY).unwrap();
        let saved: Vec<Event> = serde_json::from_str(snapshot).unwrap();

        assert_eq!(saved.len(), 3);
        assert_eq!(saved.last(), Some(&created));
    }

    #[test]
    fn persisted_state_is_restored() {
        let mut store = EventStore::initialize(MemoryStorage::new(), seed());
        let created = store.add(a_vs_b());
        let storage = store.storage().clone();

        let mut restored = EventStore::initialize(storage, seed());

        assert_eq!(restored.events(), store.events());
        assert!(restored.get_by_id(&created.id).is_some());

        let next = restored.add(a_vs_b());
        assert!(next.id.parse::<u64>().unwrap() > created.id.parse::<u64>().unwrap());
    }

    #[test]
    fn write_failure_keeps_in_memory_state() {
        let storage = BrokenStorage {
            fail_reads: false,
            writes: 0,
        };
        let mut store = EventStore::initialize(storage, seed());

        let created = store.add(a_vs_b());

        assert_eq!(store.storage().writes, 1);
        assert_eq!(store.events().len(), 3);
        assert!(store.get_by_id(&created.id).is_some());
    }

    #[test]
    fn reset_restores_the_seed() {
        let mut store = EventStore::initialize(MemoryStorage::new(), seed());
        store.add(a_vs_b());
        store.add(a_vs_b());
        assert_eq!(store.events().len(), 4);

        let events = store.reset().to_vec();

        assert_eq!(events, normalize_seed(&seed()));
        let saved: Vec<Event> =
            serde_json::from_str(store.storage().get(STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(saved, events);
    }

    #[test]
    fn ids_stay_unique_after_restoring_the_largest_numeric_id() {
        let mut events = normalize_seed(&seed());
        events[0].id = u64::MAX.to_string();
        events.push(Event {
            id: format!("{}-1", u64::MAX),
            ..events[1].clone()
        });
        let snapshot = serde_json::to_string(&events).unwrap();
        let mut store =
            EventStore::initialize(MemoryStorage::with_entry(STORAGE_KEY, &snapshot), seed());
        assert_eq!(store.events().len(), 3);

        let first = store.add(a_vs_b());
        let second = store.add(a_vs_b());

        assert_ne!(first.id, second.id);
        let ids: HashSet<_> = store.events().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), store.events().len());
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = EventStore::initialize(MemoryStorage::new(), seed());
        assert!(store.get_by_id("nope").is_none());
    }

    #[test]
    fn seeded_event_appears_in_its_grid_cell_only() {
        let store = EventStore::initialize(MemoryStorage::new(), seed());
        let index = store.events_by_date();
        let grid = build_grid(d(2025, 10, 1), &index);

        let holding: Vec<_> = grid
            .cells()
            .filter(|c| c.events.iter().any(|e| e.sport == "football"))
            .map(|c| c.date)
            .collect();
        assert_eq!(holding, vec![d(2025, 10, 15)]);
    }

    #[test]
    fn derived_views_follow_mutations() {
        let mut store = EventStore::initialize(MemoryStorage::new(), seed());
        assert_eq!(store.available_sports(), vec!["football", "hockey"]);

        store.add(NewEvent {
            sport: Some("tennis".to_string()),
            ..NewEvent::on(d(2025, 10, 15))
        });

        assert_eq!(store.available_sports(), vec!["football", "hockey", "tennis"]);
        assert_eq!(store.events_by_date().get(d(2025, 10, 15)).len(), 2);
    }
}
