//! Core of the sportcal sports calendar.
//!
//! Raw seed records are normalized into canonical [`Event`]s held by an
//! [`EventStore`]. Everything a viewer shows is derived from the store's
//! current collection on demand:
//! - [`DateIndex`] groups events by day
//! - [`filter_by_sport`] narrows the index to selected sports
//! - [`build_grid`] lays a month out as whole Monday-first weeks

pub mod config;
pub mod date;
pub mod error;
pub mod event;
pub mod filter;
pub mod generate;
pub mod grid;
pub mod id;
pub mod index;
pub mod normalize;
pub mod seed;
pub mod sport;
pub mod storage;
pub mod store;

pub use error::{SportCalError, SportCalResult};
pub use event::{Event, EventStatus, MatchResult, NewEvent};
pub use filter::{SportSelection, available_sports, filter_by_sport};
pub use grid::{DayCell, MonthGrid, Week, build_grid};
pub use index::DateIndex;
pub use normalize::{normalize, normalize_seed};
pub use seed::{RawRecord, RawSeed};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{EventStore, STORAGE_KEY};
