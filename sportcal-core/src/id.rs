//! Ids for manually added events.

use chrono::Utc;

use crate::event::Event;

/// Hands out millisecond-timestamp ids that strictly increase within a run,
/// even when two additions land in the same millisecond or the clock steps back.
///
/// Once the numeric range is used up, ids switch to a non-numeric
/// `"{u64::MAX}-{n}"` form, so they never repeat a numeric id.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
    spilled: u64,
}

impl IdGenerator {
    /// Start above every numeric id already present in `events`.
    pub fn after(events: &[Event]) -> Self {
        let last = events
            .iter()
            .filter_map(|e| e.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        IdGenerator { last, spilled: 0 }
    }

    pub fn next_id(&mut self) -> String {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.next_at(now)
    }

    fn next_at(&mut self, now_ms: u64) -> String {
        match self.last.checked_add(1) {
            Some(next) => {
                self.last = now_ms.max(next);
                self.last.to_string()
            }
            None => {
                self.spilled += 1;
                format!("{}-{}", u64::MAX, self.spilled)
            }
        }
    }
}
