//! Sport filtering over the date index.

use std::collections::BTreeSet;

use crate::event::Event;
use crate::index::DateIndex;

/// Distinct sport tags across `events`, ascending.
pub fn available_sports(events: &[Event]) -> Vec<String> {
    events
        .iter()
        .map(|e| e.sport.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Keep only events whose sport is selected. An empty selection means
/// "show all" and returns the index as is.
pub fn filter_by_sport<'a>(index: &DateIndex<'a>, selected: &BTreeSet<String>) -> DateIndex<'a> {
    if selected.is_empty() {
        return index.clone();
    }
    index.retain_events(|e| selected.contains(&e.sport))
}

/// The set of sports a viewer has toggled on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SportSelection {
    selected: BTreeSet<String>,
}

impl SportSelection {
    pub fn new<I, S>(sports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        SportSelection {
            selected: sports.into_iter().map(|s| s.as_ref().to_lowercase()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, sport: &str) -> bool {
        self.selected.contains(sport)
    }

    pub fn sports(&self) -> &BTreeSet<String> {
        &self.selected
    }

    /// Flip `sport` on or off. Returns whether it is now selected.
    pub fn toggle(&mut self, sport: &str) -> bool {
        let sport = sport.to_lowercase();
        if self.selected.remove(&sport) {
            false
        } else {
            self.selected.insert(sport);
            true
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Drop selections that no longer appear in `available`.
    /// Call whenever the event collection changes.
    pub fn reconcile(&mut self, available: &[String]) {
        self.selected.retain(|s| available.contains(s));
    }

    pub fn apply<'a>(&self, index: &DateIndex<'a>) -> DateIndex<'a> {
        filter_by_sport(index, &self.selected)
    }
}
