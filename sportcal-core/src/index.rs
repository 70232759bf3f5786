//! Date index: events grouped by calendar day.
//!
//! The index borrows from the store's current collection and is rebuilt
//! from scratch whenever the caller needs it. There is no way to mutate it
//! independently of the store.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::event::Event;

/// Events bucketed by date, in source order within each bucket.
/// Dates without events have no bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateIndex<'a> {
    buckets: BTreeMap<NaiveDate, Vec<&'a Event>>,
}

impl<'a> DateIndex<'a> {
    pub fn build(events: &'a [Event]) -> Self {
        let mut buckets: BTreeMap<NaiveDate, Vec<&'a Event>> = BTreeMap::new();
        for event in events {
            buckets.entry(event.date).or_default().push(event);
        }
        DateIndex { buckets }
    }

    /// Events on `date`; empty when the date has no bucket.
    pub fn get(&self, date: NaiveDate) -> &[&'a Event] {
        self.buckets.get(&date).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.buckets.contains_key(&date)
    }

    /// Dates that have at least one event, ascending.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.buckets.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[&'a Event])> + '_ {
        self.buckets.iter().map(|(d, events)| (*d, events.as_slice()))
    }

    /// Number of date buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of indexed events across all buckets.
    pub fn event_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// All events, bucket by bucket.
    pub fn flatten(&self) -> Vec<&'a Event> {
        self.buckets.values().flatten().copied().collect()
    }

    /// New index keeping only events that satisfy `keep`; buckets that end
    /// up empty are dropped.
    pub(crate) fn retain_events<F>(&self, keep: F) -> Self
    where
        F: Fn(&Event) -> bool,
    {
        let buckets = self
            .buckets
            .iter()
            .filter_map(|(date, events)| {
                let kept: Vec<&'a Event> = events.iter().copied().filter(|e| keep(*e)).collect();
                (!kept.is_empty()).then_some((*date, kept))
            })
            .collect();
        DateIndex { buckets }
    }
}
