//! Month grid materialization.
//!
//! A grid always spans whole Monday-to-Sunday weeks: it starts on the Monday
//! on or before the 1st of the reference month and ends on the Sunday on or
//! after its last day. Days borrowed from the neighbouring months are marked
//! with `in_month = false`.
//!
//! Cells carry every event of their day. Truncating to a few badges per cell
//! is left to the renderer.

use chrono::{Datelike, Days, NaiveDate};

use crate::date::{month_end, month_start};
use crate::event::Event;
use crate::index::DateIndex;

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    pub in_month: bool,
    pub events: Vec<&'a Event>,
}

impl DayCell<'_> {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Seven cells, Monday first.
#[derive(Debug, Clone, PartialEq)]
pub struct Week<'a> {
    pub days: Vec<DayCell<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid<'a> {
    /// First day of the reference month
    pub month: NaiveDate,
    pub weeks: Vec<Week<'a>>,
}

impl<'a> MonthGrid<'a> {
    /// Every cell, week by week.
    pub fn cells(&self) -> impl Iterator<Item = &DayCell<'a>> {
        self.weeks.iter().flat_map(|w| w.days.iter())
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell<'a>> {
        self.cells().find(|c| c.date == date)
    }

    /// "October 2025"
    pub fn title(&self) -> String {
        self.month.format("%B %Y").to_string()
    }
}

/// Lay out the month containing `reference` with events from `index`.
pub fn build_grid<'a>(reference: NaiveDate, index: &DateIndex<'a>) -> MonthGrid<'a> {
    let first = month_start(reference);
    let last = month_end(reference);

    let lead = u64::from(first.weekday().num_days_from_monday());
    let trail = u64::from(6 - last.weekday().num_days_from_monday());
    let grid_start = first.checked_sub_days(Days::new(lead)).unwrap_or(first);
    let grid_end = last.checked_add_days(Days::new(trail)).unwrap_or(last);

    let cells: Vec<DayCell<'a>> = grid_start
        .iter_days()
        .take_while(|d| *d <= grid_end)
        .map(|date| DayCell {
            date,
            in_month: date.year() == first.year() && date.month() == first.month(),
            events: index.get(date).to_vec(),
        })
        .collect();

    let weeks = cells
        .chunks(7)
        .map(|days| Week {
            days: days.to_vec(),
        })
        .collect();

    MonthGrid {
        month: first,
        weeks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventStatus;
    use chrono::Weekday;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn event(id: &str, date: NaiveDate, sport: &str) -> Event {
        Event {
            id: id.to_string(),
            date,
            time: "18:00".to_string(),
            sport: sport.to_string(),
            home_team: "A".to_string(),
            away_team: "B".to_string(),
            title: "A vs B".to_string(),
            stage: None,
            status: EventStatus::Scheduled,
            result: None,
        }
    }

    fn assert_complete(reference: NaiveDate) {
        let index = DateIndex::default();
        let grid = build_grid(reference, &index);
        let cells: Vec<_> = grid.cells().collect();

        assert_eq!(cells.len() % 7, 0, "{reference}: partial week");
        assert!(grid.weeks.iter().all(|w| w.days.len() == 7));
        assert_eq!(cells.first().unwrap().date.weekday(), Weekday::Mon);
        assert_eq!(cells.last().unwrap().date.weekday(), Weekday::Sun);

        let first = month_start(reference);
        let last = month_end(reference);
        for day in first.iter_days().take_while(|d| *d <= last) {
            let matching: Vec<_> = cells.iter().filter(|c| c.date == day).collect();
            assert_eq!(matching.len(), 1, "{day} should appear once");
            assert!(matching[0].in_month);
        }

        let in_month = cells.iter().filter(|c| c.in_month).count();
        assert_eq!(in_month as u32, last.day());

        // chronological, no gaps
        for pair in cells.windows(2) {
            assert_eq!(pair[0].date.succ_opt().unwrap(), pair[1].date);
        }
    }

    #[test]
    fn grids_are_complete_weeks() {
        for year in [2024, 2025, 2026] {
            for month in 1..=12 {
                assert_complete(d(year, month, 1));
                assert_complete(d(year, month, 28));
            }
        }
    }

    #[test]
    fn october_2025_layout() {
        let index = DateIndex::default();
        let grid = build_grid(d(2025, 10, 1), &index);

        // Oct 1 2025 is a Wednesday, Oct 31 a Friday
        assert_eq!(grid.weeks.len(), 5);
        assert_eq!(grid.weeks[0].days[0].date, d(2025, 9, 29));
        assert!(!grid.weeks[0].days[0].in_month);
        assert_eq!(grid.weeks[4].days[6].date, d(2025, 11, 2));
        assert!(!grid.weeks[4].days[6].in_month);
        assert_eq!(grid.title(), "October 2025");
    }

    #[test]
    fn month_starting_on_monday_has_no_leading_days() {
        // September 2025 starts on a Monday
        let grid = build_grid(d(2025, 9, 10), &DateIndex::default());
        assert_eq!(grid.weeks[0].days[0].date, d(2025, 9, 1));
        assert!(grid.weeks[0].days[0].in_month);
    }

    #[test]
    fn event_lands_only_in_its_cell() {
        let events = vec![event("1", d(2025, 10, 15), "football")];
        let index = DateIndex::build(&events);
        let grid = build_grid(d(2025, 10, 1), &index);

        for cell in grid.cells() {
            if cell.date == d(2025, 10, 15) {
                assert_eq!(cell.events.len(), 1);
                assert_eq!(cell.events[0].id, "1");
            } else {
                assert!(cell.is_empty(), "{} should be empty", cell.date);
            }
        }
    }

    #[test]
    fn borrowed_days_show_their_events() {
        let events = vec![event("1", d(2025, 11, 1), "tennis")];
        let index = DateIndex::build(&events);
        let grid = build_grid(d(2025, 10, 20), &index);

        let cell = grid.cell(d(2025, 11, 1)).unwrap();
        assert!(!cell.in_month);
        assert_eq!(cell.events.len(), 1);
    }

    #[test]
    fn cells_expose_the_full_event_list() {
        let date = d(2025, 10, 15);
        let events: Vec<_> = (1..=6).map(|i| event(&i.to_string(), date, "football")).collect();
        let index = DateIndex::build(&events);
        let grid = build_grid(date, &index);

        assert_eq!(grid.cell(date).unwrap().events.len(), 6);
    }

    #[test]
    fn building_twice_gives_the_same_grid() {
        let events = vec![
            event("1", d(2025, 10, 15), "football"),
            event("2", d(2025, 10, 15), "tennis"),
            event("3", d(2025, 10, 30), "hockey"),
        ];
        let index = DateIndex::build(&events);

        assert_eq!(build_grid(d(2025, 10, 7), &index), build_grid(d(2025, 10, 7), &index));
    }
}
