//! TUI rendering for sportcal types.
//!
//! Extension traits that add colored terminal output to sportcal-core types
//! using owo_colors. Truncating a day to a few events is decided here, not
//! in the grid builder.

use chrono::Datelike;
use owo_colors::OwoColorize;
use sportcal_core::date::WEEKDAY_LABELS;
use sportcal_core::sport::sport_info;
use sportcal_core::{DayCell, Event, MonthGrid};

/// Width of one day column, separator included.
const CELL_WIDTH: usize = 15;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    /// One line: symbol, time, title and stage
    fn render(&self) -> String {
        let info = sport_info(&self.sport);
        let stage = self
            .stage
            .as_deref()
            .map(|s| format!(" ({})", s))
            .unwrap_or_default();
        format!(
            "{} {} {}{} {}",
            info.symbol,
            self.time.dimmed(),
            paint(&self.title, info.color),
            stage.dimmed(),
            format!("#{}", self.id).dimmed()
        )
    }
}

/// Multi-line detail view of one event.
pub fn render_detail(event: &Event) -> String {
    let info = sport_info(&event.sport);
    let mut lines = vec![
        event.title.bold().to_string(),
        format!("  {} {}", "date:".dimmed(), event.date.format("%A, %B %-d %Y")),
        format!("  {} {}", "time:".dimmed(), event.time),
        format!("  {} {} {}", "sport:".dimmed(), info.symbol, paint(&info.name, info.color)),
        format!("  {} {} vs {}", "teams:".dimmed(), event.home_team, event.away_team),
    ];

    if let Some(stage) = &event.stage {
        lines.push(format!("  {} {}", "stage:".dimmed(), stage));
    }

    lines.push(format!("  {} {}", "status:".dimmed(), event.status));

    if let Some(score) = event.score() {
        let winner = event
            .result
            .as_ref()
            .and_then(|r| r.winner.as_deref())
            .unwrap_or("draw");
        lines.push(format!("  {} {} ({})", "result:".dimmed(), score.bold(), winner));
    }

    lines.push(format!("  {} {}", "id:".dimmed(), event.id).dimmed().to_string());
    lines.join("\n")
}

/// Render a month grid, showing at most `max_per_cell` events per day and
/// a "+N" line for the rest.
pub fn render_grid(grid: &MonthGrid, max_per_cell: usize) -> String {
    let mut lines = vec![grid.title().bold().to_string()];

    let header: String = WEEKDAY_LABELS
        .iter()
        .map(|label| pad(label, CELL_WIDTH))
        .collect();
    lines.push(header.dimmed().to_string());

    for week in &grid.weeks {
        lines.push("─".repeat(CELL_WIDTH * 7).dimmed().to_string());

        let numbers: String = week.days.iter().map(render_day_number).collect();
        lines.push(numbers);

        let visible_rows = week
            .days
            .iter()
            .map(|d| d.events.len().min(max_per_cell))
            .max()
            .unwrap_or(0);

        for row in 0..visible_rows {
            let line: String = week
                .days
                .iter()
                .map(|day| match day.events.get(row) {
                    Some(event) => render_badge(event, day.in_month),
                    None => pad("", CELL_WIDTH),
                })
                .collect();
            lines.push(line);
        }

        if week.days.iter().any(|d| overflow(d, max_per_cell) > 0) {
            let line: String = week
                .days
                .iter()
                .map(|day| match overflow(day, max_per_cell) {
                    0 => pad("", CELL_WIDTH),
                    n => pad(&format!("+{}", n), CELL_WIDTH).dimmed().to_string(),
                })
                .collect();
            lines.push(line);
        }
    }

    lines.join("\n")
}

fn overflow(day: &DayCell, max_per_cell: usize) -> usize {
    day.events.len().saturating_sub(max_per_cell)
}

fn render_day_number(day: &DayCell) -> String {
    let text = pad(&day.date.day().to_string(), CELL_WIDTH);
    if day.in_month {
        text.bold().to_string()
    } else {
        text.dimmed().to_string()
    }
}

fn render_badge(event: &Event, in_month: bool) -> String {
    let text = pad(&truncate(&event.title, CELL_WIDTH - 2), CELL_WIDTH);
    if in_month {
        paint(&text, sport_info(&event.sport).color)
    } else {
        text.dimmed().to_string()
    }
}

/// Color `text` with a "#RRGGBB" hex color; unparseable colors leave it plain.
fn paint(text: &str, hex: &str) -> String {
    match hex_rgb(hex) {
        Some((r, g, b)) => text.truecolor(r, g, b).to_string(),
        None => text.to_string(),
    }
}

fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Cut `text` to at most `width` characters, marking the cut with "…".
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Left-align `text` in `width` columns (by character count).
fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sportcal_core::{DateIndex, EventStatus, build_grid};

    fn event(id: &str, date: NaiveDate, title: &str) -> Event {
        Event {
            id: id.to_string(),
            date,
            time: "20:00".to_string(),
            sport: "football".to_string(),
            home_team: "A".to_string(),
            away_team: "B".to_string(),
            title: title.to_string(),
            stage: None,
            status: EventStatus::Scheduled,
            result: None,
        }
    }

    #[test]
    fn truncates_long_titles() {
        assert_eq!(truncate("Real Madrid vs Barcelona", 10), "Real Madr…");
        assert_eq!(truncate("A vs B", 10), "A vs B");
    }

    #[test]
    fn pads_by_characters() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("é", 2).chars().count(), 2);
        assert_eq!(pad("toolong", 3), "toolong");
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(hex_rgb("#10B981"), Some((0x10, 0xB9, 0x81)));
        assert_eq!(hex_rgb("10B981"), None);
        assert_eq!(hex_rgb("#XYZ123"), None);
    }

    #[test]
    fn grid_shows_overflow_counter() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
        let events: Vec<_> = (1..=5)
            .map(|i| event(&i.to_string(), date, &format!("Match {}", i)))
            .collect();
        let index = DateIndex::build(&events);
        let grid = build_grid(date, &index);

        let output = render_grid(&grid, 3);

        assert!(output.contains("October 2025"));
        assert!(output.contains("Match 3"));
        assert!(!output.contains("Match 4"));
        assert!(output.contains("+2"));
    }

    #[test]
    fn grid_without_overflow_has_no_counter() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
        let events = vec![event("1", date, "Only match")];
        let index = DateIndex::build(&events);

        let output = render_grid(&build_grid(date, &index), 3);

        assert!(output.contains("Only match"));
        assert!(!output.contains('+'));
    }

    #[test]
    fn detail_includes_score_for_played_events() {
        let mut played = event("9", NaiveDate::from_ymd_opt(2025, 10, 4).unwrap(), "A vs B");
        played.status = EventStatus::Played;
        played.result = Some(sportcal_core::MatchResult {
            home_goals: 1,
            away_goals: 1,
            winner: None,
        });

        let detail = render_detail(&played);

        assert!(detail.contains("1 - 1"));
        assert!(detail.contains("draw"));
        assert!(detail.contains("Saturday, October 4 2025"));
    }
}
