//! Colored terminal rendering of grids and events.

use chrono::{Datelike, NaiveDate};
use daymark_core::event::Event;
use daymark_core::grid::{is_today_at, is_weekend, MonthGrid, GRID_COLS, WEEKDAY_LABELS};
use daymark_core::store::EventStore;
use owo_colors::OwoColorize;

const MONTH_WIDTH: usize = GRID_COLS * 3 - 1;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let bullet = match self.rgb() {
            Some((r, g, b)) => "●".truecolor(r, g, b).to_string(),
            None => "●".to_string(),
        };

        if self.description.is_empty() {
            format!("{} {}", bullet, self.title)
        } else {
            format!("{} {} {}", bullet, self.title, self.description.dimmed())
        }
    }
}

/// Today is reversed, days with notes take the first note's color,
/// weekends are dimmed.
fn render_day(date: NaiveDate, store: &EventStore, today: NaiveDate) -> String {
    let label = format!("{:>2}", date.day());
    let first_event = store.events_on(date).into_iter().next();

    if is_today_at(date, today) {
        return label.bold().reversed().to_string();
    }

    if let Some(event) = first_event {
        return match event.rgb() {
            Some((r, g, b)) => label.truecolor(r, g, b).bold().to_string(),
            None => label.bold().underline().to_string(),
        };
    }

    if is_weekend(date) {
        return label.dimmed().to_string();
    }

    label
}

/// Lines of a month grid; every line is `MONTH_WIDTH` columns wide on screen.
pub fn month_lines(grid: &MonthGrid, store: &EventStore, today: NaiveDate) -> Vec<String> {
    let mut lines = Vec::new();

    let title = format!("{:^width$}", format!("{} {}", grid.name(), grid.year), width = MONTH_WIDTH);
    lines.push(title.bold().to_string());
    lines.push(WEEKDAY_LABELS.join(" ").dimmed().to_string());

    for week in grid.weeks() {
        let row = week
            .iter()
            .map(|day| match day {
                Some(date) => render_day(*date, store, today),
                None => "  ".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(row);
    }

    lines
}

/// Month grid followed by the month's notes.
pub fn render_month(grid: &MonthGrid, store: &EventStore, today: NaiveDate) -> String {
    let mut lines = month_lines(grid, store, today);

    let events = store.events_in_month(grid.year, grid.month);
    if !events.is_empty() {
        lines.push(String::new());
    }

    let mut current_date: Option<NaiveDate> = None;
    for day in &grid.days {
        for event in store.events_on(*day) {
            if current_date != Some(*day) {
                lines.push(day.format("%a %b %-d").bold().to_string());
                current_date = Some(*day);
            }
            lines.push(format!("  {}", event.render()));
        }
    }

    lines.join("\n")
}

/// Twelve months in rows of three.
pub fn render_year(grids: &[MonthGrid], store: &EventStore, today: NaiveDate) -> String {
    let mut out = Vec::new();

    for chunk in grids.chunks(3) {
        let blocks: Vec<Vec<String>> = chunk.iter().map(|g| month_lines(g, store, today)).collect();
        let height = blocks.iter().map(Vec::len).max().unwrap_or(0);

        for i in 0..height {
            // Every block line is MONTH_WIDTH columns on screen
            let line = blocks
                .iter()
                .map(|block| block.get(i).cloned().unwrap_or_else(|| " ".repeat(MONTH_WIDTH)))
                .collect::<Vec<_>>()
                .join("   ");
            out.push(line);
        }
        out.push(String::new());
    }

    let noted: usize = grids
        .iter()
        .map(|g| store.events_in_month(g.year, g.month).len())
        .sum();
    if noted > 0 {
        out.push(format!("{} {} this year", noted, pluralize("note", noted)).dimmed().to_string());
    }

    out.join("\n")
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
