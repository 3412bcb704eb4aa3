//! Monochrome text layout for printing.

use chrono::{Datelike, NaiveDate};

use crate::event::Event;
use crate::grid::{GRID_COLS, MonthGrid, WEEKDAY_LABELS, is_today_at};
use crate::store::events_on;

/// Width of one day cell, including the separating space.
const CELL_WIDTH: usize = 4;
const MONTH_WIDTH: usize = GRID_COLS * CELL_WIDTH - 1;
const YEAR_COLUMNS: usize = 3;

/// Day cell: number plus a marker (`*` has events, `<` today).
fn cell(date: NaiveDate, events: &[Event], today: NaiveDate) -> String {
    let marker = if is_today_at(date, today) {
        '<'
    } else if events.iter().any(|e| e.date == date) {
        '*'
    } else {
        ' '
    };
    format!("{:>2}{}", date.day(), marker)
}

/// Grid lines of one month: title, weekday header, then one line per week.
fn month_lines(grid: &MonthGrid, events: &[Event], today: NaiveDate) -> Vec<String> {
    let mut lines = Vec::new();

    let title = format!("{} {}", grid.name(), grid.year);
    lines.push(format!("{:^width$}", title, width = MONTH_WIDTH));
    lines.push(
        WEEKDAY_LABELS
            .iter()
            .map(|l| format!("{:>2} ", l))
            .collect::<Vec<_>>()
            .join(" "),
    );

    for week in grid.weeks() {
        let row = week
            .iter()
            .map(|day| match day {
                Some(date) => cell(*date, events, today),
                None => "   ".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(row);
    }

    lines
        .into_iter()
        .map(|l| format!("{:<width$}", l, width = MONTH_WIDTH))
        .collect()
}

/// Month grid followed by the month's events, one per line.
pub fn print_month(grid: &MonthGrid, events: &[Event], today: NaiveDate) -> String {
    let mut lines: Vec<String> = month_lines(grid, events, today)
        .into_iter()
        .map(|l| l.trim_end().to_string())
        .collect();

    let mut listed = false;
    for day in &grid.days {
        for event in events_on(events, *day) {
            if !listed {
                lines.push(String::new());
                listed = true;
            }
            if event.description.is_empty() {
                lines.push(format!("{}  {}", event.date_key(), event.title));
            } else {
                lines.push(format!(
                    "{}  {} - {}",
                    event.date_key(),
                    event.title,
                    event.description
                ));
            }
        }
    }

    lines.join("\n") + "\n"
}

/// Twelve month grids, three side by side.
pub fn print_year(grids: &[MonthGrid], events: &[Event], today: NaiveDate) -> String {
    let mut out = Vec::new();

    for chunk in grids.chunks(YEAR_COLUMNS) {
        let blocks: Vec<Vec<String>> = chunk.iter().map(|g| month_lines(g, events, today)).collect();
        let height = blocks.iter().map(Vec::len).max().unwrap_or(0);

        for i in 0..height {
            let line = blocks
                .iter()
                .map(|b| {
                    b.get(i)
                        .cloned()
                        .unwrap_or_else(|| " ".repeat(MONTH_WIDTH))
                })
                .collect::<Vec<_>>()
                .join("   ");
            out.push(line.trim_end().to_string());
        }
        out.push(String::new());
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::year_grid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_event(date: NaiveDate, title: &str) -> Event {
        Event {
            id: title.to_string(),
            date,
            title: title.to_string(),
            description: String::new(),
            color: "#3b82f6".to_string(),
        }
    }

    #[test]
    fn test_print_month_layout() {
        let grid = MonthGrid::for_date(date(2024, 3, 1));
        let out = print_month(&grid, &[], date(2000, 1, 1));
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines[0].trim(), "March 2024");
        assert_eq!(lines[1], "Su  Mo  Tu  We  Th  Fr  Sa");
        // Friday column is the sixth cell
        assert_eq!(lines[2], format!("{} 1   2", " ".repeat(5 * CELL_WIDTH)));
        assert_eq!(lines.len(), 2 + 6);
    }

    #[test]
    fn test_print_month_markers_and_listing() {
        let grid = MonthGrid::for_date(date(2024, 3, 1));
        let events = vec![
            make_event(date(2024, 3, 15), "Meeting"),
            Event {
                description: "bring cake".to_string(),
                ..make_event(date(2024, 3, 2), "Party")
            },
            make_event(date(2024, 4, 1), "Elsewhere"),
        ];

        let out = print_month(&grid, &events, date(2024, 3, 4));

        assert!(out.contains("15*"));
        assert!(out.contains(" 4<"));
        assert!(out.contains("2024-03-02  Party - bring cake\n2024-03-15  Meeting"));
        assert!(!out.contains("Elsewhere"));
    }

    #[test]
    fn test_print_year_has_all_months() {
        let out = print_year(&year_grid(2024), &[], date(2000, 1, 1));
        for name in crate::grid::MONTH_NAMES {
            assert!(out.contains(&format!("{} 2024", name)), "missing {name}");
        }
        assert!(out.lines().next().unwrap().contains("February 2024"));
    }
}
