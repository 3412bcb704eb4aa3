//! Month and year grid computation.
//!
//! Weekdays are indexed from Sunday (0) to Saturday (6) throughout.

use chrono::{Datelike, Local, NaiveDate};

pub const GRID_COLS: usize = 7;

pub const WEEKDAY_LABELS: [&str; GRID_COLS] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

fn first_of_month(reference: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month
    reference - chrono::Days::new(u64::from(reference.day0()))
}

/// Every day of the month containing `reference`, ascending.
pub fn month_days(reference: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(reference);
    first
        .iter_days()
        .take_while(|d| d.month() == first.month())
        .collect()
}

/// Weekday index of the first day of the month containing `reference`.
pub fn first_weekday_offset(reference: NaiveDate) -> u32 {
    first_of_month(reference).weekday().num_days_from_sunday()
}

/// Whether `date` is the host's current local date.
pub fn is_today(date: NaiveDate) -> bool {
    is_today_at(date, Local::now().date_naive())
}

pub fn is_today_at(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday().num_days_from_sunday(), 0 | 6)
}

/// One month laid out for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    /// 1-based.
    pub month: u32,
    pub days: Vec<NaiveDate>,
    /// Leading blank cells before the first day.
    pub offset: u32,
}

impl MonthGrid {
    pub fn for_date(reference: NaiveDate) -> Self {
        MonthGrid {
            year: reference.year(),
            month: reference.month(),
            days: month_days(reference),
            offset: first_weekday_offset(reference),
        }
    }

    pub fn name(&self) -> &'static str {
        month_name(self.month)
    }

    /// Rows of seven cells; `None` marks the blank cells before the first
    /// day and after the last.
    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; GRID_COLS]> {
        let cells: Vec<Option<NaiveDate>> = std::iter::repeat_n(None, self.offset as usize)
            .chain(self.days.iter().copied().map(Some))
            .collect();

        cells
            .chunks(GRID_COLS)
            .map(|chunk| {
                let mut row = [None; GRID_COLS];
                row[..chunk.len()].copy_from_slice(chunk);
                row
            })
            .collect()
    }
}

/// The twelve months of `year`, in order.
pub fn year_grid(year: i32) -> Vec<MonthGrid> {
    (1..=12)
        .filter_map(|month| NaiveDate::from_ymd_opt(year, month, 1))
        .map(MonthGrid::for_date)
        .collect()
}
