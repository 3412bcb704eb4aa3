//! The reference date that drives which month or year is shown.

use chrono::{Datelike, Local, Months, NaiveDate};

/// How many years the year selector offers on each side of the start year.
pub const YEAR_WINDOW_RADIUS: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    reference: NaiveDate,
    /// Year current when the navigator was created; centers `year_options`.
    anchor_year: i32,
}

impl Navigator {
    pub fn new(today: NaiveDate) -> Self {
        Navigator {
            reference: today,
            anchor_year: today.year(),
        }
    }

    pub const fn reference(&self) -> NaiveDate {
        self.reference
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.reference = date;
    }

    /// Move back one month; the day clamps to the target month's length.
    pub fn previous_month(&mut self) -> NaiveDate {
        self.reference = self
            .reference
            .checked_sub_months(Months::new(1))
            .unwrap_or(self.reference);
        self.reference
    }

    /// Move forward one month; the day clamps to the target month's length.
    pub fn next_month(&mut self) -> NaiveDate {
        self.reference = self
            .reference
            .checked_add_months(Months::new(1))
            .unwrap_or(self.reference);
        self.reference
    }

    pub fn go_to_today(&mut self) -> NaiveDate {
        self.reference = Local::now().date_naive();
        self.reference
    }

    /// Select a month by 0-based index. Indices past 11 are ignored.
    pub fn set_month(&mut self, index: u32) -> NaiveDate {
        if index < 12 {
            if let Some(date) = clamped_date(self.reference.year(), index + 1, self.reference.day()) {
                self.reference = date;
            }
        }
        self.reference
    }

    pub fn set_year(&mut self, year: i32) -> NaiveDate {
        if let Some(date) = clamped_date(year, self.reference.month(), self.reference.day()) {
            self.reference = date;
        }
        self.reference
    }

    /// The 21 selectable years, centered on the year the navigator started in.
    pub fn year_options(&self) -> Vec<i32> {
        (self.anchor_year - YEAR_WINDOW_RADIUS..=self.anchor_year + YEAR_WINDOW_RADIUS).collect()
    }
}

/// `year-month-day`, pulling `day` back to the last valid day of the month.
fn clamped_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last_day = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28);
    NaiveDate::from_ymd_opt(year, month, day.min(last_day))
}
