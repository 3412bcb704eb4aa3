//! Print and export of the calendar and its events.

mod ics;
mod text;

pub use ics::to_ics;
pub use text::{print_month, print_year};

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::{DaymarkError, DaymarkResult};
use crate::event::Event;
use crate::grid::MonthGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Ics,
    Json,
    Text,
    Pdf,
    Image,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Ics => "ics",
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Image => "png",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ics" | "ical" => Ok(ExportFormat::Ics),
            "json" => Ok(ExportFormat::Json),
            "text" | "txt" => Ok(ExportFormat::Text),
            "pdf" => Ok(ExportFormat::Pdf),
            "image" | "png" => Ok(ExportFormat::Image),
            other => Err(format!(
                "Unknown export format '{}'. Expected ics, json, text, pdf or image",
                other
            )),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ExportFormat::Ics => "ICS",
            ExportFormat::Json => "JSON",
            ExportFormat::Text => "Text",
            ExportFormat::Pdf => "PDF",
            ExportFormat::Image => "Image",
        };
        write!(f, "{}", name)
    }
}

/// Pretty-printed persistence format.
pub fn to_json(events: &[Event]) -> DaymarkResult<String> {
    Ok(serde_json::to_string_pretty(events)?)
}

/// Export `events`; the text format prints the given grids.
pub fn export(
    format: ExportFormat,
    grids: &[MonthGrid],
    events: &[Event],
    today: NaiveDate,
) -> DaymarkResult<String> {
    match format {
        ExportFormat::Ics => to_ics(events),
        ExportFormat::Json => to_json(events),
        ExportFormat::Text => match grids {
            [single] => Ok(print_month(single, events, today)),
            many => Ok(print_year(many, events, today)),
        },
        ExportFormat::Pdf | ExportFormat::Image => {
            Err(DaymarkError::Unsupported(format.to_string()))
        }
    }
}
