//! Day notes attached to calendar dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DaymarkError, DaymarkResult, ValidationError};

/// Accent color used when an event is created without one.
pub const DEFAULT_COLOR: &str = "#3b82f6";

/// A titled, colored note pinned to a single calendar day.
///
/// Serialized field-for-field into the persisted JSON array; `date` uses
/// the `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub date: NaiveDate,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl Event {
    /// Build an event from a submitted candidate, generating a fresh id.
    ///
    /// `fallback_date` is used when the candidate carries no date of its own.
    pub fn from_candidate(
        candidate: NewEvent,
        fallback_date: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let title = candidate.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let color = candidate
            .color
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(default_color);

        Ok(Event {
            id: uuid::Uuid::new_v4().to_string(),
            date: candidate.date.unwrap_or(fallback_date),
            title: title.to_string(),
            description: candidate.description.trim().to_string(),
            color,
        })
    }

    /// Date in its `YYYY-MM-DD` string form.
    pub fn date_key(&self) -> String {
        format_date(self.date)
    }

    /// Parse `color` as `#rrggbb` (or `#rgb`) into RGB components.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex_color(&self.color)
    }
}

/// What the add-event form submits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEvent {
    pub date: Option<NaiveDate>,
    pub title: String,
    pub description: String,
    pub color: Option<String>,
}

impl NewEvent {
    pub fn new(title: impl Into<String>) -> Self {
        NewEvent {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Parse `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> DaymarkResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| DaymarkError::InvalidDate(s.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    // Byte slicing below needs one byte per char
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let mut channels = hex.chars().map(|c| c.to_digit(16).map(|v| (v * 17) as u8));
            Some((channels.next()??, channels.next()??, channels.next()??))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_candidate_trims_and_defaults() {
        let candidate = NewEvent::new("  Meeting  ").with_description(" room 4 ");
        let event = Event::from_candidate(candidate, date(2024, 3, 15)).unwrap();

        assert_eq!(event.title, "Meeting");
        assert_eq!(event.description, "room 4");
        assert_eq!(event.color, DEFAULT_COLOR);
        assert_eq!(event.date, date(2024, 3, 15));
        assert!(!event.id.is_empty());
    }

    #[test]
    fn test_from_candidate_prefers_own_date() {
        let candidate = NewEvent::new("Dentist").on(date(2024, 5, 2));
        let event = Event::from_candidate(candidate, date(2024, 1, 1)).unwrap();
        assert_eq!(event.date_key(), "2024-05-02");
    }

    #[test]
    fn test_from_candidate_blank_color_falls_back() {
        let candidate = NewEvent::new("Gym").with_color("   ");
        let event = Event::from_candidate(candidate, date(2024, 1, 1)).unwrap();
        assert_eq!(event.color, DEFAULT_COLOR);
    }

    #[test]
    fn test_from_candidate_rejects_whitespace_title() {
        let result = Event::from_candidate(NewEvent::new(" \t "), date(2024, 1, 1));
        assert_eq!(result, Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Event::from_candidate(NewEvent::new("a"), date(2024, 1, 1)).unwrap();
        let b = Event::from_candidate(NewEvent::new("a"), date(2024, 1, 1)).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serialized_field_names() {
        let event = Event {
            id: "abc".to_string(),
            date: date(2024, 3, 15),
            title: "Meeting".to_string(),
            description: String::new(),
            color: "#ff0000".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["id"], "abc");
        assert_eq!(json["date"], "2024-03-15");
        assert_eq!(json["title"], "Meeting");
        assert_eq!(json["description"], "");
        assert_eq!(json["color"], "#ff0000");
    }

    #[test]
    fn test_missing_color_deserializes_to_default() {
        let event: Event =
            serde_json::from_str(r#"{"id":"x","date":"2024-03-15","title":"t"}"#).unwrap();
        assert_eq!(event.color, DEFAULT_COLOR);
        assert_eq!(event.description, "");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-02-29").unwrap(), date(2024, 2, 29));
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("15/03/2024").is_err());
    }

    #[test]
    fn test_rgb() {
        let mut event = Event::from_candidate(NewEvent::new("x"), date(2024, 1, 1)).unwrap();
        assert_eq!(event.rgb(), Some((0x3b, 0x82, 0xf6)));
        event.color = "#f00".to_string();
        assert_eq!(event.rgb(), Some((255, 0, 0)));
        event.color = "red".to_string();
        assert_eq!(event.rgb(), None);
    }

    #[test]
    fn test_rgb_multibyte_color_is_none() {
        let candidate = NewEvent::new("x").with_color("#a€bc");
        let event = Event::from_candidate(candidate, date(2024, 1, 1)).unwrap();
        assert_eq!(event.rgb(), None);

        let mut event = event;
        event.color = "#ééé".to_string();
        assert_eq!(event.rgb(), None);
        event.color = "#12345é".to_string();
        assert_eq!(event.rgb(), None);
    }
}
