//! iCalendar export of day notes.

use chrono::Days;
use icalendar::{Calendar, Component, EventLike, Property, ValueType};

use crate::error::DaymarkResult;
use crate::event::Event;

/// Render all events as one VCALENDAR with an all-day VEVENT per event.
pub fn to_ics(events: &[Event]) -> DaymarkResult<String> {
    let mut cal = Calendar::new();
    cal.name("daymark");

    let dtstamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ").to_string();

    for event in events {
        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&event.id);
        ics_event.summary(&event.title);
        ics_event.add_property("DTSTAMP", &dtstamp);

        add_date_property(&mut ics_event, "DTSTART", event.date);
        // DTEND is exclusive for all-day events
        let end = event.date.checked_add_days(Days::new(1)).unwrap_or(event.date);
        add_date_property(&mut ics_event, "DTEND", end);

        if !event.description.is_empty() {
            ics_event.description(&event.description);
        }

        // RFC 7986 COLOR takes a CSS3 color name or value
        ics_event.add_property("COLOR", &event.color);

        cal.push(ics_event.done());
    }

    Ok(strip_ics_bloat(&cal.done().to_string()))
}

fn add_date_property(ics_event: &mut icalendar::Event, name: &str, date: chrono::NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    ics_event.append_property(prop);
}

/// Replace PRODID and drop CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:DAYMARK\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
