//! The event collection and its persistence.
//!
//! The whole collection lives under one key as a JSON array and is rewritten
//! in full after every mutation.

use chrono::{Datelike, NaiveDate};

use crate::error::{DaymarkResult, ValidationError};
use crate::event::{Event, NewEvent};
use crate::storage::KeyValueStore;

/// Key the serialized collection is stored under.
pub const EVENTS_KEY: &str = "events";

/// Read the persisted collection.
///
/// Missing data yields an empty collection. Unreadable or malformed data is
/// logged and also yields an empty collection rather than an error.
pub fn load(backend: &dyn KeyValueStore) -> Vec<Event> {
    let raw = match backend.get(EVENTS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("could not read stored events, starting empty: {e}");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Event>>(&raw) {
        Ok(events) => {
            log::debug!("loaded {} events", events.len());
            events
        }
        Err(e) => {
            log::warn!("stored events are malformed, starting empty: {e}");
            Vec::new()
        }
    }
}

/// Serialize the entire collection and overwrite the persisted copy.
pub fn save(backend: &mut dyn KeyValueStore, events: &[Event]) -> DaymarkResult<()> {
    let json = serde_json::to_string(events)?;
    backend.set(EVENTS_KEY, &json)?;
    log::debug!("saved {} events", events.len());
    Ok(())
}

/// Return `events` extended by a new event built from `candidate`.
///
/// On a validation failure the input is left as it was.
pub fn add(
    events: &[Event],
    candidate: NewEvent,
    fallback_date: NaiveDate,
) -> Result<Vec<Event>, ValidationError> {
    let event = Event::from_candidate(candidate, fallback_date)?;

    let mut extended = Vec::with_capacity(events.len() + 1);
    extended.extend_from_slice(events);
    extended.push(event);

    Ok(extended)
}

/// Events whose date equals `date`, in collection order.
pub fn events_on(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    events.iter().filter(|e| e.date == date).collect()
}

/// An event collection bound to the backend it is mirrored to.
pub struct EventStore {
    events: Vec<Event>,
    backend: Box<dyn KeyValueStore>,
}

impl EventStore {
    pub fn open(backend: Box<dyn KeyValueStore>) -> Self {
        let events = load(backend.as_ref());
        EventStore { events, backend }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        events_on(&self.events, date)
    }

    pub fn events_in_month(&self, year: i32, month: u32) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.date.year() == year && e.date.month() == month)
            .collect()
    }

    pub fn has_events_on(&self, date: NaiveDate) -> bool {
        self.events.iter().any(|e| e.date == date)
    }

    /// Validate and append a new event, then persist the collection.
    /// Returns the stored event.
    pub fn add(&mut self, candidate: NewEvent, fallback_date: NaiveDate) -> DaymarkResult<&Event> {
        let extended = add(&self.events, candidate, fallback_date)?;
        save(self.backend.as_mut(), &extended)?;
        self.events = extended;

        let event = &self.events[self.events.len() - 1];
        log::debug!("added event {} on {}", event.id, event.date_key());
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DaymarkError;
    use crate::storage::MemoryStore;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_event(id: &str, date: NaiveDate, title: &str) -> Event {
        Event {
            id: id.to_string(),
            date,
            title: title.to_string(),
            description: String::new(),
            color: crate::event::DEFAULT_COLOR.to_string(),
        }
    }

    #[test]
    fn test_load_empty_backend() {
        let backend = MemoryStore::new();
        assert!(load(&backend).is_empty());
    }

    #[test]
    fn test_load_malformed_is_soft_reset() {
        let mut backend = MemoryStore::new();
        backend.set(EVENTS_KEY, "{not json").unwrap();
        assert!(load(&backend).is_empty());

        backend.set(EVENTS_KEY, r#"[{"id": 1}]"#).unwrap();
        assert!(load(&backend).is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let events = vec![
            make_event("1", date(2024, 3, 15), "Meeting"),
            Event {
                description: "bring \"cake\"\nand candles".to_string(),
                color: "#10b981".to_string(),
                ..make_event("2", date(2024, 3, 15), "Birthday")
            },
            make_event("3", date(1999, 12, 31), "Party"),
        ];

        let mut backend = MemoryStore::new();
        save(&mut backend, &events).unwrap();

        assert_eq!(load(&backend), events);
    }

    #[test]
    fn test_add_whitespace_title_leaves_events_unchanged() {
        let events = vec![make_event("1", date(2024, 3, 15), "Meeting")];
        let before = events.clone();

        let result = add(&events, NewEvent::new("  "), date(2024, 3, 15));

        assert_eq!(result, Err(ValidationError::EmptyTitle));
        assert_eq!(events, before);
    }

    #[test]
    fn test_add_valid_event() {
        let events = vec![make_event("1", date(2024, 3, 14), "Other")];

        let extended = add(
            &events,
            NewEvent::new("Meeting").on(date(2024, 3, 15)),
            date(2024, 1, 1),
        )
        .unwrap();

        assert_eq!(extended.len(), events.len() + 1);
        let ids: HashSet<_> = extended.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), extended.len());

        let on_day = events_on(&extended, date(2024, 3, 15));
        assert_eq!(on_day.len(), 1);
        assert_eq!(on_day[0].title, "Meeting");
    }

    #[test]
    fn test_add_uses_fallback_date() {
        let extended = add(&[], NewEvent::new("Call"), date(2024, 7, 4)).unwrap();
        assert_eq!(extended[0].date, date(2024, 7, 4));
    }

    #[test]
    fn test_events_on_preserves_order_and_filters() {
        let events = vec![
            make_event("1", date(2024, 3, 15), "first"),
            make_event("2", date(2024, 3, 16), "other day"),
            make_event("3", date(2024, 3, 15), "second"),
            make_event("4", date(2023, 3, 15), "other year"),
        ];

        let found: Vec<_> = events_on(&events, date(2024, 3, 15))
            .into_iter()
            .map(|e| e.id.as_str())
            .collect();

        assert_eq!(found, vec!["1", "3"]);
        assert!(events_on(&events, date(2024, 3, 17)).is_empty());
    }

    #[test]
    fn test_event_store_add_persists() {
        let mut store = EventStore::open(Box::new(MemoryStore::new()));
        assert!(store.is_empty());

        let id = store
            .add(NewEvent::new("Meeting").on(date(2024, 3, 15)), date(2024, 3, 1))
            .unwrap()
            .id
            .clone();

        assert_eq!(store.len(), 1);
        assert!(store.has_events_on(date(2024, 3, 15)));
        assert_eq!(store.events_on(date(2024, 3, 15))[0].id, id);

        let reloaded = load(store.backend.as_ref());
        assert_eq!(reloaded, store.events());
    }

    #[test]
    fn test_event_store_rejects_empty_title() {
        let mut store = EventStore::open(Box::new(MemoryStore::new()));
        let err = store.add(NewEvent::new(""), date(2024, 3, 1)).unwrap_err();

        assert!(matches!(
            err,
            DaymarkError::Validation(ValidationError::EmptyTitle)
        ));
        assert!(store.is_empty());
        assert_eq!(store.backend.get(EVENTS_KEY).unwrap(), None);
    }

    #[test]
    fn test_events_in_month() {
        let mut backend = MemoryStore::new();
        save(
            &mut backend,
            &[
                make_event("1", date(2024, 3, 1), "a"),
                make_event("2", date(2024, 4, 1), "b"),
                make_event("3", date(2024, 3, 31), "c"),
            ],
        )
        .unwrap();

        let store = EventStore::open(Box::new(backend));
        let march: Vec<_> = store
            .events_in_month(2024, 3)
            .into_iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(march, vec!["1", "3"]);
    }
}
