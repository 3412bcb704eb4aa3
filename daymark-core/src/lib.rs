//! Core logic for daymark.
//!
//! - `grid`: month/year day lists and weekday offsets for calendar display
//! - `store`: the event collection and its key-value persistence
//! - `navigation` and `planner`: the reference date and the controller owning it
//! - `export`: text printing, ICS and JSON export

pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod grid;
pub mod navigation;
pub mod planner;
pub mod storage;
pub mod store;

pub use error::{DaymarkError, DaymarkResult, ValidationError};
pub use event::{Event, NewEvent};
