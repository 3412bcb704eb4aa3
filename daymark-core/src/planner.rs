//! Top-level controller tying navigation, view mode and events together.

use chrono::{Datelike, NaiveDate};

use crate::error::DaymarkResult;
use crate::event::{Event, NewEvent};
use crate::grid::{MonthGrid, year_grid};
use crate::navigation::Navigator;
use crate::storage::KeyValueStore;
use crate::store::EventStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Month,
    Year,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Month => ViewMode::Year,
            ViewMode::Year => ViewMode::Month,
        }
    }
}

/// A user navigation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PreviousMonth,
    NextMonth,
    Today,
    /// 0-based month index.
    SetMonth(u32),
    SetYear(i32),
    SetView(ViewMode),
    ToggleView,
}

pub struct Planner {
    navigator: Navigator,
    store: EventStore,
    view: ViewMode,
}

impl Planner {
    pub fn open(backend: Box<dyn KeyValueStore>, today: NaiveDate) -> Self {
        Planner {
            navigator: Navigator::new(today),
            store: EventStore::open(backend),
            view: ViewMode::default(),
        }
    }

    pub fn reference(&self) -> NaiveDate {
        self.navigator.reference()
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn toggle_view(&mut self) -> ViewMode {
        self.view = self.view.toggled();
        self.view
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::PreviousMonth => {
                self.navigator.previous_month();
            }
            Action::NextMonth => {
                self.navigator.next_month();
            }
            Action::Today => {
                self.navigator.go_to_today();
            }
            Action::SetMonth(index) => {
                self.navigator.set_month(index);
            }
            Action::SetYear(year) => {
                self.navigator.set_year(year);
            }
            Action::SetView(view) => self.set_view(view),
            Action::ToggleView => {
                self.toggle_view();
            }
        }
    }

    /// Month grid for the reference date.
    pub fn month_grid(&self) -> MonthGrid {
        MonthGrid::for_date(self.reference())
    }

    /// All twelve month grids for the reference year.
    pub fn year_grid(&self) -> Vec<MonthGrid> {
        year_grid(self.reference().year())
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.store.events_on(date)
    }

    /// Add an event, falling back to the reference date when the candidate
    /// has none.
    pub fn add_event(&mut self, candidate: NewEvent) -> DaymarkResult<&Event> {
        let fallback = self.reference();
        self.store.add(candidate, fallback)
    }
}
