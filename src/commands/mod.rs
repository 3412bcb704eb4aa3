pub mod add;
pub mod browse;
pub mod export;
pub mod on;
pub mod print;
pub mod show;
pub mod year;

use anyhow::Result;
use daymark_core::navigation::Navigator;
use daymark_core::planner::{Action, Planner, ViewMode};

/// Reject years outside the navigator's selectable window.
pub fn check_year(navigator: &Navigator, year: i32) -> Result<()> {
    let options = navigator.year_options();
    if !options.contains(&year) {
        let (first, last) = (options[0], options[options.len() - 1]);
        anyhow::bail!("Year must be between {} and {}", first, last);
    }
    Ok(())
}

/// Point the navigator at an explicit month/year selection, if any.
pub fn select(navigator: &mut Navigator, month: Option<u32>, year: Option<i32>) -> Result<()> {
    if let Some(year) = year {
        check_year(navigator, year)?;
        navigator.set_year(year);
    }
    if let Some(month) = month {
        navigator.set_month(month - 1);
    }
    Ok(())
}

/// Apply a month/year selection and the requested view mode.
pub fn select_view(
    planner: &mut Planner,
    year_view: bool,
    month: Option<u32>,
    year: Option<i32>,
) -> Result<()> {
    select(planner.navigator_mut(), month, year)?;
    let view = if year_view { ViewMode::Year } else { ViewMode::Month };
    planner.apply(Action::SetView(view));
    Ok(())
}
