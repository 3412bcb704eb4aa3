use anyhow::Result;
use daymark_core::export::{print_month, print_year};
use daymark_core::planner::{Planner, ViewMode};

pub fn run(
    planner: &mut Planner,
    year_view: bool,
    month: Option<u32>,
    year: Option<i32>,
) -> Result<()> {
    super::select_view(planner, year_view, month, year)?;

    let events = planner.store().events();
    let output = match planner.view() {
        ViewMode::Year => print_year(&planner.year_grid(), events, crate::today()),
        ViewMode::Month => print_month(&planner.month_grid(), events, crate::today()),
    };

    print!("{}", output);

    Ok(())
}
