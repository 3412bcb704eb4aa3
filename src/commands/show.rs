use anyhow::Result;
use daymark_core::planner::{Action, Planner};

use crate::render::render_month;

pub fn run(
    planner: &mut Planner,
    month: Option<u32>,
    year: Option<i32>,
    prev: u32,
    next: u32,
) -> Result<()> {
    super::select(planner.navigator_mut(), month, year)?;

    for _ in 0..prev {
        planner.apply(Action::PreviousMonth);
    }
    for _ in 0..next {
        planner.apply(Action::NextMonth);
    }

    println!("{}", render_month(&planner.month_grid(), planner.store(), crate::today()));

    Ok(())
}
