use anyhow::Result;
use daymark_core::planner::Planner;

use crate::render::render_year;

pub fn run(planner: &mut Planner, year: Option<i32>) -> Result<()> {
    super::select_view(planner, true, None, year)?;

    println!("{}", render_year(&planner.year_grid(), planner.store(), crate::today()));

    Ok(())
}
