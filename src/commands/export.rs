use std::path::PathBuf;

use anyhow::Result;
use daymark_core::export::{export, ExportFormat};
use daymark_core::planner::{Planner, ViewMode};
use owo_colors::OwoColorize;

use crate::render::pluralize;

pub fn run(
    planner: &mut Planner,
    format: ExportFormat,
    output: Option<PathBuf>,
    year_view: bool,
    month: Option<u32>,
    year: Option<i32>,
) -> Result<()> {
    super::select_view(planner, year_view, month, year)?;

    let content = render_export(planner, format)?;
    let events = planner.store().events();

    match output {
        Some(path) => {
            crate::write_output(&path, &content)?;
            println!(
                "{}",
                format!(
                    "Exported {} {} to {}",
                    events.len(),
                    pluralize("note", events.len()),
                    path.display()
                )
                .green()
            );
        }
        None => print!("{}", content),
    }

    Ok(())
}

/// Export content for the planner's current view; text follows the view,
/// the other formats always carry every note.
pub fn render_export(planner: &Planner, format: ExportFormat) -> Result<String> {
    let grids = match planner.view() {
        ViewMode::Month => vec![planner.month_grid()],
        ViewMode::Year => planner.year_grid(),
    };

    Ok(export(format, &grids, planner.store().events(), crate::today())?)
}
