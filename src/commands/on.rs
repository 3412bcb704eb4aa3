use anyhow::Result;
use chrono::NaiveDate;
use daymark_core::planner::Planner;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(planner: &Planner, date: NaiveDate) -> Result<()> {
    let events = planner.events_on(date);

    println!("{}", date.format("%A, %B %-d %Y").bold());

    if events.is_empty() {
        println!("  {}", "No notes".dimmed());
        return Ok(());
    }

    for event in events {
        println!("  {}", event.render());
    }

    Ok(())
}
