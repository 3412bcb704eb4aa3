use anyhow::Result;
use chrono::NaiveDate;
use daymark_core::config::DaymarkConfig;
use daymark_core::event::{format_date, parse_date, NewEvent};
use daymark_core::planner::Planner;
use daymark_core::DaymarkError;
use dialoguer::Input;
use owo_colors::OwoColorize;

pub fn run(
    planner: &mut Planner,
    config: &DaymarkConfig,
    title: Option<String>,
    date: Option<NaiveDate>,
    description: Option<String>,
    color: Option<String>,
) -> Result<()> {
    let candidate = match title {
        Some(title) => NewEvent {
            date: Some(date.unwrap_or_else(crate::today)),
            title,
            description: description.unwrap_or_default(),
            color: Some(color.unwrap_or_else(|| config.default_color.clone())),
        },
        None => {
            let candidate = prompt_form(date.unwrap_or_else(crate::today), config)?;
            return submit_with_retry(planner, candidate);
        }
    };

    let event = planner.add_event(candidate)?;
    println!("{}", format!("  Added: {} on {}", event.title, event.date_key()).green());

    Ok(())
}

/// Ask for every field of a new note, pre-filled with `date`.
pub fn prompt_form(date: NaiveDate, config: &DaymarkConfig) -> Result<NewEvent> {
    let title: String = Input::new()
        .with_prompt("  Title")
        .allow_empty(true)
        .interact_text()?;

    let date = prompt_with_retry("  Date", &format_date(date), |s| Ok(parse_date(s)?))?;

    let description: String = Input::new()
        .with_prompt("  Description (skip)")
        .default(String::new())
        .show_default(false)
        .interact_text()?;

    let color: String = Input::new()
        .with_prompt("  Color")
        .default(config.default_color.clone())
        .interact_text()?;

    Ok(NewEvent {
        date: Some(date),
        title,
        description,
        color: Some(color),
    })
}

/// Submit the form; an empty title re-opens the title prompt with the
/// other fields kept.
pub fn submit_with_retry(planner: &mut Planner, mut candidate: NewEvent) -> Result<()> {
    loop {
        match planner.add_event(candidate.clone()) {
            Ok(event) => {
                println!();
                println!("{}", format!("  Added: {} on {}", event.title, event.date_key()).green());
                return Ok(());
            }
            Err(DaymarkError::Validation(e)) => {
                eprintln!("  {}", e.to_string().red());
                candidate.title = Input::new()
                    .with_prompt("  Title")
                    .allow_empty(true)
                    .interact_text()?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry<T, F>(prompt: &str, default: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?;
        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}
