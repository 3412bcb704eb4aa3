//! Interactive navigation loop.

use std::io::{self, Write};

use anyhow::Result;
use daymark_core::config::DaymarkConfig;
use daymark_core::planner::{Action, Planner, ViewMode};
use owo_colors::OwoColorize;

use crate::render::{render_month, render_year};

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Navigate(Action),
    Add,
    Help,
    Quit,
}

const HELP: &str = "n next month · p previous month · t today · m <1-12> month · y <year> year · v toggle view · a add note · q quit";

pub fn parse_input(line: &str) -> Result<Input, String> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Err("Type h for help".to_string());
    };
    let arg = parts.next();

    let input = match (command, arg) {
        ("n" | "next", None) => Input::Navigate(Action::NextMonth),
        ("p" | "prev", None) => Input::Navigate(Action::PreviousMonth),
        ("t" | "today", None) => Input::Navigate(Action::Today),
        ("v" | "view", None) => Input::Navigate(Action::ToggleView),
        ("m" | "month", Some(arg)) => match arg.parse::<u32>() {
            Ok(month @ 1..=12) => Input::Navigate(Action::SetMonth(month - 1)),
            _ => return Err(format!("Invalid month '{}'. Expected 1-12", arg)),
        },
        ("y" | "year", Some(arg)) => match arg.parse::<i32>() {
            Ok(year) => Input::Navigate(Action::SetYear(year)),
            Err(_) => return Err(format!("Invalid year '{}'", arg)),
        },
        ("a" | "add", None) => Input::Add,
        ("h" | "help" | "?", None) => Input::Help,
        ("q" | "quit" | "exit", None) => Input::Quit,
        _ => return Err(format!("Unknown command '{}'. Type h for help", line.trim())),
    };

    Ok(input)
}

fn draw(planner: &Planner) {
    let today = crate::today();
    let view = match planner.view() {
        ViewMode::Month => render_month(&planner.month_grid(), planner.store(), today),
        ViewMode::Year => render_year(&planner.year_grid(), planner.store(), today),
    };
    println!("\n{}\n", view);
}

pub fn run(planner: &mut Planner, config: &DaymarkConfig) -> Result<()> {
    draw(planner);
    println!("{}", HELP.dimmed());

    loop {
        print!("{} ", ">".bold());
        io::stdout().flush()?;

        // Read line by line without holding the stdin lock; the add form prompts too
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(());
        }

        match parse_input(&line) {
            Ok(Input::Navigate(action)) => {
                if let Action::SetYear(year) = action {
                    if let Err(e) = super::check_year(planner.navigator(), year) {
                        eprintln!("{}", e.to_string().red());
                        continue;
                    }
                }
                planner.apply(action);
                draw(planner);
            }
            Ok(Input::Add) => {
                let candidate = super::add::prompt_form(planner.reference(), config)?;
                super::add::submit_with_retry(planner, candidate)?;
                draw(planner);
            }
            Ok(Input::Help) => println!("{}", HELP.dimmed()),
            Ok(Input::Quit) => return Ok(()),
            Err(e) => eprintln!("{}", e.red()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation() {
        assert_eq!(parse_input("n"), Ok(Input::Navigate(Action::NextMonth)));
        assert_eq!(parse_input(" prev "), Ok(Input::Navigate(Action::PreviousMonth)));
        assert_eq!(parse_input("t"), Ok(Input::Navigate(Action::Today)));
        assert_eq!(parse_input("v"), Ok(Input::Navigate(Action::ToggleView)));
    }

    #[test]
    fn test_parse_month_is_one_based() {
        assert_eq!(parse_input("m 1"), Ok(Input::Navigate(Action::SetMonth(0))));
        assert_eq!(parse_input("month 12"), Ok(Input::Navigate(Action::SetMonth(11))));
        assert!(parse_input("m 13").is_err());
        assert!(parse_input("m 0").is_err());
        assert!(parse_input("m").is_err());
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_input("y 2030"), Ok(Input::Navigate(Action::SetYear(2030))));
        assert!(parse_input("y soon").is_err());
    }

    #[test]
    fn test_parse_other() {
        assert_eq!(parse_input("a"), Ok(Input::Add));
        assert_eq!(parse_input("q"), Ok(Input::Quit));
        assert_eq!(parse_input("?"), Ok(Input::Help));
        assert!(parse_input("").is_err());
        assert!(parse_input("n 3").is_err());
    }
}
