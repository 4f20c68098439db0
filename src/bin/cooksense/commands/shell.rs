// ABOUTME: Interactive shell for the cooksense CLI
// ABOUTME: Line-oriented commands drive one long-lived session over stdin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use cooksense::api::ImageUpload;
use cooksense::app::AppSession;
use cooksense_core::models::{AgeGroup, RecipeId};
use cooksense_core::{AppError, AppResult};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::debug;

use super::generate::save_position;
use crate::helpers::display::{display_entry, display_favorites, display_recipes, display_stats};

const HELP: &str = "\
Commands:
  add <a, b, ...>        add ingredients
  rm <ingredient>        remove an ingredient
  list                   show ingredients
  scan <photo>           recognise ingredients in a fridge photo
  meal <photo>           estimate calories of a meal photo
  stats                  show calorie target, total and remaining
  age <younger|adult|older>
  people <n> | cuisine <x> | difficulty <x> | avoid <text> | max <kcal|none>
  tool <name> on|off     tick or untick kitchenware
  generate               new recipes (replaces results)
  more                   load more recipes (appends)
  save <n|id>            save result n, or toggle a recipe id
  favorites              open or close the favorites panel
  unsave <id>            remove a saved recipe
  html                   print the rendered screen
  quit";

/// Run the shell until `quit` or end of input
pub async fn run(session: &mut AppSession) -> AppResult<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    println!("{HELP}");

    loop {
        stdout.write_all(b"cooksense> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, argument) = line.split_once(' ').unwrap_or((line, ""));
        let argument = argument.trim();

        if matches!(command, "quit" | "exit") {
            break;
        }
        // Flow failures were already alerted; keep the shell running
        if let Err(e) = execute(session, command, argument).await {
            debug!(command, error = %e, "shell command failed");
            println!("{}", e.message);
        }
    }
    Ok(())
}

async fn execute(session: &mut AppSession, command: &str, argument: &str) -> AppResult<()> {
    match command {
        "help" => println!("{HELP}"),
        "add" => {
            for ingredient in argument.split(',') {
                session.add_ingredient(ingredient);
            }
            print_ingredients(session);
        }
        "rm" => {
            session.remove_ingredient(argument);
            print_ingredients(session);
        }
        "list" => print_ingredients(session),
        "scan" => {
            let upload = ImageUpload::from_path(argument).await?;
            session.scan_fridge(&upload).await?;
            print_ingredients(session);
        }
        "meal" => {
            let upload = ImageUpload::from_path(argument).await?;
            if let Some(entry) = session.analyze_calories(&upload).await? {
                display_entry(&entry);
                display_stats(&session.calories().stats());
            }
        }
        "stats" => {
            for entry in session.calories().entries() {
                display_entry(entry);
            }
            display_stats(&session.calories().stats());
        }
        "age" => {
            session.set_age_group(argument.parse::<AgeGroup>()?);
            display_stats(&session.calories().stats());
        }
        "people" => {
            session.form_mut().people = argument
                .parse()
                .map_err(|_| AppError::invalid_input(format!("not a number: {argument}")))?;
        }
        "cuisine" => argument.clone_into(&mut session.form_mut().cuisine),
        "difficulty" => argument.clone_into(&mut session.form_mut().difficulty),
        "avoid" => argument.clone_into(&mut session.form_mut().avoid_foods),
        "max" => {
            session.form_mut().max_calories = match argument {
                "" | "none" => None,
                kcal => Some(kcal.parse().map_err(|_| {
                    AppError::invalid_input(format!("not a calorie value: {kcal}"))
                })?),
            };
        }
        "tool" => {
            let (name, checked) = match argument.rsplit_once(' ') {
                Some((name, "on")) => (name, true),
                Some((name, "off")) => (name, false),
                _ => (argument, true),
            };
            session.form_mut().set_kitchenware(name, checked);
        }
        "generate" | "more" => {
            session.generate(command == "more").await?;
            print_results(session);
        }
        "save" => {
            match argument.parse::<usize>() {
                Ok(position) => save_position(session, position)?,
                Err(_) => {
                    session.toggle_favorite(&RecipeId::from(argument))?;
                }
            }
            println!("{} saved", session.favorites().len());
        }
        "unsave" => {
            session.remove_favorite(&RecipeId::from(argument))?;
            println!("{} saved", session.favorites().len());
        }
        "favorites" => {
            if session.toggle_favorites_panel() {
                display_favorites(session.favorites().recipes(), true);
            } else {
                println!("favorites panel closed");
            }
        }
        "html" => {
            let view = session.view();
            println!("{}\n{}\n{}\n{}", view.tags, view.results, view.stats_markup, view.history);
            println!("{}", view.saved_count);
            if let Some(panel) = view.favorites_panel {
                println!("{panel}");
            }
        }
        other => println!("unknown command '{other}', try 'help'"),
    }
    Ok(())
}

fn print_ingredients(session: &AppSession) {
    if session.tags().is_empty() {
        println!("(no ingredients)");
    } else {
        println!("Ingredients: {}", session.tags().as_slice().join(", "));
    }
}

fn print_results(session: &AppSession) {
    let favorites = session.favorites();
    display_recipes(session.results(), |id| favorites.contains(id));
}
