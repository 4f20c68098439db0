// ABOUTME: CookSense CLI - recipe suggestions, favorites and calorie tracking from the terminal
// ABOUTME: Parses arguments, sets up logging and configuration, and dispatches subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Interactive session (ingredients, photos, generation, favorites)
//! cooksense shell
//!
//! # One-shot generation, saving the first result
//! cooksense generate -i carrot -i chicken --people 2 --save 1
//!
//! # Recognise ingredients in a fridge photo
//! cooksense scan fridge.jpg
//!
//! # Estimate calories for meal photos against the adult target
//! cooksense calories lunch.jpg dinner.jpg --age-group adult
//!
//! # Manage saved recipes
//! cooksense favorites list
//! cooksense favorites remove recipe_1730000000000_k3la9x2mq
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cooksense::app::AppSession;
use cooksense::config::ClientConfig;
use cooksense::logging::LoggingConfig;
use cooksense_core::models::AgeGroup;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "cooksense",
    about = "CookSense recipe suggestion client",
    long_about = "Turn the ingredients in your fridge into recipes, keep favorites, and track calories from meal photos."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Endpoint origin override (default: `COOKSENSE_BASE_URL`)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Storage directory override (default: `COOKSENSE_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Interactive session
    Shell,

    /// Generate recipes for a list of ingredients
    Generate {
        /// Ingredient (repeatable)
        #[arg(long = "ingredient", short = 'i', required = true)]
        ingredients: Vec<String>,

        /// Kitchenware available (repeatable)
        #[arg(long = "kitchenware", short = 'k')]
        kitchenware: Vec<String>,

        /// Age group: younger, adult or older
        #[arg(long, default_value = "adult")]
        age_group: AgeGroup,

        /// Number of people
        #[arg(long, default_value = "1")]
        people: u32,

        /// Cuisine preference
        #[arg(long, default_value = "any")]
        cuisine: String,

        /// Difficulty preference
        #[arg(long, default_value = "any")]
        difficulty: String,

        /// Foods to avoid
        #[arg(long, default_value = "")]
        avoid: String,

        /// Calorie ceiling per dish
        #[arg(long)]
        max_calories: Option<u32>,

        /// Save the recipe at this 1-based position (repeatable)
        #[arg(long)]
        save: Vec<usize>,

        /// Print the card markup instead of text
        #[arg(long)]
        html: bool,
    },

    /// Recognise ingredients in a fridge photo
    Scan {
        /// Photo file
        image: PathBuf,
    },

    /// Estimate calories for one or more meal photos
    Calories {
        /// Photo files, recorded in order
        #[arg(required = true)]
        images: Vec<PathBuf>,

        /// Age group used for the daily target
        #[arg(long, default_value = "adult")]
        age_group: AgeGroup,
    },

    /// Saved recipe management
    Favorites {
        #[command(subcommand)]
        action: FavoritesCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum FavoritesCommand {
    /// List saved recipes
    List {
        /// Show ingredients and steps
        #[arg(long, short = 'd')]
        detailed: bool,

        /// Print the panel markup instead of text
        #[arg(long)]
        html: bool,
    },

    /// Remove a saved recipe by id
    Remove {
        /// Recipe id
        recipe_id: String,
    },
}

fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url)?;
    }
    if let Some(data_dir) = cli.data_dir.clone() {
        config = config.with_data_dir(data_dir);
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;

    let mut logging = LoggingConfig::from_env(&config.log_level);
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    info!(base_url = %config.base_url, "CookSense CLI");
    let mut session = AppSession::from_config(&config)?;

    match cli.command {
        Command::Shell => commands::shell::run(&mut session).await?,
        Command::Generate {
            ingredients,
            kitchenware,
            age_group,
            people,
            cuisine,
            difficulty,
            avoid,
            max_calories,
            save,
            html,
        } => {
            let options = commands::generate::GenerateOptions {
                ingredients,
                kitchenware,
                age_group,
                people,
                cuisine,
                difficulty,
                avoid_foods: avoid,
                max_calories,
                save,
                html,
            };
            commands::generate::run(&mut session, options).await?;
        }
        Command::Scan { image } => commands::photos::scan(&mut session, &image).await?,
        Command::Calories { images, age_group } => {
            commands::photos::calories(&mut session, &images, age_group).await?;
        }
        Command::Favorites { action } => match action {
            FavoritesCommand::List { detailed, html } => {
                commands::favorites::list(&mut session, detailed, html);
            }
            FavoritesCommand::Remove { recipe_id } => {
                commands::favorites::remove(&mut session, &recipe_id)?;
            }
        },
    }

    Ok(())
}
