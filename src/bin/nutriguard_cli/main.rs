// ABOUTME: NutriGuard CLI - scores recipe, food, and product JSON for diabetes suitability
// ABOUTME: Reads items from a file or stdin and prints annotated JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Annotate a single item or an array of items
//! nutriguard-cli evaluate recipes.json --pretty
//!
//! # Read from stdin, keep only diabetes-friendly results, best first
//! cat search_results.json | nutriguard-cli evaluate --only diabetes_friendly --ranked
//!
//! # Category counts and mean score for a batch
//! nutriguard-cli evaluate products.json --summary
//!
//! # Tier for a raw score
//! nutriguard-cli categorize 6
//!
//! # Effective thresholds after environment overrides
//! nutriguard-cli config
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use nutriguard::errors::AppResult;
use nutriguard::logging::LoggingConfig;
use std::path::PathBuf;
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "nutriguard-cli",
    about = "NutriGuard diabetes-suitability scoring CLI",
    long_about = "Normalizes nutrition data from recipe, food, and product providers and scores it for diabetes suitability."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Annotate items with a suitability analysis
    Evaluate {
        /// JSON file holding one item or an array of items (stdin when omitted)
        file: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,

        /// Keep only items in this category (e.g. `diabetes_friendly`)
        #[arg(long)]
        only: Option<String>,

        /// Order results by descending score
        #[arg(long)]
        ranked: bool,

        /// Print the batch summary instead of the items
        #[arg(long)]
        summary: bool,
    },

    /// Show the category, label, and badge color for a score
    Categorize {
        /// Suitability score (0-8)
        #[arg(value_parser = clap::value_parser!(u8).range(0..=8))]
        score: u8,
    },

    /// Print the effective scoring configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    debug!("NutriGuard CLI");

    match cli.command {
        Command::Evaluate {
            file,
            pretty,
            only,
            ranked,
            summary,
        } => {
            let options = commands::evaluate::EvaluateOptions {
                pretty,
                only,
                ranked,
                summary,
            };
            commands::evaluate::run(file.as_deref(), &options)?;
        }
        Command::Categorize { score } => commands::categorize::run(score)?,
        Command::Config => commands::config::run()?,
    }

    Ok(())
}
