// ABOUTME: Evaluate command for nutriguard-cli
// ABOUTME: Annotates items and prints them, optionally filtered, ranked, or summarized
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::print_json;
use crate::helpers::input::load_items;
use nutriguard::errors::{AppError, AppResult};
use nutriguard::intelligence::suitability::{
    evaluate_all, filter_by_category, rank_by_suitability, BatchSummary,
};
use nutriguard::models::{AnnotatedItem, SuitabilityCategory};
use serde::Serialize;
use std::path::Path;

/// Output shaping flags
pub struct EvaluateOptions {
    /// Pretty-print JSON
    pub pretty: bool,
    /// Category filter, as typed by the user
    pub only: Option<String>,
    /// Sort by descending score
    pub ranked: bool,
    /// Print only the batch summary
    pub summary: bool,
}

/// What the command prints
///
/// A single-object input stays a single value: the annotated object, or
/// `null` when the category filter drops it.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum EvaluateOutput {
    Summary(BatchSummary),
    Single(Option<AnnotatedItem>),
    Many(Vec<AnnotatedItem>),
}

/// Run the evaluate command
pub fn run(file: Option<&Path>, options: &EvaluateOptions) -> AppResult<()> {
    let category = options
        .only
        .as_deref()
        .map(parse_category)
        .transpose()?;

    let loaded = load_items(file)?;
    let output = shape_output(evaluate_all(&loaded.items), loaded.single, category, options);
    print_json(&output, options.pretty)
}

fn parse_category(raw: &str) -> AppResult<SuitabilityCategory> {
    SuitabilityCategory::from_str_lossy(raw).ok_or_else(|| {
        AppError::invalid_input(format!(
            "Unknown category '{raw}', expected diabetes_friendly, can_be_adjusted, or not_recommended"
        ))
    })
}

/// Filter first, then summarize or order
fn shape_output(
    mut annotated: Vec<AnnotatedItem>,
    single: bool,
    category: Option<SuitabilityCategory>,
    options: &EvaluateOptions,
) -> EvaluateOutput {
    if let Some(category) = category {
        annotated = filter_by_category(&annotated, category)
            .into_iter()
            .cloned()
            .collect();
    }

    if options.summary {
        return EvaluateOutput::Summary(BatchSummary::from_items(&annotated));
    }
    if single {
        return EvaluateOutput::Single(annotated.into_iter().next());
    }
    if options.ranked {
        annotated = rank_by_suitability(annotated);
    }
    EvaluateOutput::Many(annotated)
}
