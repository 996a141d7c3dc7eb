// ABOUTME: Categorize command for nutriguard-cli
// ABOUTME: Prints the tier, labels, and badge color for a raw score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::print_json;
use nutriguard::errors::AppResult;
use nutriguard::intelligence::suitability::categorize;
use serde_json::json;

/// Run the categorize command
pub fn run(score: u8) -> AppResult<()> {
    let categorization = categorize(score);
    print_json(
        &json!({
            "score": score,
            "category": categorization.category,
            "label": categorization.label,
            "english_label": categorization.category.english_label(),
            "badge_color": categorization.badge_color,
        }),
        true,
    )
}
