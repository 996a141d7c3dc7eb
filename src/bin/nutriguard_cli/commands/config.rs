// ABOUTME: Config command for nutriguard-cli
// ABOUTME: Prints the validated scoring configuration after environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::print_json;
use nutriguard::config::IntelligenceConfig;
use nutriguard::errors::AppResult;

/// Run the config command
///
/// Unlike the engine, which falls back to defaults, this surfaces invalid
/// environment overrides as an error.
pub fn run() -> AppResult<()> {
    let config = IntelligenceConfig::load()?;
    print_json(&config, true)
}
