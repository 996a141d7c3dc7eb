// ABOUTME: Main library entry point for the NutriGuard diabetes-suitability engine
// ABOUTME: Normalizes heterogeneous nutrition payloads and scores them against diabetes guidelines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriGuard`
//!
//! Scores recipes, foods, and packaged products for people managing diabetes.
//! Items arrive from upstream fetchers in whatever shape the provider uses;
//! the engine extracts a canonical nutrient profile, applies per-criterion
//! threshold rules, and attaches a score, category, badge, and advisory notes.
//!
//! ## Pipeline
//!
//! - **Extraction**: flat keys or `{name, amount}` lists become a `NutrientProfile`
//! - **Rules**: carbohydrate, sugar, fiber, saturated fat, and sodium bands award points
//! - **Categorization**: the 0-8 score maps onto a three-tier label and badge color
//! - **Notes**: unfavorable flags produce short advisory messages
//! - **Composition**: the original item is returned with canonical nutrients and `analysis`
//!
//! ## Example Usage
//!
//! ```rust
//! use nutriguard::intelligence::suitability::evaluate_item;
//! use nutriguard::models::{RawItem, SuitabilityCategory};
//! use serde_json::json;
//!
//! let item = RawItem::try_from(json!({
//!     "title": "Tempeh salad",
//!     "calories": 400, "carbs_g": 30, "sugar_g": 3, "fiber_g": 9,
//!     "saturated_fat_g": 2, "sodium_mg": 120
//! })).unwrap();
//!
//! let annotated = evaluate_item(&item);
//! assert_eq!(annotated.analysis.score, 8);
//! assert_eq!(annotated.analysis.category, SuitabilityCategory::DiabetesFriendly);
//! ```

/// Threshold and tier configuration with environment overrides
pub mod config;

/// Unified error handling re-exported from `nutriguard-core`
pub mod errors;

/// Nutrient extraction and diabetes-suitability scoring
pub mod intelligence;

/// Structured logging setup
pub mod logging;

pub use nutriguard_core::{constants, models};
