// ABOUTME: Diabetes-suitability pipeline from raw provider items to annotated results
// ABOUTME: Extractor -> rules -> categorizer + notes -> composer, with batch helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Diabetes Suitability
//!
//! Every stage is a pure function of its inputs. Lookup tables and the rule
//! table are built once per process and only read afterwards, so items can be
//! evaluated concurrently.
//!
//! ```text
//! RawItem -> extractor -> NutrientProfile -> rules -> (score, flags)
//!                                              |-> categorizer -> (category, label, color)
//!                                              |-> notes -> advisory text
//!                                              `-> composer -> AnnotatedItem
//! ```

/// Batch summary, filtering, and ranking
pub mod batch;
/// Score to tier mapping
pub mod categorizer;
/// Output assembly
pub mod composer;
/// Pipeline wiring and entry points
pub mod engine;
/// Nutrient source location and coercion
pub mod extractor;
/// Flag to advisory note lookup
pub mod notes;
/// Threshold rule table
pub mod rules;

pub use batch::{filter_by_category, rank_by_suitability, BatchSummary};
pub use categorizer::{categorize, categorize_with, Categorization};
pub use composer::compose;
pub use engine::{analyze_profile, evaluate_all, evaluate_item, SuitabilityEngine};
pub use extractor::{extract, extract_item, lenient_f64, nutrient_source};
pub use notes::{notes_for, notes_with};
pub use rules::{evaluate, Band, BandTest, RuleOutcome, RuleSet, SuitabilityRule};
