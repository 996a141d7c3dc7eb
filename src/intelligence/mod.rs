// ABOUTME: Intelligence module for nutrition analysis
// ABOUTME: Hosts the diabetes-suitability pipeline and its public entry points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Analysis of nutrition data. The suitability pipeline turns raw provider
//! items into annotated items carrying a diabetes-suitability assessment.

/// Diabetes-suitability scoring pipeline
pub mod suitability;

pub use suitability::{
    analyze_profile, evaluate_all, evaluate_item, BatchSummary, SuitabilityEngine,
};
