// ABOUTME: Core data models for nutrient normalization and suitability analysis
// ABOUTME: Re-exports NutrientProfile, RawNutrientSource, AnalysisResult and related enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - **Provider agnostic**: raw provider shapes are kept as loose JSON until extraction
//! - **Pass-through**: `RawItem` fields survive into `AnnotatedItem` untouched
//! - **Canonical**: `NutrientProfile` has fixed fields that never go missing
//! - **Serializable**: every model round-trips through JSON with snake_case identifiers

mod analysis;
mod item;
mod nutrition;

pub use analysis::{
    AnalysisResult, BadgeColor, Criterion, SuitabilityCategory, SuitabilityFlag,
};
pub use item::{AnnotatedItem, RawItem};
pub use nutrition::{NamedAmount, NutrientField, NutrientProfile, RawNutrientSource};
