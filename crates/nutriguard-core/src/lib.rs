// ABOUTME: Core types and constants for the NutriGuard diabetes-suitability engine
// ABOUTME: Foundation crate with error handling, nutrient vocabulary, and analysis models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriGuard` Core
//!
//! Foundation crate providing shared types and constants for the `NutriGuard`
//! scoring engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Nutrient vocabulary, tier labels, score bounds, and the disclaimer
//! - **models**: Canonical nutrient profile, raw source shapes, and analysis results

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`NutrientProfile`, `RawNutrientSource`, `AnalysisResult`)
pub mod models;
