// ABOUTME: Configuration management module for engine thresholds and runtime settings
// ABOUTME: Exposes the validated, environment-driven intelligence configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for `NutriGuard`
//!
//! - **Intelligence**: Suitability thresholds, tier floors, and note triggers
//!
//! Logging configuration lives in [`crate::logging`].

/// Intelligence module configuration
pub mod intelligence;

pub use intelligence::{ConfigError, IntelligenceConfig, SuitabilityConfig};
