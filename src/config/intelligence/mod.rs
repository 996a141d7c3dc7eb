// ABOUTME: Intelligence module configuration for diabetes-suitability analysis
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Type-safe configuration for the scoring engine. Values come from defaults,
//! then environment overrides, then validation. The result is loaded once
//! per process and shared read-only.
//!
//! # Module Structure
//!
//! - `suitability` - Threshold ladders, tier floors, and advisory note triggers
//! - `error` - Configuration error type

/// Configuration error type
pub mod error;
/// Suitability thresholds, tiers, and note triggers
pub mod suitability;

pub use error::ConfigError;
pub use suitability::{
    AdvisoryNoteConfig, CarbohydrateThresholds, CategoryTiers, FiberThresholds,
    SaturatedFatThresholds, SodiumThresholds, SugarThresholds, SuitabilityConfig,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig<true>> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntelligenceConfig<const VALIDATED: bool = false> {
    /// Configuration for diabetes-suitability scoring
    pub suitability: SuitabilityConfig,
    #[serde(skip)]
    _phantom: PhantomData<()>,
}

impl IntelligenceConfig<true> {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            carb_ok_max_g = config.suitability.carbohydrate.ok_max_g,
            friendly_min_score = config.suitability.tiers.friendly_min_score,
            "Intelligence configuration loaded"
        );
        Ok(config)
    }

    /// Build a validated configuration from an explicit suitability section
    ///
    /// # Errors
    ///
    /// Returns an error if the thresholds fail validation
    pub fn with_suitability(suitability: SuitabilityConfig) -> Result<Self, ConfigError> {
        let config = Self {
            suitability,
            _phantom: PhantomData,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.suitability.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let s = &mut self.suitability;

        // Carbohydrate ladder
        Self::apply_env_var("NUTRIGUARD_CARB_OK_MAX_G", &mut s.carbohydrate.ok_max_g)?;
        Self::apply_env_var(
            "NUTRIGUARD_CARB_BORDERLINE_MAX_G",
            &mut s.carbohydrate.borderline_max_g,
        )?;

        // Sugar ladder
        Self::apply_env_var("NUTRIGUARD_SUGAR_LOW_MAX_G", &mut s.sugar.low_max_g)?;
        Self::apply_env_var(
            "NUTRIGUARD_SUGAR_MODERATE_MAX_G",
            &mut s.sugar.moderate_max_g,
        )?;
        Self::apply_env_var("NUTRIGUARD_SUGAR_HIGH_MAX_G", &mut s.sugar.high_max_g)?;

        // Fiber ladder
        Self::apply_env_var(
            "NUTRIGUARD_FIBER_VERY_GOOD_MIN_G",
            &mut s.fiber.very_good_min_g,
        )?;
        Self::apply_env_var("NUTRIGUARD_FIBER_GOOD_MIN_G", &mut s.fiber.good_min_g)?;

        // Saturated fat limits
        Self::apply_env_var(
            "NUTRIGUARD_SATFAT_MAX_ENERGY_PERCENT",
            &mut s.saturated_fat.max_energy_percent,
        )?;
        Self::apply_env_var("NUTRIGUARD_SATFAT_MAX_G", &mut s.saturated_fat.max_g)?;

        // Sodium ladder
        Self::apply_env_var("NUTRIGUARD_SODIUM_LOW_MAX_MG", &mut s.sodium.low_max_mg)?;
        Self::apply_env_var("NUTRIGUARD_SODIUM_OK_MAX_MG", &mut s.sodium.ok_max_mg)?;
        Self::apply_env_var(
            "NUTRIGUARD_SODIUM_CAUTION_MAX_MG",
            &mut s.sodium.caution_max_mg,
        )?;

        // Tier floors
        Self::apply_env_var(
            "NUTRIGUARD_FRIENDLY_MIN_SCORE",
            &mut s.tiers.friendly_min_score,
        )?;
        Self::apply_env_var(
            "NUTRIGUARD_ADJUSTED_MIN_SCORE",
            &mut s.tiers.adjusted_min_score,
        )?;

        // Advisory notes
        Self::apply_env_var(
            "NUTRIGUARD_FIBER_NOTE_MIN_CARBS_G",
            &mut s.notes.fiber_note_min_carbs_g,
        )?;

        Ok(self)
    }
}

impl Default for IntelligenceConfig<true> {
    fn default() -> Self {
        Self {
            suitability: SuitabilityConfig::default(),
            _phantom: PhantomData,
        }
    }
}
