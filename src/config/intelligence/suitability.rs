// ABOUTME: Diabetes-suitability thresholds for the five scoring criteria and tier boundaries
// ABOUTME: Carbohydrate, sugar, fiber, saturated fat, sodium ladders plus advisory note triggers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Diabetes-Suitability Configuration
//!
//! Threshold ladders for the five scoring criteria. Defaults follow common
//! per-serving guidance for people managing blood glucose:
//!
//! - Carbohydrate: <= 45 g per meal is comfortably within a typical meal budget
//! - Sugar: <= 5 g qualifies as "low sugar" labelling
//! - Fiber: >= 5 g is a good source, >= 8 g an excellent one
//! - Saturated fat: <= 10% of energy and <= 4 g per serving
//! - Sodium: <= 140 mg is "low sodium" labelling, > 700 mg is high for a single serving

use super::error::ConfigError;
use nutriguard_core::constants::scoring::MAX_SCORE;
use serde::{Deserialize, Serialize};

/// Diabetes-suitability scoring configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuitabilityConfig {
    /// Carbohydrate ladder (grams)
    pub carbohydrate: CarbohydrateThresholds,
    /// Sugar ladder (grams)
    pub sugar: SugarThresholds,
    /// Fiber ladder (grams)
    pub fiber: FiberThresholds,
    /// Saturated fat limits
    pub saturated_fat: SaturatedFatThresholds,
    /// Sodium ladder (milligrams)
    pub sodium: SodiumThresholds,
    /// Score floors for each tier
    pub tiers: CategoryTiers,
    /// Conditions under which advisory notes fire
    pub notes: AdvisoryNoteConfig,
}

/// Carbohydrate ceilings, inclusive
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarbohydrateThresholds {
    /// At or below: `carb_ok`
    pub ok_max_g: f64,
    /// At or below: `carb_borderline`; above: `carb_high`
    pub borderline_max_g: f64,
}

/// Sugar ceilings, inclusive
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SugarThresholds {
    /// At or below: `sugar_low`
    pub low_max_g: f64,
    /// At or below: `sugar_moderate`
    pub moderate_max_g: f64,
    /// At or below: `sugar_high`; above: `sugar_very_high`
    pub high_max_g: f64,
}

/// Fiber floors, inclusive
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiberThresholds {
    /// At or above: `fiber_very_good`
    pub very_good_min_g: f64,
    /// At or above: `fiber_good`; below: `fiber_low`
    pub good_min_g: f64,
}

/// Saturated fat limits; both must hold for `satfat_ok`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaturatedFatThresholds {
    /// Maximum share of total energy, in percent
    pub max_energy_percent: f64,
    /// Maximum absolute grams
    pub max_g: f64,
}

/// Sodium ceilings, inclusive
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SodiumThresholds {
    /// At or below: `sodium_low`
    pub low_max_mg: f64,
    /// At or below: `sodium_ok`
    pub ok_max_mg: f64,
    /// At or below: `sodium_caution`; above: `sodium_high`
    pub caution_max_mg: f64,
}

/// Score floors for the upper two tiers; anything below is `not_recommended`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTiers {
    /// Minimum score for `diabetes_friendly`
    pub friendly_min_score: u8,
    /// Minimum score for `can_be_adjusted`
    pub adjusted_min_score: u8,
}

/// Advisory note triggers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryNoteConfig {
    /// `fiber_low` is only called out when carbohydrates exceed this many grams
    pub fiber_note_min_carbs_g: f64,
}

impl Default for CarbohydrateThresholds {
    fn default() -> Self {
        Self {
            ok_max_g: 45.0,
            borderline_max_g: 60.0,
        }
    }
}

impl Default for SugarThresholds {
    fn default() -> Self {
        Self {
            low_max_g: 5.0,
            moderate_max_g: 10.0,
            high_max_g: 20.0,
        }
    }
}

impl Default for FiberThresholds {
    fn default() -> Self {
        Self {
            very_good_min_g: 8.0,
            good_min_g: 5.0,
        }
    }
}

impl Default for SaturatedFatThresholds {
    fn default() -> Self {
        Self {
            max_energy_percent: 10.0,
            max_g: 4.0,
        }
    }
}

impl Default for SodiumThresholds {
    fn default() -> Self {
        Self {
            low_max_mg: 140.0,
            ok_max_mg: 400.0,
            caution_max_mg: 700.0,
        }
    }
}

impl Default for CategoryTiers {
    fn default() -> Self {
        Self {
            friendly_min_score: 7,
            adjusted_min_score: 4,
        }
    }
}

impl Default for AdvisoryNoteConfig {
    fn default() -> Self {
        Self {
            fiber_note_min_carbs_g: 30.0,
        }
    }
}

impl SuitabilityConfig {
    /// Validate threshold ordering and bounds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for negative or non-finite thresholds,
    /// and `ConfigError::InvalidRange` when a ladder is not strictly ordered or the
    /// tier floors do not partition `0..=8`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all_values = [
            self.carbohydrate.ok_max_g,
            self.carbohydrate.borderline_max_g,
            self.sugar.low_max_g,
            self.sugar.moderate_max_g,
            self.sugar.high_max_g,
            self.fiber.very_good_min_g,
            self.fiber.good_min_g,
            self.saturated_fat.max_energy_percent,
            self.saturated_fat.max_g,
            self.sodium.low_max_mg,
            self.sodium.ok_max_mg,
            self.sodium.caution_max_mg,
            self.notes.fiber_note_min_carbs_g,
        ];
        if all_values.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Suitability thresholds must be finite and non-negative",
            ));
        }

        if !strictly_ascending(&[self.carbohydrate.ok_max_g, self.carbohydrate.borderline_max_g]) {
            return Err(ConfigError::InvalidRange(
                "carbohydrate: ok_max_g must be < borderline_max_g",
            ));
        }
        if !strictly_ascending(&[
            self.sugar.low_max_g,
            self.sugar.moderate_max_g,
            self.sugar.high_max_g,
        ]) {
            return Err(ConfigError::InvalidRange(
                "sugar: low_max_g < moderate_max_g < high_max_g required",
            ));
        }
        if !strictly_ascending(&[self.fiber.good_min_g, self.fiber.very_good_min_g]) {
            return Err(ConfigError::InvalidRange(
                "fiber: good_min_g must be < very_good_min_g",
            ));
        }
        if !strictly_ascending(&[
            self.sodium.low_max_mg,
            self.sodium.ok_max_mg,
            self.sodium.caution_max_mg,
        ]) {
            return Err(ConfigError::InvalidRange(
                "sodium: low_max_mg < ok_max_mg < caution_max_mg required",
            ));
        }

        let tiers = &self.tiers;
        if tiers.adjusted_min_score == 0
            || tiers.adjusted_min_score >= tiers.friendly_min_score
            || tiers.friendly_min_score > MAX_SCORE
        {
            return Err(ConfigError::InvalidRange(
                "tiers: 0 < adjusted_min_score < friendly_min_score <= 8 required",
            ));
        }

        Ok(())
    }
}

fn strictly_ascending(values: &[f64]) -> bool {
    values.windows(2).all(|pair| pair[0] < pair[1])
}
