// ABOUTME: Threshold rule table that scores a nutrient profile across five diabetes criteria
// ABOUTME: Each criterion is an ordered list of bands; the first matching band awards points and a flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Suitability rules
//!
//! | Criterion     | Favorable                      | Points |
//! |---------------|--------------------------------|--------|
//! | Carbohydrate  | `carbs_g` at most 45           | 2      |
//! | Sugar         | `sugar_g` at most 5            | 2      |
//! | Fiber         | `fiber_g` at least 5           | 2      |
//! | Saturated fat | at most 10% energy and 4 g     | 1      |
//! | Sodium        | `sodium_mg` at most 400        | 1      |
//!
//! Thresholds come from [`SuitabilityConfig`]; the values above are the defaults.

use crate::config::intelligence::{IntelligenceConfig, SuitabilityConfig};
use nutriguard_core::constants::scoring;
use nutriguard_core::models::{Criterion, NutrientProfile, SuitabilityFlag};
use std::sync::LazyLock;

/// Rule table built from the global configuration
static GLOBAL_RULES: LazyLock<RuleSet> =
    LazyLock::new(|| RuleSet::from_config(&IntelligenceConfig::global().suitability));

/// Condition a band checks against the profile
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BandTest {
    /// Criterion measure is at or below the limit
    AtMost(f64),
    /// Criterion measure is at or above the floor
    AtLeast(f64),
    /// Saturated fat energy share and absolute grams are both within limits
    SaturatedFatWithin {
        /// Maximum percent of calories from saturated fat
        max_energy_percent: f64,
        /// Maximum saturated fat grams
        max_g: f64,
    },
    /// Always matches
    Otherwise,
}

/// One threshold band of a criterion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Matching condition
    pub test: BandTest,
    /// Flag recorded when the band matches
    pub flag: SuitabilityFlag,
    /// Points awarded when the band matches
    pub points: u8,
}

impl Band {
    const fn new(test: BandTest, flag: SuitabilityFlag, points: u8) -> Self {
        Self { test, flag, points }
    }
}

/// Ordered bands for one criterion; the first match wins
#[derive(Debug, Clone, PartialEq)]
pub struct SuitabilityRule {
    /// Criterion the bands measure
    pub criterion: Criterion,
    /// Bands in evaluation order, ending with [`BandTest::Otherwise`]
    pub bands: Vec<Band>,
}

impl SuitabilityRule {
    /// Band the profile falls into
    #[must_use]
    pub fn classify(&self, profile: &NutrientProfile) -> Option<&Band> {
        let value = measure(self.criterion, profile);
        self.bands.iter().find(|band| match band.test {
            BandTest::AtMost(limit) => value <= limit,
            BandTest::AtLeast(floor) => value >= floor,
            BandTest::SaturatedFatWithin {
                max_energy_percent,
                max_g,
            } => value <= max_energy_percent && profile.saturated_fat_g <= max_g,
            BandTest::Otherwise => true,
        })
    }
}

/// Value a criterion is compared on; saturated fat is its energy share
fn measure(criterion: Criterion, profile: &NutrientProfile) -> f64 {
    match criterion {
        Criterion::Carbohydrate => profile.carbs_g,
        Criterion::Sugar => profile.sugar_g,
        Criterion::Fiber => profile.fiber_g,
        Criterion::SaturatedFat => profile.saturated_fat_energy_percent(),
        Criterion::Sodium => profile.sodium_mg,
    }
}

/// Score and flags produced by applying every rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Total points, clamped to 0..=8
    pub score: u8,
    /// One flag per criterion, in criterion order
    pub flags: Vec<SuitabilityFlag>,
}

/// Complete rule table, one rule per criterion in [`Criterion::ALL`] order
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    rules: Vec<SuitabilityRule>,
}

impl RuleSet {
    /// Build the table from configured thresholds
    #[must_use]
    pub fn from_config(config: &SuitabilityConfig) -> Self {
        use BandTest::{AtLeast, AtMost, Otherwise, SaturatedFatWithin};
        use SuitabilityFlag as F;

        let carbs = &config.carbohydrate;
        let sugar = &config.sugar;
        let fiber = &config.fiber;
        let satfat = &config.saturated_fat;
        let sodium = &config.sodium;

        let rules = vec![
            SuitabilityRule {
                criterion: Criterion::Carbohydrate,
                bands: vec![
                    Band::new(AtMost(carbs.ok_max_g), F::CarbOk, 2),
                    Band::new(AtMost(carbs.borderline_max_g), F::CarbBorderline, 0),
                    Band::new(Otherwise, F::CarbHigh, 0),
                ],
            },
            SuitabilityRule {
                criterion: Criterion::Sugar,
                bands: vec![
                    Band::new(AtMost(sugar.low_max_g), F::SugarLow, 2),
                    Band::new(AtMost(sugar.moderate_max_g), F::SugarModerate, 0),
                    Band::new(AtMost(sugar.high_max_g), F::SugarHigh, 0),
                    Band::new(Otherwise, F::SugarVeryHigh, 0),
                ],
            },
            SuitabilityRule {
                criterion: Criterion::Fiber,
                bands: vec![
                    Band::new(AtLeast(fiber.very_good_min_g), F::FiberVeryGood, 2),
                    Band::new(AtLeast(fiber.good_min_g), F::FiberGood, 2),
                    Band::new(Otherwise, F::FiberLow, 0),
                ],
            },
            SuitabilityRule {
                criterion: Criterion::SaturatedFat,
                bands: vec![
                    Band::new(
                        SaturatedFatWithin {
                            max_energy_percent: satfat.max_energy_percent,
                            max_g: satfat.max_g,
                        },
                        F::SatfatOk,
                        1,
                    ),
                    Band::new(Otherwise, F::SatfatHigh, 0),
                ],
            },
            SuitabilityRule {
                criterion: Criterion::Sodium,
                bands: vec![
                    Band::new(AtMost(sodium.low_max_mg), F::SodiumLow, 1),
                    Band::new(AtMost(sodium.ok_max_mg), F::SodiumOk, 1),
                    Band::new(AtMost(sodium.caution_max_mg), F::SodiumCaution, 0),
                    Band::new(Otherwise, F::SodiumHigh, 0),
                ],
            },
        ];

        Self { rules }
    }

    /// Rule table for the process-wide configuration
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL_RULES
    }

    /// Rules in evaluation order
    #[must_use]
    pub fn rules(&self) -> &[SuitabilityRule] {
        &self.rules
    }

    /// Apply every rule to a profile
    #[must_use]
    pub fn evaluate(&self, profile: &NutrientProfile) -> RuleOutcome {
        let mut score: u8 = 0;
        let mut flags = Vec::with_capacity(self.rules.len());

        for band in self.rules.iter().filter_map(|rule| rule.classify(profile)) {
            score = score.saturating_add(band.points);
            flags.push(band.flag);
        }

        RuleOutcome {
            score: score.clamp(scoring::MIN_SCORE, scoring::MAX_SCORE),
            flags,
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::from_config(&SuitabilityConfig::default())
    }
}

/// Score a profile with the global rule table
#[must_use]
pub fn evaluate(profile: &NutrientProfile) -> RuleOutcome {
    RuleSet::global().evaluate(profile)
}
