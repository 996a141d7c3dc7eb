// ABOUTME: Diabetes-suitability analysis types attached to every evaluated item
// ABOUTME: Criterion, SuitabilityFlag, SuitabilityCategory, BadgeColor, and AnalysisResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::messages::labels;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scoring criterion, listed in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// Total carbohydrate grams
    Carbohydrate,
    /// Sugar grams
    Sugar,
    /// Dietary fiber grams
    Fiber,
    /// Saturated fat share of energy plus absolute grams
    SaturatedFat,
    /// Sodium milligrams
    Sodium,
}

impl Criterion {
    /// Evaluation order
    pub const ALL: [Self; 5] = [
        Self::Carbohydrate,
        Self::Sugar,
        Self::Fiber,
        Self::SaturatedFat,
        Self::Sodium,
    ];
}

/// Threshold band an item fell into for one criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuitabilityFlag {
    /// Carbohydrates within the recommended ceiling
    CarbOk,
    /// Carbohydrates moderately above the ceiling
    CarbBorderline,
    /// Carbohydrates well above the ceiling
    CarbHigh,
    /// Little sugar
    SugarLow,
    /// Moderate sugar
    SugarModerate,
    /// High sugar
    SugarHigh,
    /// Very high sugar
    SugarVeryHigh,
    /// Fiber at or above the very-good floor
    FiberVeryGood,
    /// Fiber at or above the good floor
    FiberGood,
    /// Fiber below the good floor
    FiberLow,
    /// Saturated fat within both limits
    SatfatOk,
    /// Saturated fat exceeds the energy-share or gram limit
    SatfatHigh,
    /// Sodium low
    SodiumLow,
    /// Sodium acceptable
    SodiumOk,
    /// Sodium elevated
    SodiumCaution,
    /// Sodium high
    SodiumHigh,
}

impl SuitabilityFlag {
    /// Wire identifier, identical to the serialized form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CarbOk => "carb_ok",
            Self::CarbBorderline => "carb_borderline",
            Self::CarbHigh => "carb_high",
            Self::SugarLow => "sugar_low",
            Self::SugarModerate => "sugar_moderate",
            Self::SugarHigh => "sugar_high",
            Self::SugarVeryHigh => "sugar_very_high",
            Self::FiberVeryGood => "fiber_very_good",
            Self::FiberGood => "fiber_good",
            Self::FiberLow => "fiber_low",
            Self::SatfatOk => "satfat_ok",
            Self::SatfatHigh => "satfat_high",
            Self::SodiumLow => "sodium_low",
            Self::SodiumOk => "sodium_ok",
            Self::SodiumCaution => "sodium_caution",
            Self::SodiumHigh => "sodium_high",
        }
    }

    /// Criterion that produces this flag
    #[must_use]
    pub const fn criterion(&self) -> Criterion {
        match self {
            Self::CarbOk | Self::CarbBorderline | Self::CarbHigh => Criterion::Carbohydrate,
            Self::SugarLow | Self::SugarModerate | Self::SugarHigh | Self::SugarVeryHigh => {
                Criterion::Sugar
            }
            Self::FiberVeryGood | Self::FiberGood | Self::FiberLow => Criterion::Fiber,
            Self::SatfatOk | Self::SatfatHigh => Criterion::SaturatedFat,
            Self::SodiumLow | Self::SodiumOk | Self::SodiumCaution | Self::SodiumHigh => {
                Criterion::Sodium
            }
        }
    }
}

impl fmt::Display for SuitabilityFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-tier suitability classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuitabilityCategory {
    /// Suitable as-is
    DiabetesFriendly,
    /// Acceptable with portion control
    CanBeAdjusted,
    /// Not ideal for blood glucose control
    NotRecommended,
}

impl SuitabilityCategory {
    /// Wire identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DiabetesFriendly => "diabetes_friendly",
            Self::CanBeAdjusted => "can_be_adjusted",
            Self::NotRecommended => "not_recommended",
        }
    }

    /// Badge label shown to users
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::DiabetesFriendly => labels::DIABETES_FRIENDLY,
            Self::CanBeAdjusted => labels::CAN_BE_ADJUSTED,
            Self::NotRecommended => labels::NOT_RECOMMENDED,
        }
    }

    /// English rendering of the badge label
    #[must_use]
    pub const fn english_label(&self) -> &'static str {
        match self {
            Self::DiabetesFriendly => labels::DIABETES_FRIENDLY_EN,
            Self::CanBeAdjusted => labels::CAN_BE_ADJUSTED_EN,
            Self::NotRecommended => labels::NOT_RECOMMENDED_EN,
        }
    }

    /// Badge color for this tier
    #[must_use]
    pub const fn badge_color(&self) -> BadgeColor {
        match self {
            Self::DiabetesFriendly => BadgeColor::Green,
            Self::CanBeAdjusted => BadgeColor::Yellow,
            Self::NotRecommended => BadgeColor::Red,
        }
    }

    /// Parse a wire identifier, accepting `-` in place of `_`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "diabetes_friendly" => Some(Self::DiabetesFriendly),
            "can_be_adjusted" => Some(Self::CanBeAdjusted),
            "not_recommended" => Some(Self::NotRecommended),
            _ => None,
        }
    }
}

impl fmt::Display for SuitabilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge color rendered next to the label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeColor {
    /// `diabetes_friendly`
    Green,
    /// `can_be_adjusted`
    Yellow,
    /// `not_recommended`
    Red,
}

/// Full diabetes-suitability assessment for one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Sum of criterion points, within `0..=8`
    pub score: u8,
    /// Tier derived from the score
    pub category: SuitabilityCategory,
    /// Badge label for the tier
    pub label: String,
    /// Badge color for the tier
    pub badge_color: BadgeColor,
    /// One flag per criterion, in evaluation order
    pub flags: Vec<SuitabilityFlag>,
    /// Advisory notes, in flag order
    pub notes: Vec<String>,
    /// Fixed medical disclaimer
    pub disclaimer: String,
}

impl AnalysisResult {
    /// True if the given flag was raised
    #[must_use]
    pub fn has_flag(&self, flag: SuitabilityFlag) -> bool {
        self.flags.contains(&flag)
    }
}
