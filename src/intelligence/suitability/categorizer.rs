// ABOUTME: Maps a 0-8 suitability score onto a three-tier category, display label, and badge color
// ABOUTME: Tier floors are configurable and validated so every score lands in exactly one tier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::{CategoryTiers, IntelligenceConfig};
use nutriguard_core::models::{BadgeColor, SuitabilityCategory};
use serde::Serialize;

/// Category with its display attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Categorization {
    /// Tier identifier
    pub category: SuitabilityCategory,
    /// Badge text
    pub label: &'static str,
    /// Badge color
    pub badge_color: BadgeColor,
}

impl From<SuitabilityCategory> for Categorization {
    fn from(category: SuitabilityCategory) -> Self {
        Self {
            category,
            label: category.label(),
            badge_color: category.badge_color(),
        }
    }
}

/// Categorize with the global tier floors
#[must_use]
pub fn categorize(score: u8) -> Categorization {
    categorize_with(score, &IntelligenceConfig::global().suitability.tiers)
}

/// Categorize with explicit tier floors
#[must_use]
pub const fn categorize_with(score: u8, tiers: &CategoryTiers) -> Categorization {
    let category = if score >= tiers.friendly_min_score {
        SuitabilityCategory::DiabetesFriendly
    } else if score >= tiers.adjusted_min_score {
        SuitabilityCategory::CanBeAdjusted
    } else {
        SuitabilityCategory::NotRecommended
    };
    Categorization {
        category,
        label: category.label(),
        badge_color: category.badge_color(),
    }
}
