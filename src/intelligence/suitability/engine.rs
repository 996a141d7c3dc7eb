// ABOUTME: Suitability engine wiring extraction, rules, notes, categorization, and composition
// ABOUTME: Provides single-item, batch (rayon), and profile-only entry points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::categorizer::categorize_with;
use super::composer::{analysis_result, compose};
use super::extractor::extract_item;
use super::notes::notes_with;
use super::rules::RuleSet;
use crate::config::intelligence::{
    AdvisoryNoteConfig, CategoryTiers, IntelligenceConfig, SuitabilityConfig,
};
use crate::logging::AppLogger;
use nutriguard_core::models::{
    AnalysisResult, AnnotatedItem, NutrientProfile, RawItem, SuitabilityCategory,
};
use rayon::prelude::*;
use std::sync::LazyLock;
use std::time::Instant;
use tracing::debug;

static GLOBAL_ENGINE: LazyLock<SuitabilityEngine> =
    LazyLock::new(|| SuitabilityEngine::new(&IntelligenceConfig::global().suitability));

/// Configured scoring pipeline
///
/// Immutable once built; share it freely across threads.
#[derive(Debug, Clone)]
pub struct SuitabilityEngine {
    rules: RuleSet,
    tiers: CategoryTiers,
    notes: AdvisoryNoteConfig,
}

impl SuitabilityEngine {
    /// Build an engine from explicit thresholds
    #[must_use]
    pub fn new(config: &SuitabilityConfig) -> Self {
        Self {
            rules: RuleSet::from_config(config),
            tiers: config.tiers.clone(),
            notes: config.notes.clone(),
        }
    }

    /// Engine for the process-wide configuration
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL_ENGINE
    }

    /// Rule table in use
    #[must_use]
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Assess a canonical profile
    #[must_use]
    pub fn analyze(&self, profile: &NutrientProfile) -> AnalysisResult {
        let profile = profile.sanitized();
        let outcome = self.rules.evaluate(&profile);
        let notes = notes_with(&outcome.flags, &profile, &self.notes);
        let categorization = categorize_with(outcome.score, &self.tiers);
        analysis_result(outcome, notes, categorization)
    }

    /// Extract, score, and annotate one item
    #[must_use]
    pub fn evaluate_item(&self, item: &RawItem) -> AnnotatedItem {
        let profile = extract_item(item);
        let outcome = self.rules.evaluate(&profile);
        let notes = notes_with(&outcome.flags, &profile, &self.notes);
        let categorization = categorize_with(outcome.score, &self.tiers);

        debug!(
            item = item.display_name().as_deref().unwrap_or("<unnamed>"),
            score = outcome.score,
            category = %categorization.category,
            flags = outcome.flags.len(),
            "Item evaluated"
        );

        compose(item, &profile, outcome, notes, categorization)
    }

    /// Evaluate a batch in parallel; output order matches input order
    #[must_use]
    pub fn evaluate_all(&self, items: &[RawItem]) -> Vec<AnnotatedItem> {
        let start = Instant::now();
        let annotated: Vec<AnnotatedItem> = items
            .par_iter()
            .map(|item| self.evaluate_item(item))
            .collect();

        let friendly = annotated
            .iter()
            .filter(|item| item.analysis.category == SuitabilityCategory::DiabetesFriendly)
            .count();
        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        AppLogger::log_batch_evaluated(annotated.len(), friendly, duration_ms);

        annotated
    }
}

impl Default for SuitabilityEngine {
    fn default() -> Self {
        Self::new(&SuitabilityConfig::default())
    }
}

/// Evaluate one item with the global engine
#[must_use]
pub fn evaluate_item(item: &RawItem) -> AnnotatedItem {
    SuitabilityEngine::global().evaluate_item(item)
}

/// Evaluate a batch with the global engine
#[must_use]
pub fn evaluate_all(items: &[RawItem]) -> Vec<AnnotatedItem> {
    SuitabilityEngine::global().evaluate_all(items)
}

/// Assess a canonical profile with the global engine
#[must_use]
pub fn analyze_profile(profile: &NutrientProfile) -> AnalysisResult {
    SuitabilityEngine::global().analyze(profile)
}
