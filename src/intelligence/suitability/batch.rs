// ABOUTME: Batch helpers over annotated items: summary statistics, category filter, ranking
// ABOUTME: Used for search-result lists where many items are evaluated at once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriguard_core::models::{AnnotatedItem, SuitabilityCategory};
use serde::Serialize;
use std::cmp::Reverse;

/// Aggregate view of an evaluated batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    /// Number of items
    pub total: usize,
    /// Items categorized `diabetes_friendly`
    pub diabetes_friendly: usize,
    /// Items categorized `can_be_adjusted`
    pub can_be_adjusted: usize,
    /// Items categorized `not_recommended`
    pub not_recommended: usize,
    /// Mean score, 0 for an empty batch
    pub mean_score: f64,
    /// Index of the highest-scoring item; ties resolve to the earliest
    pub best_index: Option<usize>,
}

impl BatchSummary {
    /// Summarize a batch
    #[must_use]
    pub fn from_items(items: &[AnnotatedItem]) -> Self {
        let mut summary = Self {
            total: items.len(),
            diabetes_friendly: 0,
            can_be_adjusted: 0,
            not_recommended: 0,
            mean_score: 0.0,
            best_index: None,
        };

        let mut score_sum: u32 = 0;
        let mut best: Option<(usize, u8)> = None;
        for (index, item) in items.iter().enumerate() {
            match item.analysis.category {
                SuitabilityCategory::DiabetesFriendly => summary.diabetes_friendly += 1,
                SuitabilityCategory::CanBeAdjusted => summary.can_be_adjusted += 1,
                SuitabilityCategory::NotRecommended => summary.not_recommended += 1,
            }
            let score = item.score();
            score_sum += u32::from(score);
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((index, score));
            }
        }

        if let Ok(count) = u32::try_from(items.len()) {
            if count > 0 {
                summary.mean_score = f64::from(score_sum) / f64::from(count);
            }
        }
        summary.best_index = best.map(|(index, _)| index);
        summary
    }
}

/// Items in one category, in input order
#[must_use]
pub fn filter_by_category(
    items: &[AnnotatedItem],
    category: SuitabilityCategory,
) -> Vec<&AnnotatedItem> {
    items
        .iter()
        .filter(|item| item.analysis.category == category)
        .collect()
}

/// Sort by descending score; equal scores keep their input order
#[must_use]
pub fn rank_by_suitability(mut items: Vec<AnnotatedItem>) -> Vec<AnnotatedItem> {
    items.sort_by_key(|item| Reverse(item.score()));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::intelligence::CategoryTiers;
    use crate::intelligence::suitability::categorizer::categorize_with;
    use crate::intelligence::suitability::composer::compose;
    use crate::intelligence::suitability::rules::RuleOutcome;
    use nutriguard_core::models::{NutrientProfile, RawItem};

    fn scored(score: u8) -> AnnotatedItem {
        let categorization = categorize_with(score, &CategoryTiers::default());
        compose(
            &RawItem::default(),
            &NutrientProfile::default(),
            RuleOutcome {
                score,
                flags: Vec::new(),
            },
            Vec::new(),
            categorization,
        )
    }

    #[test]
    fn test_empty_batch_summary() {
        let summary = BatchSummary::from_items(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.mean_score.abs() < f64::EPSILON);
        assert_eq!(summary.best_index, None);
    }

    #[test]
    fn test_summary_counts_and_best() {
        let items = vec![scored(3), scored(7), scored(5), scored(7)];
        let summary = BatchSummary::from_items(&items);
        assert_eq!(summary.diabetes_friendly, 2);
        assert_eq!(summary.can_be_adjusted, 1);
        assert_eq!(summary.not_recommended, 1);
        assert!((summary.mean_score - 5.5).abs() < f64::EPSILON);
        assert_eq!(summary.best_index, Some(1));
    }

    #[test]
    fn test_ranking_is_stable() {
        let mut items = vec![scored(4), scored(8), scored(4), scored(0)];
        items[0].fields.insert("id".into(), 1.into());
        items[2].fields.insert("id".into(), 3.into());
        let ranked = rank_by_suitability(items);
        let scores: Vec<u8> = ranked.iter().map(AnnotatedItem::score).collect();
        assert_eq!(scores, vec![8, 4, 4, 0]);
        assert_eq!(ranked[1].fields["id"], 1);
        assert_eq!(ranked[2].fields["id"], 3);
    }

    #[test]
    fn test_filter_by_category() {
        let items = vec![scored(1), scored(8), scored(2)];
        let poor = filter_by_category(&items, SuitabilityCategory::NotRecommended);
        assert_eq!(poor.len(), 2);
        assert!(filter_by_category(&items, SuitabilityCategory::CanBeAdjusted).is_empty());
    }
}
