// ABOUTME: End-to-end tests for the diabetes-suitability engine
// ABOUTME: Covers scoring scenarios, tier boundaries, advisory notes, composition, and batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! End-to-end suitability tests
//!
//! - Reference scenarios scoring 8 and 0
//! - Category boundaries at 7, 6, 4, and 3
//! - Saturated fat with zero calories
//! - Conditional low-fiber note
//! - Determinism, score bounds, and monotonic sugar response
//! - Output composition and batch helpers

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use anyhow::Result;
use nutriguard::constants::messages::{notes, DISCLAIMER};
use nutriguard::intelligence::suitability::{
    analyze_profile, categorize, evaluate_all, evaluate_item, filter_by_category,
    rank_by_suitability, BatchSummary,
};
use nutriguard::models::{
    BadgeColor, NutrientProfile, RawItem, SuitabilityCategory, SuitabilityFlag,
};
use serde_json::json;

mod common;
use common::raw;

// ============================================================================
// REFERENCE SCENARIOS
// ============================================================================

#[test]
fn test_scenario_a_is_diabetes_friendly() {
    common::init_test_logging();
    let annotated = evaluate_item(&raw(json!({
        "carbs_g": 30, "sugar_g": 3, "fiber_g": 9, "fat_g": 5,
        "saturated_fat_g": 1, "sodium_mg": 100, "calories": 300
    })));

    let analysis = &annotated.analysis;
    assert_eq!(analysis.score, 8);
    assert_eq!(analysis.category, SuitabilityCategory::DiabetesFriendly);
    assert_eq!(analysis.badge_color, BadgeColor::Green);
    assert_eq!(analysis.label, "Ramah Diabetes");
    assert_eq!(
        analysis.flags,
        vec![
            SuitabilityFlag::CarbOk,
            SuitabilityFlag::SugarLow,
            SuitabilityFlag::FiberVeryGood,
            SuitabilityFlag::SatfatOk,
            SuitabilityFlag::SodiumLow,
        ]
    );
    assert_eq!(analysis.notes, vec![notes::FIBER_VERY_GOOD.to_owned()]);
    assert_eq!(analysis.disclaimer, DISCLAIMER);
}

#[test]
fn test_scenario_b_is_not_recommended() {
    common::init_test_logging();
    let annotated = evaluate_item(&raw(json!({
        "carbs_g": 70, "sugar_g": 25, "fiber_g": 1, "fat_g": 20,
        "saturated_fat_g": 10, "sodium_mg": 900, "calories": 500
    })));

    let analysis = &annotated.analysis;
    assert_eq!(analysis.score, 0);
    assert_eq!(analysis.category, SuitabilityCategory::NotRecommended);
    assert_eq!(analysis.badge_color, BadgeColor::Red);
    assert_eq!(
        analysis.flags,
        vec![
            SuitabilityFlag::CarbHigh,
            SuitabilityFlag::SugarVeryHigh,
            SuitabilityFlag::FiberLow,
            SuitabilityFlag::SatfatHigh,
            SuitabilityFlag::SodiumHigh,
        ]
    );
    assert_eq!(
        analysis.notes,
        vec![
            notes::CARB_HIGH.to_owned(),
            notes::SUGAR_VERY_HIGH.to_owned(),
            notes::FIBER_LOW.to_owned(),
            notes::SATFAT_HIGH.to_owned(),
            notes::SODIUM_HIGH.to_owned(),
        ]
    );
}

#[test]
fn test_list_shaped_recipe_scores_four() {
    let analysis = evaluate_item(&common::list_shaped_recipe()).analysis;
    // fiber_good 2 + satfat_ok 1 + sodium_ok 1
    assert_eq!(analysis.score, 4);
    assert_eq!(analysis.category, SuitabilityCategory::CanBeAdjusted);
    assert_eq!(analysis.badge_color, BadgeColor::Yellow);
    assert_eq!(
        analysis.notes,
        vec![notes::CARB_HIGH.to_owned(), notes::SUGAR_MODERATE.to_owned()]
    );
}

#[test]
fn test_flat_product_scores_one() {
    let analysis = evaluate_item(&common::flat_product()).analysis;
    assert_eq!(analysis.score, 1);
    assert_eq!(analysis.category, SuitabilityCategory::NotRecommended);
    assert!(analysis.has_flag(SuitabilityFlag::SugarHigh));
    assert!(analysis.notes.contains(&notes::FIBER_LOW.to_owned()));
}

// ============================================================================
// EDGE CASES
// ============================================================================

#[test]
fn test_zero_calories_saturated_fat_is_high() {
    let result = analyze_profile(&NutrientProfile {
        calories: 0.0,
        saturated_fat_g: 3.0,
        ..NutrientProfile::default()
    });
    assert!(result.has_flag(SuitabilityFlag::SatfatHigh));
    assert!(!result.has_flag(SuitabilityFlag::SatfatOk));
}

#[test]
fn test_empty_item_scores_from_zero_defaults() {
    let annotated = evaluate_item(&RawItem::default());
    // zero fiber is the only unfavorable reading
    assert_eq!(annotated.analysis.score, 6);
    assert_eq!(annotated.analysis.category, SuitabilityCategory::CanBeAdjusted);
    assert!(annotated.analysis.has_flag(SuitabilityFlag::FiberLow));
    assert!(annotated.analysis.has_flag(SuitabilityFlag::SatfatOk));
    assert!(annotated.analysis.notes.is_empty());
}

#[test]
fn test_category_boundaries() {
    let cases = [
        (7, SuitabilityCategory::DiabetesFriendly),
        (6, SuitabilityCategory::CanBeAdjusted),
        (4, SuitabilityCategory::CanBeAdjusted),
        (3, SuitabilityCategory::NotRecommended),
    ];
    for (score, expected) in cases {
        assert_eq!(categorize(score).category, expected, "score {score}");
    }
}

#[test]
fn test_category_boundaries_through_profiles() {
    let seven = NutrientProfile {
        sodium_mg: 500.0,
        ..common::ideal_profile()
    };
    let six = NutrientProfile {
        saturated_fat_g: 6.0,
        sodium_mg: 800.0,
        ..common::ideal_profile()
    };
    let four = NutrientProfile {
        fiber_g: 1.0,
        saturated_fat_g: 6.0,
        sodium_mg: 800.0,
        ..common::ideal_profile()
    };
    let three = NutrientProfile {
        sugar_g: 12.0,
        fiber_g: 1.0,
        sodium_mg: 800.0,
        ..common::ideal_profile()
    };

    let expectations = [
        (seven, 7, SuitabilityCategory::DiabetesFriendly),
        (six, 6, SuitabilityCategory::CanBeAdjusted),
        (four, 4, SuitabilityCategory::CanBeAdjusted),
        (three, 3, SuitabilityCategory::NotRecommended),
    ];
    for (profile, score, category) in expectations {
        let result = analyze_profile(&profile);
        assert_eq!(result.score, score);
        assert_eq!(result.category, category);
    }
}

#[test]
fn test_low_fiber_note_depends_on_carbohydrates() {
    let high_carb = analyze_profile(&NutrientProfile {
        fiber_g: 2.0,
        carbs_g: 40.0,
        ..NutrientProfile::default()
    });
    assert!(high_carb.has_flag(SuitabilityFlag::FiberLow));
    assert!(high_carb.notes.contains(&notes::FIBER_LOW.to_owned()));

    let low_carb = analyze_profile(&NutrientProfile {
        fiber_g: 2.0,
        carbs_g: 10.0,
        ..NutrientProfile::default()
    });
    assert!(low_carb.has_flag(SuitabilityFlag::FiberLow));
    assert!(!low_carb.notes.contains(&notes::FIBER_LOW.to_owned()));
}

// ============================================================================
// PROPERTIES
// ============================================================================

#[test]
fn test_evaluation_is_deterministic() {
    let item = common::list_shaped_recipe();
    assert_eq!(evaluate_item(&item), evaluate_item(&item));
}

#[test]
fn test_score_stays_within_bounds() {
    let amounts = [0.0, 1.0, 4.0, 5.0, 9.0, 45.0, 61.0, 150.0, 900.0, 10_000.0];
    for carbs in amounts {
        for sugar in amounts {
            for fiber in amounts {
                let result = analyze_profile(&NutrientProfile {
                    calories: 350.0,
                    carbs_g: carbs,
                    sugar_g: sugar,
                    fiber_g: fiber,
                    saturated_fat_g: fiber / 2.0,
                    sodium_mg: carbs * 10.0,
                    ..NutrientProfile::default()
                });
                assert!(result.score <= 8);
                assert_eq!(result.flags.len(), 5);
            }
        }
    }
}

#[test]
fn test_less_sugar_never_lowers_score() {
    let mut previous = 0;
    for step in 0..=24 {
        let sugar = 15.0 - f64::from(step) * 0.5;
        let score = analyze_profile(&NutrientProfile {
            sugar_g: sugar,
            ..common::ideal_profile()
        })
        .score;
        assert!(score >= previous, "score dropped at sugar {sugar}");
        previous = score;
    }
    assert_eq!(previous, 8);
}

// ============================================================================
// COMPOSITION
// ============================================================================

#[test]
fn test_annotated_output_shape() -> Result<()> {
    let original = raw(json!({
        "id": "r-1",
        "title": "Sayur asem",
        "sugar_g": "2 g",
        "source_url": "https://example.org/sayur-asem",
        "analysis": "stale"
    }));
    let annotated = evaluate_item(&original);
    let value = serde_json::to_value(&annotated)?;

    assert_eq!(value["title"], "Sayur asem");
    assert_eq!(value["source_url"], "https://example.org/sayur-asem");
    assert_eq!(value["sugar_g"], json!(2.0));
    for key in nutriguard::constants::nutrient_keys::ALL {
        assert!(value[key].is_number(), "missing canonical key {key}");
    }

    let analysis = value["analysis"].as_object().unwrap();
    for key in ["score", "category", "label", "badge_color", "flags", "notes", "disclaimer"] {
        assert!(analysis.contains_key(key), "missing analysis key {key}");
    }
    assert_eq!(analysis["badge_color"], "yellow");
    assert_eq!(original.fields()["sugar_g"], "2 g");
    Ok(())
}

// ============================================================================
// BATCHES
// ============================================================================

#[test]
fn test_batch_preserves_input_order() {
    common::init_test_logging();
    let items: Vec<RawItem> = (0..64)
        .map(|i| raw(json!({"id": i, "carbs_g": i, "sugar_g": i % 12})))
        .collect();

    let annotated = evaluate_all(&items);
    assert_eq!(annotated.len(), items.len());
    for (index, item) in annotated.iter().enumerate() {
        assert_eq!(item.fields["id"], index);
        assert_eq!(*item, evaluate_item(&items[index]));
    }
}

#[test]
fn test_empty_batch() {
    assert!(evaluate_all(&[]).is_empty());
    let summary = BatchSummary::from_items(&[]);
    assert_eq!(summary.total, 0);
    assert_eq!(summary.best_index, None);
}

#[test]
fn test_batch_summary_filter_and_rank() {
    let items = vec![
        common::flat_product(),
        raw(json!({"title": "ideal", "calories": 300, "fiber_g": 9, "saturated_fat_g": 1})),
        common::list_shaped_recipe(),
    ];
    let annotated = evaluate_all(&items);

    let summary = BatchSummary::from_items(&annotated);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.diabetes_friendly, 1);
    assert_eq!(summary.can_be_adjusted, 1);
    assert_eq!(summary.not_recommended, 1);
    assert_eq!(summary.best_index, Some(1));
    assert!((summary.mean_score - (1.0 + 8.0 + 4.0) / 3.0).abs() < 1e-9);

    let friendly = filter_by_category(&annotated, SuitabilityCategory::DiabetesFriendly);
    assert_eq!(friendly.len(), 1);
    assert_eq!(friendly[0].fields["title"], "ideal");

    let ranked = rank_by_suitability(annotated);
    let scores: Vec<u8> = ranked.iter().map(|item| item.analysis.score).collect();
    assert_eq!(scores, vec![8, 4, 1]);
}
