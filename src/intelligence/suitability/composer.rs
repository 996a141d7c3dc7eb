// ABOUTME: Assembles the annotated output item from the original fields, profile, and analysis
// ABOUTME: Canonical nutrient keys overwrite same-named input fields; everything else passes through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::categorizer::Categorization;
use super::rules::RuleOutcome;
use nutriguard_core::constants::{item_fields, messages};
use nutriguard_core::models::{AnalysisResult, AnnotatedItem, NutrientProfile, RawItem};
use serde_json::Value;

/// Bundle the evaluation outputs into an `AnalysisResult`
#[must_use]
pub fn analysis_result(
    outcome: RuleOutcome,
    notes: Vec<String>,
    categorization: Categorization,
) -> AnalysisResult {
    AnalysisResult {
        score: outcome.score,
        category: categorization.category,
        label: categorization.label.to_owned(),
        badge_color: categorization.badge_color,
        flags: outcome.flags,
        notes,
        disclaimer: messages::DISCLAIMER.to_owned(),
    }
}

/// Build the annotated item; the original is left untouched
///
/// An `analysis` key already present on the input is replaced.
#[must_use]
pub fn compose(
    original: &RawItem,
    profile: &NutrientProfile,
    outcome: RuleOutcome,
    notes: Vec<String>,
    categorization: Categorization,
) -> AnnotatedItem {
    let mut fields = original.fields().clone();
    fields.remove(item_fields::ANALYSIS);
    for (key, value) in profile.entries() {
        fields.insert(key.to_owned(), Value::from(value));
    }

    AnnotatedItem {
        fields,
        profile: *profile,
        analysis: analysis_result(outcome, notes, categorization),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use nutriguard_core::models::{SuitabilityCategory, SuitabilityFlag};
    use serde_json::json;

    fn outcome() -> RuleOutcome {
        RuleOutcome {
            score: 5,
            flags: vec![SuitabilityFlag::CarbOk, SuitabilityFlag::SodiumHigh],
        }
    }

    #[test]
    fn test_compose_overwrites_canonical_keys_and_keeps_others() {
        let original = RawItem::try_from(json!({
            "title": "Nasi uduk",
            "carbs_g": "lots",
            "analysis": {"stale": true},
            "image": "https://img.example/uduk.jpg"
        }))
        .unwrap();
        let profile = NutrientProfile {
            carbs_g: 42.0,
            ..NutrientProfile::default()
        };

        let annotated = compose(
            &original,
            &profile,
            outcome(),
            vec![],
            Categorization::from(SuitabilityCategory::CanBeAdjusted),
        );

        assert_eq!(annotated.fields["title"], json!("Nasi uduk"));
        assert_eq!(annotated.fields["image"], json!("https://img.example/uduk.jpg"));
        assert_eq!(annotated.fields["carbs_g"], json!(42.0));
        assert_eq!(annotated.fields["sodium_mg"], json!(0.0));
        assert!(!annotated.fields.contains_key("analysis"));
        assert_eq!(original.fields()["carbs_g"], json!("lots"));

        let value = serde_json::to_value(&annotated).unwrap();
        assert_eq!(value["analysis"]["score"], json!(5));
        assert_eq!(value["analysis"]["category"], json!("can_be_adjusted"));
        assert_eq!(value["analysis"]["flags"], json!(["carb_ok", "sodium_high"]));
        assert_eq!(value["analysis"]["disclaimer"], json!(messages::DISCLAIMER));
    }

    #[test]
    fn test_profile_is_a_copy() {
        let original = RawItem::default();
        let mut profile = NutrientProfile {
            fiber_g: 3.0,
            ..NutrientProfile::default()
        };
        let annotated = compose(
            &original,
            &profile,
            outcome(),
            vec![],
            Categorization::from(SuitabilityCategory::NotRecommended),
        );
        profile.fiber_g = 10.0;
        assert!((annotated.profile.fiber_g - 3.0).abs() < f64::EPSILON);
    }
}
