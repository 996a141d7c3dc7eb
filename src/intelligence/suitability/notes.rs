// ABOUTME: Advisory note generation from suitability flags
// ABOUTME: Pure template lookup in flag order, with a carbohydrate condition on the low-fiber note
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::{AdvisoryNoteConfig, IntelligenceConfig};
use nutriguard_core::constants::messages::notes;
use nutriguard_core::models::{NutrientProfile, SuitabilityFlag};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Note templates; flags absent from the table carry no note
static NOTE_TEMPLATES: LazyLock<HashMap<SuitabilityFlag, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(SuitabilityFlag::CarbBorderline, notes::CARB_BORDERLINE);
    m.insert(SuitabilityFlag::CarbHigh, notes::CARB_HIGH);
    m.insert(SuitabilityFlag::SugarModerate, notes::SUGAR_MODERATE);
    m.insert(SuitabilityFlag::SugarHigh, notes::SUGAR_HIGH);
    m.insert(SuitabilityFlag::SugarVeryHigh, notes::SUGAR_VERY_HIGH);
    m.insert(SuitabilityFlag::FiberVeryGood, notes::FIBER_VERY_GOOD);
    m.insert(SuitabilityFlag::FiberLow, notes::FIBER_LOW);
    m.insert(SuitabilityFlag::SatfatHigh, notes::SATFAT_HIGH);
    m.insert(SuitabilityFlag::SodiumCaution, notes::SODIUM_CAUTION);
    m.insert(SuitabilityFlag::SodiumHigh, notes::SODIUM_HIGH);
    m
});

/// Notes for a flag sequence using the global configuration
#[must_use]
pub fn notes_for(flags: &[SuitabilityFlag], profile: &NutrientProfile) -> Vec<String> {
    notes_with(flags, profile, &IntelligenceConfig::global().suitability.notes)
}

/// Notes for a flag sequence, in flag order
///
/// `fiber_low` is only annotated when carbohydrates exceed
/// `config.fiber_note_min_carbs_g`.
#[must_use]
pub fn notes_with(
    flags: &[SuitabilityFlag],
    profile: &NutrientProfile,
    config: &AdvisoryNoteConfig,
) -> Vec<String> {
    flags
        .iter()
        .filter(|flag| match flag {
            SuitabilityFlag::FiberLow => profile.carbs_g > config.fiber_note_min_carbs_g,
            _ => true,
        })
        .filter_map(|flag| NOTE_TEMPLATES.get(flag))
        .map(|note| (*note).to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorable_flags_are_silent() {
        let flags = [
            SuitabilityFlag::CarbOk,
            SuitabilityFlag::SugarLow,
            SuitabilityFlag::FiberGood,
            SuitabilityFlag::SatfatOk,
            SuitabilityFlag::SodiumLow,
            SuitabilityFlag::SodiumOk,
        ];
        let notes = notes_with(&flags, &NutrientProfile::default(), &AdvisoryNoteConfig::default());
        assert!(notes.is_empty());
    }

    #[test]
    fn test_notes_follow_flag_order() {
        let flags = [SuitabilityFlag::SodiumHigh, SuitabilityFlag::CarbHigh];
        let notes = notes_with(&flags, &NutrientProfile::default(), &AdvisoryNoteConfig::default());
        assert_eq!(notes, vec![notes::SODIUM_HIGH.to_owned(), notes::CARB_HIGH.to_owned()]);
    }

    #[test]
    fn test_fiber_low_note_threshold_is_exclusive() {
        let config = AdvisoryNoteConfig::default();
        let at_trigger = NutrientProfile {
            carbs_g: config.fiber_note_min_carbs_g,
            ..NutrientProfile::default()
        };
        assert!(notes_with(&[SuitabilityFlag::FiberLow], &at_trigger, &config).is_empty());

        let above = NutrientProfile {
            carbs_g: config.fiber_note_min_carbs_g + 0.5,
            ..NutrientProfile::default()
        };
        assert_eq!(notes_with(&[SuitabilityFlag::FiberLow], &above, &config).len(), 1);
    }
}
