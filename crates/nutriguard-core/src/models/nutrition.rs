// ABOUTME: Canonical nutrient profile and the raw provider shapes it is normalized from
// ABOUTME: NutrientProfile, NutrientField, NamedAmount, and the RawNutrientSource tagged union
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{nutrient_keys, nutrient_names, scoring};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One of the eight canonical nutrient fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientField {
    /// Energy (kcal)
    Calories,
    /// Carbohydrates (g)
    CarbsG,
    /// Sugar (g)
    SugarG,
    /// Dietary fiber (g)
    FiberG,
    /// Total fat (g)
    FatG,
    /// Saturated fat (g)
    SaturatedFatG,
    /// Sodium (mg)
    SodiumMg,
    /// Protein (g)
    ProteinG,
}

impl NutrientField {
    /// All fields in canonical order
    pub const ALL: [Self; 8] = [
        Self::Calories,
        Self::CarbsG,
        Self::SugarG,
        Self::FiberG,
        Self::FatG,
        Self::SaturatedFatG,
        Self::SodiumMg,
        Self::ProteinG,
    ];

    /// Short key used by the flat shape and by annotated output
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Calories => nutrient_keys::CALORIES,
            Self::CarbsG => nutrient_keys::CARBS_G,
            Self::SugarG => nutrient_keys::SUGAR_G,
            Self::FiberG => nutrient_keys::FIBER_G,
            Self::FatG => nutrient_keys::FAT_G,
            Self::SaturatedFatG => nutrient_keys::SATURATED_FAT_G,
            Self::SodiumMg => nutrient_keys::SODIUM_MG,
            Self::ProteinG => nutrient_keys::PROTEIN_G,
        }
    }

    /// Human name used by list-shaped payloads
    #[must_use]
    pub const fn human_name(&self) -> &'static str {
        match self {
            Self::Calories => nutrient_names::CALORIES,
            Self::CarbsG => nutrient_names::CARBOHYDRATES,
            Self::SugarG => nutrient_names::SUGAR,
            Self::FiberG => nutrient_names::FIBER,
            Self::FatG => nutrient_names::FAT,
            Self::SaturatedFatG => nutrient_names::SATURATED_FAT,
            Self::SodiumMg => nutrient_names::SODIUM,
            Self::ProteinG => nutrient_names::PROTEIN,
        }
    }
}

/// Normalized nutrition facts every downstream stage operates on
///
/// Every field is finite and non-negative; absent or unparseable upstream
/// values are represented as `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    /// Energy (kcal)
    pub calories: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Sugar (g)
    pub sugar_g: f64,
    /// Dietary fiber (g)
    pub fiber_g: f64,
    /// Total fat (g)
    pub fat_g: f64,
    /// Saturated fat (g)
    pub saturated_fat_g: f64,
    /// Sodium (mg)
    pub sodium_mg: f64,
    /// Protein (g)
    pub protein_g: f64,
}

impl NutrientProfile {
    /// Read one field
    #[must_use]
    pub const fn get(&self, field: NutrientField) -> f64 {
        match field {
            NutrientField::Calories => self.calories,
            NutrientField::CarbsG => self.carbs_g,
            NutrientField::SugarG => self.sugar_g,
            NutrientField::FiberG => self.fiber_g,
            NutrientField::FatG => self.fat_g,
            NutrientField::SaturatedFatG => self.saturated_fat_g,
            NutrientField::SodiumMg => self.sodium_mg,
            NutrientField::ProteinG => self.protein_g,
        }
    }

    /// Write one field, coercing non-finite or negative values to zero
    pub fn set(&mut self, field: NutrientField, value: f64) {
        let value = non_negative(value);
        match field {
            NutrientField::Calories => self.calories = value,
            NutrientField::CarbsG => self.carbs_g = value,
            NutrientField::SugarG => self.sugar_g = value,
            NutrientField::FiberG => self.fiber_g = value,
            NutrientField::FatG => self.fat_g = value,
            NutrientField::SaturatedFatG => self.saturated_fat_g = value,
            NutrientField::SodiumMg => self.sodium_mg = value,
            NutrientField::ProteinG => self.protein_g = value,
        }
    }

    /// Copy with every field forced finite and non-negative
    ///
    /// Profiles built through [`Self::set`] already hold this; the method
    /// exists for profiles constructed by callers with struct literals.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let mut clean = Self::default();
        for field in NutrientField::ALL {
            clean.set(field, self.get(field));
        }
        clean
    }

    /// Share of total energy contributed by saturated fat, in percent
    ///
    /// Calories at or below zero are treated as 1 kcal so the ratio stays finite.
    #[must_use]
    pub fn saturated_fat_energy_percent(&self) -> f64 {
        let calories = if self.calories <= 0.0 {
            1.0
        } else {
            self.calories
        };
        self.saturated_fat_g * scoring::KCAL_PER_GRAM_FAT / calories * 100.0
    }

    /// True when no nutrient carries a value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        NutrientField::ALL
            .iter()
            .all(|field| self.get(*field) == 0.0)
    }

    /// `(key, value)` pairs in canonical order
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        NutrientField::ALL
            .into_iter()
            .map(move |field| (field.key(), self.get(field)))
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// A `{name, amount}` entry from a list-shaped provider payload
///
/// `amount` is kept as raw JSON because providers occasionally send strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedAmount {
    /// Human nutrient name, e.g. `"Saturated Fat"`
    pub name: String,
    /// Raw amount as sent by the provider
    #[serde(default)]
    pub amount: Value,
}

impl NamedAmount {
    /// Convenience constructor for numeric amounts
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount: Value::from(amount),
        }
    }
}

/// Provider-specific nutrient representation, before normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNutrientSource {
    /// Already-named short keys (`carbs_g`, `sodium_mg`, ...) to loosely typed values
    Flat(Map<String, Value>),
    /// Sequence of `{name, amount}` entries with human nutrient names
    List(Vec<NamedAmount>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_coerces_invalid_values_to_zero() {
        let mut profile = NutrientProfile::default();
        profile.set(NutrientField::SugarG, -3.0);
        profile.set(NutrientField::CarbsG, f64::NAN);
        profile.set(NutrientField::SodiumMg, f64::INFINITY);
        profile.set(NutrientField::FiberG, 4.5);

        assert_eq!(profile.sugar_g, 0.0);
        assert_eq!(profile.carbs_g, 0.0);
        assert_eq!(profile.sodium_mg, 0.0);
        assert!((profile.fiber_g - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_saturated_fat_share_guards_zero_calories() {
        let profile = NutrientProfile {
            saturated_fat_g: 3.0,
            ..NutrientProfile::default()
        };
        let percent = profile.saturated_fat_energy_percent();
        assert!(percent.is_finite());
        assert!((percent - 2700.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_field_keys_match_constant_order() {
        let keys: Vec<&str> = NutrientField::ALL.iter().map(NutrientField::key).collect();
        assert_eq!(keys, nutrient_keys::ALL);
    }

    #[test]
    fn test_human_names_are_distinct() {
        let mut names: Vec<&str> = NutrientField::ALL
            .iter()
            .map(NutrientField::human_name)
            .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), NutrientField::ALL.len());
        assert_eq!(NutrientField::SaturatedFatG.human_name(), "Saturated Fat");
    }
}
