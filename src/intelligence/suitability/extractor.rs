// ABOUTME: Nutrient extraction from heterogeneous provider payloads into a canonical profile
// ABOUTME: Locates flat-key or name/amount list sources and coerces loosely typed amounts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrient extraction
//!
//! Providers ship nutrition facts in two shapes:
//!
//! - **Flat**: canonical short keys such as `carbs_g` or `sodium_mg`, either on
//!   the item itself or under `nutrition` / `nutrients`
//! - **List**: `[{ "name": "Carbohydrates", "amount": 42 }, ...]` under
//!   `nutrition.nutrients` or `nutrients`
//!
//! Extraction never fails. Missing, null, or unparseable values become `0.0`.

use nutriguard_core::constants::item_fields;
use nutriguard_core::models::{
    NamedAmount, NutrientField, NutrientProfile, RawItem, RawNutrientSource,
};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Exact, case-sensitive list names mapped onto profile fields
static LIST_NAME_FIELDS: LazyLock<HashMap<&'static str, NutrientField>> = LazyLock::new(|| {
    NutrientField::ALL
        .into_iter()
        .map(|field| (field.human_name(), field))
        .collect()
});

/// Borrowed view of wherever an item keeps its nutrients
enum SourceRef<'a> {
    Flat(&'a Map<String, Value>),
    List(&'a [Value]),
}

/// Find the nutrient source inside an item, first match wins:
///
/// 1. `nutrition.nutrients` array
/// 2. `nutrients` array
/// 3. `nutrition` object
/// 4. `nutrients` object
/// 5. the item's own fields
fn locate(item: &Map<String, Value>) -> SourceRef<'_> {
    let nutrition = item.get(item_fields::NUTRITION);
    let nutrients = item.get(item_fields::NUTRIENTS);

    let list = nutrition
        .and_then(|n| n.get(item_fields::NUTRIENTS))
        .and_then(Value::as_array)
        .or_else(|| nutrients.and_then(Value::as_array));
    if let Some(entries) = list {
        return SourceRef::List(entries);
    }

    nutrition
        .and_then(Value::as_object)
        .or_else(|| nutrients.and_then(Value::as_object))
        .map_or(SourceRef::Flat(item), SourceRef::Flat)
}

/// Owned copy of the nutrient source an item would be extracted from
///
/// List entries that are not objects or lack a string `name` are dropped.
#[must_use]
pub fn nutrient_source(item: &RawItem) -> RawNutrientSource {
    match locate(item.fields()) {
        SourceRef::Flat(map) => RawNutrientSource::Flat(map.clone()),
        SourceRef::List(entries) => RawNutrientSource::List(
            entries
                .iter()
                .filter_map(|entry| {
                    let (name, amount) = list_entry(entry)?;
                    Some(NamedAmount {
                        name: name.to_owned(),
                        amount: amount.cloned().unwrap_or(Value::Null),
                    })
                })
                .collect(),
        ),
    }
}

/// Normalize a provider source into a canonical profile
#[must_use]
pub fn extract(source: &RawNutrientSource) -> NutrientProfile {
    match source {
        RawNutrientSource::Flat(map) => extract_flat(map),
        RawNutrientSource::List(entries) => {
            let mut profile = NutrientProfile::default();
            for entry in entries {
                if let Some(field) = LIST_NAME_FIELDS.get(entry.name.as_str()) {
                    profile.set(*field, lenient_f64(&entry.amount));
                }
            }
            profile
        }
    }
}

/// Locate and normalize an item's nutrients without copying the payload
#[must_use]
pub fn extract_item(item: &RawItem) -> NutrientProfile {
    match locate(item.fields()) {
        SourceRef::Flat(map) => extract_flat(map),
        SourceRef::List(entries) => {
            let mut profile = NutrientProfile::default();
            // later duplicates overwrite earlier ones
            for (name, amount) in entries.iter().filter_map(list_entry) {
                if let Some(field) = LIST_NAME_FIELDS.get(name) {
                    profile.set(*field, amount.map_or(0.0, lenient_f64));
                }
            }
            profile
        }
    }
}

fn extract_flat(map: &Map<String, Value>) -> NutrientProfile {
    let mut profile = NutrientProfile::default();
    for field in NutrientField::ALL {
        profile.set(field, map.get(field.key()).map_or(0.0, lenient_f64));
    }
    profile
}

fn list_entry(entry: &Value) -> Option<(&str, Option<&Value>)> {
    let object = entry.as_object()?;
    let name = object.get(item_fields::ENTRY_NAME)?.as_str()?;
    Some((name, object.get(item_fields::ENTRY_AMOUNT)))
}

/// Coerce a loosely typed JSON amount into a number
///
/// Numbers pass through. Strings are trimmed and their longest leading
/// decimal prefix is parsed, so `"12.5 g"` yields `12.5`. Everything else,
/// including non-finite results, yields `0.0`. Sign is preserved here;
/// [`NutrientProfile::set`] clamps negatives.
#[must_use]
pub fn lenient_f64(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_leading_number(s),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => 0.0,
    };
    if parsed.is_finite() {
        parsed
    } else {
        0.0
    }
}

fn parse_leading_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let prefix = &trimmed[..numeric_prefix_len(trimmed)];
    prefix.parse::<f64>().unwrap_or(0.0)
}

/// Length of the longest `[+-]digits[.digits][e[+-]digits]` prefix
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |mut idx: usize| {
        while bytes.get(idx).is_some_and(u8::is_ascii_digit) {
            idx += 1;
        }
        idx
    };

    let mut idx = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(idx);
    let mut has_digits = int_end > idx;
    idx = int_end;

    if bytes.get(idx) == Some(&b'.') {
        let frac_end = digits_from(idx + 1);
        if has_digits || frac_end > idx + 1 {
            has_digits = true;
            idx = frac_end;
        }
    }
    if !has_digits {
        return 0;
    }

    if matches!(bytes.get(idx), Some(b'e' | b'E')) {
        let mut exp = idx + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            idx = exp_end;
        }
    }
    idx
}
