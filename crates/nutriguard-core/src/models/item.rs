// ABOUTME: Raw provider items and their annotated counterparts
// ABOUTME: RawItem wraps an arbitrary JSON object; AnnotatedItem adds canonical nutrients and analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AnalysisResult, NutrientProfile};
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys tried, in order, when naming an item in logs
const DISPLAY_NAME_KEYS: [&str; 5] = ["title", "name", "product_name", "id", "code"];

/// A recipe, food, or product as delivered by an upstream fetcher
///
/// Any JSON object is accepted; unrelated fields are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawItem(Map<String, Value>);

impl RawItem {
    /// Wrap a JSON object
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Borrow the item's fields
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Best-effort human-readable identifier for logs
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        DISPLAY_NAME_KEYS
            .iter()
            .find_map(|key| match self.0.get(*key)? {
                Value::String(s) if !s.is_empty() => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
    }
}

impl TryFrom<Value> for RawItem {
    type Error = AppError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(AppError::invalid_input(format!(
                "Item must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Original item fields plus canonical nutrients and the suitability analysis
///
/// Serializes as a single flat object: the item's own fields, the eight
/// canonical nutrient keys, and an `analysis` key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedItem {
    /// Item fields with canonical nutrients merged in
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    /// Canonical profile the analysis was computed from
    #[serde(skip)]
    pub profile: NutrientProfile,
    /// Suitability assessment
    pub analysis: AnalysisResult,
}

impl AnnotatedItem {
    /// Score shortcut
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.analysis.score
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_try_from_rejects_non_objects() {
        let err = RawItem::try_from(json!([1, 2, 3])).unwrap_err();
        assert!(err.message.contains("array"));
    }

    #[test]
    fn test_display_name_prefers_title() {
        let Value::Object(fields) = json!({"id": 42, "title": "Gado-gado"}) else {
            unreachable!()
        };
        assert_eq!(RawItem::new(fields).display_name().as_deref(), Some("Gado-gado"));
    }
}
