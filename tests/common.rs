// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and representative provider payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutriguard`

use nutriguard::models::{NutrientProfile, RawItem};
use serde_json::{json, Value};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Wrap a JSON literal as a raw item
pub fn raw(value: Value) -> RawItem {
    RawItem::try_from(value).unwrap()
}

/// Lean, high-fiber, low-sodium recipe that meets every criterion
pub fn ideal_profile() -> NutrientProfile {
    NutrientProfile {
        calories: 400.0,
        carbs_g: 30.0,
        sugar_g: 3.0,
        fiber_g: 9.0,
        fat_g: 10.0,
        saturated_fat_g: 2.0,
        sodium_mg: 120.0,
        protein_g: 25.0,
    }
}

/// Sweet, salty, fatty product that fails every criterion
pub fn poor_profile() -> NutrientProfile {
    NutrientProfile {
        calories: 600.0,
        carbs_g: 80.0,
        sugar_g: 35.0,
        fiber_g: 1.0,
        fat_g: 30.0,
        saturated_fat_g: 12.0,
        sodium_mg: 900.0,
        protein_g: 6.0,
    }
}

/// Recipe in the list shape used by recipe search providers
pub fn list_shaped_recipe() -> RawItem {
    raw(json!({
        "id": 716_429,
        "title": "Pasta with Garlic, Scallions, Cauliflower & Breadcrumbs",
        "image": "https://img.example/716429.jpg",
        "nutrition": {
            "nutrients": [
                {"name": "Calories", "amount": 584.0, "unit": "kcal"},
                {"name": "Fat", "amount": 19.4, "unit": "g"},
                {"name": "Saturated Fat", "amount": 3.1, "unit": "g"},
                {"name": "Carbohydrates", "amount": 84.0, "unit": "g"},
                {"name": "Sugar", "amount": 5.2, "unit": "g"},
                {"name": "Sodium", "amount": 387.0, "unit": "mg"},
                {"name": "Protein", "amount": 19.0, "unit": "g"},
                {"name": "Fiber", "amount": 7.0, "unit": "g"}
            ]
        }
    }))
}

/// Packaged product in the flat shape used by product databases
pub fn flat_product() -> RawItem {
    raw(json!({
        "code": "8992753033003",
        "product_name": "Biskuit Gandum",
        "brands": "Contoh",
        "calories": "480",
        "carbs_g": "62 g",
        "sugar_g": 18,
        "fiber_g": "3.5",
        "fat_g": 21,
        "saturated_fat_g": 9.8,
        "sodium_mg": 310,
        "protein_g": null
    }))
}
