// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Nutrient vocabulary, score bounds, tier labels, and fixed advisory text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Service identity used in structured logs
pub mod service_names {
    /// Service name for the engine and CLI
    pub const NUTRIGUARD: &str = "nutriguard";
}

/// Canonical short keys for the flat nutrient shape
pub mod nutrient_keys {
    /// Energy (kcal)
    pub const CALORIES: &str = "calories";
    /// Carbohydrates (g)
    pub const CARBS_G: &str = "carbs_g";
    /// Sugar (g)
    pub const SUGAR_G: &str = "sugar_g";
    /// Dietary fiber (g)
    pub const FIBER_G: &str = "fiber_g";
    /// Total fat (g)
    pub const FAT_G: &str = "fat_g";
    /// Saturated fat (g)
    pub const SATURATED_FAT_G: &str = "saturated_fat_g";
    /// Sodium (mg)
    pub const SODIUM_MG: &str = "sodium_mg";
    /// Protein (g)
    pub const PROTEIN_G: &str = "protein_g";

    /// All canonical keys in profile field order
    pub const ALL: [&str; 8] = [
        CALORIES,
        CARBS_G,
        SUGAR_G,
        FIBER_G,
        FAT_G,
        SATURATED_FAT_G,
        SODIUM_MG,
        PROTEIN_G,
    ];
}

/// Human nutrient names used by list-shaped provider payloads (exact, case-sensitive)
pub mod nutrient_names {
    /// Energy, in kcal
    pub const CALORIES: &str = "Calories";
    /// Grams
    pub const CARBOHYDRATES: &str = "Carbohydrates";
    /// Grams
    pub const SUGAR: &str = "Sugar";
    /// Grams
    pub const FIBER: &str = "Fiber";
    /// Grams
    pub const FAT: &str = "Fat";
    /// Grams
    pub const SATURATED_FAT: &str = "Saturated Fat";
    /// Milligrams
    pub const SODIUM: &str = "Sodium";
    /// Grams
    pub const PROTEIN: &str = "Protein";
}

/// Field names used when locating the nutrient source inside a raw item
pub mod item_fields {
    /// Nested nutrition block (`{"nutrition": {...}}`)
    pub const NUTRITION: &str = "nutrition";
    /// Nutrient list or map (`{"nutrients": [...]}`)
    pub const NUTRIENTS: &str = "nutrients";
    /// List entry name key
    pub const ENTRY_NAME: &str = "name";
    /// List entry amount key
    pub const ENTRY_AMOUNT: &str = "amount";
    /// Output key carrying the analysis bundle
    pub const ANALYSIS: &str = "analysis";
}

/// Scoring bounds
pub mod scoring {
    /// Highest attainable score (2 + 2 + 2 + 1 + 1)
    pub const MAX_SCORE: u8 = 8;
    /// Lowest attainable score
    pub const MIN_SCORE: u8 = 0;
    /// Energy density of fat, kcal per gram
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// User-facing text attached to every analysis
pub mod messages {
    /// Fixed disclaimer appended to every analysis
    pub const DISCLAIMER: &str =
        "This information is not medical advice. Consult a physician or dietitian.";

    /// Advisory note text keyed by the flag that triggers it
    pub mod notes {
        /// `carb_borderline`
        pub const CARB_BORDERLINE: &str =
            "Carbohydrates are moderately high; keep the portion small.";
        /// `carb_high`
        pub const CARB_HIGH: &str = "High in carbohydrates; may raise blood sugar sharply.";
        /// `sugar_moderate`
        pub const SUGAR_MODERATE: &str = "Contains a moderate amount of sugar.";
        /// `sugar_high`
        pub const SUGAR_HIGH: &str = "High in sugar; limit how often you eat it.";
        /// `sugar_very_high`
        pub const SUGAR_VERY_HIGH: &str = "Very high in sugar; best avoided.";
        /// `fiber_very_good`
        pub const FIBER_VERY_GOOD: &str =
            "Excellent source of fiber, which helps slow sugar absorption.";
        /// `fiber_low`, emitted only alongside substantial carbohydrates
        pub const FIBER_LOW: &str =
            "Low in fiber for its carbohydrate load; pair it with vegetables.";
        /// `satfat_high`
        pub const SATFAT_HIGH: &str = "High in saturated fat; may affect heart health.";
        /// `sodium_caution`
        pub const SODIUM_CAUTION: &str = "Sodium is elevated; watch your daily salt intake.";
        /// `sodium_high`
        pub const SODIUM_HIGH: &str = "High in sodium; not ideal with high blood pressure.";
    }

    /// Tier labels as displayed on the badge
    pub mod labels {
        /// `diabetes_friendly`
        pub const DIABETES_FRIENDLY: &str = "Ramah Diabetes";
        /// `can_be_adjusted`
        pub const CAN_BE_ADJUSTED: &str = "Boleh dengan Kontrol Porsi";
        /// `not_recommended`
        pub const NOT_RECOMMENDED: &str = "Kurang Ideal";

        /// English rendering of `diabetes_friendly`
        pub const DIABETES_FRIENDLY_EN: &str = "Diabetes-Friendly";
        /// English rendering of `can_be_adjusted`
        pub const CAN_BE_ADJUSTED_EN: &str = "Acceptable with Portion Control";
        /// English rendering of `not_recommended`
        pub const NOT_RECOMMENDED_EN: &str = "Not Ideal";
    }
}
