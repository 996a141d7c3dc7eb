// ABOUTME: Configuration error type for intelligence settings
// ABOUTME: Range, parse, and ordering failures raised while loading or validating config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Thresholds are not ordered as required
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// A single value is outside its accepted bounds
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// An environment override could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string())
    }
}
