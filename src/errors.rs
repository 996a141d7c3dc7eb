// ABOUTME: Error module re-exports from the nutriguard-core crate
// ABOUTME: Preserves crate::errors import paths while delegating to the foundation crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Re-exports the error types defined in `nutriguard-core` so callers can use
//! `nutriguard::errors::{AppError, AppResult}` directly.

pub use nutriguard_core::errors::*;
