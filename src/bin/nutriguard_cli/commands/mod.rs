// ABOUTME: Re-exports command modules for nutriguard-cli
// ABOUTME: Provides the evaluate, categorize, and config subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod categorize;
pub mod config;
pub mod evaluate;
