// ABOUTME: Input loading for nutriguard-cli
// ABOUTME: Reads a JSON object or array of objects from a file or stdin into raw items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriguard::errors::{AppError, AppResult};
use nutriguard::models::RawItem;
use serde_json::{json, Value};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Parsed input plus whether it was a single object
pub struct LoadedItems {
    /// Items in input order
    pub items: Vec<RawItem>,
    /// Input was a bare object rather than an array
    pub single: bool,
}

/// Load items from `path`, or stdin when `None`
pub fn load_items(path: Option<&Path>) -> AppResult<LoadedItems> {
    let raw = match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let loaded = parse_items(serde_json::from_str(&raw)?)?;
    debug!(items = loaded.items.len(), single = loaded.single, "Input loaded");
    Ok(loaded)
}

fn parse_items(value: Value) -> AppResult<LoadedItems> {
    match value {
        Value::Array(values) => {
            let items = values
                .into_iter()
                .enumerate()
                .map(|(index, value)| {
                    RawItem::try_from(value)
                        .map_err(|e| e.with_details(json!({ "index": index })))
                })
                .collect::<AppResult<Vec<_>>>()?;
            Ok(LoadedItems {
                items,
                single: false,
            })
        }
        other => Ok(LoadedItems {
            items: vec![RawItem::try_from(other)?],
            single: true,
        }),
    }
}
