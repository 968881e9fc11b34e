//! Derived values: everything computed from the item list and never stored.
//!
//! All arithmetic goes through [`crate::model::parse_number`], so a malformed
//! quantity or price contributes zero rather than failing the whole report.

use crate::model::Item;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Bucket name for items without a category.
pub const UNCATEGORIZED: &str = "uncategorized";

const UNNAMED: &str = "unnamed";
const NO_CODE: &str = "no code";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InventoryStats {
    pub total_items: usize,
    pub total_quantity: f64,
    pub location_count: usize,
    pub total_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: String,
    pub total_qty: f64,
    pub total_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaxValueItem {
    pub name: String,
    pub code: String,
    pub value: f64,
}

/// Everything a dashboard shows above the item table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InventoryReport {
    pub stats: InventoryStats,
    pub categories: Vec<CategorySummary>,
    pub max_value_item: Option<MaxValueItem>,
}

pub fn total_count(items: &[Item]) -> usize {
    items.len()
}

pub fn total_quantity(items: &[Item]) -> f64 {
    items.iter().map(Item::quantity_value).sum()
}

/// Unique non-blank locations, compared after trimming.
pub fn distinct_location_count(items: &[Item]) -> usize {
    items
        .iter()
        .map(|item| item.location.trim())
        .filter(|loc| !loc.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

pub fn total_value(items: &[Item]) -> f64 {
    items.iter().map(Item::value).sum()
}

pub fn stats(items: &[Item]) -> InventoryStats {
    InventoryStats {
        total_items: total_count(items),
        total_quantity: total_quantity(items),
        location_count: distinct_location_count(items),
        total_value: total_value(items),
    }
}

/// One row per category, in the order each category first appears.
pub fn category_summary(items: &[Item]) -> Vec<CategorySummary> {
    let mut rows: Vec<CategorySummary> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for item in items {
        let category = if item.category.is_empty() {
            UNCATEGORIZED
        } else {
            item.category.as_str()
        };

        let pos = *positions.entry(category).or_insert_with(|| {
            rows.push(CategorySummary {
                category: category.to_string(),
                total_qty: 0.0,
                total_value: 0.0,
            });
            rows.len() - 1
        });

        rows[pos].total_qty += item.quantity_value();
        rows[pos].total_value += item.value();
    }

    rows
}

/// The item with the largest stock value.
///
/// Ties keep the first item encountered. Returns `None` when nothing is worth
/// more than zero.
pub fn max_value_item(items: &[Item]) -> Option<MaxValueItem> {
    let mut best: Option<(&Item, f64)> = None;
    for item in items {
        let value = item.value();
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((item, value)),
        }
    }

    best.filter(|(_, value)| *value > 0.0)
        .map(|(item, value)| MaxValueItem {
            name: non_empty_or(&item.name, UNNAMED),
            code: non_empty_or(&item.code, NO_CODE),
            value,
        })
}

pub fn report(items: &[Item]) -> InventoryReport {
    InventoryReport {
        stats: stats(items),
        categories: category_summary(items),
        max_value_item: max_value_item(items),
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
