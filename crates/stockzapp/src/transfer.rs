//! CSV / JSON encoding for export, and JSON decoding for import.
//!
//! Exports refuse an empty list with [`StockzError::EmptyExportSet`] so callers
//! never write an empty file by accident.

use crate::error::{Result, StockzError};
use crate::model::Item;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub const CSV_HEADER: [&str; 7] = [
    "name",
    "code",
    "quantity",
    "price",
    "location",
    "category",
    "description",
];

const BOM: char = '\u{FEFF}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Conventional file name for a download of the whole inventory.
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "inventory.csv",
            ExportFormat::Json => "inventory.json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => f.write_str("csv"),
            ExportFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = StockzError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(StockzError::Api(format!("Unknown export format: {}", s))),
        }
    }
}

/// Header plus one row per item. Every field is quoted; quotes are doubled.
/// Rows are separated by `\n` with no trailing newline.
pub fn to_csv(items: &[Item], with_bom: bool) -> Result<String> {
    if items.is_empty() {
        return Err(StockzError::EmptyExportSet);
    }

    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(CSV_HEADER.join(","));
    for item in items {
        let row = [
            &item.name,
            &item.code,
            &item.quantity,
            &item.price,
            &item.location,
            &item.category,
            &item.description,
        ]
        .into_iter()
        .map(|field| quote_csv(field))
        .collect::<Vec<_>>()
        .join(",");
        lines.push(row);
    }

    let body = lines.join("\n");
    if with_bom {
        Ok(format!("{}{}", BOM, body))
    } else {
        Ok(body)
    }
}

fn quote_csv(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Pretty-printed array of full items, ids included.
pub fn to_json(items: &[Item]) -> Result<String> {
    if items.is_empty() {
        return Err(StockzError::EmptyExportSet);
    }
    serde_json::to_string_pretty(items).map_err(StockzError::Serialization)
}

/// Decode an uploaded document.
///
/// Only "is a JSON array of objects" is enforced; individual fields are all
/// optional and decoded leniently (see [`Item`]).
pub fn parse_json(raw: &str) -> Result<Vec<Item>> {
    let raw = raw.trim_start_matches(BOM);
    let value: Value = serde_json::from_str(raw).map_err(StockzError::InvalidJson)?;

    let Value::Array(elements) = value else {
        return Err(StockzError::InvalidFormat(
            "expected a JSON array of items".to_string(),
        ));
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(pos, element)| {
            if !element.is_object() {
                return Err(StockzError::InvalidFormat(format!(
                    "entry {} is not an object",
                    pos + 1
                )));
            }
            serde_json::from_value::<Item>(element).map_err(|e| {
                StockzError::InvalidFormat(format!("entry {}: {}", pos + 1, e))
            })
        })
        .collect()
}
