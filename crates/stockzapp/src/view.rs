//! Filter and sort: the derived, never-persisted view over the item list.
//!
//! Both functions return new vectors and leave the stored order alone. Insertion
//! order is what the user gets back when the query is empty and no sort is set.

use crate::error::{Result, StockzError};
use crate::model::Item;
use icu_collator::{Collator, CollatorOptions, Numeric, Strength};
use icu_locid::locale;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Code,
    Location,
    Category,
    Quantity,
    Price,
    /// quantity × price
    Value,
}

impl SortField {
    pub const ALL: [SortField; 7] = [
        SortField::Name,
        SortField::Code,
        SortField::Location,
        SortField::Category,
        SortField::Quantity,
        SortField::Price,
        SortField::Value,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Code => "code",
            SortField::Location => "location",
            SortField::Category => "category",
            SortField::Quantity => "quantity",
            SortField::Price => "price",
            SortField::Value => "value",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = StockzError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == wanted)
            .ok_or_else(|| StockzError::Api(format!("Unknown sort field: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = StockzError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(StockzError::Api(format!("Unknown sort direction: {}", s))),
        }
    }
}

/// Current sort selection. `field: None` means insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn by(field: SortField, direction: SortDirection) -> Self {
        Self {
            field: Some(field),
            direction,
        }
    }

    /// Clicking the same column flips direction; a new column starts ascending.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == Some(field) {
            self.direction = self.direction.flipped();
        } else {
            self.field = Some(field);
            self.direction = SortDirection::Asc;
        }
    }
}

/// Keep items whose searchable text contains `query`, ignoring case.
///
/// A blank query returns every item.
pub fn filter_items(items: &[Item], query: &str) -> Vec<Item> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| search_text(item).contains(&needle))
        .cloned()
        .collect()
}

/// Lowercased name, code, location, category and description, blanks skipped,
/// joined by single spaces.
pub fn search_text(item: &Item) -> String {
    [
        item.name.as_str(),
        item.code.as_str(),
        item.location.as_str(),
        item.category.as_str(),
        item.description.as_str(),
    ]
    .into_iter()
    .filter(|field| !field.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase()
}

/// Stable sort over a copy of `items`.
pub fn sort_items(items: &[Item], config: &SortConfig) -> Vec<Item> {
    let mut sorted = items.to_vec();
    let Some(field) = config.field else {
        return sorted;
    };

    sorted.sort_by(|a, b| {
        let ord = compare_by(field, a, b);
        match config.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    sorted
}

fn compare_by(field: SortField, a: &Item, b: &Item) -> Ordering {
    match field {
        SortField::Name => text_cmp(&a.name, &b.name),
        SortField::Code => text_cmp(&a.code, &b.code),
        SortField::Location => text_cmp(&a.location, &b.location),
        SortField::Category => text_cmp(&a.category, &b.category),
        SortField::Quantity => cmp_numbers(a.quantity_value(), b.quantity_value()),
        SortField::Price => cmp_numbers(a.price_value(), b.price_value()),
        SortField::Value => cmp_numbers(a.value(), b.value()),
    }
}

fn cmp_numbers(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

thread_local! {
    static COLLATOR: Option<Collator> = text_collator();
}

/// Persian collation at primary strength with numeric ordering: case and
/// accents are ignored, letters follow the Persian alphabet, and digit runs
/// compare by value.
fn text_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Primary);
    options.numeric = Some(Numeric::On);
    match Collator::try_new(&locale!("fa").into(), options) {
        Ok(collator) => Some(collator),
        Err(err) => {
            tracing::warn!(error = ?err, "collation data unavailable, using plain natural order");
            None
        }
    }
}

/// Locale-aware text comparison used for the text sort columns.
pub fn text_cmp(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => natural_cmp(a, b),
    })
}

/// Case-insensitive comparison where runs of digits compare by numeric value,
/// so `item2` sorts before `item10`. Letters compare by code point.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let lhs = take_digits(&mut left);
                let rhs = take_digits(&mut right);
                let ord = cmp_digit_runs(&lhs, &rhs);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                if x != y {
                    return x.cmp(&y);
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
