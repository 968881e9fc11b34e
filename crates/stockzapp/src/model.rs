use crate::error::{Result, StockzError};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// One inventory record.
///
/// `quantity` and `price` keep the text the user entered. Use [`Item::value`] and
/// friends for arithmetic; they never fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub code: String,
    #[serde(default = "default_number", deserialize_with = "lenient_string")]
    pub quantity: String,
    #[serde(default = "default_number", deserialize_with = "lenient_string")]
    pub price: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
}

impl Item {
    /// Build a new item from form fields, assigning a fresh id.
    ///
    /// Does not validate; callers go through [`ItemFields::validate`] first.
    pub fn new(fields: ItemFields) -> Self {
        let mut item = Self {
            id: new_id(),
            name: String::new(),
            code: String::new(),
            quantity: default_number(),
            price: default_number(),
            location: String::new(),
            category: String::new(),
            description: String::new(),
        };
        item.apply(fields);
        item
    }

    /// Replace every field except `id`.
    pub fn apply(&mut self, fields: ItemFields) {
        self.name = fields.name.trim().to_string();
        self.code = fields.code.trim().to_string();
        self.quantity = or_zero(fields.quantity);
        self.price = or_zero(fields.price);
        self.location = fields.location;
        self.category = fields.category;
        self.description = fields.description;
    }

    pub fn quantity_value(&self) -> f64 {
        parse_number(&self.quantity)
    }

    pub fn price_value(&self) -> f64 {
        parse_number(&self.price)
    }

    /// Stock value of this line: quantity × price.
    pub fn value(&self) -> f64 {
        self.quantity_value() * self.price_value()
    }
}

/// The user-editable part of an [`Item`]: what an add/edit form submits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFields {
    pub name: String,
    pub code: String,
    pub quantity: String,
    pub price: String,
    pub location: String,
    pub category: String,
    pub description: String,
}

impl ItemFields {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            ..Default::default()
        }
    }

    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = quantity.into();
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Name and code are required and must not be blank.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() || self.code.trim().is_empty() {
            return Err(StockzError::Validation(
                "name and code are required".to_string(),
            ));
        }
        Ok(())
    }
}

impl From<&Item> for ItemFields {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            code: item.code.clone(),
            quantity: item.quantity.clone(),
            price: item.price.clone(),
            location: item.location.clone(),
            category: item.category.clone(),
            description: item.description.clone(),
        }
    }
}

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Parse a user-entered number the way a lenient form would.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"12 pcs"` is 12. Anything without a numeric prefix, or that overflows, is 0.
pub fn parse_number(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return 0.0;
    }

    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn default_number() -> String {
    "0".to_string()
}

/// Only the empty string falls back to `"0"`; other text is kept as typed.
fn or_zero(value: String) -> String {
    if value.is_empty() {
        default_number()
    } else {
        value
    }
}

/// Accept strings, numbers and booleans for text fields; `null` becomes empty.
///
/// Older exports carried quantities and prices as JSON numbers.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Array(_) => Err(serde::de::Error::custom(
            "expected a string or number, found an array",
        )),
        Value::Object(_) => Err(serde::de::Error::custom(
            "expected a string or number, found an object",
        )),
    }
}
