use crate::error::{Result, StockzError};
use crate::model::Item;
use crate::store::ItemStore;

pub fn find<S: ItemStore>(store: &S, id: &str) -> Result<Item> {
    store
        .load()?
        .into_iter()
        .find(|item| item.id == id)
        .ok_or_else(|| StockzError::ItemNotFound(id.to_string()))
}

/// Expand a full id or an unambiguous id prefix to the stored id.
///
/// An exact match always wins, so a full id never collides with a longer one.
pub fn resolve_id<S: ItemStore>(store: &S, needle: &str) -> Result<String> {
    let needle = needle.trim();
    if needle.is_empty() {
        return Err(StockzError::ItemNotFound(needle.to_string()));
    }

    let items = store.load()?;
    if items.iter().any(|item| item.id == needle) {
        return Ok(needle.to_string());
    }

    let mut matches = items.iter().filter(|item| item.id.starts_with(needle));
    match (matches.next(), matches.next()) {
        (Some(item), None) => Ok(item.id.clone()),
        (Some(_), Some(_)) => Err(StockzError::Api(format!(
            "Id prefix {} matches more than one item",
            needle
        ))),
        (None, _) => Err(StockzError::ItemNotFound(needle.to_string())),
    }
}
