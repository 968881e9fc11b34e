//! # Storage Layer
//!
//! The [`ItemStore`] trait is the persistence boundary. Business logic only ever
//! sees "the whole ordered list of items": load it, change it, save it back.
//!
//! ## Contract
//!
//! - `load` on a store that was never written returns an empty list. Absence is
//!   not an error.
//! - `save` overwrites everything. There is no merge and no partial update.
//! - Order is preserved: it is the insertion order the user sees when no sort is
//!   selected.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production store, one pretty-printed JSON array on disk
//!   (`inventory.json` by default), written atomically via tmp file + rename.
//! - [`memory::InMemoryStore`]: For testing logic without filesystem I/O.
//!
//! A SQL table or browser key/value storage would be further implementations of
//! the same trait.

use crate::error::Result;
use crate::model::Item;

pub mod fs;
pub mod memory;

/// Abstract interface for item storage.
pub trait ItemStore {
    /// Load the full, ordered item list.
    fn load(&self) -> Result<Vec<Item>>;

    /// Replace the stored list with `items`.
    fn save(&mut self, items: &[Item]) -> Result<()>;
}
