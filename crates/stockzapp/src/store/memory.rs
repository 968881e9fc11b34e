use super::ItemStore;
use crate::error::{Result, StockzError};
use crate::model::Item;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    items: Vec<Item>,
    saves: usize,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Number of successful `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl ItemStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Item>> {
        Ok(self.items.clone())
    }

    fn save(&mut self, items: &[Item]) -> Result<()> {
        if self.simulate_write_error {
            return Err(StockzError::Store("Simulated write error".to_string()));
        }
        self.items = items.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ItemFields;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_items(mut self, count: usize) -> Self {
            for i in 0..count {
                let fields = ItemFields::new(format!("Item {}", i + 1), format!("C-{}", i + 1))
                    .with_quantity((i + 1).to_string())
                    .with_price("10");
                self.store.items.push(Item::new(fields));
            }
            self
        }

        pub fn with_item(mut self, fields: ItemFields) -> Self {
            self.store.items.push(Item::new(fields));
            self
        }

        /// Push a raw record, bypassing validation (as an import could).
        pub fn with_raw_item(mut self, item: Item) -> Self {
            self.store.items.push(item);
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
