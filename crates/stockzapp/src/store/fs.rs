use super::ItemStore;
use crate::error::{Result, StockzError};
use crate::model::Item;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DEFAULT_FILE_NAME: &str = "inventory.json";

/// JSON-file backed store.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `dir/inventory.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path).map_err(StockzError::Io)?;
        }
        Ok(())
    }
}

impl ItemStore for FileStore {
    fn load(&self) -> Result<Vec<Item>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "store file missing, starting empty");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(StockzError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let items: Vec<Item> =
            serde_json::from_str(&content).map_err(StockzError::Serialization)?;
        tracing::debug!(path = %self.path.display(), count = items.len(), "loaded items");
        Ok(items)
    }

    fn save(&mut self, items: &[Item]) -> Result<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new(""));
        self.ensure_dir(dir)?;

        let content = serde_json::to_string_pretty(items).map_err(StockzError::Serialization)?;

        // Atomic write
        let tmp_path = dir.join(format!(".inventory-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(StockzError::Io)?;
        fs::rename(&tmp_path, &self.path).map_err(StockzError::Io)?;

        tracing::debug!(path = %self.path.display(), count = items.len(), "saved items");
        Ok(())
    }
}
