//! # Configuration
//!
//! Stockz configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files, environment variables, and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `STOCKZ__DATA_FILE`, `STOCKZ__CSV_BOM`
//! 2. **Data directory config**: `<data dir>/stockz.toml`
//! 3. **Global config**: `stockz.toml` in the OS config directory
//! 4. **Compiled defaults**: `#[config(default = ...)]`
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | `inventory.json` | File name of the inventory inside the data directory |
//! | `csv_bom` | `true` | Prefix CSV exports with a UTF-8 byte order mark |

use confique::Config;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "stockz.toml";

/// Configuration for stockz, stored in `stockz.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StockzConfig {
    /// File name of the inventory document inside the data directory
    #[config(default = "inventory.json")]
    pub data_file: String,

    /// Whether CSV exports start with a byte order mark (spreadsheet apps
    /// need it to detect UTF-8)
    #[config(default = true)]
    pub csv_bom: bool,
}

impl Default for StockzConfig {
    fn default() -> Self {
        Self {
            data_file: crate::store::fs::DEFAULT_FILE_NAME.to_string(),
            csv_bom: true,
        }
    }
}

impl StockzConfig {
    /// The configured file name, or the default when it is blank.
    pub fn data_file(&self) -> &str {
        let name = self.data_file.trim();
        if name.is_empty() {
            crate::store::fs::DEFAULT_FILE_NAME
        } else {
            name
        }
    }
}
