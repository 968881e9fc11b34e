//! # Data Directory and Context Setup
//!
//! An inventory is one JSON document inside a data directory. Which directory is
//! picked, first match wins:
//!
//! 1. An explicit override (the CLI's `--data`)
//! 2. The `STOCKZ_DATA` environment variable
//! 3. `./.stockz` if it already exists in the working directory
//! 4. The OS data directory (via `directories`), e.g. `~/.local/share/stockz`
//!
//! Configuration (`stockz.toml`) is merged from the global config directory and
//! then the data directory, so a per-directory file overrides the global one.

use crate::api::InventoryApi;
use crate::config::{StockzConfig, CONFIG_FILE_NAME};
use crate::store::fs::FileStore;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const DATA_ENV_VAR: &str = "STOCKZ_DATA";
pub const LOCAL_DIR_NAME: &str = ".stockz";

pub struct StockzContext {
    pub api: InventoryApi<FileStore>,
    pub config: StockzConfig,
    pub data_dir: PathBuf,
}

/// Pick the data directory from the override, the environment value and the
/// working directory.
pub fn resolve_data_dir(
    cwd: &Path,
    data_override: Option<PathBuf>,
    env_override: Option<PathBuf>,
) -> PathBuf {
    if let Some(path) = data_override {
        return path;
    }
    if let Some(path) = env_override.filter(|p| !p.as_os_str().is_empty()) {
        return path;
    }

    let local = cwd.join(LOCAL_DIR_NAME);
    if local.is_dir() {
        return local;
    }

    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or(local)
}

/// Resolve directories, load configuration and open the store.
///
/// Nothing is created on disk here; the data directory appears on first save.
pub fn initialize(cwd: &Path, data_override: Option<PathBuf>) -> StockzContext {
    let env_override = std::env::var_os(DATA_ENV_VAR).map(PathBuf::from);
    let data_dir = resolve_data_dir(cwd, data_override, env_override);

    let mut search_paths = Vec::new();
    if let Some(dirs) = project_dirs() {
        search_paths.push(SearchPath::Path(dirs.config_dir().to_path_buf()));
    }
    search_paths.push(SearchPath::Path(data_dir.clone()));

    let config: StockzConfig = Clapfig::builder()
        .app_name("stockz")
        .file_name(CONFIG_FILE_NAME)
        .search_paths(search_paths)
        .search_mode(SearchMode::Merge)
        .load()
        .unwrap_or_default();

    tracing::debug!(data_dir = %data_dir.display(), ?config, "context initialized");

    let store = FileStore::new(data_dir.join(config.data_file()));
    StockzContext {
        api: InventoryApi::new(store),
        config,
        data_dir,
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "stockz", "stockz")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_override_wins() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(LOCAL_DIR_NAME)).unwrap();
        let explicit = temp.path().join("explicit");

        let dir = resolve_data_dir(
            temp.path(),
            Some(explicit.clone()),
            Some(temp.path().join("from-env")),
        );
        assert_eq!(dir, explicit);
    }

    #[test]
    fn test_env_beats_local_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(LOCAL_DIR_NAME)).unwrap();
        let env_dir = temp.path().join("from-env");

        let dir = resolve_data_dir(temp.path(), None, Some(env_dir.clone()));
        assert_eq!(dir, env_dir);
    }

    #[test]
    fn test_empty_env_is_ignored() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(LOCAL_DIR_NAME)).unwrap();

        let dir = resolve_data_dir(temp.path(), None, Some(PathBuf::new()));
        assert_eq!(dir, temp.path().join(LOCAL_DIR_NAME));
    }

    #[test]
    fn test_existing_local_dir_is_used() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(LOCAL_DIR_NAME)).unwrap();

        let dir = resolve_data_dir(temp.path(), None, None);
        assert_eq!(dir, temp.path().join(LOCAL_DIR_NAME));
    }

    #[test]
    fn test_without_local_dir_falls_back_to_os_dir() {
        let temp = TempDir::new().unwrap();
        let dir = resolve_data_dir(temp.path(), None, None);
        assert_ne!(dir, temp.path().join(LOCAL_DIR_NAME));
    }

    #[test]
    fn test_initialize_with_override_reads_local_config() {
        let temp = TempDir::new().unwrap();
        let data = temp.path().join("data");
        fs::create_dir(&data).unwrap();
        fs::write(
            data.join(CONFIG_FILE_NAME),
            "data_file = \"warehouse.json\"\ncsv_bom = false\n",
        )
        .unwrap();

        let ctx = initialize(temp.path(), Some(data.clone()));

        assert_eq!(ctx.data_dir, data);
        assert_eq!(ctx.config.data_file, "warehouse.json");
        assert!(!ctx.config.csv_bom);
        assert_eq!(ctx.api.store().path(), data.join("warehouse.json"));
    }

    #[test]
    fn test_initialize_defaults_without_config_file() {
        let temp = TempDir::new().unwrap();
        let data = temp.path().join("data");

        let ctx = initialize(temp.path(), Some(data.clone()));

        assert_eq!(ctx.api.store().path(), data.join("inventory.json"));
        assert!(!data.exists());
    }
}
