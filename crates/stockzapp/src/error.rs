use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockzError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid import format: {0}")]
    InvalidFormat(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Nothing to export: the inventory is empty")]
    EmptyExportSet,

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, StockzError>;
