//! Error types for catalog loading and the terminal front end
//!
//! Library code returns `CatalogError`; the binary wraps it with anyhow
//! context where it needs to.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// Reading the catalog file or talking to the terminal failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not a JSON array of products
    #[error("Malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog parsed but is not usable (duplicate ids, bad prices)
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    pub fn invalid_catalog(msg: impl Into<String>) -> Self {
        Self::InvalidCatalog(msg.into())
    }

    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}
