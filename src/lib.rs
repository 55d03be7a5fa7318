//! catalogtui library
//!
//! Catalog loading, the filter-sort engine, and the terminal browser built on
//! top of them.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config_file;
pub mod engine;
pub mod error;
pub mod input;
pub mod output;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use catalog::{Catalog, Product, ProductId};
pub use config_file::BrowserConfig;
pub use engine::{compute_visible, FilterEngine, FilterState, PriceRange};
pub use error::{CatalogError, Result};
pub use types::SortOption;
