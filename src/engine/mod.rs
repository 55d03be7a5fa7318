//! Filter-sort engine: the part of the browser that decides what is visible.
//!
//! The engine holds the loaded catalog plus the current filter and sort
//! selections. Every selection change recomputes the visible list from the
//! full catalog via the pure `compute_visible` function.

pub mod filter;
mod session;
pub mod sort;

pub use filter::{compute_visible, FilterState, PriceRange, DEFAULT_PRICE_MAX};
pub use session::FilterEngine;
pub use sort::{compare_names, compare_products};
