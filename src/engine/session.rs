//! Stateful engine wrapping the pure computation
//!
//! # Invariants
//!
//! - `visible()` always equals `compute_visible(catalog, filter, sort)` for
//!   the current selections
//! - Every setter recomputes; sort changes are not special-cased

use super::filter::{compute_visible, FilterState, PriceRange, DEFAULT_PRICE_MAX};
use crate::catalog::{Catalog, Product};
use crate::types::SortOption;
use tracing::debug;

/// Catalog plus current selections and the derived visible list
#[derive(Debug, Clone)]
pub struct FilterEngine {
    catalog: Catalog,
    filter: FilterState,
    sort: SortOption,
    /// Upper bound restored by `reset`
    default_price_max: i64,
    visible: Vec<Product>,
}

impl FilterEngine {
    /// Create an engine with unconstrained default selections
    pub fn new(catalog: Catalog) -> Self {
        Self::with_default_price_max(catalog, DEFAULT_PRICE_MAX)
    }

    /// Create an engine whose reset state uses `price_max` as the upper bound
    pub fn with_default_price_max(catalog: Catalog, price_max: i64) -> Self {
        let mut engine = Self {
            catalog,
            filter: FilterState::with_price_max(price_max),
            sort: SortOption::Default,
            default_price_max: price_max,
            visible: Vec::new(),
        };
        engine.recompute();
        engine
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    /// Products passing the current filter, in current sort order
    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    /// True when the current selections exclude every product
    pub fn has_no_results(&self) -> bool {
        self.visible.is_empty()
    }

    /// Set the category filter; empty string means all categories
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.filter.category = category.into();
        self.recompute();
    }

    /// Set the brand filter; empty string means all brands
    pub fn set_brand(&mut self, brand: impl Into<String>) {
        self.filter.brand = brand.into();
        self.recompute();
    }

    pub fn set_price_range(&mut self, range: PriceRange) {
        self.filter.price_range = range;
        self.recompute();
    }

    /// Parse `"min,max"` text and apply it. Malformed text is unconstrained.
    pub fn set_price_text(&mut self, text: &str) {
        self.set_price_range(PriceRange::parse(text));
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
        self.recompute();
    }

    /// Replace all selections at once
    pub fn apply(&mut self, filter: FilterState, sort: SortOption) {
        self.filter = filter;
        self.sort = sort;
        self.recompute();
    }

    /// Restore unconstrained filters and dataset order
    pub fn reset(&mut self) {
        self.filter = FilterState::with_price_max(self.default_price_max);
        self.sort = SortOption::Default;
        self.recompute();
    }

    /// Rebuild the visible list from the full catalog
    pub fn recompute(&mut self) {
        self.visible = compute_visible(self.catalog.products(), &self.filter, self.sort);
        debug!(
            visible = self.visible.len(),
            total = self.catalog.len(),
            sort = %self.sort,
            "Recomputed visible products"
        );
    }
}
