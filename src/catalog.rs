//! Product catalog model and loading
//!
//! The catalog is read once from a JSON array, validated, and never mutated
//! afterwards. Category and brand facets are derived at load time in order of
//! first appearance.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Product identifier as it appears in the data file (number or string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub price: f64,
    pub image: String,
}

impl Product {
    /// Price formatted for display, e.g. `$12.50`
    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// The loaded product collection plus derived facets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<String>,
    brands: Vec<String>,
}

impl Catalog {
    /// Build a catalog from products already in memory.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCatalog` if an id repeats or a price is negative or
    /// not finite.
    pub fn from_products(products: Vec<Product>) -> Result<Self> {
        validate_products(&products)?;

        let categories = distinct_in_order(products.iter().map(|p| p.category.as_str()));
        let brands = distinct_in_order(products.iter().map(|p| p.brand.as_str()));
        debug!(
            products = products.len(),
            categories = categories.len(),
            brands = brands.len(),
            "Catalog facets derived"
        );

        Ok(Self {
            products,
            categories,
            brands,
        })
    }

    /// Parse a catalog from a JSON array of product records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::from_products(products)
    }

    /// Load a catalog from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading catalog from {}", path.display());
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        if catalog.is_empty() {
            warn!("Catalog {} contains no products", path.display());
        } else {
            info!("Loaded {} products", catalog.len());
        }
        Ok(catalog)
    }

    /// All products in dataset order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Distinct categories, first appearance first
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Distinct brands, first appearance first
    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn validate_products(products: &[Product]) -> Result<()> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if !seen.insert(&product.id) {
            return Err(CatalogError::invalid_catalog(format!(
                "duplicate product id {}",
                product.id
            )));
        }
        if !product.price.is_finite() || product.price < 0.0 {
            return Err(CatalogError::invalid_catalog(format!(
                "product {} has invalid price {}",
                product.id, product.price
            )));
        }
    }
    Ok(())
}

fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}
