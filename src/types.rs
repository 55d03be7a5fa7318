//! Type-safe selection types for the catalog browser
//!
//! Textual selector values are proper enums with strum-derived parsing so the
//! CLI, the config file and the TUI all agree on spelling.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Ordering applied to the filtered product list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum SortOption {
    /// Dataset order
    #[default]
    #[serde(alias = "none")]
    #[strum(to_string = "default", serialize = "none")]
    Default,
    #[serde(alias = "priceAsc")]
    #[strum(to_string = "price-asc", serialize = "priceAsc")]
    PriceAsc,
    #[serde(alias = "priceDesc")]
    #[strum(to_string = "price-desc", serialize = "priceDesc")]
    PriceDesc,
    #[serde(alias = "alphaAsc")]
    #[strum(to_string = "name-asc", serialize = "alphaAsc")]
    NameAsc,
    #[serde(alias = "alphaDesc")]
    #[strum(to_string = "name-desc", serialize = "alphaDesc")]
    NameDesc,
}

impl SortOption {
    /// Human-readable label for the sort selector
    pub fn label(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
            Self::NameAsc => "Name: A to Z",
            Self::NameDesc => "Name: Z to A",
        }
    }

    /// Next option in selector order, wrapping around
    pub fn next(&self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let idx = all.iter().position(|o| o == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Previous option in selector order, wrapping around
    pub fn previous(&self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let idx = all.iter().position(|o| o == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}
