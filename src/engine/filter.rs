//! Filter predicates and the visible-list computation

use super::sort::compare_products;
use crate::catalog::Product;
use crate::types::SortOption;
use std::fmt;

/// Upper price bound used by a freshly reset filter
pub const DEFAULT_PRICE_MAX: i64 = 2000;

/// Inclusive price bounds. A missing bound leaves that side unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl PriceRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// No constraint on either side
    pub fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Parse `"min,max"` text from the price field.
    ///
    /// Each side is parsed independently and keeps its leading integer, so
    /// `"0,99.99"` is `0..=99`. A side with no leading integer (including a
    /// missing side) becomes unconstrained. Never fails.
    pub fn parse(text: &str) -> Self {
        let mut parts = text.splitn(2, ',');
        let min = parts.next().and_then(parse_bound);
        let max = parts.next().and_then(parse_bound);
        Self { min, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min.is_none_or(|min| price >= min as f64)
            && self.max.is_none_or(|max| price <= max as f64)
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(0, DEFAULT_PRICE_MAX)
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = |b: Option<i64>| b.map(|v| v.to_string()).unwrap_or_default();
        write!(f, "{},{}", side(self.min), side(self.max))
    }
}

/// Leading integer of one side: optional sign then digits, the rest ignored.
/// `"99.99"` gives 99 and `"100abc"` gives 100; no digits gives `None`.
fn parse_bound(text: &str) -> Option<i64> {
    let text = text.trim();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    // Too many digits saturates rather than dropping the bound
    let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Active inclusion predicates
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Exact-match category; empty means any
    pub category: String,
    pub price_range: PriceRange,
    /// Exact-match brand; empty means any
    pub brand: String,
}

impl FilterState {
    /// Default filter with a custom upper price bound
    pub fn with_price_max(max: i64) -> Self {
        Self {
            price_range: PriceRange::new(0, max),
            ..Self::default()
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        (self.category.is_empty() || product.category == self.category)
            && self.price_range.contains(product.price)
            && (self.brand.is_empty() || product.brand == self.brand)
    }
}

/// Compute the visible subset of `products` for the given selections.
///
/// Pure: the result depends only on the three inputs. Sorting is stable, so
/// ties and `SortOption::Default` keep dataset order.
pub fn compute_visible(
    products: &[Product],
    filter: &FilterState,
    sort: SortOption,
) -> Vec<Product> {
    let mut visible: Vec<Product> = products
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect();

    if sort != SortOption::Default {
        visible.sort_by(|a, b| compare_products(a, b, sort));
    }
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductId;

    fn product(id: u64, name: &str, category: &str, brand: &str, price: f64) -> Product {
        Product {
            id: ProductId::Number(id),
            name: name.to_string(),
            category: category.to_string(),
            brand: brand.to_string(),
            price,
            image: format!("https://img.example/{}.jpg", id),
        }
    }

    fn five_products() -> Vec<Product> {
        vec![
            product(1, "Trail Runner", "Shoes", "Acme", 120.0),
            product(2, "Rain Jacket", "Outerwear", "Nimbus", 89.5),
            product(3, "Road Flyer", "Shoes", "Nimbus", 95.0),
            product(4, "Wool Beanie", "Accessories", "Acme", 15.0),
            product(5, "Down Parka", "Outerwear", "Summit", 310.0),
        ]
    }

    #[test]
    fn test_parse_two_integers() {
        assert_eq!(PriceRange::parse("10,250"), PriceRange::new(10, 250));
        assert_eq!(PriceRange::parse(" 10 , 250 "), PriceRange::new(10, 250));
    }

    #[test]
    fn test_parse_malformed_is_unconstrained() {
        assert!(PriceRange::parse("abc").is_unbounded());
        assert!(PriceRange::parse("").is_unbounded());
        assert!(PriceRange::parse("x,y").is_unbounded());
    }

    #[test]
    fn test_parse_keeps_leading_integer() {
        let range = PriceRange::parse("0,99.99");
        assert_eq!(range.min, Some(0));
        assert_eq!(range.max, Some(99));

        let range = PriceRange::parse("10abc,");
        assert_eq!(range.min, Some(10));
        assert_eq!(range.max, None);

        assert_eq!(PriceRange::parse("-5,+20"), PriceRange::new(-5, 20));
        assert!(PriceRange::parse("$10,$20").is_unbounded());
        assert!(PriceRange::parse("-,+").is_unbounded());
    }

    #[test]
    fn test_parse_saturates_huge_bounds() {
        let range = PriceRange::parse("0,99999999999999999999999");
        assert_eq!(range.max, Some(i64::MAX));
    }

    #[test]
    fn test_parse_partial_input() {
        let range = PriceRange::parse("100");
        assert_eq!(range.min, Some(100));
        assert_eq!(range.max, None);

        let range = PriceRange::parse(",50");
        assert_eq!(range.min, None);
        assert_eq!(range.max, Some(50));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        assert_eq!(PriceRange::default().to_string(), "0,2000");
        assert_eq!(PriceRange::parse("5,").to_string(), "5,");
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = PriceRange::new(10, 20);
        assert!(range.contains(10.0));
        assert!(range.contains(20.0));
        assert!(!range.contains(20.01));
        assert!(!range.contains(9.99));
    }

    #[test]
    fn test_category_filter_exact_match() {
        let filter = FilterState {
            category: "Shoes".to_string(),
            ..FilterState::default()
        };
        let visible = compute_visible(&five_products(), &filter, SortOption::Default);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|p| p.category == "Shoes"));
    }

    #[test]
    fn test_category_filter_is_case_sensitive() {
        let filter = FilterState {
            category: "shoes".to_string(),
            ..FilterState::default()
        };
        assert!(compute_visible(&five_products(), &filter, SortOption::Default).is_empty());
    }

    #[test]
    fn test_brand_and_category_combine() {
        let filter = FilterState {
            category: "Outerwear".to_string(),
            brand: "Nimbus".to_string(),
            ..FilterState::default()
        };
        let visible = compute_visible(&five_products(), &filter, SortOption::Default);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Rain Jacket");
    }

    #[test]
    fn test_zero_price_range_yields_empty() {
        let filter = FilterState {
            price_range: PriceRange::new(0, 0),
            ..FilterState::default()
        };
        assert!(compute_visible(&five_products(), &filter, SortOption::Default).is_empty());
    }

    #[test]
    fn test_inverted_range_yields_empty() {
        let filter = FilterState {
            price_range: PriceRange::new(500, 10),
            ..FilterState::default()
        };
        assert!(compute_visible(&five_products(), &filter, SortOption::Default).is_empty());
    }

    #[test]
    fn test_default_sort_keeps_dataset_order() {
        let visible = compute_visible(&five_products(), &FilterState::default(), SortOption::Default);
        let ids: Vec<String> = visible.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_price_ascending_scenario() {
        let products = vec![
            product(1, "B", "c", "b", 10.0),
            product(2, "A", "c", "b", 5.0),
        ];
        let visible = compute_visible(&products, &FilterState::default(), SortOption::PriceAsc);
        assert_eq!(visible[0].price, 5.0);
        assert_eq!(visible[1].price, 10.0);
    }

    #[test]
    fn test_price_descending() {
        let visible =
            compute_visible(&five_products(), &FilterState::default(), SortOption::PriceDesc);
        let prices: Vec<f64> = visible.iter().map(|p| p.price).collect();
        assert_eq!(prices, [310.0, 120.0, 95.0, 89.5, 15.0]);
    }

    #[test]
    fn test_name_sorts() {
        let visible =
            compute_visible(&five_products(), &FilterState::default(), SortOption::NameAsc);
        assert_eq!(visible[0].name, "Down Parka");
        assert_eq!(visible[4].name, "Wool Beanie");

        let visible =
            compute_visible(&five_products(), &FilterState::default(), SortOption::NameDesc);
        assert_eq!(visible[0].name, "Wool Beanie");
    }

    #[test]
    fn test_with_price_max() {
        let filter = FilterState::with_price_max(100);
        let visible = compute_visible(&five_products(), &filter, SortOption::Default);
        assert_eq!(visible.len(), 3);
    }
}
