//! Plain-text and JSON rendering for the non-interactive commands

use crate::catalog::{Catalog, Product};
use crate::error::Result;

/// Message printed when the filters exclude everything
pub const NO_RESULTS: &str = "No results found. Try adjusting your filters.";

/// Render products as an aligned text table
pub fn format_table(products: &[Product]) -> String {
    if products.is_empty() {
        return format!("{}\n", NO_RESULTS);
    }

    let headers = ["ID", "NAME", "CATEGORY", "BRAND", "PRICE"];
    let rows: Vec<[String; 5]> = products
        .iter()
        .map(|p| {
            [
                p.id.to_string(),
                p.name.clone(),
                p.category.clone(),
                p.brand.clone(),
                p.formatted_price(),
            ]
        })
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &headers.map(String::from), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            // Price column is right-aligned
            if i == 4 {
                format!("{:>width$}", cell, width = *width)
            } else {
                format!("{:<width$}", cell, width = *width)
            }
        })
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

/// Render products as a pretty JSON array in the data file's schema
pub fn format_json(products: &[Product]) -> Result<String> {
    Ok(serde_json::to_string_pretty(products)?)
}

/// Render the category and brand facets
pub fn format_facets(catalog: &Catalog) -> String {
    let mut out = String::from("Categories:\n");
    for category in catalog.categories() {
        out.push_str(&format!("  {}\n", category));
    }
    out.push_str("Brands:\n");
    for brand in catalog.brands() {
        out.push_str(&format!("  {}\n", brand));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_json_str(
            r#"[
                {"id": 1, "name": "Trail Runner", "category": "Shoes", "brand": "Acme", "price": 120, "image": "a.jpg"},
                {"id": 22, "name": "Cap", "category": "Hats", "brand": "Acme", "price": 9.99, "image": "b.jpg"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_table_has_header_and_rows() {
        let table = format_table(catalog().products());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].contains("Trail Runner"));
        assert!(lines[1].ends_with("$120.00"));
        assert!(lines[2].ends_with("  $9.99"));
    }

    #[test]
    fn test_empty_table_reports_no_results() {
        assert_eq!(format_table(&[]).trim_end(), NO_RESULTS);
    }

    #[test]
    fn test_json_uses_data_schema() {
        let json = format_json(catalog().products()).unwrap();
        let parsed = Catalog::from_json_str(&json).unwrap();
        assert_eq!(parsed.products(), catalog().products());
    }

    #[test]
    fn test_facets_listing() {
        let text = format_facets(&catalog());
        assert_eq!(text, "Categories:\n  Shoes\n  Hats\nBrands:\n  Acme\n");
    }
}
