//! Product orderings

use crate::catalog::Product;
use crate::types::SortOption;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two products under `sort`. `SortOption::Default` treats all
/// products as equal so a stable sort leaves them in dataset order.
pub fn compare_products(a: &Product, b: &Product, sort: SortOption) -> Ordering {
    match sort {
        SortOption::Default => Ordering::Equal,
        SortOption::PriceAsc => a.price.total_cmp(&b.price),
        SortOption::PriceDesc => b.price.total_cmp(&a.price),
        SortOption::NameAsc => compare_names(&a.name, &b.name),
        SortOption::NameDesc => compare_names(&b.name, &a.name),
    }
}

/// Locale-style name comparison.
///
/// Names are compared in three tiers, the way collation tables do:
/// base letters first (accents and case ignored), then accents, then case
/// with lowercase before uppercase. So "Apple" < "Écharpe" < "Zebra" and
/// "resume" < "résumé". The final raw comparison makes this a total order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| {
            a.nfd()
                .map(char::is_uppercase)
                .cmp(b.nfd().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// Lowercased letters with combining marks removed
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Lowercased canonical decomposition, marks kept
fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_primary_order() {
        assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_names("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_lowercase_before_uppercase_on_tie() {
        assert_eq!(compare_names("apple", "Apple"), Ordering::Less);
        assert_eq!(compare_names("Apple", "apple"), Ordering::Greater);
        assert_eq!(compare_names("Apple", "Apple"), Ordering::Equal);
    }

    #[test]
    fn test_case_tie_break_applies_to_accented_letters() {
        assert_eq!(compare_names("Élan", "élan"), Ordering::Greater);
        assert_eq!(compare_names("Ärmel", "ärmel"), Ordering::Greater);
    }

    #[test]
    fn test_accented_letters_sort_with_their_base_letter() {
        assert_eq!(compare_names("Élan", "Zebra"), Ordering::Less);
        assert_eq!(compare_names("école", "zoo"), Ordering::Less);
        assert_eq!(compare_names("Écharpe", "Apple"), Ordering::Greater);
    }

    #[test]
    fn test_unaccented_before_accented_on_base_tie() {
        assert_eq!(compare_names("resume", "résumé"), Ordering::Less);
        assert_eq!(compare_names("Resume", "résumé"), Ordering::Less);
    }

    #[test]
    fn test_precomposed_and_decomposed_forms_agree_on_base_order() {
        let precomposed = "\u{e9}clair";
        let decomposed = "e\u{301}clair";
        assert_eq!(compare_names(precomposed, "zest"), Ordering::Less);
        assert_eq!(compare_names(decomposed, "zest"), Ordering::Less);
        assert_ne!(compare_names(precomposed, decomposed), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare_names("Road", "Road Flyer"), Ordering::Less);
    }
}
