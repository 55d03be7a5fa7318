use crate::config_file::BrowserConfig;
use crate::engine::{FilterState, PriceRange};
use crate::types::SortOption;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// catalogtui - browse a product catalog with category, price and brand filters
#[derive(Parser)]
#[command(name = "catalogtui")]
#[command(about = "Browse, filter and sort a JSON product catalog")]
#[command(version)]
pub struct Cli {
    /// Path to the JSON product list (overrides the config file)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Path to a JSON settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (the interactive browser logs nowhere otherwise)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive browser (default)
    Browse,
    /// Print the products matching the given filters
    List(ListArgs),
    /// Print the distinct categories and brands in the catalog
    Facets,
    /// Load and validate the catalog file
    Validate,
}

/// Filters and output format for `list`
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Exact category to keep
    #[arg(long)]
    pub category: Option<String>,
    /// Exact brand to keep
    #[arg(short, long)]
    pub brand: Option<String>,
    /// Price range as "min,max"; each side keeps its leading integer
    #[arg(short, long, allow_hyphen_values = true)]
    pub price: Option<String>,
    /// Sort order (default, price-asc, price-desc, name-asc, name-desc)
    #[arg(short, long)]
    pub sort: Option<SortOption>,
    /// Emit a JSON array instead of a table
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// Filter and sort to list with. Flags that were not given fall back to
    /// the settings: `0..=default_price_max` and `initial_sort`.
    pub fn selection(&self, config: &BrowserConfig) -> (FilterState, SortOption) {
        let filter = FilterState {
            category: self.category.clone().unwrap_or_default(),
            brand: self.brand.clone().unwrap_or_default(),
            price_range: self.price.as_deref().map_or_else(
                || PriceRange::new(0, config.default_price_max),
                PriceRange::parse,
            ),
        };
        (filter, self.sort.unwrap_or(config.initial_sort))
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_no_args() {
        // Running with no args should succeed (defaults to the browser)
        let result = Cli::try_parse_from(["catalogtui"]);
        assert!(result.is_ok());
        let cli = result.unwrap();
        assert!(cli.command.is_none());
        assert!(cli.data.is_none());
    }

    #[test]
    fn test_cli_list_with_filters() {
        let cli = Cli::try_parse_from([
            "catalogtui",
            "list",
            "--category",
            "Shoes",
            "--price",
            "10,200",
            "--sort",
            "price-desc",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::List(args)) => {
                assert_eq!(args.category.as_deref(), Some("Shoes"));
                assert!(args.brand.is_none());
                assert_eq!(args.price.as_deref(), Some("10,200"));
                assert_eq!(args.sort, Some(SortOption::PriceDesc));
                assert!(args.json);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_list_accepts_legacy_sort_names() {
        let cli = Cli::try_parse_from(["catalogtui", "list", "--sort", "alphaAsc"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::List(ListArgs {
                sort: Some(SortOption::NameAsc),
                ..
            }))
        ));
    }

    #[test]
    fn test_cli_rejects_unknown_sort() {
        let result = Cli::try_parse_from(["catalogtui", "list", "--sort", "random"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_global_data_flag_after_subcommand() {
        let cli =
            Cli::try_parse_from(["catalogtui", "validate", "--data", "/tmp/products.json"]).unwrap();
        assert_eq!(cli.data.unwrap().to_str().unwrap(), "/tmp/products.json");
        assert!(matches!(cli.command, Some(Commands::Validate)));
    }

    #[test]
    fn test_cli_facets_command() {
        let cli = Cli::try_parse_from(["catalogtui", "facets"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Facets)));
    }

    #[test]
    fn test_list_selection_falls_back_to_settings() {
        let config = BrowserConfig {
            default_price_max: 150,
            initial_sort: SortOption::NameDesc,
            ..Default::default()
        };
        let (filter, sort) = ListArgs::default().selection(&config);
        assert_eq!(filter, FilterState::with_price_max(150));
        assert_eq!(sort, SortOption::NameDesc);
    }

    #[test]
    fn test_list_selection_flags_override_settings() {
        let cli = Cli::try_parse_from([
            "catalogtui", "list", "-b", "Acme", "-p", "-5,99.5", "-s", "price-asc",
        ])
        .unwrap();
        let Some(Commands::List(args)) = cli.command else {
            panic!("Expected List command");
        };
        let config = BrowserConfig {
            default_price_max: 150,
            initial_sort: SortOption::NameDesc,
            ..Default::default()
        };

        let (filter, sort) = args.selection(&config);
        assert_eq!(filter.brand, "Acme");
        assert!(filter.category.is_empty());
        assert_eq!(filter.price_range, PriceRange::new(-5, 99));
        assert_eq!(sort, SortOption::PriceAsc);
    }

    #[test]
    fn test_list_selection_malformed_price_is_unconstrained() {
        let args = ListArgs {
            price: Some("cheap".to_string()),
            ..Default::default()
        };
        let (filter, _) = args.selection(&BrowserConfig::default());
        assert!(filter.price_range.is_unbounded());
    }
}
