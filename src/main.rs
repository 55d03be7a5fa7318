//! catalogtui - Main entry point
//!
//! Parses arguments, initializes logging, loads the settings file and then
//! either launches the interactive browser or runs a one-shot command.

use anyhow::{Context, Result};
use catalogtui::app::App;
use catalogtui::cli::{Cli, Commands};
use catalogtui::config_file::BrowserConfig;
use catalogtui::engine::{FilterEngine, FilterState};
use catalogtui::output;
use catalogtui::types::SortOption;
use catalogtui::Catalog;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Initialize tracing. Interactive mode only logs when a log file is given,
/// since stdout and stderr belong to the terminal UI.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {:?}", path))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None if !interactive => builder.with_writer(std::io::stderr).init(),
        None => {}
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let interactive = matches!(cli.command, None | Some(Commands::Browse));
    init_logging(cli.log_file.as_deref(), interactive)?;
    info!("catalogtui starting up");

    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading settings from {:?}", path);
            let config = BrowserConfig::load_from_file(path)?;
            config.validate()?;
            config
        }
        None => BrowserConfig::default(),
    };
    if let Some(data) = cli.data {
        config.data_path = data;
    }
    debug!(?config, "Effective settings");

    match cli.command {
        None | Some(Commands::Browse) => run_browser(&config)?,
        Some(Commands::List(args)) => {
            let engine = load_engine(&config);
            let (filter, sort) = args.selection(&config);
            run_list(engine, filter, sort, args.json)?;
        }
        Some(Commands::Facets) => {
            let engine = load_engine(&config);
            print!("{}", output::format_facets(engine.catalog()));
        }
        Some(Commands::Validate) => {
            let engine = load_engine(&config);
            println!(
                "✓ Catalog {:?} is valid: {} products, {} categories, {} brands",
                config.data_path,
                engine.catalog().len(),
                engine.catalog().categories().len(),
                engine.catalog().brands().len()
            );
        }
    }

    Ok(())
}

/// Load the catalog for a one-shot command, exiting with status 1 on failure
fn load_engine(config: &BrowserConfig) -> FilterEngine {
    match Catalog::load_from_file(&config.data_path) {
        Ok(catalog) => FilterEngine::with_default_price_max(catalog, config.default_price_max),
        Err(e) => {
            error!("Failed to load catalog: {}", e);
            eprintln!("✗ Failed to load catalog {:?}: {}", config.data_path, e);
            std::process::exit(1);
        }
    }
}

fn run_list(mut engine: FilterEngine, filter: FilterState, sort: SortOption, json: bool) -> Result<()> {
    engine.apply(filter, sort);
    info!(
        "Listing {} of {} products",
        engine.visible().len(),
        engine.catalog().len()
    );

    if json {
        println!("{}", output::format_json(engine.visible())?);
    } else {
        print!("{}", output::format_table(engine.visible()));
    }
    Ok(())
}

/// Run the interactive browser
fn run_browser(config: &BrowserConfig) -> Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode().context("Failed to enable raw mode")?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout());
    let result = Terminal::new(backend)
        .context("Failed to create terminal")
        .and_then(|mut terminal| {
            let mut app = App::new(config);
            app.run(&mut terminal).map_err(anyhow::Error::from)?;
            terminal.show_cursor().context("Failed to restore cursor")
        });

    // Restore the terminal whether or not the browser exited cleanly
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result
}
