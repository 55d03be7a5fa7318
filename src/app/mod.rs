//! Application module
//!
//! Contains the main application loop and key dispatch.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, Focus, LoadState)
//! - `App` - event loop and key dispatch

mod state;

pub use state::{AppState, Focus, LoadState, PAGE_ROWS};

use crate::catalog::Catalog;
use crate::components::keybindings::KeybindingContext;
use crate::config_file::BrowserConfig;
use crate::error::{CatalogError, Result};
use crate::ui::UiRenderer;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tracing::{debug, error, info};

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Interactive browser: state plus renderer
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
    keybinding_context: KeybindingContext,
}

impl App {
    /// Create the application, performing the one catalog load.
    ///
    /// A load failure is not an error here: it becomes the `Failed` state so
    /// the browser can show what went wrong.
    pub fn new(config: &BrowserConfig) -> Self {
        info!(data = %config.data_path.display(), "Starting catalog browser");
        let state = match Catalog::load_from_file(&config.data_path) {
            Ok(catalog) => {
                AppState::loaded(catalog, config.default_price_max, config.initial_sort)
            }
            Err(e) => {
                error!("Failed to load catalog from {:?}: {}", config.data_path, e);
                AppState::failed(format!("{}: {}", config.data_path.display(), e))
            }
        };
        Self::with_state(state)
    }

    /// Create the application around an existing state
    pub fn with_state(state: AppState) -> Self {
        Self {
            state,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the event loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.state.should_quit {
            let state = &mut self.state;
            let renderer = &self.ui_renderer;
            terminal
                .draw(|f| {
                    let (columns, rows) = renderer.product_viewport(f.area());
                    state.set_grid_viewport(columns, rows);
                    renderer.render(f, state);
                })
                .map_err(|e| CatalogError::terminal(format!("Failed to draw frame: {}", e)))?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
                Event::Resize(width, height) => debug!("Terminal resized to {}x{}", width, height),
                _ => {}
            }
        }
        info!("Quitting catalog browser");
        Ok(())
    }

    /// Dispatch one key press
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Help is modal: everything except close and quit is swallowed
        if self.state.help_visible {
            if let Some(action) = self.keybinding_context.resolve_in_help(&key) {
                debug!(?action, "Key action in help");
                self.state.apply_action(action);
            }
            return;
        }

        let focus = self.state.focus;
        if let Some(action) = self.keybinding_context.resolve(focus, &key) {
            debug!(?action, ?focus, "Key action");
            self.state.apply_action(action);
        } else if focus.takes_text() {
            self.state.edit_price(key);
        }
    }
}
