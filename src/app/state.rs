//! Application state definitions
//!
//! Contains the state the browser renders from: the load outcome, the focused
//! control, selector positions and the price text field. All transitions are
//! plain methods so they can be exercised without a terminal.

use crate::catalog::Catalog;
use crate::components::keybindings::KeyAction;
use crate::engine::FilterEngine;
use crate::input::TextInput;
use crate::types::SortOption;
use crossterm::event::KeyEvent;
use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::{debug, info};

/// Rows moved by PageUp/PageDown in the product grid
pub const PAGE_ROWS: usize = 3;

/// Outcome of the single startup load
#[derive(Debug, Clone)]
pub enum LoadState {
    Loaded(FilterEngine),
    /// Catalog could not be read or parsed; holds the error text
    Failed(String),
}

/// Controls in the filter bar plus the product grid, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Focus {
    #[strum(to_string = "Category")]
    Category,
    #[strum(to_string = "Price Range")]
    PriceRange,
    #[strum(to_string = "Brand")]
    Brand,
    #[strum(to_string = "Sort By")]
    Sort,
    #[strum(to_string = "Clear Filters")]
    ClearFilters,
    #[strum(to_string = "Products")]
    Products,
}

impl Focus {
    pub fn next(&self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let idx = all.iter().position(|f| f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn previous(&self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let idx = all.iter().position(|f| f == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }

    /// Whether printable keys are text for this control
    pub fn takes_text(&self) -> bool {
        matches!(self, Self::PriceRange)
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub load: LoadState,
    pub focus: Focus,
    /// Category selector position; 0 is "All"
    pub category_index: usize,
    /// Brand selector position; 0 is "All"
    pub brand_index: usize,
    pub price_input: TextInput,
    /// First product row shown in the grid
    pub product_scroll: usize,
    /// Card columns in the last drawn grid
    grid_columns: usize,
    /// Card rows that fit in the last drawn grid
    grid_rows: usize,
    pub help_visible: bool,
    pub status_message: String,
    pub should_quit: bool,
}

impl AppState {
    /// State for a successfully loaded catalog
    pub fn loaded(catalog: Catalog, default_price_max: i64, initial_sort: SortOption) -> Self {
        let mut engine = FilterEngine::with_default_price_max(catalog, default_price_max);
        engine.set_sort(initial_sort);
        let price_text = engine.filter().price_range.to_string();
        let status_message = format!("Loaded {} products", engine.catalog().len());

        Self {
            load: LoadState::Loaded(engine),
            focus: Focus::Category,
            category_index: 0,
            brand_index: 0,
            price_input: TextInput::new(price_text),
            product_scroll: 0,
            grid_columns: 1,
            grid_rows: 1,
            help_visible: false,
            status_message,
            should_quit: false,
        }
    }

    /// State for a catalog that failed to load
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            load: LoadState::Failed(message.into()),
            focus: Focus::Products,
            category_index: 0,
            brand_index: 0,
            price_input: TextInput::default(),
            product_scroll: 0,
            grid_columns: 1,
            grid_rows: 1,
            help_visible: false,
            status_message: "Failed to load catalog".to_string(),
            should_quit: false,
        }
    }

    pub fn engine(&self) -> Option<&FilterEngine> {
        match &self.load {
            LoadState::Loaded(engine) => Some(engine),
            LoadState::Failed(_) => None,
        }
    }

    fn engine_mut(&mut self) -> Option<&mut FilterEngine> {
        match &mut self.load {
            LoadState::Loaded(engine) => Some(engine),
            LoadState::Failed(_) => None,
        }
    }

    /// Record the grid shape so scrolling stops at the last full page
    pub fn set_grid_viewport(&mut self, columns: usize, rows: usize) {
        self.grid_columns = columns.max(1);
        self.grid_rows = rows.max(1);
        self.product_scroll = self.product_scroll.min(self.max_scroll());
    }

    /// Largest first row that still fills the grid
    pub fn max_scroll(&self) -> usize {
        let products = self.engine().map_or(0, |e| e.visible().len());
        products
            .div_ceil(self.grid_columns)
            .saturating_sub(self.grid_rows)
    }

    /// Category selector options, "All" first
    pub fn category_options(&self) -> Vec<String> {
        with_all(self.engine().map(|e| e.catalog().categories()))
    }

    /// Brand selector options, "All" first
    pub fn brand_options(&self) -> Vec<String> {
        with_all(self.engine().map(|e| e.catalog().brands()))
    }

    /// Apply a bound action
    pub fn apply_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::FocusNext => self.focus = self.focus.next(),
            KeyAction::FocusPrevious => self.focus = self.focus.previous(),
            KeyAction::OptionNext => self.cycle_option(true),
            KeyAction::OptionPrevious => self.cycle_option(false),
            KeyAction::ScrollUp => self.scroll_up(1),
            KeyAction::ScrollDown => self.scroll_down(1),
            KeyAction::PageUp => self.scroll_up(PAGE_ROWS),
            KeyAction::PageDown => self.scroll_down(PAGE_ROWS),
            KeyAction::Activate => {
                if self.focus == Focus::ClearFilters {
                    self.reset();
                } else {
                    self.focus = self.focus.next();
                }
            }
            KeyAction::Reset => self.reset(),
            KeyAction::Help => self.help_visible = !self.help_visible,
            KeyAction::Dismiss => {
                if self.help_visible {
                    self.help_visible = false;
                } else {
                    self.should_quit = true;
                }
            }
            KeyAction::Quit => self.should_quit = true,
        }
    }

    /// Feed an editing key to the price field and reapply the filter
    pub fn edit_price(&mut self, key: KeyEvent) {
        if self.price_input.handle_key(key) {
            let text = self.price_input.value().to_string();
            if let Some(engine) = self.engine_mut() {
                engine.set_price_text(&text);
                debug!(price = %text, "Price range edited");
            }
            self.after_recompute();
        }
    }

    /// Restore default filters and sort
    pub fn reset(&mut self) {
        let Some(engine) = self.engine_mut() else {
            return;
        };
        engine.reset();
        let price_text = engine.filter().price_range.to_string();
        self.category_index = 0;
        self.brand_index = 0;
        self.price_input.set(price_text);
        info!("Filters cleared");
        self.after_recompute();
    }

    fn cycle_option(&mut self, forward: bool) {
        match self.focus {
            Focus::Category => {
                let options = self.category_options();
                self.category_index = step(self.category_index, options.len(), forward);
                let value = selector_value(&options, self.category_index);
                if let Some(engine) = self.engine_mut() {
                    engine.set_category(value);
                }
                self.after_recompute();
            }
            Focus::Brand => {
                let options = self.brand_options();
                self.brand_index = step(self.brand_index, options.len(), forward);
                let value = selector_value(&options, self.brand_index);
                if let Some(engine) = self.engine_mut() {
                    engine.set_brand(value);
                }
                self.after_recompute();
            }
            Focus::Sort => {
                if let Some(engine) = self.engine_mut() {
                    let sort = if forward {
                        engine.sort().next()
                    } else {
                        engine.sort().previous()
                    };
                    engine.set_sort(sort);
                }
                self.after_recompute();
            }
            Focus::PriceRange | Focus::ClearFilters | Focus::Products => {}
        }
    }

    fn scroll_up(&mut self, rows: usize) {
        self.product_scroll = self.product_scroll.saturating_sub(rows);
    }

    fn scroll_down(&mut self, rows: usize) {
        self.product_scroll = (self.product_scroll + rows).min(self.max_scroll());
    }

    fn after_recompute(&mut self) {
        self.product_scroll = 0;
        if let Some(engine) = self.engine() {
            self.status_message = if engine.has_no_results() {
                "No products match the current filters".to_string()
            } else {
                format!(
                    "Showing {} of {} products",
                    engine.visible().len(),
                    engine.catalog().len()
                )
            };
        }
    }
}

fn with_all(values: Option<&[String]>) -> Vec<String> {
    let mut options = vec!["All".to_string()];
    options.extend(values.unwrap_or_default().iter().cloned());
    options
}

/// Selector value for the engine: "All" (index 0) maps to the empty filter
fn selector_value(options: &[String], index: usize) -> String {
    if index == 0 {
        String::new()
    } else {
        options.get(index).cloned().unwrap_or_default()
    }
}

fn step(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}
