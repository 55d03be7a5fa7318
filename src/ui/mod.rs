//! Frame rendering for the catalog browser
//!
//! This module is organized into submodules:
//! - `header` - Title bar, navigation bar and help overlay hook
//! - `filters` - Category / price / brand / sort controls and the reset button
//! - `products` - Product card grid and the empty / failed states

mod filters;
mod header;
pub mod products;

use crate::app::AppState;
use crate::components::keybindings::KeybindingContext;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use std::rc::Rc;

/// Draws one frame from an `AppState`
#[derive(Default)]
pub struct UiRenderer {
    keybinding_ctx: KeybindingContext,
}

impl UiRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Card columns and rows the product grid gets in a frame of `area`
    pub fn product_viewport(&self, area: Rect) -> (usize, usize) {
        products::grid_viewport(Self::layout(area)[2])
    }

    /// Render the complete UI based on application state
    pub fn render(&self, f: &mut Frame, state: &AppState) {
        let chunks = Self::layout(f.area());

        header::render_title(f, chunks[0], state);
        filters::render_filter_bar(f, state, chunks[1]);
        products::render_product_area(f, state, chunks[2]);
        header::render_nav_bar(f, state, &self.keybinding_ctx, chunks[3]);

        // Help overlay goes on top of everything
        if state.help_visible {
            header::render_help_overlay(f, state, &self.keybinding_ctx);
        }
    }

    fn layout(area: Rect) -> Rc<[Rect]> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Length(3), // Filter bar
                Constraint::Min(1),    // Products
                Constraint::Length(1), // Navigation bar
            ])
            .split(area)
    }
}
