//! Colors and styles for the catalog browser
//!
//! Widgets take their styles from `Styles` instead of naming colors inline,
//! so the filter bar, cards and overlays stay consistent.
//!
//! ```rust
//! use catalogtui::theme::{Colors, Styles};
//!
//! let accent = Colors::ACCENT;
//! let heading = Styles::title();
//! assert_eq!(heading.fg, Some(accent));
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// PALETTE
// =============================================================================

/// Named colors used by the browser
pub struct Colors;

impl Colors {
    pub const TEXT: Color = Color::White;
    /// Card detail lines
    pub const TEXT_DIM: Color = Color::Gray;
    /// Hints, placeholders and unfocused chrome
    pub const TEXT_FAINT: Color = Color::DarkGray;

    /// Headings and focus
    pub const ACCENT: Color = Color::Cyan;
    /// Current selector values
    pub const HIGHLIGHT: Color = Color::Yellow;
    pub const PRICE: Color = Color::LightGreen;

    /// Key names in the help overlay
    pub const KEY: Color = Color::Green;
    /// "No results" card
    pub const EMPTY: Color = Color::Yellow;
    /// Load failure card
    pub const FAILURE: Color = Color::Red;

    pub const BUTTON_BG: Color = Color::Yellow;
    pub const BUTTON_FG: Color = Color::Black;
}

// =============================================================================
// STYLES
// =============================================================================

/// Styles shared by the widgets
pub struct Styles;

impl Styles {
    pub fn text() -> Style {
        Style::default().fg(Colors::TEXT)
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::TEXT_DIM)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Colors::TEXT_FAINT)
    }

    /// Application title and overlay headings
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Product name in a card border
    pub fn card_title() -> Style {
        Style::default()
            .fg(Colors::TEXT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn price() -> Style {
        Style::default()
            .fg(Colors::PRICE)
            .add_modifier(Modifier::BOLD)
    }

    /// Border of the focused control
    pub fn border_active() -> Style {
        Style::default().fg(Colors::ACCENT)
    }

    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::TEXT_FAINT)
    }

    pub fn value() -> Style {
        Style::default()
            .fg(Colors::HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Clear Filters button while focused
    pub fn button_active() -> Style {
        Style::default()
            .fg(Colors::BUTTON_FG)
            .bg(Colors::BUTTON_BG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_inactive() -> Style {
        Style::default().fg(Colors::TEXT)
    }

    pub fn warning() -> Style {
        Style::default().fg(Colors::EMPTY)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Colors::FAILURE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Colors::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::TEXT_FAINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_and_unfocused_borders_differ() {
        assert_ne!(Styles::border_active(), Styles::border_inactive());
    }

    #[test]
    fn test_button_active_has_contrast() {
        let style = Styles::button_active();
        assert_eq!(style.fg, Some(Colors::BUTTON_FG));
        assert_eq!(style.bg, Some(Colors::BUTTON_BG));
    }

    #[test]
    fn test_failure_and_empty_cards_are_distinguishable() {
        assert_ne!(Styles::error().fg, Styles::warning().fg);
    }
}
