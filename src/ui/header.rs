//! Header and common widget rendering
//!
//! Title bar, navigation bar and the help overlay hook.

use crate::app::AppState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::theme::Styles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar with the status message on the right
pub fn render_title(f: &mut Frame, area: Rect, state: &AppState) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let title = Paragraph::new(Line::from(vec![
        Span::styled(" Product Catalog ", Styles::title()),
        Span::styled(format!("  {}", state.status_message), Styles::text_muted()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Styles::border_inactive()),
    )
    .alignment(Alignment::Left);
    f.render_widget(title, area);
}

/// Bottom bar of key hints for the focused control
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let mut spans = Vec::new();
    for item in keybinding_ctx.get_nav_items(state.focus) {
        spans.push(Span::styled(format!(" {} ", item.key_display), Styles::key_hint()));
        spans.push(Span::styled(format!("{}  ", item.action_label), Styles::nav_hint()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Help popup over the whole frame
pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let help_overlay = HelpOverlay::new(state.focus, keybinding_ctx);
    help_overlay.render(f, f.area());
}
