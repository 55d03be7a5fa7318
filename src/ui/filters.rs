//! Filter bar rendering
//!
//! One bordered box per control: Category, Price Range, Brand, Sort By and
//! the Clear Filters button. The focused control gets the active border.

use crate::app::{AppState, Focus};
use crate::theme::Styles;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the filter bar in the given area
pub fn render_filter_bar(f: &mut Frame, state: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(22), // Category
            Constraint::Percentage(18), // Price Range
            Constraint::Percentage(22), // Brand
            Constraint::Percentage(22), // Sort By
            Constraint::Percentage(16), // Clear Filters
        ])
        .split(area);

    let category_options = state.category_options();
    let brand_options = state.brand_options();
    let sort_label = state.engine().map_or("Default", |e| e.sort().label());

    render_selector(
        f,
        chunks[0],
        Focus::Category,
        state,
        option_label(&category_options, state.category_index),
    );
    render_price_field(f, chunks[1], state);
    render_selector(
        f,
        chunks[2],
        Focus::Brand,
        state,
        option_label(&brand_options, state.brand_index),
    );
    render_selector(f, chunks[3], Focus::Sort, state, sort_label);
    render_clear_button(f, chunks[4], state);
}

fn option_label(options: &[String], index: usize) -> &str {
    options.get(index).map_or("All", String::as_str)
}

fn control_block(focus: Focus, state: &AppState) -> Block<'static> {
    let border_style = if state.focus == focus {
        Styles::border_active()
    } else {
        Styles::border_inactive()
    };
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", focus))
        .border_style(border_style)
}

fn render_selector(f: &mut Frame, area: Rect, focus: Focus, state: &AppState, value: &str) {
    let line = if state.focus == focus {
        Line::from(vec![
            Span::styled("< ", Styles::key_hint()),
            Span::styled(value.to_string(), Styles::value()),
            Span::styled(" >", Styles::key_hint()),
        ])
    } else {
        Line::from(Span::styled(value.to_string(), Styles::text()))
    };

    let widget = Paragraph::new(line)
        .block(control_block(focus, state))
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

fn render_price_field(f: &mut Frame, area: Rect, state: &AppState) {
    let value = state.price_input.value();
    let line = if value.is_empty() {
        Line::from(Span::styled("min,max", Styles::text_muted()))
    } else {
        Line::from(Span::styled(value.to_string(), Styles::value()))
    };

    let widget = Paragraph::new(line).block(control_block(Focus::PriceRange, state));
    f.render_widget(widget, area);

    if state.focus == Focus::PriceRange && !state.help_visible && area.width > 2 && area.height > 2 {
        let max_x = area.x + area.width - 2;
        let x = (area.x + 1 + state.price_input.cursor() as u16).min(max_x);
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}

fn render_clear_button(f: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::ClearFilters;
    let style = if focused {
        Styles::button_active()
    } else {
        Styles::button_inactive()
    };
    let border_style = if focused {
        Styles::border_active()
    } else {
        Styles::border_inactive()
    };

    let widget = Paragraph::new(Span::styled("Clear Filters", style))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}
