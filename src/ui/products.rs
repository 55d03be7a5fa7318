//! Product area rendering: card grid, "no results" card, load failure card

use crate::app::{AppState, Focus, LoadState};
use crate::catalog::Product;
use crate::components::help_overlay::centered_rect;
use crate::theme::Styles;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Minimum card width including borders
pub const CARD_WIDTH: u16 = 30;
/// Card height including borders
pub const CARD_HEIGHT: u16 = 7;

/// Number of card columns that fit in `width`
pub fn grid_columns(width: u16) -> usize {
    usize::from((width / CARD_WIDTH).max(1))
}

/// Card columns and rows that fit in the bordered product area
pub fn grid_viewport(area: Rect) -> (usize, usize) {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let rows = usize::from((inner.height / CARD_HEIGHT).max(1));
    (grid_columns(inner.width), rows)
}

/// Render whichever product view the state calls for
pub fn render_product_area(f: &mut Frame, state: &AppState, area: Rect) {
    match &state.load {
        LoadState::Failed(message) => render_load_failed(f, area, message),
        LoadState::Loaded(engine) if engine.has_no_results() => render_no_results(f, area),
        LoadState::Loaded(engine) => render_grid(f, state, engine.visible(), area),
    }
}

fn render_grid(f: &mut Frame, state: &AppState, products: &[Product], area: Rect) {
    let border_style = if state.focus == Focus::Products {
        Styles::border_active()
    } else {
        Styles::border_inactive()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Products ({}) ", products.len()))
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let (columns, visible_rows) = grid_viewport(area);
    let total_rows = products.len().div_ceil(columns);
    let first_row = state
        .product_scroll
        .min(total_rows.saturating_sub(visible_rows));

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(inner);

    let column_constraints = vec![Constraint::Ratio(1, columns as u32); columns];

    for (row_offset, row_area) in row_areas.iter().enumerate() {
        let start = (first_row + row_offset) * columns;
        if start >= products.len() {
            break;
        }
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(column_constraints.clone())
            .split(*row_area);
        for (cell, product) in cells.iter().zip(products[start..].iter().take(columns)) {
            render_card(f, *cell, product);
        }
    }
}

/// Lines shown inside a product card
pub fn card_lines(product: &Product) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled("Category: ", Styles::text_muted()),
            Span::styled(product.category.clone(), Styles::text_secondary()),
        ]),
        Line::from(vec![
            Span::styled("Price: ", Styles::text_muted()),
            Span::styled(product.formatted_price(), Styles::price()),
        ]),
        Line::from(vec![
            Span::styled("Brand: ", Styles::text_muted()),
            Span::styled(product.brand.clone(), Styles::text_secondary()),
        ]),
        Line::from(Span::styled(product.image.clone(), Styles::text_muted())),
    ]
}

fn render_card(f: &mut Frame, area: Rect, product: &Product) {
    let card = Paragraph::new(card_lines(product)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(format!(" {} ", product.name), Styles::card_title()))
            .border_style(Styles::border_inactive()),
    );
    f.render_widget(card, area);
}

fn render_message_card(f: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>, error: bool) {
    let card_area = centered_rect(50, 40, area);
    let title_style = if error { Styles::error() } else { Styles::warning() };
    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(format!(" {} ", title), title_style))
                .border_style(title_style),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(card, card_area);
}

fn render_no_results(f: &mut Frame, area: Rect) {
    render_message_card(
        f,
        area,
        "No Results Found",
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "Try adjusting your filters to find what you are looking for.",
                Styles::text(),
            )),
            Line::from(""),
            Line::from(Span::styled("Press R to clear filters", Styles::text_muted())),
        ],
        false,
    );
}

fn render_load_failed(f: &mut Frame, area: Rect, message: &str) {
    render_message_card(
        f,
        area,
        "Failed to load catalog",
        vec![
            Line::from(""),
            Line::from(Span::styled(message.to_string(), Styles::text())),
            Line::from(""),
            Line::from(Span::styled(
                "Check the --data path and restart",
                Styles::text_muted(),
            )),
        ],
        true,
    );
}
