//! # Screens
//!
//! One render function per screen, plus the shared chrome (header,
//! footer) and the product-list widget the browsing screens share.
//! Screens only read store state; intents are dispatched by the app's
//! key handler.

pub mod cart;
pub mod catalog;
pub mod deals;
pub mod detail;
pub mod favorites;
pub mod settings;

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use shopfront_core::Product;

use crate::app::{App, InputMode, Screen};
use crate::theme::Palette;

/// Renders the full frame: header, active screen, footer.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let palette = app.palette();
    let [header, body, footer] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
            .areas(frame.area());

    draw_header(frame, header, app, palette);

    match app.screen() {
        Screen::Catalog => catalog::draw(frame, body, app, palette),
        Screen::Detail(id) => detail::draw(frame, body, app, palette, id),
        Screen::Cart => cart::draw(frame, body, app, palette),
        Screen::Deals => deals::draw(frame, body, app, palette),
        Screen::Favorites => favorites::draw(frame, body, app, palette),
        Screen::Settings => settings::draw(frame, body, app, palette),
    }

    draw_footer(frame, footer, app, palette);
}

// =============================================================================
// Chrome
// =============================================================================

fn draw_header(frame: &mut Frame<'_>, area: Rect, app: &App, palette: &Palette) {
    let totals = app.store().cart_totals();
    let cart_badge = if totals.total_items > 0 {
        format!(
            "Cart: {} · {}",
            totals.total_items,
            app.config().format_money(totals.total_price)
        )
    } else {
        "Cart: empty".to_string()
    };

    let left = format!(" {} — {}", app.config().store_name, app.screen().title());
    let right = format!("{} ", cart_badge);

    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(left.chars().count())
        .saturating_sub(right.chars().count());

    let line = Line::from(vec![
        Span::styled(
            left,
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(padding)),
        Span::styled(right, Style::default().fg(palette.accent)),
    ]);

    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Left)
            .block(bordered_block(palette)),
        area,
    );
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect, app: &App, palette: &Palette) {
    let hints = match (app.input_mode(), app.screen()) {
        (InputMode::Search, _) => " type to search │ Enter: save search │ Esc: done",
        (_, Screen::Catalog) => {
            " /: search │ ←→: category │ s: sort │ a: add │ f: favorite │ Enter: details │ 1-5: screens │ q: quit"
        }
        (_, Screen::Detail(_)) => " ←→: quantity │ Enter/a: add to cart │ f: favorite │ Esc: back",
        (_, Screen::Cart) => " ←→: quantity │ x: remove │ C: clear │ Enter: details │ Esc: back",
        (_, Screen::Settings) => " ↑↓: row │ Enter: apply │ ←→: theme │ Esc: back",
        _ => " ↑↓: select │ a: add │ f: favorite │ Enter: details │ 1-5: screens │ Esc: back",
    };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(palette.dim),
        )))
        .block(bordered_block(palette)),
        area,
    );
}

// =============================================================================
// Shared Widgets
// =============================================================================

pub(crate) fn bordered_block(palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
}

pub(crate) fn titled_block(title: String, palette: &Palette) -> Block<'static> {
    bordered_block(palette).title(Span::styled(
        title,
        Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
    ))
}

/// One browsing row: favorite marker, name, category, price (with the
/// deal strike-through when discounted), stock state.
pub(crate) fn product_line(app: &App, product: &Product, palette: &Palette) -> Line<'static> {
    let mut spans = Vec::new();

    let favorite = app.store().is_favorite(product.id);
    spans.push(Span::styled(
        if favorite { "♥ " } else { "  " },
        Style::default().fg(palette.favorite),
    ));

    spans.push(Span::styled(
        format!("{:<24}", product.name),
        Style::default().fg(palette.text),
    ));
    spans.push(Span::styled(
        format!("{:<16}", product.category.label()),
        Style::default().fg(palette.dim),
    ));

    if product.has_discount() {
        spans.push(Span::styled(
            app.config().format_money(product.price),
            Style::default()
                .fg(palette.dim)
                .add_modifier(Modifier::CROSSED_OUT),
        ));
        spans.push(Span::styled(
            format!(" {}", app.config().format_money(product.discounted_price())),
            Style::default().fg(palette.price),
        ));
        spans.push(Span::styled(
            format!("  -{}%", product.discount_percent),
            Style::default().fg(palette.deal),
        ));
    } else {
        spans.push(Span::styled(
            app.config().format_money(product.price),
            Style::default().fg(palette.price),
        ));
    }

    if !product.in_stock {
        spans.push(Span::styled(
            "  out of stock",
            Style::default().fg(palette.dim).add_modifier(Modifier::DIM),
        ));
    }

    let qty = app.store().cart().get().quantity_of(product.id);
    if qty > 0 {
        spans.push(Span::styled(
            format!("  [in cart ×{}]", qty),
            Style::default().fg(palette.accent),
        ));
    }

    Line::from(spans)
}

/// The selectable product list shared by catalog, deals, and favorites.
pub(crate) fn draw_product_list(
    frame: &mut Frame<'_>,
    area: Rect,
    app: &App,
    palette: &Palette,
    title: String,
    products: &[Product],
) {
    let items: Vec<ListItem> = products
        .iter()
        .map(|p| ListItem::new(product_line(app, p, palette)))
        .collect();

    let list = List::new(items)
        .block(titled_block(title, palette))
        .highlight_style(
            Style::default()
                .bg(palette.highlight_bg)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if !products.is_empty() {
        state.select(Some(app.selected().min(products.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

/// Centered placeholder for a screen with nothing to show.
pub(crate) fn empty_state(
    frame: &mut Frame<'_>,
    area: Rect,
    palette: &Palette,
    headline: &str,
    hint: &str,
) {
    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            headline.to_string(),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(palette.dim),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(bordered_block(palette)),
        area,
    );
}
