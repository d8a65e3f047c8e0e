//! Cart screen: lines with quantity controls and the running totals.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::screens::{empty_state, titled_block};
use crate::theme::Palette;

pub fn draw(frame: &mut Frame<'_>, area: Rect, app: &App, palette: &Palette) {
    let cart = app.store().cart().get();

    if cart.is_empty() {
        empty_state(
            frame,
            area,
            palette,
            "Your cart is empty",
            "Add products from the catalog with a",
        );
        return;
    }

    let [list_area, totals_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);

    let items: Vec<ListItem> = cart
        .items
        .iter()
        .map(|item| {
            let unit = item.product.discounted_price();
            let line = Line::from(vec![
                Span::styled(
                    format!("{:<24}", item.product.name),
                    Style::default().fg(palette.text),
                ),
                Span::styled(
                    format!("×{:<4}", item.quantity),
                    Style::default().fg(palette.accent),
                ),
                Span::styled(
                    format!("@ {:<10}", app.config().format_money(unit)),
                    Style::default().fg(palette.dim),
                ),
                Span::styled(
                    app.config().format_money(item.line_total()),
                    Style::default().fg(palette.price),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(titled_block(
            format!("Cart ({} lines)", cart.unique_items()),
            palette,
        ))
        .highlight_style(
            Style::default()
                .bg(palette.highlight_bg)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(Some(app.selected().min(cart.items.len() - 1)));
    frame.render_stateful_widget(list, list_area, &mut state);

    let totals = app.store().cart_totals();
    let totals_line = Line::from(vec![
        Span::styled(
            format!("{} items", totals.total_items),
            Style::default().fg(palette.text),
        ),
        Span::styled("  ·  total ", Style::default().fg(palette.dim)),
        Span::styled(
            app.config().format_money(totals.total_price),
            Style::default()
                .fg(palette.price)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(totals_line).block(titled_block("Total".to_string(), palette)),
        totals_area,
    );
}
