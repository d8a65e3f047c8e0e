//! Product detail screen: resolved by id against the full catalog.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use shopfront_core::ProductId;

use crate::app::App;
use crate::screens::{empty_state, titled_block};
use crate::theme::Palette;

pub fn draw(frame: &mut Frame<'_>, area: Rect, app: &App, palette: &Palette, id: ProductId) {
    // Pure lookup; a stale id (not found) degrades to an empty view.
    let Some(product) = app.store().product_by_id(id).cloned() else {
        empty_state(
            frame,
            area,
            palette,
            "Product not found",
            "It may have left the catalog",
        );
        return;
    };

    let config = app.config();
    let favorite = app.store().is_favorite(product.id);
    let in_cart = app.store().cart().get().quantity_of(product.id);

    let mut lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled(
                format!("  {}", product.name),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                if favorite { "  ♥" } else { "" },
                Style::default().fg(palette.favorite),
            ),
        ]),
        Line::from(Span::styled(
            format!("  {}", product.category.label()),
            Style::default().fg(palette.dim),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            format!("  {}", product.description),
            Style::default().fg(palette.text),
        )),
        Line::raw(""),
    ];

    if product.has_discount() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}", config.format_money(product.price)),
                Style::default()
                    .fg(palette.dim)
                    .add_modifier(Modifier::CROSSED_OUT),
            ),
            Span::styled(
                format!("  {}", config.format_money(product.discounted_price())),
                Style::default()
                    .fg(palette.price)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  -{}%", product.discount_percent),
                Style::default().fg(palette.deal),
            ),
        ]));
    } else {
        lines.push(Line::from(Span::styled(
            format!("  {}", config.format_money(product.price)),
            Style::default()
                .fg(palette.price)
                .add_modifier(Modifier::BOLD),
        )));
    }

    lines.push(Line::from(Span::styled(
        if product.in_stock {
            "  in stock"
        } else {
            "  out of stock"
        },
        Style::default().fg(if product.in_stock {
            palette.accent
        } else {
            palette.deal
        }),
    )));

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  Quantity: ", Style::default().fg(palette.dim)),
        Span::styled(
            format!("◂ {} ▸", app.detail_quantity()),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ),
    ]));

    if in_cart > 0 {
        lines.push(Line::from(Span::styled(
            format!("  already in cart: ×{}", in_cart),
            Style::default().fg(palette.accent),
        )));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        format!("  [{}]", product.image),
        Style::default().fg(palette.dim).add_modifier(Modifier::DIM),
    )));

    frame.render_widget(
        Paragraph::new(lines).block(titled_block(product.name.clone(), palette)),
        area,
    );
}
