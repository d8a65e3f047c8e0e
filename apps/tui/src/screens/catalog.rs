//! Catalog screen: search box, category chips, recent searches, and the
//! filtered product list.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use shopfront_core::Category;

use crate::app::{App, InputMode};
use crate::screens::{draw_product_list, empty_state, titled_block};
use crate::theme::Palette;

pub fn draw(frame: &mut Frame<'_>, area: Rect, app: &App, palette: &Palette) {
    let recents = app.store().recent_searches().get().clone();
    let recents_height = if recents.is_empty() { 0 } else { 1 };

    let [search_area, chips_area, recents_area, list_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(recents_height),
        Constraint::Min(0),
    ])
    .areas(area);

    draw_search_box(frame, search_area, app, palette);
    draw_category_chips(frame, chips_area, app, palette);
    if !recents.is_empty() {
        draw_recent_searches(frame, recents_area, &recents, palette);
    }

    let products = app.store().filtered_products().get();
    if products.is_empty() {
        empty_state(
            frame,
            list_area,
            palette,
            "Nothing found",
            "Try a different search or category",
        );
    } else {
        let title = format!(
            "Products ({}) · sort: {}",
            products.len(),
            app.store().sort_option().get().label()
        );
        draw_product_list(frame, list_area, app, palette, title, products);
    }
}

fn draw_search_box(frame: &mut Frame<'_>, area: Rect, app: &App, palette: &Palette) {
    let query = app.store().search_query().get();
    let searching = app.input_mode() == InputMode::Search;

    let mut spans = vec![Span::styled("🔍 ", Style::default().fg(palette.dim))];
    if query.is_empty() && !searching {
        spans.push(Span::styled(
            "press / to search",
            Style::default().fg(palette.dim),
        ));
    } else {
        spans.push(Span::styled(
            query.clone(),
            Style::default().fg(palette.text),
        ));
    }
    if searching {
        spans.push(Span::styled(
            "█",
            Style::default().fg(palette.accent),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(titled_block("Search".to_string(), palette)),
        area,
    );
}

fn draw_category_chips(frame: &mut Frame<'_>, area: Rect, app: &App, palette: &Palette) {
    let selected = *app.store().selected_category().get();

    let mut spans = Vec::new();
    let chip = |label: &str, active: bool| {
        if active {
            Span::styled(
                format!("[{}] ", label),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {}  ", label), Style::default().fg(palette.dim))
        }
    };

    spans.push(chip("All", selected.is_none()));
    for category in Category::ALL {
        spans.push(chip(category.label(), selected == Some(category)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_recent_searches(
    frame: &mut Frame<'_>,
    area: Rect,
    recents: &[String],
    palette: &Palette,
) {
    let line = Line::from(vec![
        Span::styled(" Recent: ", Style::default().fg(palette.dim)),
        Span::styled(recents.join(" · "), Style::default().fg(palette.text)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
