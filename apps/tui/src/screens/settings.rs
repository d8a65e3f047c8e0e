//! Settings screen: theme selection and the session clear actions.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};
use ratatui::Frame;

use shopfront_core::ThemeMode;

use crate::app::{App, SETTINGS_ROWS};
use crate::screens::titled_block;
use crate::theme::Palette;

pub fn draw(frame: &mut Frame<'_>, area: Rect, app: &App, palette: &Palette) {
    let store = app.store();
    let active_mode = *store.theme_mode().get();
    let totals = store.cart_totals();

    let mut theme_spans = vec![Span::styled("Theme: ", Style::default().fg(palette.text))];
    for mode in ThemeMode::ALL {
        let style = if mode == active_mode {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.dim)
        };
        theme_spans.push(Span::styled(format!("[{}] ", mode.label()), style));
    }

    let rows: [Line; SETTINGS_ROWS] = [
        Line::from(theme_spans),
        Line::from(Span::styled(
            format!(
                "Clear recent searches ({})",
                store.recent_searches().get().len()
            ),
            Style::default().fg(palette.text),
        )),
        Line::from(Span::styled(
            format!("Clear favorites ({})", store.favorite_ids().get().len()),
            Style::default().fg(palette.text),
        )),
        Line::from(Span::styled(
            format!("Clear cart ({} items)", totals.total_items),
            Style::default().fg(palette.text),
        )),
    ];

    let items: Vec<ListItem> = rows.into_iter().map(ListItem::new).collect();

    let list = List::new(items)
        .block(titled_block("Settings".to_string(), palette))
        .highlight_style(
            Style::default()
                .bg(palette.highlight_bg)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(Some(app.selected().min(SETTINGS_ROWS - 1)));
    frame.render_stateful_widget(list, area, &mut state);
}
