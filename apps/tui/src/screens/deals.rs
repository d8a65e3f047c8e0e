//! Deals screen: discounted products, deepest discount first.

use ratatui::layout::Rect;
use ratatui::Frame;

use shopfront_core::catalog;

use crate::app::App;
use crate::screens::{draw_product_list, empty_state};
use crate::theme::Palette;

pub fn draw(frame: &mut Frame<'_>, area: Rect, app: &App, palette: &Palette) {
    let deals = catalog::deals(app.store().products().get());

    if deals.is_empty() {
        empty_state(
            frame,
            area,
            palette,
            "No deals right now",
            "New offers will show up here",
        );
        return;
    }

    draw_product_list(
        frame,
        area,
        app,
        palette,
        format!("Deals ({})", deals.len()),
        &deals,
    );
}
