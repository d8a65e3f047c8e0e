//! Favorites screen: favorited products in catalog order.

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::app::App;
use crate::screens::{draw_product_list, empty_state};
use crate::theme::Palette;

pub fn draw(frame: &mut Frame<'_>, area: Rect, app: &App, palette: &Palette) {
    let favorites = app.favorites_list();

    if favorites.is_empty() {
        empty_state(
            frame,
            area,
            palette,
            "No favorites yet",
            "Mark products with f to find them here",
        );
        return;
    }

    draw_product_list(
        frame,
        area,
        app,
        palette,
        format!("Favorites ({})", favorites.len()),
        &favorites,
    );
}
