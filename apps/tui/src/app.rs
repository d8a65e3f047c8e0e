//! # Application Shell
//!
//! Navigation, key dispatch, and the event loop. The app owns the
//! [`CatalogStore`] for the session and is the only writer to it; screens
//! read observable state and render.
//!
//! ## Event Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  loop:                                                          │
//! │    draw current screen from store state                         │
//! │    poll keys (timeout bounded by the store's debounce deadline) │
//! │    key ──► store intent or navigation                           │
//! │    store.tick(now) ──► fires due search debounce                │
//! │                                                                 │
//! │  Single thread: intents, recomputes, and notifications all run  │
//! │  here. The poll timeout is how the debounce deadline gets its   │
//! │  turn without a timer thread.                                   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::info;

use shopfront_core::{catalog, Category, Product, ProductId, ThemeMode};
use shopfront_state::CatalogStore;

use crate::config::ShopConfig;
use crate::error::AppError;
use crate::screens;
use crate::theme::{self, Palette};

/// Upper bound on the poll timeout so the UI stays responsive even with
/// no pending debounce.
const FRAME_TICK: Duration = Duration::from_millis(250);

/// Rows on the settings screen, in order: theme, clear recent searches,
/// clear favorites, clear cart.
pub const SETTINGS_ROWS: usize = 4;

// =============================================================================
// Navigation
// =============================================================================

/// The screen inventory. `Detail` carries the navigated-to product id;
/// the id-to-product lookup is a pure read against the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Catalog,
    Detail(ProductId),
    Cart,
    Deals,
    Favorites,
    Settings,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Catalog => "Catalog",
            Screen::Detail(_) => "Product",
            Screen::Cart => "Cart",
            Screen::Deals => "Deals",
            Screen::Favorites => "Favorites",
            Screen::Settings => "Settings",
        }
    }
}

/// Whether keystrokes go to navigation or the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Browse,
    Search,
}

// =============================================================================
// App
// =============================================================================

pub struct App {
    store: CatalogStore,
    config: ShopConfig,
    screen: Screen,
    back_stack: Vec<Screen>,
    input_mode: InputMode,
    selected: usize,
    detail_quantity: i64,
    should_quit: bool,
}

impl App {
    pub fn new(store: CatalogStore, config: ShopConfig) -> Self {
        App {
            store,
            config,
            screen: Screen::Catalog,
            back_stack: Vec::new(),
            input_mode: InputMode::Browse,
            selected: 0,
            detail_quantity: 1,
            should_quit: false,
        }
    }

    // =========================================================================
    // Event Loop
    // =========================================================================

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<(), AppError> {
        info!(store = %self.config.store_name, "storefront session started");

        while !self.should_quit {
            terminal.draw(|frame| screens::draw(frame, &self))?;

            if event::poll(self.poll_timeout())? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            self.store.tick(Instant::now());
        }

        info!("storefront session ended");
        Ok(())
    }

    /// Bounded by the pending debounce deadline so a quiet period ends
    /// on time, not at the next keypress.
    fn poll_timeout(&self) -> Duration {
        match self.store.next_deadline() {
            Some(deadline) => deadline
                .saturating_duration_since(Instant::now())
                .min(FRAME_TICK),
            None => FRAME_TICK,
        }
    }

    // =========================================================================
    // Read Accessors (used by screens)
    // =========================================================================

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn detail_quantity(&self) -> i64 {
        self.detail_quantity
    }

    pub fn palette(&self) -> &'static Palette {
        theme::resolve(*self.store.theme_mode().get())
    }

    /// Products favorited, in catalog order.
    pub fn favorites_list(&self) -> Vec<Product> {
        let favorites = self.store.favorite_ids().get();
        self.store
            .products()
            .get()
            .iter()
            .filter(|p| favorites.contains(&p.id))
            .cloned()
            .collect()
    }

    /// The product list the current screen is browsing.
    pub fn current_list(&self) -> Vec<Product> {
        match self.screen {
            Screen::Catalog => self.store.filtered_products().get().clone(),
            Screen::Deals => catalog::deals(self.store.products().get()),
            Screen::Favorites => self.favorites_list(),
            Screen::Cart => self
                .store
                .cart()
                .get()
                .items
                .iter()
                .map(|i| i.product.clone())
                .collect(),
            Screen::Detail(_) | Screen::Settings => Vec::new(),
        }
    }

    fn selection_bound(&self) -> usize {
        match self.screen {
            Screen::Settings => SETTINGS_ROWS,
            Screen::Detail(_) => 0,
            _ => self.current_list().len(),
        }
    }

    fn selected_product(&self) -> Option<Product> {
        match self.screen {
            Screen::Detail(id) => self.store.product_by_id(id).cloned(),
            Screen::Settings => None,
            _ => self.current_list().get(self.selected).cloned(),
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    fn go(&mut self, screen: Screen) {
        if self.screen == screen {
            return;
        }
        self.back_stack.push(self.screen);
        self.screen = screen;
        self.selected = 0;
        self.detail_quantity = 1;
    }

    fn back(&mut self) {
        if let Some(previous) = self.back_stack.pop() {
            self.screen = previous;
            self.selected = 0;
        }
    }

    fn open_selected_detail(&mut self) {
        if let Some(product) = self.selected_product() {
            self.go(Screen::Detail(product.id));
        }
    }

    /// Keeps the cursor inside the current list after a mutation shrank it.
    fn clamp_selection(&mut self) {
        let bound = self.selection_bound();
        if bound == 0 {
            self.selected = 0;
        } else if self.selected >= bound {
            self.selected = bound - 1;
        }
    }

    // =========================================================================
    // Key Dispatch
    // =========================================================================

    fn handle_key(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Search => self.handle_search_key(key),
            InputMode::Browse => self.handle_browse_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let now = Instant::now();
        match key.code {
            KeyCode::Esc => self.input_mode = InputMode::Browse,
            KeyCode::Enter => {
                self.store.submit_search();
                self.input_mode = InputMode::Browse;
            }
            KeyCode::Backspace => {
                let mut query = self.store.search_query().get().clone();
                query.pop();
                self.store.set_search_query(query, now);
            }
            KeyCode::Char(c) => {
                let mut query = self.store.search_query().get().clone();
                query.push(c);
                self.store.set_search_query(query, now);
            }
            _ => {}
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => self.back(),

            // Screen switching
            KeyCode::Char('1') => self.go(Screen::Catalog),
            KeyCode::Char('2') => self.go(Screen::Deals),
            KeyCode::Char('3') => self.go(Screen::Cart),
            KeyCode::Char('4') => self.go(Screen::Favorites),
            KeyCode::Char('5') => self.go(Screen::Settings),

            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                let bound = self.selection_bound();
                if bound > 0 && self.selected + 1 < bound {
                    self.selected += 1;
                }
            }

            KeyCode::Enter => self.activate(),

            KeyCode::Char('/') if self.screen == Screen::Catalog => {
                self.input_mode = InputMode::Search;
            }
            KeyCode::Char('s') if self.screen == Screen::Catalog => {
                let next = self.store.sort_option().get().next();
                self.store.set_sort(next);
                self.clamp_selection();
            }

            KeyCode::Left => self.handle_left_right(-1),
            KeyCode::Right => self.handle_left_right(1),
            KeyCode::Char('-') => self.adjust_quantity(-1),
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_quantity(1),

            KeyCode::Char('a') => self.add_selected_to_cart(),
            KeyCode::Char('f') => {
                if let Some(product) = self.selected_product() {
                    self.store.toggle_favorite(product.id);
                    self.clamp_selection();
                }
            }
            KeyCode::Char('x') | KeyCode::Delete if self.screen == Screen::Cart => {
                if let Some(product) = self.selected_product() {
                    self.store.remove_from_cart(product.id);
                    self.clamp_selection();
                }
            }
            KeyCode::Char('C') if self.screen == Screen::Cart => {
                self.store.clear_cart();
                self.selected = 0;
            }

            _ => {}
        }
    }

    /// Enter: open detail from a list, add from detail, activate a
    /// settings row.
    fn activate(&mut self) {
        match self.screen {
            Screen::Catalog | Screen::Deals | Screen::Favorites | Screen::Cart => {
                self.open_selected_detail();
            }
            Screen::Detail(_) => self.add_selected_to_cart(),
            Screen::Settings => self.activate_settings_row(),
        }
    }

    fn add_selected_to_cart(&mut self) {
        let Some(product) = self.selected_product() else {
            return;
        };
        if !product.in_stock {
            return;
        }
        let quantity = match self.screen {
            Screen::Detail(_) => self.detail_quantity,
            _ => 1,
        };
        self.store.add_to_cart(&product, quantity);
    }

    fn handle_left_right(&mut self, direction: i32) {
        match self.screen {
            Screen::Catalog => self.cycle_category(direction),
            Screen::Detail(_) | Screen::Cart => self.adjust_quantity(direction),
            Screen::Settings if self.selected == 0 => self.cycle_theme(direction),
            _ => {}
        }
    }

    /// Detail: quantity selector. Cart: adjust the selected line (down
    /// to 0 removes it, matching the store's update semantics).
    fn adjust_quantity(&mut self, delta: i32) {
        match self.screen {
            Screen::Detail(_) => {
                self.detail_quantity = (self.detail_quantity + delta as i64).max(1);
            }
            Screen::Cart => {
                if let Some(product) = self.selected_product() {
                    let current = self.store.cart().get().quantity_of(product.id);
                    self.store
                        .update_cart_quantity(product.id, current + delta as i64);
                    self.clamp_selection();
                }
            }
            _ => {}
        }
    }

    fn cycle_category(&mut self, direction: i32) {
        // Chip order: All, then every department.
        let mut options: Vec<Option<Category>> = vec![None];
        options.extend(Category::ALL.iter().copied().map(Some));

        let current = *self.store.selected_category().get();
        let position = options.iter().position(|o| *o == current).unwrap_or(0);
        let next = (position as i32 + direction).rem_euclid(options.len() as i32) as usize;

        self.store.set_selected_category(options[next]);
        self.clamp_selection();
    }

    fn cycle_theme(&mut self, direction: i32) {
        let modes = ThemeMode::ALL;
        let current = *self.store.theme_mode().get();
        let position = modes.iter().position(|m| *m == current).unwrap_or(0);
        let next = (position as i32 + direction).rem_euclid(modes.len() as i32) as usize;
        self.store.set_theme_mode(modes[next]);
    }

    fn activate_settings_row(&mut self) {
        match self.selected {
            0 => self.cycle_theme(1),
            1 => self.store.clear_recent_searches(),
            2 => self.store.clear_favorites(),
            3 => self.store.clear_cart(),
            _ => {}
        }
    }
}
