//! # Catalog Store
//!
//! The session's single source of truth. Owns every mutable state slice,
//! exposes each as an [`Observable`], and recomputes the filtered
//! product list whenever one of the pipeline inputs changes.
//!
//! ## Lifecycle
//! The store is an explicitly constructed object: the composition root
//! builds it (seed catalog or a loaded one) and passes it by reference
//! to the screens. No ambient singletons. State lives exactly as long as
//! the store and is discarded with it.
//!
//! ## Threading
//! All operations mutate on the caller's thread and notify subscribers
//! synchronously before returning. The only deferred work is the search
//! debounce, and even that runs inside [`CatalogStore::tick`] on the
//! same thread.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use tracing::debug;

use shopfront_core::catalog;
use shopfront_core::{Cart, CartTotals, Category, Product, ProductId, SortOption, ThemeMode};

use crate::debounce::Debouncer;
use crate::observe::Observable;
use crate::seed;
use crate::{MAX_RECENT_SEARCHES, SEARCH_DEBOUNCE_MS};

/// The catalog state holder.
pub struct CatalogStore {
    products: Observable<Vec<Product>>,
    cart: Observable<Cart>,
    selected_category: Observable<Option<Category>>,
    search_query: Observable<String>,
    filtered_products: Observable<Vec<Product>>,
    recent_searches: Observable<Vec<String>>,
    favorite_ids: Observable<HashSet<ProductId>>,
    sort_option: Observable<SortOption>,
    theme_mode: Observable<ThemeMode>,

    debouncer: Debouncer,
    /// The query the pipeline last ran with. Category/sort changes
    /// recompute against this, not the raw in-flight query; the raw
    /// query only enters the pipeline once its debounce fires.
    applied_query: String,
}

impl CatalogStore {
    /// Creates a store over a fixed catalog with empty session state.
    ///
    /// The filtered list is computed immediately so consumers see the
    /// full catalog before any input changes.
    pub fn new(products: Vec<Product>) -> Self {
        let sort = SortOption::default();
        let initial_filtered = catalog::recompute(&products, None, "", sort);

        CatalogStore {
            products: Observable::new(products),
            cart: Observable::new(Cart::new()),
            selected_category: Observable::new(None),
            search_query: Observable::new(String::new()),
            filtered_products: Observable::new(initial_filtered),
            recent_searches: Observable::new(Vec::new()),
            favorite_ids: Observable::new(HashSet::new()),
            sort_option: Observable::new(sort),
            theme_mode: Observable::new(ThemeMode::default()),
            debouncer: Debouncer::new(Duration::from_millis(SEARCH_DEBOUNCE_MS)),
            applied_query: String::new(),
        }
    }

    /// Creates a store over the built-in sample catalog.
    pub fn with_seed() -> Self {
        CatalogStore::new(seed::sample_catalog())
    }

    // =========================================================================
    // Observable State
    // =========================================================================

    /// The full, fixed catalog.
    pub fn products(&self) -> &Observable<Vec<Product>> {
        &self.products
    }

    /// The shopping cart.
    pub fn cart(&self) -> &Observable<Cart> {
        &self.cart
    }

    /// The active category filter; `None` means "all departments".
    pub fn selected_category(&self) -> &Observable<Option<Category>> {
        &self.selected_category
    }

    /// The raw search query, updated on every keystroke.
    pub fn search_query(&self) -> &Observable<String> {
        &self.search_query
    }

    /// The derived filtered-and-ranked product list.
    pub fn filtered_products(&self) -> &Observable<Vec<Product>> {
        &self.filtered_products
    }

    /// Recent submitted searches, most recent first, capped at
    /// [`MAX_RECENT_SEARCHES`].
    pub fn recent_searches(&self) -> &Observable<Vec<String>> {
        &self.recent_searches
    }

    /// Ids of favorited products.
    pub fn favorite_ids(&self) -> &Observable<HashSet<ProductId>> {
        &self.favorite_ids
    }

    /// The active secondary sort.
    pub fn sort_option(&self) -> &Observable<SortOption> {
        &self.sort_option
    }

    /// The color scheme preference.
    pub fn theme_mode(&self) -> &Observable<ThemeMode> {
        &self.theme_mode
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Resolves a product id against the full catalog (detail-view
    /// navigation). Pure read; no side effects.
    pub fn product_by_id(&self, id: ProductId) -> Option<&Product> {
        catalog::find_product(self.products.get(), id)
    }

    /// Current cart totals summary.
    pub fn cart_totals(&self) -> CartTotals {
        CartTotals::from(self.cart.get())
    }

    /// Whether a product is currently favorited.
    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.favorite_ids.get().contains(&id)
    }

    // =========================================================================
    // Cart Intents
    // =========================================================================

    /// Adds a product to the cart, merging quantities for a product
    /// already present. Non-positive quantities are a no-op.
    pub fn add_to_cart(&mut self, product: &Product, quantity: i64) {
        debug!(product_id = product.id, quantity, "add_to_cart");
        self.cart.update(|c| c.add_item(product, quantity));
    }

    /// Removes a cart line; no-op when absent.
    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        debug!(product_id, "remove_from_cart");
        self.cart.update(|c| c.remove_item(product_id));
    }

    /// Sets a line's quantity directly; 0 or below removes the line.
    pub fn update_cart_quantity(&mut self, product_id: ProductId, quantity: i64) {
        debug!(product_id, quantity, "update_cart_quantity");
        self.cart.update(|c| c.update_quantity(product_id, quantity));
    }

    /// Resets the cart to empty.
    pub fn clear_cart(&mut self) {
        debug!("clear_cart");
        self.cart.update(Cart::clear);
    }

    // =========================================================================
    // Filter & Sort Intents
    // =========================================================================

    /// Sets the category filter and recomputes immediately.
    pub fn set_selected_category(&mut self, category: Option<Category>) {
        debug!(?category, "set_selected_category");
        self.selected_category.set(category);
        self.recompute_now();
    }

    /// Updates the raw search query and (re)schedules the debounced
    /// recompute. A burst of calls inside the quiet period coalesces
    /// into a single pipeline run over the last value.
    pub fn set_search_query(&mut self, query: impl Into<String>, now: Instant) {
        let query = query.into();
        debug!(query = %query, "set_search_query");
        self.search_query.set(query);
        self.debouncer.schedule(now);
    }

    /// Sets the secondary sort and recomputes immediately.
    pub fn set_sort(&mut self, option: SortOption) {
        debug!(?option, "set_sort");
        self.sort_option.set(option);
        self.recompute_now();
    }

    /// Sets the color scheme preference.
    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        debug!(?mode, "set_theme_mode");
        self.theme_mode.set(mode);
    }

    // =========================================================================
    // Search History & Favorites Intents
    // =========================================================================

    /// Records the current query in the recent-search history.
    ///
    /// The trimmed query is de-duplicated case-insensitively (latest
    /// casing wins), prepended, and the history truncated to
    /// [`MAX_RECENT_SEARCHES`]. An empty query is a no-op.
    pub fn submit_search(&mut self) {
        let query = self.search_query.get().trim().to_string();
        if query.is_empty() {
            return;
        }
        debug!(query = %query, "submit_search");

        let query_lower = query.to_lowercase();
        self.recent_searches.update(|entries| {
            entries.retain(|e| e.to_lowercase() != query_lower);
            entries.insert(0, query);
            entries.truncate(MAX_RECENT_SEARCHES);
        });
    }

    /// Empties the recent-search history.
    pub fn clear_recent_searches(&mut self) {
        debug!("clear_recent_searches");
        self.recent_searches.set(Vec::new());
    }

    /// Adds the id to the favorites set if absent, removes it if
    /// present.
    pub fn toggle_favorite(&mut self, product_id: ProductId) {
        debug!(product_id, "toggle_favorite");
        self.favorite_ids.update(|ids| {
            if !ids.insert(product_id) {
                ids.remove(&product_id);
            }
        });
    }

    /// Empties the favorites set.
    pub fn clear_favorites(&mut self) {
        debug!("clear_favorites");
        self.favorite_ids.set(HashSet::new());
    }

    // =========================================================================
    // Debounce Driving
    // =========================================================================

    /// Fires the pending search debounce when due, applying the raw
    /// query to the pipeline. Returns whether a recompute ran.
    ///
    /// Called by the driver whenever its poll timeout elapses; `now` is
    /// supplied by the driver so the store never reads the clock.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(generation) = self.debouncer.fire_due(now) else {
            return false;
        };

        self.applied_query = self.search_query.get().clone();
        debug!(
            generation,
            query = %self.applied_query,
            "search debounce fired"
        );
        self.recompute_now();
        true
    }

    /// The pending debounce deadline, if any. Drivers bound their poll
    /// timeout by this.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    // =========================================================================
    // Pipeline
    // =========================================================================

    fn recompute_now(&mut self) {
        let filtered = catalog::recompute(
            self.products.get(),
            *self.selected_category.get(),
            &self.applied_query,
            *self.sort_option.get(),
        );
        debug!(count = filtered.len(), "filtered list recomputed");
        self.filtered_products.set(filtered);
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        CatalogStore::with_seed()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::Money;
    use std::cell::RefCell;
    use std::rc::Rc;

    const DEBOUNCE: Duration = Duration::from_millis(SEARCH_DEBOUNCE_MS);

    fn product(
        id: ProductId,
        name: &str,
        category: Category,
        price_cents: i64,
        discount: u8,
    ) -> Product {
        Product::new(
            id,
            name,
            format!("{} description", name),
            category,
            Money::from_cents(price_cents),
            discount,
            "img",
        )
    }

    /// The catalog from the contract scenarios: an apple at 100 with 10%
    /// off and a carrot at 80 with no discount.
    fn scenario_store() -> CatalogStore {
        CatalogStore::new(vec![
            product(1, "Apple", Category::Fruits, 10000, 10),
            product(2, "Carrot", Category::Vegetables, 8000, 0),
        ])
    }

    fn search(store: &mut CatalogStore, query: &str) {
        let now = Instant::now();
        store.set_search_query(query, now);
        assert!(store.tick(now + DEBOUNCE));
    }

    #[test]
    fn test_initial_state() {
        let store = scenario_store();
        assert_eq!(store.products().get().len(), 2);
        assert_eq!(store.filtered_products().get().len(), 2);
        assert!(store.cart().get().is_empty());
        assert!(store.selected_category().get().is_none());
        assert!(store.search_query().get().is_empty());
        assert!(store.recent_searches().get().is_empty());
        assert!(store.favorite_ids().get().is_empty());
        assert_eq!(*store.sort_option().get(), SortOption::Name);
        assert_eq!(*store.theme_mode().get(), ThemeMode::System);
    }

    #[test]
    fn test_query_filters_to_prefix_match() {
        let mut store = scenario_store();
        search(&mut store, "app");

        let filtered = store.filtered_products().get();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_empty_query_price_sort_orders_by_discounted_price() {
        let mut store = scenario_store();
        store.set_sort(SortOption::Price);

        let ids: Vec<ProductId> = store.filtered_products().get().iter().map(|p| p.id).collect();
        // Carrot 8000 < discounted apple 9000.
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_debounce_coalesces_keystroke_burst() {
        let mut store = scenario_store();
        let recomputes = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&recomputes);
        store.filtered_products().subscribe(move |_| *sink.borrow_mut() += 1);

        let start = Instant::now();
        store.set_search_query("a", start);
        store.set_search_query("ap", start + Duration::from_millis(50));
        store.set_search_query("app", start + Duration::from_millis(100));

        // Quiet period not yet over for the last keystroke.
        assert!(!store.tick(start + Duration::from_millis(250)));
        assert_eq!(*recomputes.borrow(), 0);

        // One recompute, with the last observed value only.
        assert!(store.tick(start + Duration::from_millis(300)));
        assert_eq!(*recomputes.borrow(), 1);
        assert_eq!(store.filtered_products().get()[0].name, "Apple");
    }

    #[test]
    fn test_category_change_recomputes_immediately() {
        let mut store = scenario_store();
        store.set_selected_category(Some(Category::Vegetables));

        let filtered = store.filtered_products().get();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);

        store.set_selected_category(None);
        assert_eq!(store.filtered_products().get().len(), 2);
    }

    #[test]
    fn test_category_change_uses_last_applied_query() {
        let mut store = scenario_store();
        search(&mut store, "apple");

        // Raw query changes but its debounce has not fired yet; the
        // category recompute must still use the applied "apple".
        store.set_search_query("carrot", Instant::now());
        store.set_selected_category(Some(Category::Fruits));

        let filtered = store.filtered_products().get();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut store = scenario_store();
        search(&mut store, "apple");
        let first = store.filtered_products().get().clone();

        store.set_sort(SortOption::Name); // same inputs, forced recompute
        assert_eq!(*store.filtered_products().get(), first);
    }

    #[test]
    fn test_add_to_cart_merges_quantities() {
        let mut store = scenario_store();
        let apple = store.product_by_id(1).cloned().expect("apple in catalog");

        store.add_to_cart(&apple, 2);
        store.add_to_cart(&apple, 3);

        let cart = store.cart().get();
        assert_eq!(cart.unique_items(), 1);
        assert_eq!(cart.quantity_of(1), 5);
        assert_eq!(cart.total_items(), 5);
    }

    #[test]
    fn test_add_to_cart_nonpositive_quantity_noop() {
        let mut store = scenario_store();
        let apple = store.product_by_id(1).cloned().expect("apple in catalog");

        store.add_to_cart(&apple, 0);
        store.add_to_cart(&apple, -1);

        assert!(store.cart().get().is_empty());
    }

    #[test]
    fn test_update_cart_quantity_zero_removes() {
        let mut store = scenario_store();
        let apple = store.product_by_id(1).cloned().expect("apple in catalog");

        store.add_to_cart(&apple, 2);
        store.update_cart_quantity(1, 0);

        assert!(store.cart().get().is_empty());
    }

    #[test]
    fn test_remove_unknown_cart_entry_is_noop() {
        let mut store = scenario_store();
        let apple = store.product_by_id(1).cloned().expect("apple in catalog");
        store.add_to_cart(&apple, 1);

        store.remove_from_cart(42);
        assert_eq!(store.cart().get().unique_items(), 1);
    }

    #[test]
    fn test_cart_totals() {
        let mut store = scenario_store();
        let apple = store.product_by_id(1).cloned().expect("apple in catalog");
        let carrot = store.product_by_id(2).cloned().expect("carrot in catalog");

        store.add_to_cart(&apple, 2); // 2 × 9000 discounted
        store.add_to_cart(&carrot, 1); // 8000

        let totals = store.cart_totals();
        assert_eq!(totals.unique_items, 2);
        assert_eq!(totals.total_items, 3);
        assert_eq!(totals.total_price.cents(), 26000);
    }

    #[test]
    fn test_clear_cart() {
        let mut store = scenario_store();
        let apple = store.product_by_id(1).cloned().expect("apple in catalog");
        store.add_to_cart(&apple, 2);

        store.clear_cart();
        assert!(store.cart().get().is_empty());
    }

    #[test]
    fn test_submit_search_dedups_case_insensitively() {
        let mut store = scenario_store();

        store.set_search_query("milk", Instant::now());
        store.submit_search();
        store.set_search_query("Milk", Instant::now());
        store.submit_search();

        let recents = store.recent_searches().get();
        assert_eq!(recents.len(), 1);
        assert_eq!(recents[0], "Milk"); // latest casing wins, at position 0
    }

    #[test]
    fn test_submit_search_trims_and_skips_empty() {
        let mut store = scenario_store();

        store.set_search_query("   ", Instant::now());
        store.submit_search();
        assert!(store.recent_searches().get().is_empty());

        store.set_search_query("  bread  ", Instant::now());
        store.submit_search();
        assert_eq!(store.recent_searches().get()[0], "bread");
    }

    #[test]
    fn test_recent_searches_capped_most_recent_first() {
        let mut store = scenario_store();

        for i in 0..12 {
            store.set_search_query(format!("query{}", i), Instant::now());
            store.submit_search();
        }

        let recents = store.recent_searches().get();
        assert_eq!(recents.len(), MAX_RECENT_SEARCHES);
        assert_eq!(recents[0], "query11");
        assert_eq!(recents[MAX_RECENT_SEARCHES - 1], "query2");
    }

    #[test]
    fn test_clear_recent_searches() {
        let mut store = scenario_store();
        store.set_search_query("milk", Instant::now());
        store.submit_search();

        store.clear_recent_searches();
        assert!(store.recent_searches().get().is_empty());
    }

    #[test]
    fn test_toggle_favorite_twice_restores_original() {
        let mut store = scenario_store();

        store.toggle_favorite(1);
        assert!(store.is_favorite(1));

        store.toggle_favorite(1);
        assert!(!store.is_favorite(1));
        assert!(store.favorite_ids().get().is_empty());
    }

    #[test]
    fn test_clear_favorites() {
        let mut store = scenario_store();
        store.toggle_favorite(1);
        store.toggle_favorite(2);

        store.clear_favorites();
        assert!(store.favorite_ids().get().is_empty());
    }

    #[test]
    fn test_product_by_id() {
        let store = scenario_store();
        assert_eq!(store.product_by_id(2).map(|p| p.id), Some(2));
        assert!(store.product_by_id(99).is_none());
    }

    #[test]
    fn test_subscribers_notified_synchronously_on_mutation() {
        let mut store = scenario_store();
        let cart_sizes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&cart_sizes);
        store.cart().subscribe(move |cart| sink.borrow_mut().push(cart.total_items()));

        let apple = store.product_by_id(1).cloned().expect("apple in catalog");
        store.add_to_cart(&apple, 1);
        store.add_to_cart(&apple, 2);
        store.clear_cart();

        assert_eq!(*cart_sizes.borrow(), vec![1, 3, 0]);
    }

    #[test]
    fn test_next_deadline_tracks_pending_debounce() {
        let mut store = scenario_store();
        assert!(store.next_deadline().is_none());

        let now = Instant::now();
        store.set_search_query("a", now);
        assert_eq!(store.next_deadline(), Some(now + DEBOUNCE));

        store.tick(now + DEBOUNCE);
        assert!(store.next_deadline().is_none());
    }

    #[test]
    fn test_seed_store_has_full_catalog() {
        let store = CatalogStore::with_seed();
        assert_eq!(store.products().get().len(), store.filtered_products().get().len());
        assert!(!store.products().get().is_empty());
    }
}
