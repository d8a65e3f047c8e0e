//! # shopfront-state: The Catalog State Holder
//!
//! Single source of truth for a storefront session. The [`CatalogStore`]
//! owns every mutable state slice, exposes each one as an observable, and
//! recomputes the filtered product list whenever a pipeline input changes.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      CatalogStore                               │
//! │                                                                 │
//! │  intents                 state slices            derived        │
//! │  ───────                 ────────────            ───────        │
//! │  set_search_query ──┐    products ─────────┐                    │
//! │  set_selected_...  ─┼──► selected_category ┼──► recompute() ──► │
//! │  set_sort ──────────┘    search_query ─────┤    filtered_       │
//! │                          sort_option ──────┘    products        │
//! │  add_to_cart ──────────► cart                                   │
//! │  toggle_favorite ──────► favorite_ids                           │
//! │  submit_search ────────► recent_searches                        │
//! │  set_theme_mode ───────► theme_mode                             │
//! │                                                                 │
//! │  The search query input passes through a 200 ms debounce        │
//! │  (deadline + generation counter) before entering the pipeline;  │
//! │  every other input recomputes immediately.                      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`observe`] - `Observable<T>`: synchronously notified state slices
//! - [`debounce`] - `Debouncer`: cancellable deadline with a generation counter
//! - [`store`] - `CatalogStore`: the state holder and its intent operations
//! - [`seed`] - the built-in sample catalog

pub mod debounce;
pub mod observe;
pub mod seed;
pub mod store;

pub use debounce::Debouncer;
pub use observe::{Observable, SubscriptionId};
pub use store::CatalogStore;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum entries kept in the recent-search history.
///
/// `submit_search` truncates to this after prepending, most recent first.
pub const MAX_RECENT_SEARCHES: usize = 10;

/// Quiet period on the search-query input before the pipeline recomputes.
pub const SEARCH_DEBOUNCE_MS: u64 = 200;
