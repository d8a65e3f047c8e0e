//! # shopfront-core: Pure Domain Logic for Shopfront
//!
//! This crate is the heart of Shopfront. It contains all domain logic as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Shopfront Architecture                       │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                    apps/tui (screens)                     │  │
//! │  │   Catalog ─► Detail ─► Cart ─► Deals ─► Settings          │  │
//! │  └────────────────────────────┬──────────────────────────────┘  │
//! │                               │ reads state / dispatches intents │
//! │  ┌────────────────────────────▼──────────────────────────────┐  │
//! │  │              shopfront-state (CatalogStore)               │  │
//! │  └────────────────────────────┬──────────────────────────────┘  │
//! │                               │                                 │
//! │  ┌────────────────────────────▼──────────────────────────────┐  │
//! │  │            ★ shopfront-core (THIS CRATE) ★                │  │
//! │  │                                                           │  │
//! │  │   ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌────────────┐   │  │
//! │  │   │  types  │  │  money  │  │  cart   │  │  catalog   │   │  │
//! │  │   │ Product │  │  Money  │  │  Cart   │  │ recompute  │   │  │
//! │  │   │ enums   │  │  math   │  │CartItem │  │ relevance  │   │  │
//! │  │   └─────────┘  └─────────┘  └─────────┘  └────────────┘   │  │
//! │  │                                                           │  │
//! │  │   NO I/O • NO TERMINAL • NO GLOBALS • PURE FUNCTIONS      │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, SortOption, ThemeMode)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Shopping cart and its derived totals
//! - [`catalog`] - The filter/rank/sort pipeline as a pure function
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Terminal, file system, and network access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Total Operations**: Cart and catalog operations never fail; invalid
//!    inputs degrade to no-ops

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shopfront_core::Money` instead of
// `use shopfront_core::money::Money`

pub use cart::{Cart, CartItem, CartTotals};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum discount a product can carry, in percent.
///
/// `Product::new` clamps to this so a derived discounted price can never
/// go negative.
pub const MAX_DISCOUNT_PERCENT: u8 = 100;
