//! # Shopping Cart
//!
//! The session cart and its derived totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                              │
//! │                                                                 │
//! │  UI Action               Operation            Cart Change       │
//! │  ─────────               ─────────            ───────────       │
//! │  Add product ──────────► add_item() ────────► merge or push     │
//! │  Change quantity ──────► update_quantity() ─► set (0 removes)   │
//! │  Remove line ──────────► remove_item() ─────► retain others     │
//! │  Clear cart ───────────► clear() ───────────► empty             │
//! │                                                                 │
//! │  Every operation is total: unknown ids and non-positive         │
//! │  quantities degrade to no-ops or removals, never errors.        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Product, ProductId};

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the shopping cart.
///
/// Holds a snapshot of the product so the cart line stays consistent for
/// the session regardless of how it was reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// The product this line refers to.
    pub product: Product,

    /// Quantity in cart. Invariant: >= 1 for any line present.
    pub quantity: i64,

    /// When this line was first added.
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a new cart line for a product and quantity.
    pub fn new(product: Product, quantity: i64) -> Self {
        CartItem {
            product,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Line total: discounted unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.discounted_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by product id (adding the same product merges
///   quantities)
/// - Quantity is >= 1 for every line (updating to 0 or below removes it)
/// - Created empty at session start, discarded at session end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in insertion order.
    pub items: Vec<CartItem>,

    /// When the cart was created or last cleared.
    pub created_at: DateTime<Utc>,
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart, or merges into the existing line.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases by `quantity`
    /// - Product not in cart: new line appended
    /// - `quantity <= 0`: no-op (documented choice; see DESIGN.md)
    pub fn add_item(&mut self, product: &Product, quantity: i64) {
        if quantity <= 0 {
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += quantity;
            return;
        }

        self.items.push(CartItem::new(product.clone(), quantity));
    }

    /// Sets the quantity of a line directly (not additive).
    ///
    /// ## Behavior
    /// - `quantity <= 0`: equivalent to [`Cart::remove_item`]
    /// - Product not in cart: no-op
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Removes a line by product id. No-op when absent.
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.items.retain(|i| i.product.id != product_id);
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Returns the number of distinct lines in the cart.
    pub fn unique_items(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of all line totals at discounted prices.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Quantity of a product in the cart, 0 when absent.
    pub fn quantity_of(&self, product_id: ProductId) -> i64 {
        self.items
            .iter()
            .find(|i| i.product.id == product_id)
            .map(|i| i.quantity)
            .unwrap_or(0)
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub unique_items: usize,
    pub total_items: i64,
    pub total_price: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            unique_items: cart.unique_items(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
