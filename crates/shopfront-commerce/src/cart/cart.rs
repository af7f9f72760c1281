//! Cart state: product id to requested quantity.

use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// One cart entry. Quantity is always at least 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// In-memory shopping cart for one session.
///
/// Invariants:
/// - no line has quantity 0 (setting a quantity to 0 or below removes it);
/// - no line exceeds the stock ceiling it was last written against;
/// - lines keep the order in which products were first added.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartState {
    lines: Vec<CartLine>,
}

impl CartState {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`.
    ///
    /// Returns the resulting quantity. The quantity never exceeds
    /// `product.stock`; adding an out-of-stock product leaves the cart
    /// untouched and returns 0.
    pub fn add_item(&mut self, product: &Product) -> u32 {
        let current = self.quantity(&product.id);
        let next = current.saturating_add(1).min(product.stock);
        if next == 0 {
            return 0;
        }
        self.set_line(&product.id, next);
        next
    }

    /// Set the quantity for `product_id`, clamped to `stock`.
    ///
    /// A requested quantity of zero or less removes the line, as does a
    /// clamped result of zero. Returns the stored quantity (0 when removed).
    pub fn update_quantity(&mut self, product_id: &ProductId, new_quantity: i64, stock: u32) -> u32 {
        if new_quantity <= 0 {
            self.remove_item(product_id);
            return 0;
        }
        let clamped = u32::try_from(new_quantity).unwrap_or(u32::MAX).min(stock);
        if clamped == 0 {
            self.remove_item(product_id);
            return 0;
        }
        self.set_line(product_id, clamped);
        clamped
    }

    /// Remove a product's line. Returns whether a line was removed.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.product_id != product_id);
        self.lines.len() < len_before
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Quantity held for `product_id` (0 when absent).
    pub fn quantity(&self, product_id: &ProductId) -> u32 {
        self.lines
            .iter()
            .find(|l| &l.product_id == product_id)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.lines.iter().any(|l| &l.product_id == product_id)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of `price * quantity` over lines whose product is in `catalog`.
    ///
    /// Lines referencing a product missing from the catalog contribute
    /// zero. Saturates instead of overflowing; see [`Self::try_total_price`].
    pub fn total_price(&self, catalog: &Catalog) -> Money {
        self.priced_lines(catalog)
            .fold(Money::zero(Currency::USD), |acc, (product, qty)| {
                acc + product.price * i64::from(qty)
            })
    }

    /// Checked variant of [`Self::total_price`].
    pub fn try_total_price(&self, catalog: &Catalog) -> Result<Money, CommerceError> {
        self.priced_lines(catalog)
            .try_fold(Money::zero(Currency::USD), |acc, (product, qty)| {
                product
                    .price
                    .try_multiply(i64::from(qty))
                    .and_then(|subtotal| acc.try_add(&subtotal))
            })
            .ok_or(CommerceError::Overflow)
    }

    fn priced_lines<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = (&'a Product, u32)> + 'a {
        self.lines
            .iter()
            .filter_map(move |l| catalog.get(&l.product_id).map(|p| (p, l.quantity)))
    }

    fn set_line(&mut self, product_id: &ProductId, quantity: u32) {
        debug_assert!(quantity > 0);
        match self.lines.iter_mut().find(|l| &l.product_id == product_id) {
            Some(line) => line.quantity = quantity,
            None => self.lines.push(CartLine {
                product_id: product_id.clone(),
                quantity,
            }),
        }
    }
}
