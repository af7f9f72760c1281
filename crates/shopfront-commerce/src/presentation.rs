//! Display data derived from catalog and cart state.
//!
//! Everything here is a pure function of its inputs. The UI binds to these
//! views rather than reading products directly, so the rules for badges,
//! price labels and which buttons are enabled live in one place.

use crate::cart::CartState;
use crate::catalog::{Catalog, Product};
use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// Stock badge shown on product cards and in the details overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "count", rename_all = "snake_case")]
pub enum StockBadge {
    InStock(u32),
    OutOfStock,
}

impl StockBadge {
    pub fn for_stock(stock: u32) -> Self {
        if stock == 0 {
            StockBadge::OutOfStock
        } else {
            StockBadge::InStock(stock)
        }
    }

    pub fn label(&self) -> String {
        match self {
            StockBadge::InStock(count) => format!("{} in stock", count),
            StockBadge::OutOfStock => "Out of Stock".to_string(),
        }
    }

    /// Whether the badge should use the destructive style.
    pub fn is_warning(&self) -> bool {
        matches!(self, StockBadge::OutOfStock)
    }
}

/// Format a price as a two-decimal currency string (`$99.99`).
pub fn format_price(price: Money) -> String {
    price.display()
}

/// Card/overlay view of one product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: Option<String>,
    pub image: Option<String>,
    pub price_label: String,
    pub stock_badge: StockBadge,
    pub stock_label: String,
    /// Add-to-cart buttons are disabled when this is false.
    pub add_to_cart_enabled: bool,
}

impl ProductView {
    pub fn from_product(product: &Product) -> Self {
        let stock_badge = StockBadge::for_stock(product.stock);
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            category: product.category.clone(),
            image: product.image.clone(),
            price_label: format_price(product.price),
            stock_label: stock_badge.label(),
            stock_badge,
            add_to_cart_enabled: product.in_stock(),
        }
    }
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self::from_product(product)
    }
}

/// One row of the cart panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLineView {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    /// `"$99.99 × 2"`.
    pub unit_label: String,
    pub subtotal_label: String,
    /// The plus button is disabled at the stock ceiling.
    pub can_increment: bool,
    pub can_decrement: bool,
}

/// The cart panel: rows, total, and whether checkout is offered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub item_count: u64,
    pub total_label: String,
    pub is_empty: bool,
}

impl CartView {
    /// Build the cart panel. Lines whose product has left the catalog are
    /// not shown, matching how they are excluded from the total.
    pub fn build(cart: &CartState, catalog: &Catalog) -> Self {
        let lines: Vec<CartLineView> = cart
            .lines()
            .iter()
            .filter_map(|line| {
                let product = catalog.get(&line.product_id)?;
                Some(CartLineView {
                    product_id: line.product_id.clone(),
                    name: product.name.clone(),
                    quantity: line.quantity,
                    unit_label: format!("{} \u{00d7} {}", format_price(product.price), line.quantity),
                    subtotal_label: format_price(product.price * i64::from(line.quantity)),
                    can_increment: line.quantity < product.stock,
                    can_decrement: true,
                })
            })
            .collect();

        Self {
            item_count: lines.iter().map(|l| u64::from(l.quantity)).sum(),
            total_label: format_price(cart.total_price(catalog)),
            is_empty: lines.is_empty(),
            lines,
        }
    }
}
