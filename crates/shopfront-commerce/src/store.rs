//! Storefront session store.
//!
//! One [`Storefront`] owns everything a shopper's page session mutates: the
//! catalog load status, the cart and the details overlay. UI event handlers
//! call its transition methods; nothing else holds mutable state.

use crate::cart::CartState;
use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::presentation::{format_price, CartView, ProductView};
use crate::selection::Selection;

/// Catalog load status.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CatalogStatus {
    /// Waiting on the catalog source.
    #[default]
    Loading,
    /// Catalog available.
    Ready(Catalog),
    /// The fetch failed; holds a message fit for display.
    Failed(String),
}

impl CatalogStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogStatus::Loading)
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            CatalogStatus::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CatalogStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Session-scoped storefront state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Storefront {
    status: CatalogStatus,
    cart: CartState,
    selection: Selection,
}

impl Storefront {
    /// New session: catalog loading, empty cart, overlay closed.
    pub fn new() -> Self {
        Self::default()
    }

    // === Catalog ===

    /// Mark a (re)load in flight. The current cart is kept.
    pub fn begin_loading(&mut self) {
        self.status = CatalogStatus::Loading;
    }

    /// Replace the catalog wholesale.
    ///
    /// Cart lines for listed products are capped at the new stock, and a
    /// line whose product sold out is dropped. Lines whose product
    /// disappeared are kept but drop out of the total and the cart panel.
    /// The overlay follows the new listing, or closes if its product is gone.
    pub fn load_catalog(&mut self, products: Vec<Product>) {
        let catalog = Catalog::new(products);

        let over_stock: Vec<(ProductId, u32, u32)> = self
            .cart
            .lines()
            .iter()
            .filter_map(|line| {
                let stock = catalog.get(&line.product_id)?.stock;
                (line.quantity > stock).then(|| (line.product_id.clone(), line.quantity, stock))
            })
            .collect();
        for (product_id, quantity, stock) in over_stock {
            self.cart.update_quantity(&product_id, i64::from(quantity), stock);
        }

        let refreshed = self
            .selection
            .selected()
            .map(|p| catalog.get(&p.id).cloned());
        match refreshed {
            Some(Some(product)) => self.selection.view(product),
            Some(None) => self.selection.close(),
            None => {}
        }

        self.status = CatalogStatus::Ready(catalog);
    }

    pub fn fail_loading(&mut self, message: impl Into<String>) {
        self.status = CatalogStatus::Failed(message.into());
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.status.catalog()
    }

    fn product(&self, product_id: &ProductId) -> Result<&Product, CommerceError> {
        let catalog = self.catalog().ok_or(CommerceError::CatalogNotLoaded)?;
        catalog
            .get(product_id)
            .ok_or_else(|| CommerceError::ProductNotFound(product_id.to_string()))
    }

    // === Cart ===

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    /// Add one unit of a listed product.
    ///
    /// Out-of-stock products are refused before the cart is touched.
    pub fn add_to_cart(&mut self, product_id: &ProductId) -> Result<u32, CommerceError> {
        let product = self.product(product_id)?;
        if !product.in_stock() {
            return Err(CommerceError::OutOfStock(product_id.to_string()));
        }
        let product = product.clone();
        Ok(self.cart.add_item(&product))
    }

    /// Set a line's quantity, clamped to the product's current stock.
    ///
    /// Zero or below always removes the line, even when the product is no
    /// longer in the catalog.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        new_quantity: i64,
    ) -> Result<u32, CommerceError> {
        if new_quantity <= 0 {
            self.cart.remove_item(product_id);
            return Ok(0);
        }
        let stock = self.product(product_id)?.stock;
        Ok(self.cart.update_quantity(product_id, new_quantity, stock))
    }

    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> bool {
        self.cart.remove_item(product_id)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Cart total over listed products.
    pub fn total(&self) -> Money {
        match self.catalog() {
            Some(catalog) => self.cart.total_price(catalog),
            None => Money::zero(Currency::USD),
        }
    }

    pub fn total_label(&self) -> String {
        format_price(self.total())
    }

    // === Details overlay ===

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Open the details overlay on a listed product.
    pub fn view(&mut self, product_id: &ProductId) -> Result<(), CommerceError> {
        let product = self.product(product_id)?.clone();
        self.selection.view(product);
        Ok(())
    }

    pub fn close_details(&mut self) {
        self.selection.close();
    }

    /// Add the overlay's product to the cart, then close the overlay.
    ///
    /// The overlay closes even when the add is refused.
    pub fn add_selected_to_cart(&mut self) -> Result<u32, CommerceError> {
        let product = self.selection.take().ok_or(CommerceError::NothingSelected)?;
        self.add_to_cart(&product.id)
    }

    // === Views ===

    pub fn product_views(&self) -> Vec<ProductView> {
        self.catalog()
            .map(|c| c.iter().map(ProductView::from_product).collect())
            .unwrap_or_default()
    }

    pub fn selected_view(&self) -> Option<ProductView> {
        self.selection.selected().map(ProductView::from_product)
    }

    pub fn cart_view(&self) -> CartView {
        match self.catalog() {
            Some(catalog) => CartView::build(&self.cart, catalog),
            None => CartView::build(&self.cart, &Catalog::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_products() -> Vec<Product> {
        vec![
            Product::new("1", "Wireless Headphones", Money::from_decimal(99.99, Currency::USD))
                .with_stock(10),
            Product::new("2", "Running Shoes", Money::from_decimal(79.99, Currency::USD))
                .with_stock(15),
            Product::new("3", "Coffee Maker", Money::from_decimal(129.99, Currency::USD))
                .with_stock(0),
        ]
    }

    fn loaded() -> Storefront {
        let mut store = Storefront::new();
        store.load_catalog(sample_products());
        store
    }

    // === Catalog status ===

    #[test]
    fn test_new_session_is_loading() {
        let store = Storefront::new();
        assert!(store.is_loading());
        assert!(store.cart().is_empty());
        assert!(!store.selection().is_open());
        assert!(store.product_views().is_empty());
    }

    #[test]
    fn test_fail_loading_exposes_message() {
        let mut store = Storefront::new();
        store.fail_loading("Failed to fetch products");
        assert_eq!(store.status().error(), Some("Failed to fetch products"));
        assert_eq!(
            store.add_to_cart(&"1".into()),
            Err(CommerceError::CatalogNotLoaded)
        );
    }

    #[test]
    fn test_reload_keeps_cart() {
        let mut store = loaded();
        store.add_to_cart(&"1".into()).unwrap();
        store.begin_loading();
        store.load_catalog(sample_products());
        assert_eq!(store.cart().quantity(&"1".into()), 1);
    }

    fn restocked(id: &str, stock: u32) -> Vec<Product> {
        sample_products()
            .into_iter()
            .map(|p| if p.id.as_str() == id { p.with_stock(stock) } else { p })
            .collect()
    }

    #[test]
    fn test_reload_caps_quantity_at_new_stock() {
        let mut store = loaded();
        assert_eq!(store.update_quantity(&"1".into(), 8), Ok(8));

        store.load_catalog(restocked("1", 3));

        assert_eq!(store.cart().quantity(&"1".into()), 3);
        assert_eq!(store.total_label(), "$299.97");
        let line = &store.cart_view().lines[0];
        assert_eq!(line.quantity, 3);
        assert!(!line.can_increment);
    }

    #[test]
    fn test_reload_sold_out_drops_line() {
        let mut store = loaded();
        store.add_to_cart(&"1".into()).unwrap();
        store.add_to_cart(&"2".into()).unwrap();

        store.load_catalog(restocked("1", 0));

        assert!(!store.cart().contains(&"1".into()));
        assert_eq!(store.cart().quantity(&"2".into()), 1);
    }

    #[test]
    fn test_reload_keeps_delisted_line() {
        let mut store = loaded();
        store.add_to_cart(&"2".into()).unwrap();
        store.load_catalog(vec![]);
        assert_eq!(store.cart().quantity(&"2".into()), 1);
    }

    // === Cart ===

    #[test]
    fn test_add_to_cart_out_of_stock_refused() {
        let mut store = loaded();
        assert_eq!(
            store.add_to_cart(&"3".into()),
            Err(CommerceError::OutOfStock("3".to_string()))
        );
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_add_to_cart_unknown_product() {
        let mut store = loaded();
        assert!(matches!(
            store.add_to_cart(&"nope".into()),
            Err(CommerceError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_total_scenario() {
        let mut store = loaded();
        store.add_to_cart(&"1".into()).unwrap();
        store.add_to_cart(&"1".into()).unwrap();
        assert_eq!(store.total().amount_cents, 19998);
        assert_eq!(store.total_label(), "$199.98");
    }

    #[test]
    fn test_update_quantity_clamps_to_catalog_stock() {
        let mut store = loaded();
        store.add_to_cart(&"1".into()).unwrap();
        assert_eq!(store.update_quantity(&"1".into(), 11), Ok(10));
    }

    #[test]
    fn test_update_quantity_negative_removes() {
        let mut store = loaded();
        store.add_to_cart(&"1".into()).unwrap();
        assert_eq!(store.update_quantity(&"1".into(), -1), Ok(0));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_removal_allowed_after_product_delisted() {
        let mut store = loaded();
        store.add_to_cart(&"2".into()).unwrap();
        store.load_catalog(vec![]);
        assert_eq!(store.update_quantity(&"2".into(), 0), Ok(0));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_delisted_product_excluded_from_total() {
        let mut store = loaded();
        store.add_to_cart(&"2".into()).unwrap();
        store.load_catalog(sample_products().into_iter().filter(|p| p.id.as_str() != "2").collect());
        assert!(store.total().is_zero());
        assert!(store.cart_view().is_empty);
    }

    // === Details overlay ===

    #[test]
    fn test_view_replaces_selection() {
        let mut store = loaded();
        store.view(&"1".into()).unwrap();
        store.view(&"2".into()).unwrap();
        assert_eq!(store.selected_view().unwrap().name, "Running Shoes");
    }

    #[test]
    fn test_add_selected_to_cart_then_closes() {
        let mut store = loaded();
        store.view(&"2".into()).unwrap();
        assert_eq!(store.add_selected_to_cart(), Ok(1));
        assert!(!store.selection().is_open());
        assert_eq!(store.cart().quantity(&"2".into()), 1);
    }

    #[test]
    fn test_add_selected_out_of_stock_still_closes() {
        let mut store = loaded();
        store.view(&"3".into()).unwrap();
        assert!(store.add_selected_to_cart().is_err());
        assert!(!store.selection().is_open());
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_add_selected_without_selection() {
        let mut store = loaded();
        assert_eq!(store.add_selected_to_cart(), Err(CommerceError::NothingSelected));
    }

    #[test]
    fn test_reload_refreshes_open_overlay() {
        let mut store = loaded();
        store.view(&"1".into()).unwrap();

        store.load_catalog(restocked("1", 3));

        let view = store.selected_view().unwrap();
        assert_eq!(view.stock_label, "3 in stock");
        assert!(view.add_to_cart_enabled);

        store.load_catalog(restocked("1", 0));
        let view = store.selected_view().unwrap();
        assert_eq!(view.stock_label, "Out of Stock");
        assert!(!view.add_to_cart_enabled);
    }

    #[test]
    fn test_reload_closes_overlay_for_delisted_product() {
        let mut store = loaded();
        store.view(&"1".into()).unwrap();
        store.load_catalog(vec![]);
        assert!(!store.selection().is_open());
    }

    // === Views ===

    #[test]
    fn test_product_views_disable_out_of_stock() {
        let store = loaded();
        let enabled: Vec<bool> = store
            .product_views()
            .iter()
            .map(|v| v.add_to_cart_enabled)
            .collect();
        assert_eq!(enabled, vec![true, true, false]);
    }
}
