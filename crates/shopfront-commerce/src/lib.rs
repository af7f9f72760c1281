//! Catalog, cart and selection state for the Shopfront storefront.
//!
//! This crate holds no I/O. It takes a product list from whatever catalog
//! source the host wires up and turns shopper actions into state changes:
//!
//! - **Catalog**: the loaded product list
//! - **Cart**: product id to quantity, capped at stock
//! - **Selection**: the product open in the details overlay
//! - **Presentation**: badges, price labels and button states
//! - **Store**: [`Storefront`], the single owner of all of the above
//!
//! # Example
//!
//! ```rust
//! use shopfront_commerce::prelude::*;
//!
//! let mut store = Storefront::new();
//! store.load_catalog(vec![
//!     Product::new("1", "Wireless Headphones", Money::from_decimal(99.99, Currency::USD))
//!         .with_stock(10),
//! ]);
//!
//! store.add_to_cart(&"1".into()).unwrap();
//! store.add_to_cart(&"1".into()).unwrap();
//! assert_eq!(store.total_label(), "$199.98");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod presentation;
pub mod selection;
pub mod store;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};
pub use store::{CatalogStatus, Storefront};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    pub use crate::cart::{CartLine, CartState};
    pub use crate::catalog::{Catalog, Product};
    pub use crate::presentation::{format_price, CartLineView, CartView, ProductView, StockBadge};
    pub use crate::selection::Selection;
    pub use crate::store::{CatalogStatus, Storefront};
}
