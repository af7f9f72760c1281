//! Commerce error types.

use thiserror::Error;

/// Errors raised by storefront operations.
///
/// The cart model itself is total; these surface only where a caller asks the
/// session store to act on a product it cannot act on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found in the loaded catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product has no stock and cannot be added.
    #[error("Product out of stock: {0}")]
    OutOfStock(String),

    /// The catalog has not finished loading.
    #[error("Catalog not loaded")]
    CatalogNotLoaded,

    /// No product is open in the details overlay.
    #[error("No product selected")]
    NothingSelected,

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
