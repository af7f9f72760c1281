//! Details overlay state.

use crate::catalog::Product;

/// Which product, if any, is open in the details overlay.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    /// Overlay hidden.
    #[default]
    Closed,
    /// Overlay showing one product.
    Open(Product),
}

impl Selection {
    /// Open the overlay on `product`, replacing any previous selection.
    pub fn view(&mut self, product: Product) {
        *self = Selection::Open(product);
    }

    pub fn close(&mut self) {
        *self = Selection::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }

    pub fn selected(&self) -> Option<&Product> {
        match self {
            Selection::Open(product) => Some(product),
            Selection::Closed => None,
        }
    }

    /// Close the overlay and hand back the product it was showing.
    pub fn take(&mut self) -> Option<Product> {
        match std::mem::take(self) {
            Selection::Open(product) => Some(product),
            Selection::Closed => None,
        }
    }
}
