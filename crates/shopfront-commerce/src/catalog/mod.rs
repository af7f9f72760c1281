//! Product catalog module.
//!
//! The catalog is the product list as last fetched from the catalog source.
//! It is replaced wholesale on every load and never edited in place.

mod product;

pub use product::Product;

use crate::ids::ProductId;

/// The loaded product list, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("1", "Wireless Headphones", Money::new(9999, Currency::USD))
                .with_category("Electronics")
                .with_featured(true),
            Product::new("2", "Running Shoes", Money::new(7999, Currency::USD))
                .with_category("Sports"),
            Product::new("3", "Bluetooth Speaker", Money::new(4999, Currency::USD))
                .with_category("Electronics"),
            Product::new("4", "Gift Card", Money::new(2500, Currency::USD)),
        ])
    }

    #[test]
    fn test_get_by_id() {
        let catalog = catalog();
        assert_eq!(catalog.get(&"2".into()).unwrap().name, "Running Shoes");
        assert!(catalog.get(&"missing".into()).is_none());
    }

    #[test]
    fn test_iteration_keeps_source_order() {
        let catalog = catalog();
        let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
    }
}
