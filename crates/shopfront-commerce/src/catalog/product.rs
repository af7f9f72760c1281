//! Product type.

use crate::ids::ProductId;
use crate::money::{self, Money};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Serializes to the catalog wire shape served by `/api/products`:
/// `id, name, slug, price, description, category, stock, image`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// CMS document id.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// URL slug, when the editor set one.
    #[serde(default)]
    pub slug: Option<String>,
    /// Unit price.
    #[serde(with = "money::decimal")]
    pub price: Money,
    /// Long description.
    #[serde(default)]
    pub description: Option<String>,
    /// Category name, dereferenced from the category document.
    #[serde(default)]
    pub category: Option<String>,
    /// Units in stock.
    #[serde(default)]
    pub stock: u32,
    /// Image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Editor-flagged for the featured shelf.
    #[serde(default, skip_serializing)]
    pub featured: bool,
}

impl Product {
    /// Create a product with no stock and no optional metadata.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: None,
            price,
            description: None,
            category: None,
            stock: 0,
            image: None,
            featured: false,
        }
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// Whether at least one unit can be put in a cart.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}
