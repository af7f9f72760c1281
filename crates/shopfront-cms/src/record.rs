//! Raw CMS records and their normalization into catalog products.

use serde::Deserialize;
use shopfront_commerce::catalog::Product;
use shopfront_commerce::money::{Currency, Money};

/// Envelope returned by the query endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct QueryResponse<T> {
    pub result: T,
    /// Server-side query time in milliseconds.
    #[serde(default)]
    pub ms: Option<u64>,
    /// Echo of the executed query.
    #[serde(default)]
    pub query: Option<String>,
}

/// A product document as projected by [`ProductQuery`].
///
/// Editors can leave any field blank, so everything but the id is optional.
///
/// [`ProductQuery`]: crate::query::ProductQuery
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CmsProduct {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub stock: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
}

impl CmsProduct {
    /// Normalize into a catalog product.
    ///
    /// A missing name becomes empty. A missing, negative or non-finite price
    /// becomes zero. Stock is truncated to a whole count and floored at zero.
    pub fn into_product(self) -> Product {
        let price = match self.price {
            Some(p) if p.is_finite() && p > 0.0 => Money::from_decimal(p, Currency::USD),
            _ => Money::zero(Currency::USD),
        };
        let stock = match self.stock {
            Some(s) if s.is_finite() && s > 0.0 => s.trunc().min(f64::from(u32::MAX)) as u32,
            _ => 0,
        };

        let mut product = Product::new(self.id, self.name.unwrap_or_default(), price)
            .with_stock(stock)
            .with_featured(self.featured.unwrap_or(false));
        product.slug = non_empty(self.slug);
        product.description = self.description;
        product.category = non_empty(self.category);
        product.image = non_empty(self.image);
        product
    }
}

impl From<CmsProduct> for Product {
    fn from(record: CmsProduct) -> Self {
        record.into_product()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> CmsProduct {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_full_record() {
        let product = decode(
            r#"{
                "id": "prod-1",
                "name": "Wireless Headphones",
                "slug": "wireless-headphones",
                "price": 99.99,
                "description": "High-quality wireless headphones with noise cancellation",
                "category": "Electronics",
                "stock": 10,
                "image": "https://cdn.sanity.io/images/tt81m3xp/production/abc.png",
                "featured": true
            }"#,
        )
        .into_product();

        assert_eq!(product.id.as_str(), "prod-1");
        assert_eq!(product.price.amount_cents, 9999);
        assert_eq!(product.stock, 10);
        assert_eq!(product.slug.as_deref(), Some("wireless-headphones"));
        assert_eq!(product.category.as_deref(), Some("Electronics"));
        assert!(product.featured);
    }

    #[test]
    fn test_null_fields_normalize() {
        let product = decode(
            r#"{"id": "p", "name": null, "price": null, "stock": null, "category": null, "image": null}"#,
        )
        .into_product();

        assert_eq!(product.name, "");
        assert!(product.price.is_zero());
        assert_eq!(product.stock, 0);
        assert!(product.category.is_none());
        assert!(product.image.is_none());
        assert!(!product.featured);
    }

    #[test]
    fn test_negative_values_floor_at_zero() {
        let product = CmsProduct {
            id: "p".into(),
            price: Some(-5.0),
            stock: Some(-3.0),
            ..Default::default()
        }
        .into_product();
        assert!(product.price.is_zero());
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn test_fractional_stock_truncates() {
        let product = CmsProduct {
            id: "p".into(),
            stock: Some(4.9),
            ..Default::default()
        }
        .into_product();
        assert_eq!(product.stock, 4);
    }

    #[test]
    fn test_query_envelope() {
        let response: QueryResponse<Vec<CmsProduct>> = serde_json::from_str(
            r#"{"query": "*[_type == \"product\"]", "result": [{"id": "a"}, {"id": "b"}], "ms": 4}"#,
        )
        .unwrap();
        assert_eq!(response.result.len(), 2);
        assert_eq!(response.ms, Some(4));
    }
}
