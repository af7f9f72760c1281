//! Catalog sources.

use crate::config::{CmsConfig, ConfigError};
use crate::error::FetchError;
use crate::query::ProductQuery;
use crate::record::{CmsProduct, QueryResponse};
use crate::transport::{HttpRequest, Method, Transport};
use async_trait::async_trait;
use shopfront_commerce::catalog::Product;
use shopfront_commerce::money::{Currency, Money};
use tracing::debug;

/// Anything that can produce the full product list.
///
/// A fetch either yields every product or fails; there are no partial
/// results.
#[async_trait(?Send)]
pub trait CatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;
}

#[async_trait(?Send)]
impl<S: CatalogSource + ?Sized> CatalogSource for &S {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        (**self).fetch_products().await
    }
}

/// A source that could not be built fails every fetch with the build error.
#[async_trait(?Send)]
impl<S: CatalogSource> CatalogSource for Result<S, FetchError> {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        match self {
            Ok(source) => source.fetch_products().await,
            Err(err) => Err(err.clone()),
        }
    }
}

/// Catalog read from the content backend's query API.
#[derive(Debug, Clone)]
pub struct CmsCatalog<T> {
    config: CmsConfig,
    query: ProductQuery,
    transport: T,
}

impl<T: Transport> CmsCatalog<T> {
    /// Create a source for `config`, listing every product document.
    pub fn new(config: CmsConfig, transport: T) -> Result<Self, ConfigError> {
        config.validate()?;
        let query = ProductQuery::new(config.document_type.clone());
        Ok(Self {
            config,
            query,
            transport,
        })
    }

    /// Replace the listing query.
    pub fn with_query(mut self, query: ProductQuery) -> Self {
        self.query = query;
        self
    }

    pub fn config(&self) -> &CmsConfig {
        &self.config
    }

    pub fn query(&self) -> &ProductQuery {
        &self.query
    }

    fn build_request(&self) -> Result<HttpRequest, FetchError> {
        let groq = self.query.to_groq();
        let mut request = HttpRequest::new(Method::Post, self.config.query_url())
            .header("Accept", "application/json")
            .json(&serde_json::json!({ "query": groq }))?;
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }
        Ok(request)
    }
}

#[async_trait(?Send)]
impl<T: Transport> CatalogSource for CmsCatalog<T> {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let request = self.build_request()?;
        debug!(url = %request.url, cdn = self.config.uses_cdn(), "Querying CMS for products");

        let response = self.transport.send(request).await?.error_for_status()?;
        let envelope: QueryResponse<Vec<CmsProduct>> = response.json()?;

        let products: Vec<Product> = envelope
            .result
            .into_iter()
            .map(CmsProduct::into_product)
            .collect();
        debug!(count = products.len(), ms = ?envelope.ms, "CMS query complete");
        Ok(products)
    }
}

/// In-memory catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticCatalog {
    products: Vec<Product>,
    failure: Option<String>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            failure: None,
        }
    }

    /// A source whose every fetch fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            products: Vec::new(),
            failure: Some(message.into()),
        }
    }

    /// The three demo products.
    pub fn sample() -> Self {
        const PLACEHOLDER: &str = "/api/placeholder/400/300";
        Self::new(vec![
            Product::new("1", "Wireless Headphones", Money::from_decimal(99.99, Currency::USD))
                .with_description("High-quality wireless headphones with noise cancellation")
                .with_category("Electronics")
                .with_stock(10)
                .with_image(PLACEHOLDER),
            Product::new("2", "Running Shoes", Money::from_decimal(79.99, Currency::USD))
                .with_description("Comfortable running shoes for all terrains")
                .with_category("Sports")
                .with_stock(15)
                .with_image(PLACEHOLDER),
            Product::new("3", "Coffee Maker", Money::from_decimal(129.99, Currency::USD))
                .with_description("Programmable coffee maker with built-in grinder")
                .with_category("Home")
                .with_stock(5)
                .with_image(PLACEHOLDER),
        ])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

#[async_trait(?Send)]
impl CatalogSource for StaticCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        match &self.failure {
            Some(message) => Err(FetchError::RequestError(message.clone())),
            None => Ok(self.products.clone()),
        }
    }
}
