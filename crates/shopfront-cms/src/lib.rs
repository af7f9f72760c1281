//! CMS-backed catalog source for the Shopfront storefront.
//!
//! Products live in a headless CMS and are listed with a single GROQ query.
//! [`CmsCatalog`] runs that query over a [`Transport`] and normalizes the
//! raw documents into [`Product`](shopfront_commerce::catalog::Product)s.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_cms::{CatalogSource, CmsCatalog, CmsConfig, SpinTransport};
//!
//! let config = CmsConfig::new("tt81m3xp");
//! let catalog = CmsCatalog::new(config, SpinTransport)?;
//! let products = catalog.fetch_products().await?;
//! ```

pub mod config;
pub mod error;
pub mod query;
pub mod record;
pub mod source;
pub mod transport;

pub use config::{CmsConfig, ConfigError};
pub use error::FetchError;
pub use query::{ProductQuery, SortOrder};
pub use record::{CmsProduct, QueryResponse};
pub use source::{CatalogSource, CmsCatalog, StaticCatalog};
pub use transport::{HttpRequest, HttpResponse, Method, Transport};

#[cfg(target_arch = "wasm32")]
pub use transport::SpinTransport;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CatalogSource, CmsCatalog, CmsConfig, FetchError, ProductQuery, StaticCatalog};
}
