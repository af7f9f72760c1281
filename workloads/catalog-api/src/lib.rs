//! Product listing endpoint for the Shopfront storefront.
//!
//! Serves `GET /api/products` as a Spin component. The product list comes
//! from the CMS configured through Spin variables (`cms_project_id`,
//! `cms_dataset`, `cms_api_version`, `cms_use_cdn`, `cms_token`,
//! `cms_document_type`).
//!
//! Request handling lives in [`handler`] and runs against any
//! [`CatalogSource`](shopfront_cms::CatalogSource); only the component entry
//! point below is Spin-specific.

pub mod handler;

pub use handler::{handle_products, ApiResponse, FETCH_FAILED_MESSAGE};

#[cfg(target_arch = "wasm32")]
mod component {
    use crate::handler::handle_products;
    use shopfront_cms::{CmsCatalog, CmsConfig, FetchError, SpinTransport};
    use shopfront_observability::{LogFormat, RequestId, REQUEST_ID_HEADER};
    use spin_sdk::http::{Method, Request, Response};
    use spin_sdk::{http_component, variables};

    fn variable(key: &str) -> Option<String> {
        variables::get(key).ok()
    }

    fn method_name(method: &Method) -> &str {
        match method {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Connect => "CONNECT",
            Method::Options => "OPTIONS",
            Method::Trace => "TRACE",
            Method::Patch => "PATCH",
            Method::Other(other) => other.as_str(),
        }
    }

    /// `/api/products` handler.
    #[http_component]
    async fn handle_request(req: Request) -> anyhow::Result<Response> {
        let format = variable("log_format")
            .and_then(|v| v.parse().ok())
            .unwrap_or(LogFormat::Json);
        shopfront_observability::init(format);

        let request_id =
            RequestId::from_header(req.header(REQUEST_ID_HEADER).and_then(|v| v.as_str()));

        let source = CmsConfig::from_lookup(variable)
            .map_err(FetchError::from)
            .and_then(|config| CmsCatalog::new(config, SpinTransport).map_err(FetchError::from));

        let api = handle_products(method_name(req.method()), &source, &request_id).await;

        let mut builder = Response::builder();
        builder.status(api.status);
        for (key, value) in &api.headers {
            builder.header(key.as_str(), value.as_str());
        }
        builder.body(api.body);
        Ok(builder.build())
    }
}
