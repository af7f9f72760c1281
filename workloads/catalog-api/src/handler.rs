//! `/api/products` request handling, independent of the HTTP runtime.

use serde::Serialize;
use shopfront_cms::CatalogSource;
use shopfront_observability::{RequestId, REQUEST_ID_HEADER};
use tracing::{error, info, warn};

/// Body sent when the catalog cannot be read. Details go to the log only.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch products";

/// Runtime-neutral response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl ApiResponse {
    fn new(status: u16, request_id: &RequestId) -> Self {
        Self {
            status,
            headers: vec![(REQUEST_ID_HEADER.to_string(), request_id.to_string())],
            body: Vec::new(),
        }
    }

    fn header(mut self, key: &str, value: impl Into<String>) -> Self {
        self.headers.push((key.to_string(), value.into()));
        self
    }

    fn json<T: Serialize>(self, value: &T) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_vec(value)?;
        let mut response = self.header("content-type", "application/json");
        response.body = body;
        Ok(response)
    }

    fn text(mut self, body: impl Into<String>) -> Self {
        self.body = body.into().into_bytes();
        self.header("content-type", "text/plain; charset=utf-8")
    }

    /// Case-insensitive header lookup.
    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Serve `/api/products`.
///
/// `GET` lists the whole catalog; a failed fetch is a 500 with a generic
/// message. Every other method gets a 405.
pub async fn handle_products<S>(method: &str, source: &S, request_id: &RequestId) -> ApiResponse
where
    S: CatalogSource + ?Sized,
{
    if method != "GET" {
        warn!(request_id = %request_id, method, "Method not allowed");
        return ApiResponse::new(405, request_id)
            .header("allow", "GET")
            .text(format!("Method {} Not Allowed", method));
    }

    let products = match source.fetch_products().await {
        Ok(products) => products,
        Err(err) => {
            error!(request_id = %request_id, error = %err, "Error fetching products");
            return server_error(request_id);
        }
    };

    match ApiResponse::new(200, request_id).json(&products) {
        Ok(response) => {
            info!(request_id = %request_id, count = products.len(), status = 200, "Served product list");
            response
        }
        Err(err) => {
            error!(request_id = %request_id, error = %err, "Error encoding products");
            server_error(request_id)
        }
    }
}

fn server_error(request_id: &RequestId) -> ApiResponse {
    let body = ErrorBody {
        error: FETCH_FAILED_MESSAGE,
    };
    ApiResponse::new(500, request_id)
        .json(&body)
        .unwrap_or_else(|_| ApiResponse::new(500, request_id).text(FETCH_FAILED_MESSAGE))
}
