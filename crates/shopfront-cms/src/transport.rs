//! Outbound HTTP seam.
//!
//! [`CmsCatalog`](crate::CmsCatalog) talks to the network only through
//! [`Transport`]. Inside a Spin component that is [`SpinTransport`]; tests
//! substitute an in-memory fake.

use crate::error::FetchError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// HTTP methods the catalog client issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// An outbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    pub fn bearer_auth(self, token: impl AsRef<str>) -> Self {
        self.header("Authorization", format!("Bearer {}", token.as_ref()))
    }

    /// Set a JSON body and content type.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.body = Some(serde_json::to_vec(value)?);
        Ok(self.header("Content-Type", "application/json"))
    }

    /// Case-insensitive header lookup.
    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// A response as seen by the catalog client.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, headers: Vec<(String, String)>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::ParseError(format!("Invalid UTF-8: {}", e)))
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::ParseError(e.to_string()))
    }

    /// Turn a non-2xx response into [`FetchError::HttpError`].
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            let message = self.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(FetchError::HttpError {
                status: self.status,
                message,
            })
        }
    }
}

/// Sends requests on behalf of a catalog source.
///
/// Spin's outbound futures are not `Send`, so neither is this trait.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, FetchError>;
}

/// Transport over Spin outbound HTTP.
///
/// The CMS host must be listed in the component's `allowed_outbound_hosts`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinTransport;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl Transport for SpinTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, FetchError> {
        use spin_sdk::http::{Method as SpinMethod, Request, Response};

        let mut builder = Request::builder();
        builder.method(match request.method {
            Method::Get => SpinMethod::Get,
            Method::Post => SpinMethod::Post,
        });
        builder.uri(request.url.as_str());
        for (key, value) in &request.headers {
            builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder.body(body);
        }

        let response: Response = spin_sdk::http::send(builder.build())
            .await
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        let status = *response.status();
        let headers = response
            .headers()
            .map(|(k, v)| (k.to_string(), v.as_str().unwrap_or("").to_string()))
            .collect();

        Ok(HttpResponse::new(status, headers, response.into_body()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_request_sets_body_and_content_type() {
        let request = HttpRequest::new(Method::Post, "https://example.com")
            .json(&serde_json::json!({"query": "*"}))
            .unwrap();
        assert_eq!(request.header_value("content-type"), Some("application/json"));
        assert_eq!(request.body.as_deref(), Some(br#"{"query":"*"}"#.as_slice()));
    }

    #[test]
    fn test_bearer_auth() {
        let request = HttpRequest::new(Method::Get, "https://example.com").bearer_auth("abc");
        assert_eq!(request.header_value("Authorization"), Some("Bearer abc"));
    }

    #[test]
    fn test_error_for_status() {
        let ok = HttpResponse::new(200, vec![], b"{}".to_vec());
        assert!(ok.error_for_status().is_ok());

        let err = HttpResponse::new(401, vec![], b"unauthorized".to_vec())
            .error_for_status()
            .unwrap_err();
        assert_eq!(
            err,
            FetchError::HttpError {
                status: 401,
                message: "unauthorized".to_string()
            }
        );
        assert_eq!(err.status(), Some(401));
    }
}
