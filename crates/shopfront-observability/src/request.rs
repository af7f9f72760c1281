//! Request correlation ids.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

/// Header carrying the request id in both directions.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

static SEQUENCE: AtomicU32 = AtomicU32::new(0);

/// Unique identifier for a request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new request id from the clock and a process-wide counter.
    pub fn generate() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(format!("{:x}-{:08x}", nanos, seq))
    }

    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Reuse an inbound `x-request-id` when present, otherwise generate one.
    pub fn from_header(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(id) if !id.is_empty() && id.len() <= 128 => Self::from_string(id),
            _ => Self::generate(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
