//! Logging setup and request correlation for Shopfront workloads.
//!
//! Workloads log through `tracing` macros and call [`init`] once at startup.
//! Every request gets a [`RequestId`], echoed back in `x-request-id`.

pub mod logging;
pub mod request;

pub use logging::{init, init_with, LogConfig, LogFormat};
pub use request::{RequestId, REQUEST_ID_HEADER};
