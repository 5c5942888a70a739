//! HTTP client and request dispatch.
//!
//! [`WsTradeClient`] is the entry point: it owns the request dispatcher
//! and the session, and hands out the per-resource services in
//! [`crate::api`].

mod config;
mod http;
mod requestor;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use http::WsTradeClient;

pub(crate) use http::ClientInner;
pub(crate) use requestor::Requestor;
