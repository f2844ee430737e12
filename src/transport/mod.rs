//! Network transport seam.
//!
//! The request path needs exactly one capability from the network layer: one
//! round trip in, one raw response out. Everything connection-shaped
//! (pooling, TLS, timeouts) stays behind [`Transport`]; the driver never
//! sees it.

mod http;

pub use http::HttpTransport;

use async_trait::async_trait;
use std::fmt::Debug;

/// Raw outcome of one network round trip.
///
/// Non-2xx statuses are ordinary values here; classification happens in the
/// request path, not in the transport.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status_code: u16,
    pub body: String,
}

/// One network round trip.
///
/// Implementations must return every HTTP status as a [`RawResponse`];
/// [`TransportError`] is reserved for I/O-level failures (connect, timeout,
/// broken body read). Cancellation propagates by dropping the future.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn round_trip(
        &self,
        method: &str,
        path: &str,
        body: Option<String>,
        query: &[(String, String)],
        request_id: &str,
    ) -> Result<RawResponse, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid endpoint: {0}")]
    Endpoint(String),
}
