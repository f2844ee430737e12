use super::{RawResponse, Transport, TransportError};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::fmt;
use std::time::Duration;
use url::Url;

const POOL_MAX_IDLE_PER_HOST: usize = 32;
const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);

/// Transport backed by a pooled `reqwest` client.
///
/// Holds the immutable per-client configuration: base endpoint, secret, and
/// request timeout. Cloning the inner `reqwest::Client` is cheap and shares
/// the pool, so one `HttpTransport` serves any number of concurrent calls.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    secret: String,
}

impl HttpTransport {
    pub fn new(
        base_url: Url,
        secret: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .pool_idle_timeout(Some(POOL_IDLE_TIMEOUT))
            .build()
            .map_err(TransportError::Http)?;

        Ok(Self {
            client,
            base_url,
            secret: secret.into(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn round_trip(
        &self,
        method: &str,
        path: &str,
        body: Option<String>,
        query: &[(String, String)],
        request_id: &str,
    ) -> Result<RawResponse, TransportError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| TransportError::Endpoint(format!("{path}: {e}")))?;

        let mut request = match method.to_uppercase().as_str() {
            "POST" => self.client.post(url),
            "PUT" => self.client.put(url),
            "DELETE" => self.client.delete(url),
            _ => self.client.get(url),
        };

        request = request
            .bearer_auth(&self.secret)
            .header("x-tessera-request-id", request_id);

        if !query.is_empty() {
            request = request.query(query);
        }

        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send().await?;
        let status_code = response.status().as_u16();
        let body = response.text().await?;

        Ok(RawResponse { status_code, body })
    }
}

// The secret never appears in logs or debug output.
impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .field("secret", &"<redacted>")
            .finish()
    }
}
