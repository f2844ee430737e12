use crate::client::core::Client;
use crate::transport::{HttpTransport, TransportError};
use crate::Result;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

const DEFAULT_SCHEME: &str = "https";
const DEFAULT_HOST: &str = "db.tessera.io";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable: endpoint coordinates, the
/// secret, and a timeout. Everything is fixed once [`build`](Self::build)
/// runs; the resulting client is immutable.
pub struct ClientBuilder {
    scheme: String,
    host: String,
    port: Option<u16>,
    secret: String,
    timeout: Duration,
    /// Override the full base URL (primarily for testing with mock servers)
    base_url_override: Option<String>,
}

impl ClientBuilder {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: None,
            secret: secret.into(),
            timeout: DEFAULT_TIMEOUT,
            base_url_override: None,
        }
    }

    /// Set the endpoint scheme (`"https"` by default).
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Set the endpoint host.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the endpoint port. Defaults to the scheme's well-known port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the full base URL.
    ///
    /// This is primarily for testing with mock servers. In production, use
    /// `scheme`/`host`/`port`.
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client> {
        let raw = match &self.base_url_override {
            Some(base_url) => base_url.clone(),
            None => match self.port {
                Some(port) => format!("{}://{}:{}/", self.scheme, self.host, port),
                None => format!("{}://{}/", self.scheme, self.host),
            },
        };

        let base_url = Url::parse(&raw)
            .map_err(|e| TransportError::Endpoint(format!("{raw}: {e}")))?;
        let transport = HttpTransport::new(base_url, self.secret, self.timeout)?;

        Ok(Client::with_transport(Arc::new(transport)))
    }
}
