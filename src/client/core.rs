use crate::expr::{self, Expr};
use crate::transport::Transport;
use crate::wire;
use crate::{Error, Result};
use serde_json::Value;
use std::sync::Arc;

/// Handle to one Tessera endpoint.
///
/// Holds no state beyond the immutable configuration fixed at build time, so
/// it is safe to share across tasks; every call is independent and can be
/// retried by the caller.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) transport: Arc<dyn Transport>,
}

impl Client {
    /// Start building a client for the given secret.
    pub fn builder(secret: impl Into<String>) -> super::builder::ClientBuilder {
        super::builder::ClientBuilder::new(secret)
    }

    /// Build a client over a custom transport.
    ///
    /// Primarily for tests and instrumentation; production clients come from
    /// [`Client::builder`].
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Execute a single query expression and return its result.
    pub async fn query(&self, expr: &Expr) -> Result<Value> {
        self.execute("POST", "", Some(expr), &[]).await
    }

    /// Execute several query expressions in one round trip.
    ///
    /// The expressions travel as a single array-valued query; the server
    /// returns one result per expression and order is preserved. An empty
    /// input short-circuits without touching the network.
    pub async fn query_batch(&self, exprs: &[Expr]) -> Result<Vec<Value>> {
        if exprs.is_empty() {
            return Ok(Vec::new());
        }

        let batched = expr::unescaped_array(exprs);
        let result = self.execute("POST", "", Some(&batched), &[]).await?;

        // Array in, array out is part of the wire contract; anything else
        // means the response cannot belong to this request.
        match result {
            Value::Array(items) => Ok(items),
            other => Err(Error::InvalidResponse(format!(
                "batched query returned {} instead of an array",
                wire::json_kind(&other)
            ))),
        }
    }

    /// Liveness probe against the endpoint.
    ///
    /// Sends a bodiless GET; `scope` and `timeout_ms` become query
    /// parameters when present and are omitted entirely when `None`.
    pub async fn ping(&self, scope: Option<&str>, timeout_ms: Option<u64>) -> Result<String> {
        let query = [
            ("scope", scope.map(str::to_string)),
            ("timeout", timeout_ms.map(|ms| ms.to_string())),
        ];
        let resource = self.execute("GET", "ping", None, &query).await?;

        match resource {
            Value::String(message) => Ok(message),
            other => Err(Error::InvalidResponse(format!(
                "ping returned {} instead of a string",
                wire::json_kind(&other)
            ))),
        }
    }
}
