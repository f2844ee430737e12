//! 请求执行逻辑：单次请求的发送与响应解包。
//!
//! Request execution logic (single round trip).

use crate::expr::Expr;
use crate::{wire, Result};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use super::classification::classify;
use super::core::Client;

impl Client {
    /// Issue one logical request and unwrap the successful payload.
    ///
    /// Exactly one network round trip per invocation; a failed round trip is
    /// abandoned, never retried here. `None`-valued query parameters are
    /// omitted from the outgoing request.
    pub(crate) async fn execute(
        &self,
        method: &str,
        path: &str,
        body: Option<&Expr>,
        query: &[(&str, Option<String>)],
    ) -> Result<Value> {
        let request_id = Uuid::new_v4().to_string();
        let wire_body = body.map(Expr::to_wire).transpose()?;
        let query: Vec<(String, String)> = query
            .iter()
            .filter_map(|(name, value)| value.as_ref().map(|v| (name.to_string(), v.clone())))
            .collect();

        debug!(
            method,
            endpoint = path,
            request_id = request_id.as_str(),
            "tessera request"
        );

        let start = Instant::now();
        let raw = self
            .transport
            .round_trip(method, path, wire_body, &query, &request_id)
            .await?;

        if !(200..300).contains(&raw.status_code) {
            let err = classify(raw.status_code, &raw.body);
            info!(
                http_status = raw.status_code,
                endpoint = path,
                request_id = request_id.as_str(),
                duration_ms = start.elapsed().as_millis(),
                "tessera request failed"
            );
            return Err(err);
        }

        debug!(
            http_status = raw.status_code,
            endpoint = path,
            request_id = request_id.as_str(),
            duration_ms = start.elapsed().as_millis(),
            "tessera request completed"
        );

        let parsed = wire::parse_body(&raw.body)?;
        wire::extract_resource(parsed)
    }
}
