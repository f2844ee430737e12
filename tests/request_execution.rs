//! Contract tests for the request path, driven through a recording
//! transport: call counts, outgoing shapes, and classification branches.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tessera_client::transport::{RawResponse, Transport, TransportError};
use tessera_client::{Client, Error, Expr};

#[derive(Debug, Clone, PartialEq)]
struct RecordedCall {
    method: String,
    path: String,
    body: Option<String>,
    query: Vec<(String, String)>,
}

/// Transport double that records every round trip and replays canned
/// responses in order.
#[derive(Debug)]
struct RecordingTransport {
    calls: Mutex<Vec<RecordedCall>>,
    responses: Mutex<VecDeque<RawResponse>>,
}

impl RecordingTransport {
    fn replying(responses: Vec<(u16, &str)>) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            responses: Mutex::new(
                responses
                    .into_iter()
                    .map(|(status_code, body)| RawResponse {
                        status_code,
                        body: body.to_string(),
                    })
                    .collect(),
            ),
        })
    }

    fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn round_trip(
        &self,
        method: &str,
        path: &str,
        body: Option<String>,
        query: &[(String, String)],
        _request_id: &str,
    ) -> Result<RawResponse, TransportError> {
        self.calls.lock().unwrap().push(RecordedCall {
            method: method.to_string(),
            path: path.to_string(),
            body,
            query: query.to_vec(),
        });
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected extra round trip"))
    }
}

fn exprs(n: usize) -> Vec<Expr> {
    (0..n)
        .map(|i| Expr::from_json(json!({"get": {"collection": "users", "id": i.to_string()}})))
        .collect()
}

#[tokio::test]
async fn batch_is_one_round_trip_with_an_array_body() {
    let transport = RecordingTransport::replying(vec![(200, r#"{"resource": [1, 2, 3]}"#)]);
    let client = Client::with_transport(transport.clone());

    let results = client.query_batch(&exprs(3)).await.unwrap();
    assert_eq!(results, vec![json!(1), json!(2), json!(3)]);

    let calls = transport.calls();
    assert_eq!(calls.len(), 1, "batching must amortize to one round trip");
    assert_eq!(calls[0].method, "POST");

    let sent: Value = serde_json::from_str(calls[0].body.as_deref().unwrap()).unwrap();
    let sent = sent.as_array().expect("batched body must be a JSON array");
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[0]["get"]["id"], json!("0"));
    assert_eq!(sent[2]["get"]["id"], json!("2"));
}

#[tokio::test]
async fn empty_batch_never_touches_the_network() {
    let transport = RecordingTransport::replying(vec![]);
    let client = Client::with_transport(transport.clone());

    assert_eq!(client.query_batch(&[]).await.unwrap(), Vec::<Value>::new());
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn non_array_batch_result_is_a_protocol_violation() {
    let transport = RecordingTransport::replying(vec![(200, r#"{"resource": {"lone": 1}}"#)]);
    let client = Client::with_transport(transport);

    let err = client.query_batch(&exprs(2)).await.unwrap_err();
    assert!(matches!(err, Error::InvalidResponse(_)), "got {err:?}");
}

#[tokio::test]
async fn malformed_success_body_fails_without_retry() {
    let transport = RecordingTransport::replying(vec![(200, "definitely not json")]);
    let client = Client::with_transport(transport.clone());

    let err = client.query(&exprs(1)[0]).await.unwrap_err();
    assert!(matches!(err, Error::InvalidResponse(_)), "got {err:?}");
    assert_eq!(transport.calls().len(), 1, "a completed call is never retried");
}

#[tokio::test]
async fn success_statuses_skip_classification() {
    // An error-shaped body under a 2xx status must go down the success path:
    // the outcome is the missing-resource InvalidResponse, not a classified
    // status error.
    let transport =
        RecordingTransport::replying(vec![(299, r#"{"errors":[{"code":"x","description":"y"}]}"#)]);
    let client = Client::with_transport(transport);

    let err = client.query(&exprs(1)[0]).await.unwrap_err();
    assert!(matches!(err, Error::InvalidResponse(_)), "got {err:?}");
    assert!(err.query_response().is_none());
}

#[tokio::test]
async fn failed_statuses_classify_and_abandon_the_request() {
    let transport = RecordingTransport::replying(vec![(
        503,
        r#"{"errors":[{"code":"unavailable","description":"maintenance"}]}"#,
    )]);
    let client = Client::with_transport(transport.clone());

    let err = client.query(&exprs(1)[0]).await.unwrap_err();
    match &err {
        Error::UnavailableError(response) => {
            assert_eq!(response.status_code, 503);
            assert_eq!(response.errors[0].code, "unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(transport.calls().len(), 1);
}

#[tokio::test]
async fn bare_ping_sends_no_body_and_no_parameters() {
    let transport = RecordingTransport::replying(vec![(200, r#"{"resource": "Scope global is OK"}"#)]);
    let client = Client::with_transport(transport.clone());

    let message = client.ping(None, None).await.unwrap();
    assert_eq!(message, "Scope global is OK");

    let calls = transport.calls();
    assert_eq!(calls[0].method, "GET");
    assert_eq!(calls[0].path, "ping");
    assert_eq!(calls[0].body, None);
    assert!(calls[0].query.is_empty());
}

#[tokio::test]
async fn scoped_ping_sends_scope_and_omits_timeout() {
    let transport = RecordingTransport::replying(vec![(200, r#"{"resource": "Scope x is OK"}"#)]);
    let client = Client::with_transport(transport.clone());

    client.ping(Some("x"), None).await.unwrap();

    let calls = transport.calls();
    assert_eq!(calls[0].query, vec![("scope".to_string(), "x".to_string())]);
}

#[tokio::test]
async fn ping_forwards_both_parameters_when_present() {
    let transport = RecordingTransport::replying(vec![(200, r#"{"resource": "Scope node is OK"}"#)]);
    let client = Client::with_transport(transport.clone());

    client.ping(Some("node"), Some(250)).await.unwrap();

    let calls = transport.calls();
    assert_eq!(
        calls[0].query,
        vec![
            ("scope".to_string(), "node".to_string()),
            ("timeout".to_string(), "250".to_string()),
        ]
    );
}

#[tokio::test]
async fn non_string_ping_resource_is_invalid() {
    let transport = RecordingTransport::replying(vec![(200, r#"{"resource": 42}"#)]);
    let client = Client::with_transport(transport);

    let err = client.ping(None, None).await.unwrap_err();
    assert!(matches!(err, Error::InvalidResponse(_)), "got {err:?}");
}
