use crate::transport::TransportError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One validation or execution problem reported by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryError {
    /// Machine-readable problem code (e.g. `"invalid query"`).
    pub code: String,
    /// Human-readable description of the problem.
    pub description: String,
    /// Path into the query at which the problem was reported.
    #[serde(default)]
    pub position: Vec<PathSegment>,
}

/// A segment of the path at which a query error was reported.
///
/// The server mixes object keys and array indices in the same path, so the
/// wire form is either a string or an integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(u64),
    Key(String),
}

/// The normalized failure payload attached to every status-driven error.
///
/// Built once per failed request; owned by whoever received the error.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryErrorResponse {
    /// HTTP status of the failed request.
    pub status_code: u16,
    /// The problems the server reported, in wire order.
    pub errors: Vec<QueryError>,
}

// Helper function to format the reported error codes for display
fn format_errors(response: &QueryErrorResponse) -> String {
    response
        .errors
        .iter()
        .map(|e| e.code.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Unified error type for the driver.
///
/// Status-driven variants carry the full [`QueryErrorResponse`] so callers
/// can branch on the variant and still inspect every reported problem.
/// [`Error::InvalidResponse`] signals a structurally broken payload (not a
/// query outcome) and therefore carries no status.
#[derive(Debug, Error)]
pub enum Error {
    #[error("bad request (HTTP {}): {}", .0.status_code, format_errors(.0))]
    BadRequest(QueryErrorResponse),

    #[error("unauthorized (HTTP {}): {}", .0.status_code, format_errors(.0))]
    Unauthorized(QueryErrorResponse),

    #[error("permission denied (HTTP {}): {}", .0.status_code, format_errors(.0))]
    PermissionDenied(QueryErrorResponse),

    #[error("not found (HTTP {}): {}", .0.status_code, format_errors(.0))]
    NotFound(QueryErrorResponse),

    #[error("method not allowed (HTTP {}): {}", .0.status_code, format_errors(.0))]
    MethodNotAllowed(QueryErrorResponse),

    #[error("internal server error (HTTP {}): {}", .0.status_code, format_errors(.0))]
    InternalError(QueryErrorResponse),

    #[error("service unavailable (HTTP {}): {}", .0.status_code, format_errors(.0))]
    UnavailableError(QueryErrorResponse),

    #[error("unexpected HTTP status {}: {}", .0.status_code, format_errors(.0))]
    UnknownError(QueryErrorResponse),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("request serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("network transport error: {0}")]
    Transport(#[from] TransportError),
}

impl Error {
    /// The failure payload, for status-driven variants.
    pub fn query_response(&self) -> Option<&QueryErrorResponse> {
        match self {
            Error::BadRequest(r)
            | Error::Unauthorized(r)
            | Error::PermissionDenied(r)
            | Error::NotFound(r)
            | Error::MethodNotAllowed(r)
            | Error::InternalError(r)
            | Error::UnavailableError(r)
            | Error::UnknownError(r) => Some(r),
            _ => None,
        }
    }
}
