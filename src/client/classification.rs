//! Status-code driven error classification.

use crate::error::{Error, QueryError, QueryErrorResponse};
use serde::Deserialize;

#[derive(Deserialize)]
struct ErrorBody {
    errors: Vec<QueryError>,
}

/// Map a failed response to its typed error.
///
/// Only constructs the error value; the executor decides how it surfaces.
/// A body that does not carry the `errors` shape is a structural problem
/// with the response itself and classifies as [`Error::InvalidResponse`]
/// regardless of status, never as `UnknownError`.
pub(crate) fn classify(status_code: u16, raw_body: &str) -> Error {
    let body: ErrorBody = match serde_json::from_str(raw_body) {
        Ok(body) => body,
        Err(e) => return Error::InvalidResponse(format!("malformed error payload: {e}")),
    };

    let response = QueryErrorResponse {
        status_code,
        errors: body.errors,
    };

    // Closed table; everything unlisted lands in UnknownError.
    match status_code {
        400 => Error::BadRequest(response),
        401 => Error::Unauthorized(response),
        403 => Error::PermissionDenied(response),
        404 => Error::NotFound(response),
        405 => Error::MethodNotAllowed(response),
        500 => Error::InternalError(response),
        503 => Error::UnavailableError(response),
        _ => Error::UnknownError(response),
    }
}
