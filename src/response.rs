//! Response interpretation.
//!
//! Status contract of the blog service:
//!
//! - `200`/`201`: the body is the JSON result; an empty body means no value.
//! - `204`: no value, the body is never read as JSON.
//! - anything else: a [`RemoteError`] carrying the raw body verbatim.

use serde::de::DeserializeOwned;

use crate::endpoint::Payload;
use crate::error::{ProxyError, RemoteError, Result};
use crate::http::HttpResponse;

/// Interpret a response for an endpoint whose response payload is `expected`.
///
/// Returns `Ok(None)` for empty results. When `expected` is
/// [`Payload::None`] a success body is discarded unparsed.
pub fn interpret<T: DeserializeOwned>(
    response: HttpResponse,
    expected: Payload,
) -> Result<Option<T>> {
    match response.status {
        200 | 201 => {
            if expected == Payload::None || response.body.is_empty() {
                return Ok(None);
            }
            serde_json::from_str(&response.body)
                .map(Some)
                .map_err(|source| ProxyError::Parse {
                    status: response.status,
                    body: response.body,
                    source,
                })
        }
        204 => Ok(None),
        status => Err(remote_error(status, response).into()),
    }
}

fn remote_error(status: u16, response: HttpResponse) -> RemoteError {
    let result = serde_json::from_str::<serde_json::Value>(&response.body).ok();
    RemoteError {
        message: response.body.clone(),
        status,
        response: response.body,
        headers: response.headers,
        result,
    }
}
