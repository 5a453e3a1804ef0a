//! Greeting and echo endpoints.

use hyper::{body::Bytes, Response};
use serde_json::json;

use super::request_utils::{path_param, MatchitParams};
use super::response::{create_response, DEFAULT_STATUS};
use crate::router::RouterError;

/// Liveness greeting.
///
/// # Endpoint
/// `GET /`
///
/// # Response
/// - **200 OK**: `{"content": "hello world!"}`
pub fn hello_world() -> Result<Response<Bytes>, RouterError> {
    create_response(&json!({ "content": "hello world!" }), DEFAULT_STATUS, "")
}

/// Echoes the last path segment back.
///
/// # Endpoint
/// `GET /mirror/{name}`
///
/// # Response
/// - **200 OK**: `{"name": "<name>"}`
///
/// # Example
/// ```bash
/// curl http://localhost:8080/mirror/Ann
/// ```
pub fn mirror(params: &MatchitParams<'_, '_>) -> Result<Response<Bytes>, RouterError> {
    let name = path_param(params, "name")?;
    create_response(&json!({ "name": name }), DEFAULT_STATUS, "")
}
