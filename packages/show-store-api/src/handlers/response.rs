//! Response envelope shared by every endpoint.
//!
//! Every body the server writes has the same shape:
//!
//! ```json
//! {
//!   "code": 200,
//!   "success": true,
//!   "message": "",
//!   "result": { "content": "hello world!" }
//! }
//! ```
//!
//! `result` is either a JSON object keyed by the name of the data it carries,
//! or `null`.

use hyper::{body::Bytes, Response};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::request_utils::build_response;
use crate::router::RouterError;

/// Status used when a handler does not pick one.
pub const DEFAULT_STATUS: u16 = 200;

/// Uniform reply wrapper.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    /// HTTP status code of the reply
    pub code: u16,
    /// True for 2xx codes
    pub success: bool,
    /// Human readable message, empty when there is nothing to say
    pub message: String,
    /// Keyed payload
    pub result: Option<Map<String, Value>>,
}

/// Envelope construction errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    /// Data was present but not a keyed object
    #[error("Envelope data must be a JSON object, got {found}")]
    InvalidArgument { found: &'static str },

    /// Data could not be converted to JSON
    #[error("Failed to serialize envelope data: {0}")]
    Serialization(String),
}

impl Envelope {
    /// Wraps an already keyed payload.
    pub fn from_map(
        result: Option<Map<String, Value>>,
        code: u16,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            success: (200..300).contains(&code),
            message: message.into(),
            result,
        }
    }

    /// Wraps any serializable payload, checking that it is a keyed object.
    ///
    /// JSON `null` counts as no payload. Scalars and arrays are rejected with
    /// [`EnvelopeError::InvalidArgument`] before anything reaches the wire.
    pub fn build<T: Serialize + ?Sized>(
        data: &T,
        code: u16,
        message: impl Into<String>,
    ) -> Result<Self, EnvelopeError> {
        let value =
            serde_json::to_value(data).map_err(|e| EnvelopeError::Serialization(e.to_string()))?;
        let result = match value {
            Value::Object(map) => Some(map),
            Value::Null => None,
            other => {
                return Err(EnvelopeError::InvalidArgument {
                    found: json_kind(&other),
                })
            }
        };
        Ok(Self::from_map(result, code, message))
    }

    /// Serializes the envelope into an HTTP response carrying `code` as status.
    pub fn into_response(self) -> Result<Response<Bytes>, RouterError> {
        let json = serde_json::to_vec(&self).map_err(|e| {
            RouterError::InternalError(format!("Failed to serialize response: {}", e))
        })?;
        build_response(self.code, json)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Builds an enveloped response around `data`.
pub fn create_response<T: Serialize + ?Sized>(
    data: &T,
    status: u16,
    message: &str,
) -> Result<Response<Bytes>, RouterError> {
    Envelope::build(data, status, message)?.into_response()
}

/// Builds an enveloped response with a `null` result.
pub fn status_response(status: u16, message: &str) -> Result<Response<Bytes>, RouterError> {
    Envelope::from_map(None, status, message).into_response()
}
