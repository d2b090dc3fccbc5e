//! API Response types
//!
//! The backend wraps most replies in a `{code, message, data}` envelope.
//! Plain viewset endpoints return the resource JSON directly; those bodies
//! are lifted into the same envelope using the HTTP status as `code`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Envelope code for a successful read or action
pub const API_CODE_SUCCESS: u16 = 200;

/// Envelope code for a successful creation
pub const API_CODE_CREATED: u16 = 201;

/// Unified API response structure
///
/// ```json
/// {
///     "code": 200,
///     "message": "OK",
///     "data": { ... }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Application-level status code (mirrors HTTP codes)
    pub code: u16,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Response data (optional)
    #[serde(default)]
    pub data: Option<T>,
    /// Raw `data` of a failed envelope (validation errors and the like)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub details: Option<Value>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            code: API_CODE_SUCCESS,
            message: "OK".to_string(),
            data: Some(data),
            details: None,
        }
    }

    /// Create an error response
    pub fn error(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
            details: None,
        }
    }

    /// Create a data-less response (e.g. `204 No Content`)
    pub fn empty(code: u16, message: impl Into<String>) -> Self {
        Self::error(code, message)
    }

    /// Whether the envelope carries the given success code
    pub fn is_code(&self, expected: u16) -> bool {
        self.code == expected
    }

    /// Whether the envelope reports an application failure
    pub fn is_failure(&self) -> bool {
        self.code >= 400
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Build an envelope from a decoded 2xx body.
    ///
    /// `status` and `reason` are used when the body is not an envelope.
    pub fn from_body(status: u16, reason: &str, body: Value) -> Result<Self, serde_json::Error> {
        let mut map = match body {
            Value::Object(map) if is_envelope_map(&map) => map,
            other => {
                let data = serde_json::from_value(other)?;
                return Ok(Self {
                    code: status,
                    message: reason.to_string(),
                    data: Some(data),
                    details: None,
                });
            }
        };
        let code = map
            .get("code")
            .and_then(Value::as_u64)
            .and_then(|c| u16::try_from(c).ok())
            .unwrap_or(status);
        let message = match map.remove("message") {
            Some(Value::String(s)) => s,
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        let raw = map.remove("data").unwrap_or(Value::Null);

        if raw.is_null() {
            return Ok(Self::empty(code, message));
        }

        match serde_json::from_value::<T>(raw.clone()) {
            Ok(data) => Ok(Self {
                code,
                message,
                data: Some(data),
                details: None,
            }),
            // Failure envelopes carry error details rather than `T`
            Err(_) if code >= 400 => Ok(Self {
                code,
                message,
                data: None,
                details: Some(raw),
            }),
            Err(e) => Err(e),
        }
    }
}

/// An envelope is an object with a numeric `code` and a `message` key.
///
/// Reference entities carry their own string `code` field, so the type
/// of `code` matters.
pub fn is_envelope(body: &Value) -> bool {
    body.as_object().is_some_and(is_envelope_map)
}

fn is_envelope_map(map: &Map<String, Value>) -> bool {
    map.get("code").is_some_and(Value::is_u64) && map.contains_key("message")
}

/// Error message of a non-2xx reply: envelope `message`, else DRF
/// `detail` or a bare `error` field
pub fn envelope_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    if !is_envelope(&value) {
        return value
            .get("detail")
            .or_else(|| value.get("error"))
            .and_then(Value::as_str)
            .map(str::to_string);
    }
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}
