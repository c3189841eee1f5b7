use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::models::Pagination;

/// Wire shape the backend wraps every JSON payload in.
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    results: Option<u64>,
    #[serde(default)]
    data: Option<Value>,
}

/// Decoded success outcome of one call: the HTTP status plus the envelope
/// fields. Bodyless responses (204, empty 200) decode to an empty `data`.
#[derive(Debug, Clone)]
pub struct ApiSuccess {
    pub status_code: u16,
    pub data: Map<String, Value>,
    pub results: Option<u64>,
    pub token: Option<String>,
    pub message: Option<String>,
}

impl ApiSuccess {
    pub fn empty(status_code: u16) -> Self {
        Self {
            status_code,
            data: Map::new(),
            results: None,
            token: None,
            message: None,
        }
    }

    /// Decode a 2xx response body into the envelope.
    pub fn from_body(status_code: u16, body: &str) -> AppResult<Self> {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Ok(Self::empty(status_code));
        }

        let raw: RawEnvelope = serde_json::from_str(trimmed)
            .map_err(|e| AppError::DecodeError(format!("response body is not valid JSON: {}", e)))?;

        let data = match raw.data {
            None => Map::new(),
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(AppError::DecodeError(format!(
                    "expected `data` to be an object, got {}",
                    json_type_name(&other)
                )));
            }
        };

        Ok(Self {
            status_code,
            data,
            results: raw.results,
            token: raw.token,
            message: raw.message,
        })
    }

    /// Extract and deserialize one key from the `data` payload.
    pub fn field<T: DeserializeOwned>(&self, key: &str) -> AppResult<T> {
        let value = self
            .data
            .get(key)
            .ok_or_else(|| AppError::DecodeError(format!("response data has no `{}` field", key)))?;
        serde_json::from_value(value.clone())
            .map_err(|e| AppError::DecodeError(format!("failed to decode `{}`: {}", key, e)))
    }

    /// Like `field`, but absence is not an error.
    pub fn optional_field<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        match self.data.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| AppError::DecodeError(format!("failed to decode `{}`: {}", key, e))),
        }
    }

    /// Pagination block of a list response, when the endpoint returns one.
    pub fn pagination(&self) -> AppResult<Option<Pagination>> {
        self.optional_field("pagination")
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
