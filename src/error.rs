/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Error types returned by the client and the domain services

use crate::constants::SESSION_EXPIRED_MESSAGE;
use serde_json::Value;
use thiserror::Error;

/// Structured error for any unsuccessful response that is not a renewable 401
///
/// The `response_data` field carries the `data` member of the error body
/// untouched, so callers can branch on domain markers such as
/// `{"isDeleted": true, "id": "..."}` on a 409 conflict.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} (status {status_code})")]
pub struct ApiError {
    /// Human readable message taken from the response body, or a generic
    /// message naming the status code
    pub message: String,
    /// HTTP status code of the failed response
    pub status_code: u16,
    /// The `data` field of the error body, if any
    pub response_data: Option<Value>,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(message: impl Into<String>, status_code: u16, response_data: Option<Value>) -> Self {
        Self {
            message: message.into(),
            status_code,
            response_data,
        }
    }

    /// Builds an error from a status code and a (possibly empty or malformed) body
    ///
    /// The message is read from `message`, falling back to `Message`, and
    /// finally to `HTTP error! status: <code>`.
    pub fn from_body(status_code: u16, body: &[u8]) -> Self {
        let parsed: Value = serde_json::from_slice(body).unwrap_or(Value::Null);

        let message = ["message", "Message"]
            .iter()
            .filter_map(|key| parsed.get(key))
            .filter_map(Value::as_str)
            .find(|msg| !msg.is_empty())
            .map(String::from)
            .unwrap_or_else(|| format!("HTTP error! status: {status_code}"));

        let response_data = parsed.get("data").filter(|v| !v.is_null()).cloned();

        Self::new(message, status_code, response_data)
    }

    /// Returns a field of `response_data` when it is present
    pub fn data_field(&self, key: &str) -> Option<&Value> {
        self.response_data.as_ref().and_then(|data| data.get(key))
    }

    /// True when the server reported a conflict with a soft-deleted record
    pub fn is_deleted_conflict(&self) -> bool {
        self.status_code == 409
            && self
                .data_field("isDeleted")
                .and_then(Value::as_bool)
                .unwrap_or(false)
    }
}

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// No response was obtained from the server
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with an unsuccessful status
    #[error("api error: {0}")]
    Api(ApiError),

    /// Access token renewal failed and the credentials were cleared
    #[error("{}", SESSION_EXPIRED_MESSAGE)]
    SessionExpired,

    /// Renewal was requested but no refresh token is stored
    #[error("no refresh token available")]
    NoRefreshToken,

    /// The refresh endpoint rejected the request or returned an unusable body
    #[error("token refresh failed: {0}")]
    RefreshFailed(String),

    /// JSON (de)serialization failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem failure in a durable session store
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Caller supplied an argument the backend would reject anyway
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A typed body was expected but the response was not JSON
    #[error("unexpected response body: {0}")]
    UnexpectedBody(String),
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        AppError::Api(err)
    }
}

impl AppError {
    /// Returns the inner [`ApiError`] when this is a structured API failure
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            AppError::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the HTTP status code carried by the error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::Api(err) => Some(err.status_code),
            AppError::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
