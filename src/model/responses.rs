/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope wrapping every backend payload: `{ success, message, data }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    /// Whether the backend considers the call successful
    #[serde(default)]
    pub success: bool,
    /// Human readable status message
    #[serde(default)]
    pub message: Option<String>,
    /// Payload, absent on some failures and on empty results
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Returns the payload when the call succeeded and carried data
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }
}

impl<T: Default> ApiResponse<T> {
    /// Returns the payload or its default, mirroring `response.data || []`
    pub fn data_or_default(self) -> T {
        self.data.unwrap_or_default()
    }
}

/// Normalized body of a successful response
#[derive(Debug)]
pub enum ResponseBody {
    /// The response declared `application/json` and was parsed
    Json(Value),
    /// Any other content type; the response is handed back untouched
    Raw(reqwest::Response),
}

impl ResponseBody {
    /// Returns the parsed JSON body, if the response was JSON
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Raw(_) => None,
        }
    }

    /// Deserializes the JSON body into `T`
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<T, AppError> {
        match self {
            ResponseBody::Json(value) => Ok(serde_json::from_value(value)?),
            ResponseBody::Raw(response) => Err(AppError::UnexpectedBody(format!(
                "expected JSON, got {} from {}",
                response
                    .headers()
                    .get(reqwest::header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("no content type"),
                response.url()
            ))),
        }
    }

    /// Converts a JSON body into [`ApiResponse`], treating an empty raw
    /// body (e.g. `204 No Content`) as a bare success
    pub fn into_envelope<T: DeserializeOwned>(self) -> Result<ApiResponse<T>, AppError> {
        match self {
            ResponseBody::Raw(response) if response.content_length() == Some(0) => {
                Ok(ApiResponse {
                    success: response.status().is_success(),
                    message: None,
                    data: None,
                })
            }
            other => other.into_typed(),
        }
    }
}
