/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Profile of the signed-in operator, kept only for display
///
/// Unknown fields are preserved so the blob round-trips through the session
/// store unchanged.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email address used to sign in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Whether the operator may use the admin screens
    #[serde(default)]
    pub is_system_admin: bool,
    /// Any other profile fields sent by the backend
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Credentials posted to `authentication/authenticate`
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthenticateRequest {
    /// Operator email
    pub email: String,
    /// Operator password
    pub password: String,
}

impl AuthenticateRequest {
    /// Builds a request, rejecting blank fields before any network call
    pub fn new(email: &str, password: &str) -> Result<Self, AppError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::InvalidInput(
                "Please fill in all fields".to_string(),
            ));
        }
        Ok(Self {
            email: email.trim().to_string(),
            password: password.to_string(),
        })
    }
}

impl fmt::Debug for AuthenticateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticateRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Body of `authentication/refresh`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    /// Refresh token to exchange
    pub refresh_token: String,
}

/// Body of `authentication/forgot-password`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForgotPasswordRequest {
    /// Address that receives the reset instructions
    pub email: String,
}

/// Body of `authentication/reset-password`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    /// Reset token received by email
    pub refresh_token: String,
    /// Replacement password
    pub new_password: String,
}

/// A freshly minted access/refresh token pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// Short-lived bearer credential
    pub access_token: String,
    /// Longer-lived credential used only for renewal
    pub refresh_token: String,
}

/// Payload returned by a successful authentication
///
/// The backend has sent the access token both as `token` and as
/// `accessToken`; either spelling is accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    /// Bearer credential
    #[serde(alias = "token")]
    pub access_token: String,
    /// Renewal credential, when issued
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Operator profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AuthUser>,
}

/// Credentials and profile currently held by the session store
#[derive(Debug, Clone, PartialEq)]
pub struct StoredAuth {
    /// Stored access token
    pub token: String,
    /// Stored profile
    pub user: AuthUser,
}
