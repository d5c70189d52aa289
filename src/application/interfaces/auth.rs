use crate::error::AppError;
use crate::model::auth::{AuthData, AuthUser, AuthenticateRequest, StoredAuth, TokenPair};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use serde_json::Value;
use tokio::task::JoinHandle;

/// Interface for the authentication endpoints and the locally stored credentials
#[async_trait]
pub trait AuthenticationService: Send + Sync {
    /// Exchanges credentials for an access/refresh token pair
    async fn authenticate(
        &self,
        credentials: &AuthenticateRequest,
    ) -> Result<ApiResponse<AuthData>, AppError>;

    /// Validates the credentials, authenticates and stores the result
    ///
    /// # Returns
    /// * The stored payload, or `AppError::InvalidInput` for blank fields
    async fn login(&self, email: &str, password: &str) -> Result<AuthData, AppError>;

    /// Invalidates the current session server-side
    async fn revoke(&self) -> Result<ApiResponse<Value>, AppError>;

    /// Asks the backend to email password reset instructions
    async fn forgot_password(&self, email: &str) -> Result<ApiResponse<Value>, AppError>;

    /// Sets a new password using the token received by email
    async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<ApiResponse<Value>, AppError>;

    /// Exchanges a refresh token for a new pair without touching the stored credentials
    async fn refresh_token(&self, refresh_token: &str)
    -> Result<ApiResponse<TokenPair>, AppError>;

    /// Profile of the signed-in operator
    async fn get_current_user(&self) -> Result<ApiResponse<AuthUser>, AppError>;

    /// Asks the backend whether the current access token is still valid
    async fn validate_token(&self) -> Result<ApiResponse<Value>, AppError>;

    /// Mints a token from an arbitrary token request
    async fn generate_token(&self, token_request: &Value) -> Result<ApiResponse<Value>, AppError>;

    /// Persists the payload of an authentication response
    ///
    /// # Returns
    /// * `true` when a token was present and stored
    fn store_auth_data(&self, response: &ApiResponse<AuthData>) -> Result<bool, AppError>;

    /// Token and profile currently stored
    fn get_auth_data(&self) -> Option<StoredAuth>;

    /// True when a token and a profile are stored
    fn is_authenticated(&self) -> bool;

    /// Stored operator profile
    fn get_stored_user(&self) -> Option<AuthUser>;

    /// True when the stored profile is a system admin
    fn is_admin(&self) -> bool;

    /// Revokes the session in the background and clears local credentials immediately
    ///
    /// Local credentials are cleared whatever the outcome of the revoke call,
    /// whose failure is only logged. The revoke call never starts a token
    /// renewal. Must be called inside a Tokio runtime.
    fn logout(&self) -> JoinHandle<()>;
}
