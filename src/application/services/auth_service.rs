use crate::application::interfaces::auth::AuthenticationService;
use crate::constants::AUTHENTICATION_CONTROLLER;
use crate::error::AppError;
use crate::model::auth::{
    AuthData, AuthUser, AuthenticateRequest, ForgotPasswordRequest, RefreshTokenRequest,
    ResetPasswordRequest, StoredAuth, TokenPair,
};
use crate::model::http::HttpClient;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Implementation of the authentication service
pub struct AuthenticationServiceImpl {
    client: Arc<HttpClient>,
}

impl AuthenticationServiceImpl {
    /// Creates a new instance of the authentication service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    fn endpoint(&self, action: &str) -> String {
        self.client
            .build_endpoint(AUTHENTICATION_CONTROLLER, Some(action))
    }
}

#[async_trait]
impl AuthenticationService for AuthenticationServiceImpl {
    async fn authenticate(
        &self,
        credentials: &AuthenticateRequest,
    ) -> Result<ApiResponse<AuthData>, AppError> {
        info!("Authenticating {}", credentials.email);
        self.client
            .post(&self.endpoint("authenticate"), Some(credentials))
            .await?
            .into_envelope()
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthData, AppError> {
        let credentials = AuthenticateRequest::new(email, password)?;
        let response = self.authenticate(&credentials).await?;

        if !self.store_auth_data(&response)? {
            return Err(AppError::UnexpectedBody(
                response
                    .message
                    .unwrap_or_else(|| "authentication response carried no token".to_string()),
            ));
        }

        response
            .data
            .ok_or_else(|| AppError::UnexpectedBody("missing authentication data".to_string()))
    }

    async fn revoke(&self) -> Result<ApiResponse<Value>, AppError> {
        self.client
            .post(&self.endpoint("revoke"), None::<&Value>)
            .await?
            .into_envelope()
    }

    async fn forgot_password(&self, email: &str) -> Result<ApiResponse<Value>, AppError> {
        if email.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Please enter your email address".to_string(),
            ));
        }
        let body = ForgotPasswordRequest {
            email: email.trim().to_string(),
        };
        self.client
            .post(&self.endpoint("forgot-password"), Some(&body))
            .await?
            .into_envelope()
    }

    async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<ApiResponse<Value>, AppError> {
        let body = ResetPasswordRequest {
            refresh_token: token.to_string(),
            new_password: new_password.to_string(),
        };
        self.client
            .post(&self.endpoint("reset-password"), Some(&body))
            .await?
            .into_envelope()
    }

    async fn refresh_token(
        &self,
        refresh_token: &str,
    ) -> Result<ApiResponse<TokenPair>, AppError> {
        let body = RefreshTokenRequest {
            refresh_token: refresh_token.to_string(),
        };
        self.client
            .post(&self.endpoint("refresh"), Some(&body))
            .await?
            .into_envelope()
    }

    async fn get_current_user(&self) -> Result<ApiResponse<AuthUser>, AppError> {
        self.client.get(&self.endpoint("me")).await?.into_envelope()
    }

    async fn validate_token(&self) -> Result<ApiResponse<Value>, AppError> {
        self.client
            .post(&self.endpoint("validate"), None::<&Value>)
            .await?
            .into_envelope()
    }

    async fn generate_token(&self, token_request: &Value) -> Result<ApiResponse<Value>, AppError> {
        self.client
            .post(&self.endpoint("token"), Some(token_request))
            .await?
            .into_envelope()
    }

    fn store_auth_data(&self, response: &ApiResponse<AuthData>) -> Result<bool, AppError> {
        match &response.data {
            Some(data) if !data.access_token.is_empty() => {
                self.client.session().store_auth_data(data)?;
                Ok(true)
            }
            _ => {
                debug!("Authentication response carried no token, nothing stored");
                Ok(false)
            }
        }
    }

    fn get_auth_data(&self) -> Option<StoredAuth> {
        self.client.session().auth_data()
    }

    fn is_authenticated(&self) -> bool {
        self.client.session().is_authenticated()
    }

    fn get_stored_user(&self) -> Option<AuthUser> {
        self.client.session().user()
    }

    fn is_admin(&self) -> bool {
        self.client.session().is_admin()
    }

    fn logout(&self) -> JoinHandle<()> {
        let revoke = self
            .client
            .prepare(Method::POST, &self.endpoint("revoke"), None);

        self.client.clear_auth();

        let client = Arc::clone(&self.client);
        tokio::spawn(async move {
            match client.execute_without_renewal(revoke).await {
                Ok(_) => debug!("Session revoked"),
                Err(e) => warn!("Revoke failed during logout: {}", e),
            }
        })
    }
}
