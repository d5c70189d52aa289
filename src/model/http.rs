/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Authenticated HTTP client for the admin backend
//!
//! Every verb helper goes through the same dispatch:
//! - `Content-Type: application/json` is always sent, `Authorization:
//!   Bearer <token>` only when an access token is stored
//! - transport failures are returned as-is
//! - a 401 triggers a single-flight renewal; the request is replayed once
//!   with the new token, or fails with [`AppError::SessionExpired`]
//! - any other unsuccessful status becomes an [`ApiError`]
//! - JSON bodies are parsed, anything else is handed back raw

use crate::application::config::Config;
use crate::constants::{AUTHENTICATION_CONTROLLER, DEFAULT_API_VERSION, USER_AGENT};
use crate::error::{ApiError, AppError};
use crate::model::auth::{RefreshTokenRequest, TokenPair};
use crate::model::responses::{ApiResponse, ResponseBody};
use crate::session::{RenewalTicket, Session};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Builds a versioned endpoint path: `/api/v{version}/pub/{resource}[/{action}]`
///
/// An empty `action` is treated as absent and `version` defaults to `1.0`.
///
/// ```
/// use marketdata_admin::model::http::build_endpoint;
///
/// assert_eq!(build_endpoint("symbols", None, None), "/api/v1.0/pub/symbols");
/// assert_eq!(
///     build_endpoint("authentication", Some("refresh"), Some("2.0")),
///     "/api/v2.0/pub/authentication/refresh"
/// );
/// ```
pub fn build_endpoint(resource: &str, action: Option<&str>, version: Option<&str>) -> String {
    let version = version.unwrap_or(DEFAULT_API_VERSION);
    match action.filter(|a| !a.is_empty()) {
        Some(action) => format!("/api/v{version}/pub/{resource}/{action}"),
        None => format!("/api/v{version}/pub/{resource}"),
    }
}

/// A request whose URL, body and credential header have been resolved
///
/// The bearer token is captured when the request is prepared, so a request
/// prepared before [`HttpClient::clear_auth`] still carries the old token.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// HTTP verb
    pub method: Method,
    /// Absolute URL
    pub url: String,
    /// JSON body, serialized once so the request can be replayed
    pub body: Option<Value>,
    /// Access token attached as bearer credential, if any
    pub token: Option<String>,
}

/// HTTP client that attaches credentials and renews expired access tokens
pub struct HttpClient {
    session: Arc<Session>,
    http_client: Client,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates a client with the session described by `config`
    pub fn new(config: Config) -> Result<Self, AppError> {
        let session = Arc::new(Session::from_config(&config)?);
        Self::with_session(config, session)
    }

    /// Creates a client over an existing session
    pub fn with_session(config: Config, session: Arc<Session>) -> Result<Self, AppError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.rest_api.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build()?;

        Ok(Self {
            session,
            http_client,
            config: Arc::new(config),
        })
    }

    /// Shared session state
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Client configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds an endpoint with the configured API version
    pub fn build_endpoint(&self, resource: &str, action: Option<&str>) -> String {
        build_endpoint(resource, action, Some(&self.config.api_version))
    }

    /// Makes a GET request
    pub async fn get(&self, path: &str) -> Result<ResponseBody, AppError> {
        self.request(Method::GET, path, None).await
    }

    /// Makes a POST request; `None` sends no body at all
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<ResponseBody, AppError> {
        let body = body.map(serde_json::to_value).transpose()?;
        self.request(Method::POST, path, body).await
    }

    /// Makes a PUT request; `None` sends no body at all
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<ResponseBody, AppError> {
        let body = body.map(serde_json::to_value).transpose()?;
        self.request(Method::PUT, path, body).await
    }

    /// Makes a DELETE request
    pub async fn delete(&self, path: &str) -> Result<ResponseBody, AppError> {
        self.request(Method::DELETE, path, None).await
    }

    /// Prepares and executes a request
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<ResponseBody, AppError> {
        let prepared = self.prepare(method, path, body);
        self.execute(prepared).await
    }

    /// Resolves URL and credential header without sending anything
    pub fn prepare(&self, method: Method, path: &str, body: Option<Value>) -> PreparedRequest {
        PreparedRequest {
            method,
            url: self.config.url_for(path),
            body,
            token: self.session.access_token(),
        }
    }

    /// Sends a prepared request, renewing the access token on a 401
    pub async fn execute(&self, request: PreparedRequest) -> Result<ResponseBody, AppError> {
        let result = self.dispatch(&request).await;
        if let Err(e) = &result {
            error!("API request failed for {} {}: {}", request.method, request.url, e);
        }
        result
    }

    /// Sends a prepared request once; a 401 is returned as an [`ApiError`]
    /// instead of starting a renewal
    pub async fn execute_without_renewal(
        &self,
        request: PreparedRequest,
    ) -> Result<ResponseBody, AppError> {
        let response = self.send(&request, request.token.as_deref()).await?;
        handle_response(response).await
    }

    async fn dispatch(&self, request: &PreparedRequest) -> Result<ResponseBody, AppError> {
        let response = self.send(request, request.token.as_deref()).await?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return handle_response(response).await;
        }

        warn!("{} {} rejected with 401", request.method, request.url);

        match self.session.begin_renewal() {
            RenewalTicket::Waiter(outcome) => match outcome.await {
                Ok(Some(token)) => {
                    debug!("Replaying queued request with renewed token");
                    let replay = self.send(request, Some(&token)).await?;
                    handle_response(replay).await
                }
                _ => Err(AppError::SessionExpired),
            },
            RenewalTicket::Leader(guard) => match self.renew(guard.epoch()).await {
                Ok(token) => {
                    guard.succeed(token.clone());
                    let replay = self.send(request, Some(&token)).await?;
                    handle_response(replay).await
                }
                Err(e) => {
                    warn!("Access token renewal failed: {}", e);
                    guard.fail();
                    Err(AppError::SessionExpired)
                }
            },
        }
    }

    async fn send(
        &self,
        request: &PreparedRequest,
        token: Option<&str>,
    ) -> Result<Response, AppError> {
        let mut builder = self
            .http_client
            .request(request.method.clone(), &request.url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        if let Some(body) = &request.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        debug!("{} {}", request.method, request.url);
        let response = builder.send().await?;
        debug!("Response status: {}", response.status());
        Ok(response)
    }

    /// Exchanges the stored refresh token for a new token pair
    ///
    /// Fails without touching the network when no refresh token is stored.
    /// Any failure clears the stored credentials.
    pub async fn refresh_access_token(&self) -> Result<String, AppError> {
        self.renew(self.session.credentials_epoch()).await
    }

    /// Renews within credential `epoch`
    ///
    /// Credentials are cleared on failure only if they still belong to
    /// `epoch`, and a renewed pair is discarded if they do not.
    async fn renew(&self, epoch: u64) -> Result<String, AppError> {
        let Some(refresh_token) = self.session.refresh_token() else {
            warn!("No refresh token available");
            self.session.clear_auth_since(epoch);
            return Err(AppError::NoRefreshToken);
        };

        info!("Refreshing access token");

        let pair = match self.request_token_pair(refresh_token).await {
            Ok(pair) => pair,
            Err(e) => {
                self.session.clear_auth_since(epoch);
                return Err(e);
            }
        };

        match self.session.commit_tokens(epoch, &pair) {
            Ok(true) => {}
            Ok(false) => return Err(AppError::SessionExpired),
            Err(e) => {
                self.session.clear_auth_since(epoch);
                return Err(e);
            }
        }

        info!("Access token refreshed successfully");
        Ok(pair.access_token)
    }

    async fn request_token_pair(&self, refresh_token: String) -> Result<TokenPair, AppError> {
        let url = self.config.url_for(&build_endpoint(
            AUTHENTICATION_CONTROLLER,
            Some("refresh"),
            Some(&self.config.api_version),
        ));

        let body = RefreshTokenRequest { refresh_token };

        let response = self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(&body)?)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!("Token refresh failed with status {}: {}", status, text);
            return Err(AppError::RefreshFailed(format!("status {status}")));
        }

        let bytes = response.bytes().await?;
        let envelope: ApiResponse<TokenPair> = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::RefreshFailed(format!("invalid refresh response: {e}")))?;

        envelope
            .into_data()
            .ok_or_else(|| AppError::RefreshFailed("invalid refresh response".to_string()))
    }

    /// Removes stored credentials and redirects to the login entry point
    pub fn clear_auth(&self) {
        self.session.clear_auth();
    }
}

/// Normalizes a response that is not going to be renewed
async fn handle_response(response: Response) -> Result<ResponseBody, AppError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.bytes().await.unwrap_or_default();
        let err = ApiError::from_body(status.as_u16(), &body);
        debug!("Request failed with status {}: {}", status, err.message);
        return Err(AppError::Api(err));
    }

    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains("application/json"));

    if is_json {
        let bytes = response.bytes().await?;
        Ok(ResponseBody::Json(serde_json::from_slice(&bytes)?))
    } else {
        Ok(ResponseBody::Raw(response))
    }
}
