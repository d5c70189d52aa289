/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::services::{
    AuthenticationServiceImpl, MarketDataConfigServiceImpl, SymbolServiceImpl,
};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::session::Session;
use std::sync::Arc;
use tracing::debug;

/// Entry point bundling the authentication, symbol and market-data services
/// over one shared [`HttpClient`]
///
/// # Example
/// ```ignore
/// use marketdata_admin::prelude::*;
///
/// let client = Client::new(Config::new())?;
/// client.auth().login("admin@example.com", "secret").await?;
/// let symbols = client.symbols().get_all_symbols().await?.data_or_default();
/// ```
pub struct Client {
    http_client: Arc<HttpClient>,
    auth: AuthenticationServiceImpl,
    symbols: SymbolServiceImpl,
    market_data: MarketDataConfigServiceImpl,
}

impl Client {
    /// Creates a client with the session described by `config`
    pub fn new(config: Config) -> Result<Self, AppError> {
        Ok(Self::from_http_client(Arc::new(HttpClient::new(config)?)))
    }

    /// Creates a client over an existing session
    pub fn with_session(config: Config, session: Arc<Session>) -> Result<Self, AppError> {
        Ok(Self::from_http_client(Arc::new(HttpClient::with_session(
            config, session,
        )?)))
    }

    /// Wraps an already configured HTTP client
    pub fn from_http_client(http_client: Arc<HttpClient>) -> Self {
        debug!(
            "Admin client ready for {}",
            http_client.config().rest_api.base_url
        );
        Self {
            auth: AuthenticationServiceImpl::new(Arc::clone(&http_client)),
            symbols: SymbolServiceImpl::new(Arc::clone(&http_client)),
            market_data: MarketDataConfigServiceImpl::new(Arc::clone(&http_client)),
            http_client,
        }
    }

    /// Authentication endpoints and stored credentials
    pub fn auth(&self) -> &AuthenticationServiceImpl {
        &self.auth
    }

    /// Symbol catalog
    pub fn symbols(&self) -> &SymbolServiceImpl {
        &self.symbols
    }

    /// Market-data collection configurations
    pub fn market_data(&self) -> &MarketDataConfigServiceImpl {
        &self.market_data
    }

    /// Underlying HTTP client
    pub fn http_client(&self) -> &Arc<HttpClient> {
        &self.http_client
    }

    /// Shared session state
    pub fn session(&self) -> &Arc<Session> {
        self.http_client.session()
    }
}
