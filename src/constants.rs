/// Origin of the admin backend, fixed when the crate is compiled
///
/// Set `MARKETDATA_API_BASE_URL` at build time to point at another backend.
pub const DEFAULT_BASE_URL: &str = match option_env!("MARKETDATA_API_BASE_URL") {
    Some(url) => url,
    None => "https://localhost:7270",
};
/// API version used by [`build_endpoint`](crate::model::http::build_endpoint) when none is given
pub const DEFAULT_API_VERSION: &str = "1.0";
/// User agent string sent with every request
pub const USER_AGENT: &str = "marketdata-admin/0.1.0";
/// Durable store key holding the access token
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// Durable store key holding the refresh token
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
/// Durable store key holding the serialized user profile
pub const AUTH_USER_KEY: &str = "authUser";
/// Location of the login entry point
pub const LOGIN_PATH: &str = "/login";
/// Message carried by [`AppError::SessionExpired`](crate::error::AppError::SessionExpired)
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please login again.";
/// Controller for authentication endpoints
pub const AUTHENTICATION_CONTROLLER: &str = "authentication";
/// Controller for the symbol catalog
pub const SYMBOL_CONTROLLER: &str = "admin/symbol";
/// Controller for market-data collection configurations
pub const MARKET_DATA_CONFIG_CONTROLLER: &str = "admin/marketdataconfiguration";
/// Controller exposing the plain symbol list
pub const SYMBOLS_CONTROLLER: &str = "symbols";
/// Exchange preselected when creating a configuration
pub const DEFAULT_EXCHANGE: &str = "Kraken";
