//! # Market-data admin client
//!
//! Rust client for the administrative backend of a cryptocurrency market-data
//! collection platform. It authenticates an operator, manages the catalog of
//! trading symbols and configures which candle intervals are collected per
//! symbol and exchange.
//!
//! ## Features
//!
//! - **Authenticated HTTP client**: bearer credentials attached automatically,
//!   JSON responses normalized, failures classified into [`error::AppError`]
//! - **Transparent token renewal**: an expired access token is renewed once,
//!   however many requests observe the 401 at the same time; queued requests
//!   replay with the new token
//! - **Durable sessions**: the credential pair lives in a pluggable
//!   [`session::SessionStore`], in memory or in a JSON file
//! - **Domain services**: authentication, symbol catalog and market-data
//!   configuration, each behind an async trait
//!
//! ## Quick start
//!
//! ```ignore
//! use marketdata_admin::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new(Config::new())?;
//!
//!     client.auth().login("admin@example.com", "secret").await?;
//!
//!     for symbol in client.symbols().get_active_symbols().await?.data_or_default() {
//!         info!("{} ({}/{})", symbol.symbol, symbol.base_asset, symbol.quote_asset);
//!     }
//!
//!     let config = CreateConfigurationRequest::new("symbol-guid", "Kraken")
//!         .with_interval(Interval::OneHour, true);
//!     client.market_data().create_configuration(&config).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! The backend origin is fixed at compile time through
//! `MARKETDATA_API_BASE_URL` (default `https://localhost:7270`). At runtime,
//! `Config::new()` reads a `.env` file and the following variables:
//!
//! ```text
//! MARKETDATA_REST_TIMEOUT=30              # optional, seconds
//! MARKETDATA_SESSION_FILE=~/.mda/session.json
//! MARKETDATA_API_VERSION=1.0
//! LOGLEVEL=INFO
//! ```

/// Application layer: configuration, service traits and implementations
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Wire models and the authenticated HTTP client
pub mod model;
/// Commonly used types and traits
pub mod prelude;
/// Domain records shown by the admin console
pub mod presentation;
/// Credential storage and renewal coordination
pub mod session;
/// Environment and logging helpers
pub mod utils;

pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
///
/// # Returns
///
/// A string representing the version of the library
pub fn version() -> &'static str {
    VERSION
}
