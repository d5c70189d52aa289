/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Prelude
//!
//! Re-exports the types and traits needed for most interactions with the
//! admin backend.
//!
//! ```rust
//! use marketdata_admin::prelude::*;
//!
//! let config = Config::with_base_url("https://localhost:7270");
//! assert_eq!(build_endpoint("symbols", None, None), "/api/v1.0/pub/symbols");
//! # let _ = config;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the admin API client
pub use crate::application::config::{Config, RestApiConfig, StorageConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types
pub use crate::error::{ApiError, AppError};

// ============================================================================
// TRANSPORT AND SESSION
// ============================================================================

/// Authenticated HTTP client and endpoint builder
pub use crate::model::http::{HttpClient, PreparedRequest, build_endpoint};

/// Normalized responses
pub use crate::model::responses::{ApiResponse, ResponseBody};

/// Session state, stores and navigators
pub use crate::session::{
    FileStore, HeadlessNavigator, MemoryStore, Navigator, Session, SessionStore,
};

// ============================================================================
// SERVICES
// ============================================================================

/// High level client
pub use crate::application::client::Client;

/// Service traits
pub use crate::application::services::{
    AuthenticationService, MarketDataConfigService, SymbolService,
};

/// Service implementations
pub use crate::application::services::{
    AuthenticationServiceImpl, MarketDataConfigServiceImpl, SymbolServiceImpl,
};

// ============================================================================
// MODELS
// ============================================================================

/// Authentication models
pub use crate::model::auth::{AuthData, AuthUser, AuthenticateRequest, StoredAuth, TokenPair};

/// Symbol and market-data models
pub use crate::presentation::{
    CreateConfigurationRequest, Interval, MarketDataConfiguration, SaveOutcome, Symbol,
    SymbolRequest, available_symbols,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest for HTTP operations
pub use reqwest::Method;
