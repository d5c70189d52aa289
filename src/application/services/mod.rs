/// Module containing the authentication service
pub mod auth_service;
/// Module containing the market-data configuration service
pub mod market_data_service;
/// Module containing the symbol catalog service
pub mod symbol_service;

pub use crate::application::interfaces::auth::*;
pub use crate::application::interfaces::market_data::*;
pub use crate::application::interfaces::symbol::*;
pub use auth_service::AuthenticationServiceImpl;
pub use market_data_service::MarketDataConfigServiceImpl;
pub use symbol_service::SymbolServiceImpl;
