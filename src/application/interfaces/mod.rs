/// Authentication service interface
pub mod auth;
/// Market-data configuration service interface
pub mod market_data;
/// Symbol catalog service interface
pub mod symbol;
