/// Market-data collection configurations and candle intervals
pub mod market_data;
/// Serialization utilities for API responses
pub mod serialization;
/// Symbol catalog models
pub mod symbol;

pub use market_data::{
    CreateConfigurationRequest, Interval, MarketDataConfiguration, ToggleIntervalRequest,
    available_symbols,
};
pub use symbol::{SaveOutcome, Symbol, SymbolRequest};
