use crate::error::AppError;
use crate::model::responses::ApiResponse;
use crate::presentation::market_data::{CreateConfigurationRequest, Interval, MarketDataConfiguration};
use crate::presentation::symbol::Symbol;
use async_trait::async_trait;

/// Interface for the market-data collection configurations
#[async_trait]
pub trait MarketDataConfigService: Send + Sync {
    /// Every configuration
    async fn get_all_configurations(
        &self,
    ) -> Result<ApiResponse<Vec<MarketDataConfiguration>>, AppError>;

    /// Plain symbol list used to populate the "add configuration" choices
    async fn get_all_symbols(&self) -> Result<ApiResponse<Vec<Symbol>>, AppError>;

    /// Creates a configuration
    async fn create_configuration(
        &self,
        config: &CreateConfigurationRequest,
    ) -> Result<ApiResponse<MarketDataConfiguration>, AppError>;

    /// Turns a single interval on or off
    async fn toggle_interval(
        &self,
        id: &str,
        interval: Interval,
        is_active: bool,
    ) -> Result<ApiResponse<MarketDataConfiguration>, AppError>;

    /// A single configuration
    async fn get_configuration_by_id(
        &self,
        id: &str,
    ) -> Result<ApiResponse<MarketDataConfiguration>, AppError>;

    /// Replaces a whole configuration
    async fn update_configuration(
        &self,
        id: &str,
        config: &CreateConfigurationRequest,
    ) -> Result<ApiResponse<MarketDataConfiguration>, AppError>;
}
