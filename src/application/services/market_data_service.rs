use crate::application::interfaces::market_data::MarketDataConfigService;
use crate::constants::{MARKET_DATA_CONFIG_CONTROLLER, SYMBOLS_CONTROLLER};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::responses::ApiResponse;
use crate::presentation::market_data::{
    CreateConfigurationRequest, Interval, MarketDataConfiguration, ToggleIntervalRequest,
};
use crate::presentation::symbol::Symbol;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the market-data configuration service
pub struct MarketDataConfigServiceImpl {
    client: Arc<HttpClient>,
}

impl MarketDataConfigServiceImpl {
    /// Creates a new instance of the market-data configuration service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    fn endpoint(&self, action: Option<&str>) -> String {
        self.client
            .build_endpoint(MARKET_DATA_CONFIG_CONTROLLER, action)
    }
}

#[async_trait]
impl MarketDataConfigService for MarketDataConfigServiceImpl {
    async fn get_all_configurations(
        &self,
    ) -> Result<ApiResponse<Vec<MarketDataConfiguration>>, AppError> {
        let result: ApiResponse<Vec<MarketDataConfiguration>> =
            self.client.get(&self.endpoint(None)).await?.into_envelope()?;
        debug!(
            "Configurations obtained: {}",
            result.data.as_ref().map_or(0, Vec::len)
        );
        Ok(result)
    }

    async fn get_all_symbols(&self) -> Result<ApiResponse<Vec<Symbol>>, AppError> {
        self.client
            .get(&self.client.build_endpoint(SYMBOLS_CONTROLLER, None))
            .await?
            .into_envelope()
    }

    async fn create_configuration(
        &self,
        config: &CreateConfigurationRequest,
    ) -> Result<ApiResponse<MarketDataConfiguration>, AppError> {
        if config.symbol_id.is_empty() {
            return Err(AppError::InvalidInput("a symbol must be selected".to_string()));
        }
        info!(
            "Creating configuration for symbol {} on {}",
            config.symbol_id, config.exchange
        );
        self.client
            .post(&self.endpoint(None), Some(config))
            .await?
            .into_envelope()
    }

    async fn toggle_interval(
        &self,
        id: &str,
        interval: Interval,
        is_active: bool,
    ) -> Result<ApiResponse<MarketDataConfiguration>, AppError> {
        info!(
            "{} {} for configuration {}",
            if is_active { "Enabling" } else { "Disabling" },
            interval,
            id
        );
        let action = format!("{id}/interval/{interval}");
        let body = ToggleIntervalRequest { is_active };
        self.client
            .put(&self.endpoint(Some(&action)), Some(&body))
            .await?
            .into_envelope()
    }

    async fn get_configuration_by_id(
        &self,
        id: &str,
    ) -> Result<ApiResponse<MarketDataConfiguration>, AppError> {
        self.client
            .get(&self.endpoint(Some(id)))
            .await?
            .into_envelope()
    }

    async fn update_configuration(
        &self,
        id: &str,
        config: &CreateConfigurationRequest,
    ) -> Result<ApiResponse<MarketDataConfiguration>, AppError> {
        info!("Updating configuration {}", id);
        self.client
            .put(&self.endpoint(Some(id)), Some(config))
            .await?
            .into_envelope()
    }
}
