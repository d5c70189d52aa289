use crate::application::interfaces::symbol::SymbolService;
use crate::constants::SYMBOL_CONTROLLER;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::responses::ApiResponse;
use crate::presentation::symbol::{SaveOutcome, Symbol, SymbolRequest};
use async_trait::async_trait;
use futures::future::join_all;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Implementation of the symbol catalog service
pub struct SymbolServiceImpl {
    client: Arc<HttpClient>,
}

impl SymbolServiceImpl {
    /// Creates a new instance of the symbol service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    fn endpoint(&self, action: Option<&str>) -> String {
        self.client.build_endpoint(SYMBOL_CONTROLLER, action)
    }
}

#[async_trait]
impl SymbolService for SymbolServiceImpl {
    async fn get_all_symbols(&self) -> Result<ApiResponse<Vec<Symbol>>, AppError> {
        let result: ApiResponse<Vec<Symbol>> =
            self.client.get(&self.endpoint(None)).await?.into_envelope()?;
        debug!(
            "Symbols obtained: {}",
            result.data.as_ref().map_or(0, Vec::len)
        );
        Ok(result)
    }

    async fn get_active_symbols(&self) -> Result<ApiResponse<Vec<Symbol>>, AppError> {
        self.client
            .get(&self.endpoint(Some("active")))
            .await?
            .into_envelope()
    }

    async fn get_symbol_by_id(&self, id: &str) -> Result<ApiResponse<Symbol>, AppError> {
        self.client
            .get(&self.endpoint(Some(id)))
            .await?
            .into_envelope()
    }

    async fn create_symbol(&self, symbol: &SymbolRequest) -> Result<ApiResponse<Symbol>, AppError> {
        info!("Creating symbol {}", symbol.symbol);
        self.client
            .post(&self.endpoint(None), Some(symbol))
            .await?
            .into_envelope()
    }

    async fn restore_symbol(
        &self,
        id: &str,
        symbol: &SymbolRequest,
    ) -> Result<ApiResponse<Symbol>, AppError> {
        info!("Restoring symbol {} ({})", symbol.symbol, id);
        let action = format!("{id}/restore");
        self.client
            .post(&self.endpoint(Some(&action)), Some(symbol))
            .await?
            .into_envelope()
    }

    async fn update_symbol(
        &self,
        id: &str,
        symbol: &SymbolRequest,
    ) -> Result<ApiResponse<Symbol>, AppError> {
        info!("Updating symbol {} ({})", symbol.symbol, id);
        self.client
            .put(&self.endpoint(Some(id)), Some(symbol))
            .await?
            .into_envelope()
    }

    async fn delete_symbol(&self, id: &str) -> Result<ApiResponse<Value>, AppError> {
        info!("Deleting symbol {}", id);
        self.client
            .delete(&self.endpoint(Some(id)))
            .await?
            .into_envelope()
    }

    async fn delete_symbols(&self, ids: &[String]) -> Result<(), AppError> {
        let results = join_all(ids.iter().map(|id| self.delete_symbol(id))).await;

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!("{} of {} symbol deletion(s) failed", failed, ids.len());
        } else {
            debug!("{} symbol(s) deleted", ids.len());
        }

        results.into_iter().try_for_each(|r| r.map(|_| ()))
    }

    async fn save_symbol(&self, symbol: &SymbolRequest) -> Result<SaveOutcome, AppError> {
        let result = match symbol.id.as_deref().filter(|id| !id.is_empty()) {
            Some(id) => self.update_symbol(id, symbol).await,
            None => self.create_symbol(symbol).await,
        };

        match result {
            Ok(response) => Ok(SaveOutcome::Saved(response.data)),
            Err(AppError::Api(err)) if err.is_deleted_conflict() => {
                let id = err
                    .data_field("id")
                    .and_then(Value::as_str)
                    .map(String::from)
                    .ok_or_else(|| AppError::Api(err.clone()))?;
                warn!(
                    "Symbol {} was previously deleted and can be restored ({})",
                    symbol.symbol, id
                );
                Ok(SaveOutcome::RestoreAvailable { id })
            }
            Err(e) => Err(e),
        }
    }
}
