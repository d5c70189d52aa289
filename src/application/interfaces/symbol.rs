use crate::error::AppError;
use crate::model::responses::ApiResponse;
use crate::presentation::symbol::{SaveOutcome, Symbol, SymbolRequest};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the symbol catalog
#[async_trait]
pub trait SymbolService: Send + Sync {
    /// Every symbol, including inactive ones
    async fn get_all_symbols(&self) -> Result<ApiResponse<Vec<Symbol>>, AppError>;

    /// Active symbols only
    async fn get_active_symbols(&self) -> Result<ApiResponse<Vec<Symbol>>, AppError>;

    /// A single symbol
    async fn get_symbol_by_id(&self, id: &str) -> Result<ApiResponse<Symbol>, AppError>;

    /// Creates a symbol
    async fn create_symbol(&self, symbol: &SymbolRequest) -> Result<ApiResponse<Symbol>, AppError>;

    /// Restores a soft-deleted symbol with new values
    async fn restore_symbol(
        &self,
        id: &str,
        symbol: &SymbolRequest,
    ) -> Result<ApiResponse<Symbol>, AppError>;

    /// Updates a symbol
    async fn update_symbol(
        &self,
        id: &str,
        symbol: &SymbolRequest,
    ) -> Result<ApiResponse<Symbol>, AppError>;

    /// Soft-deletes a symbol
    async fn delete_symbol(&self, id: &str) -> Result<ApiResponse<Value>, AppError>;

    /// Soft-deletes several symbols concurrently
    ///
    /// Every deletion is attempted; once all have settled, the first
    /// failure in `ids` order is returned.
    async fn delete_symbols(&self, ids: &[String]) -> Result<(), AppError>;

    /// Updates the symbol when the request carries an id, creates it otherwise
    ///
    /// A create rejected with 409 because a soft-deleted record holds the
    /// same name yields [`SaveOutcome::RestoreAvailable`] instead of an error.
    async fn save_symbol(&self, symbol: &SymbolRequest) -> Result<SaveOutcome, AppError>;
}
