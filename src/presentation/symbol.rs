use crate::presentation::serialization::{optional_timestamp, serialize_optional_timestamp};
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A trading pair in the symbol catalog
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    /// Symbol identifier (GUID)
    pub id: String,
    /// Pair name, e.g. `BTCUSDT`
    pub symbol: String,
    /// Base asset, e.g. `BTC`
    #[serde(default)]
    pub base_asset: String,
    /// Quote asset, e.g. `USDT`
    #[serde(default)]
    pub quote_asset: String,
    /// Whether data is collected for this symbol
    #[serde(default)]
    pub is_active: bool,
    /// Minimum tradable amount
    #[serde(default)]
    pub min_trade_amount: f64,
    /// Decimal places used for prices
    #[serde(default)]
    pub price_precision: u32,
    /// Decimal places used for quantities
    #[serde(default)]
    pub quantity_precision: u32,
    /// Creation timestamp
    #[serde(
        default,
        deserialize_with = "optional_timestamp",
        serialize_with = "serialize_optional_timestamp"
    )]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(
        default,
        deserialize_with = "optional_timestamp",
        serialize_with = "serialize_optional_timestamp"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    /// Soft-delete marker
    #[serde(default)]
    pub is_deleted: bool,
    /// Operator that created the record
    #[serde(default)]
    pub created_by: Option<String>,
    /// Operator that last updated the record
    #[serde(default)]
    pub updated_by: Option<String>,
    /// Exchange-specific listings, passed through as sent
    #[serde(default)]
    pub exchange_symbols: Vec<Value>,
}

impl Symbol {
    /// Case-insensitive match against the pair name and both assets
    pub fn matches_search(&self, search: &str) -> bool {
        let needle = search.to_lowercase();
        [&self.symbol, &self.base_asset, &self.quote_asset]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Editable fields of a symbol, sent on create, update and restore
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SymbolRequest {
    /// Identifier, only meaningful when updating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Pair name
    pub symbol: String,
    /// Base asset
    pub base_asset: String,
    /// Quote asset
    pub quote_asset: String,
    /// Whether data is collected for this symbol
    pub is_active: bool,
    /// Minimum tradable amount
    pub min_trade_amount: f64,
    /// Decimal places used for prices
    pub price_precision: u32,
    /// Decimal places used for quantities
    pub quantity_precision: u32,
}

impl Default for SymbolRequest {
    fn default() -> Self {
        Self {
            id: None,
            symbol: String::new(),
            base_asset: String::new(),
            quote_asset: String::new(),
            is_active: true,
            min_trade_amount: 0.0,
            price_precision: 8,
            quantity_precision: 8,
        }
    }
}

impl SymbolRequest {
    /// Creates a request for a new pair with the default precisions
    pub fn new(symbol: &str, base_asset: &str, quote_asset: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            base_asset: base_asset.to_string(),
            quote_asset: quote_asset.to_string(),
            ..Default::default()
        }
    }
}

impl From<&Symbol> for SymbolRequest {
    fn from(symbol: &Symbol) -> Self {
        Self {
            id: Some(symbol.id.clone()),
            symbol: symbol.symbol.clone(),
            base_asset: symbol.base_asset.clone(),
            quote_asset: symbol.quote_asset.clone(),
            is_active: symbol.is_active,
            min_trade_amount: symbol.min_trade_amount,
            price_precision: symbol.price_precision,
            quantity_precision: symbol.quantity_precision,
        }
    }
}

/// Result of [`save_symbol`](crate::application::interfaces::symbol::SymbolService::save_symbol)
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// The symbol was created or updated; carries the server's payload
    Saved(Option<Symbol>),
    /// A soft-deleted symbol with the same name exists and may be restored
    RestoreAvailable {
        /// Identifier of the deleted record
        id: String,
    },
}
