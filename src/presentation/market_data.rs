use crate::constants::DEFAULT_EXCHANGE;
use crate::error::AppError;
use crate::presentation::serialization::{optional_timestamp, serialize_optional_timestamp};
use crate::presentation::symbol::Symbol;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Candle interval that can be collected per symbol and exchange
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Interval {
    /// One minute
    #[serde(rename = "1m")]
    OneMinute,
    /// Five minutes
    #[serde(rename = "5m")]
    FiveMinutes,
    /// Fifteen minutes
    #[serde(rename = "15m")]
    FifteenMinutes,
    /// One hour
    #[serde(rename = "1h")]
    OneHour,
    /// Four hours
    #[serde(rename = "4h")]
    FourHours,
    /// One day
    #[serde(rename = "1d")]
    OneDay,
}

impl Interval {
    /// Every interval, shortest first
    pub const ALL: [Interval; 6] = [
        Interval::OneMinute,
        Interval::FiveMinutes,
        Interval::FifteenMinutes,
        Interval::OneHour,
        Interval::FourHours,
        Interval::OneDay,
    ];

    /// Path segment and wire name of the interval
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::OneMinute => "1m",
            Interval::FiveMinutes => "5m",
            Interval::FifteenMinutes => "15m",
            Interval::OneHour => "1h",
            Interval::FourHours => "4h",
            Interval::OneDay => "1d",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::ALL
            .into_iter()
            .find(|interval| interval.as_str() == s)
            .ok_or_else(|| AppError::InvalidInput(format!("unknown interval: {s}")))
    }
}

/// Which intervals are collected for one symbol on one exchange
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MarketDataConfiguration {
    /// Configuration identifier (GUID)
    pub id: String,
    /// Symbol identifier
    #[serde(rename = "symbolId")]
    pub symbol_id: String,
    /// Pair name joined from the symbol catalog
    #[serde(rename = "symbolName", default)]
    pub symbol_name: Option<String>,
    /// Exchange name, e.g. `Kraken`
    #[serde(default)]
    pub exchange: String,
    /// 1m collection flag
    #[serde(rename = "is1mActive", default)]
    pub is_1m_active: bool,
    /// 5m collection flag
    #[serde(rename = "is5mActive", default)]
    pub is_5m_active: bool,
    /// 15m collection flag
    #[serde(rename = "is15mActive", default)]
    pub is_15m_active: bool,
    /// 1h collection flag
    #[serde(rename = "is1hActive", default)]
    pub is_1h_active: bool,
    /// 4h collection flag
    #[serde(rename = "is4hActive", default)]
    pub is_4h_active: bool,
    /// 1d collection flag
    #[serde(rename = "is1dActive", default)]
    pub is_1d_active: bool,
    /// Creation timestamp
    #[serde(
        rename = "createdAt",
        default,
        deserialize_with = "optional_timestamp",
        serialize_with = "serialize_optional_timestamp"
    )]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(
        rename = "updatedAt",
        default,
        deserialize_with = "optional_timestamp",
        serialize_with = "serialize_optional_timestamp"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    /// Operator that created the record
    #[serde(rename = "createdBy", default)]
    pub created_by: Option<String>,
    /// Operator that last updated the record
    #[serde(rename = "updatedBy", default)]
    pub updated_by: Option<String>,
}

impl MarketDataConfiguration {
    /// Current flag for `interval`
    pub fn is_active(&self, interval: Interval) -> bool {
        match interval {
            Interval::OneMinute => self.is_1m_active,
            Interval::FiveMinutes => self.is_5m_active,
            Interval::FifteenMinutes => self.is_15m_active,
            Interval::OneHour => self.is_1h_active,
            Interval::FourHours => self.is_4h_active,
            Interval::OneDay => self.is_1d_active,
        }
    }

    /// Intervals currently collected
    pub fn active_intervals(&self) -> Vec<Interval> {
        Interval::ALL
            .into_iter()
            .filter(|interval| self.is_active(*interval))
            .collect()
    }

    /// Case-insensitive match against the symbol name and the exchange
    pub fn matches_search(&self, search: &str) -> bool {
        let needle = search.to_lowercase();
        self.symbol_name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(&needle))
            || self.exchange.to_lowercase().contains(&needle)
    }
}

/// Body of a configuration create or full update
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateConfigurationRequest {
    /// Symbol identifier
    #[serde(rename = "symbolId")]
    pub symbol_id: String,
    /// Exchange name
    pub exchange: String,
    /// 1m collection flag
    #[serde(rename = "is1mActive")]
    pub is_1m_active: bool,
    /// 5m collection flag
    #[serde(rename = "is5mActive")]
    pub is_5m_active: bool,
    /// 15m collection flag
    #[serde(rename = "is15mActive")]
    pub is_15m_active: bool,
    /// 1h collection flag
    #[serde(rename = "is1hActive")]
    pub is_1h_active: bool,
    /// 4h collection flag
    #[serde(rename = "is4hActive")]
    pub is_4h_active: bool,
    /// 1d collection flag
    #[serde(rename = "is1dActive")]
    pub is_1d_active: bool,
}

impl Default for CreateConfigurationRequest {
    fn default() -> Self {
        Self {
            symbol_id: String::new(),
            exchange: DEFAULT_EXCHANGE.to_string(),
            is_1m_active: false,
            is_5m_active: false,
            is_15m_active: false,
            is_1h_active: false,
            is_4h_active: false,
            is_1d_active: false,
        }
    }
}

impl CreateConfigurationRequest {
    /// Creates a request with every interval disabled
    pub fn new(symbol_id: &str, exchange: &str) -> Self {
        Self {
            symbol_id: symbol_id.to_string(),
            exchange: exchange.to_string(),
            ..Default::default()
        }
    }

    /// Enables or disables one interval
    pub fn with_interval(mut self, interval: Interval, active: bool) -> Self {
        let flag = match interval {
            Interval::OneMinute => &mut self.is_1m_active,
            Interval::FiveMinutes => &mut self.is_5m_active,
            Interval::FifteenMinutes => &mut self.is_15m_active,
            Interval::OneHour => &mut self.is_1h_active,
            Interval::FourHours => &mut self.is_4h_active,
            Interval::OneDay => &mut self.is_1d_active,
        };
        *flag = active;
        self
    }
}

impl From<&MarketDataConfiguration> for CreateConfigurationRequest {
    fn from(config: &MarketDataConfiguration) -> Self {
        Self {
            symbol_id: config.symbol_id.clone(),
            exchange: config.exchange.clone(),
            is_1m_active: config.is_1m_active,
            is_5m_active: config.is_5m_active,
            is_15m_active: config.is_15m_active,
            is_1h_active: config.is_1h_active,
            is_4h_active: config.is_4h_active,
            is_1d_active: config.is_1d_active,
        }
    }
}

/// Body of an interval toggle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToggleIntervalRequest {
    /// New state of the interval
    pub is_active: bool,
}

/// Symbols that have no configuration yet on `exchange`
pub fn available_symbols<'a>(
    symbols: &'a [Symbol],
    configurations: &[MarketDataConfiguration],
    exchange: &str,
) -> Vec<&'a Symbol> {
    symbols
        .iter()
        .filter(|symbol| {
            !configurations
                .iter()
                .any(|config| config.symbol_id == symbol.id && config.exchange == exchange)
        })
        .collect()
}
