//! Asset domain models.

use serde::{Deserialize, Serialize};

use super::symbol::split_delimited_symbol;
use crate::errors::{Result, ValidationError};

/// Asset kind recorded in `asset_router.asset_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Equity,
    Future,
}

impl AssetType {
    /// Returns the database string representation.
    pub const fn as_db_str(&self) -> &'static str {
        match self {
            AssetType::Equity => "equity",
            AssetType::Future => "future",
        }
    }

    /// Parses the database string representation.
    pub fn from_db_str(value: &str) -> Option<Self> {
        match value {
            "equity" => Some(AssetType::Equity),
            "future" => Some(AssetType::Future),
            _ => None,
        }
    }
}

/// An equity with its symbol decomposition and trading window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equity {
    pub sid: i64,
    pub symbol: Option<String>,
    pub company_symbol: Option<String>,
    pub share_class_symbol: Option<String>,
    pub fuzzy_symbol: Option<String>,
    pub asset_name: Option<String>,
    pub start_date: i64,
    pub end_date: i64,
    pub first_traded: i64,
    pub exchange: Option<String>,
}

/// Input model for writing an equity.
///
/// `start_date` is left to the storage default when `None`. The company and
/// share class parts are derived from `symbol` unless given explicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEquity {
    pub sid: i64,
    pub symbol: Option<String>,
    pub company_symbol: Option<String>,
    pub share_class_symbol: Option<String>,
    pub fuzzy_symbol: Option<String>,
    pub asset_name: Option<String>,
    pub start_date: Option<i64>,
    pub end_date: i64,
    pub first_traded: i64,
    pub exchange: Option<String>,
}

impl NewEquity {
    pub fn validate(&self) -> Result<()> {
        if let Some(symbol) = &self.symbol {
            if symbol.trim().is_empty() {
                return Err(ValidationError::InvalidInput(format!(
                    "Equity {} has an empty symbol",
                    self.sid
                ))
                .into());
            }
        }
        let start = self.start_date.unwrap_or(crate::constants::DEFAULT_START_DATE);
        if self.end_date < start {
            return Err(ValidationError::InvalidInput(format!(
                "Equity {} ends ({}) before it starts ({})",
                self.sid, self.end_date, start
            ))
            .into());
        }
        Ok(())
    }

    /// Fills `company_symbol` and `share_class_symbol` from `symbol` where
    /// they were not supplied.
    pub fn with_split_symbol(mut self) -> Self {
        if let Some(symbol) = &self.symbol {
            let (company, share_class) = split_delimited_symbol(symbol);
            if self.company_symbol.is_none() {
                self.company_symbol = Some(company);
            }
            if self.share_class_symbol.is_none() {
                self.share_class_symbol = Some(share_class);
            }
        }
        self
    }
}

/// A futures venue, keyed by its exchange code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesExchange {
    pub exchange: String,
    pub timezone: Option<String>,
}

/// A futures product family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesRootSymbol {
    pub root_symbol: String,
    pub root_symbol_id: Option<i64>,
    pub sector: Option<String>,
    pub description: Option<String>,
    pub exchange: Option<String>,
}

/// One dated contract of a root symbol family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesContract {
    pub sid: i64,
    pub symbol: Option<String>,
    pub root_symbol: Option<String>,
    pub asset_name: Option<String>,
    pub start_date: i64,
    pub end_date: i64,
    pub first_traded: i64,
    pub exchange: Option<String>,
    pub notice_date: i64,
    pub expiration_date: i64,
    pub auto_close_date: i64,
    pub multiplier: Option<f64>,
    pub tick_size: Option<f64>,
}

impl FuturesContract {
    pub fn validate(&self) -> Result<()> {
        if let Some(symbol) = &self.symbol {
            if symbol.trim().is_empty() {
                return Err(ValidationError::InvalidInput(format!(
                    "Futures contract {} has an empty symbol",
                    self.sid
                ))
                .into());
            }
        }
        if self.end_date < self.start_date {
            return Err(ValidationError::InvalidInput(format!(
                "Futures contract {} ends ({}) before it starts ({})",
                self.sid, self.end_date, self.start_date
            ))
            .into());
        }
        Ok(())
    }
}

/// One row of the sid → asset kind registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRouterEntry {
    pub sid: i64,
    pub asset_type: AssetType,
}

/// Any asset resolved through the router.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "assetType", rename_all = "lowercase")]
pub enum Asset {
    Equity(Equity),
    Future(FuturesContract),
}

impl Asset {
    pub fn sid(&self) -> i64 {
        match self {
            Asset::Equity(e) => e.sid,
            Asset::Future(f) => f.sid,
        }
    }

    pub fn symbol(&self) -> Option<&str> {
        match self {
            Asset::Equity(e) => e.symbol.as_deref(),
            Asset::Future(f) => f.symbol.as_deref(),
        }
    }

    pub fn asset_type(&self) -> AssetType {
        match self {
            Asset::Equity(_) => AssetType::Equity,
            Asset::Future(_) => AssetType::Future,
        }
    }

    pub fn as_equity(&self) -> Option<&Equity> {
        match self {
            Asset::Equity(e) => Some(e),
            Asset::Future(_) => None,
        }
    }

    pub fn as_future(&self) -> Option<&FuturesContract> {
        match self {
            Asset::Future(f) => Some(f),
            Asset::Equity(_) => None,
        }
    }
}
