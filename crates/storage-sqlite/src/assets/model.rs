//! Database models for catalogue assets.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use assetdb_core::assets::{
    AssetRouterEntry, AssetType, Equity, FuturesContract, FuturesExchange, FuturesRootSymbol,
    NewEquity,
};
use assetdb_core::errors::Error;

/// Database model for equities
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::equities)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EquityDB {
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

/// Insert model for equities; a `None` start date takes the column default.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::equities)]
pub struct NewEquityDB {
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

/// Database model for futures exchanges
#[derive(Queryable, Selectable, Insertable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::futures_exchanges)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FuturesExchangeDB {
    pub exchange: String,
    pub timezone: Option<String>,
}

/// Database model for futures root symbols
#[derive(Queryable, Selectable, Insertable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::futures_root_symbols)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FuturesRootSymbolDB {
    pub root_symbol: String,
    pub root_symbol_id: Option<i64>,
    pub sector: Option<String>,
    pub description: Option<String>,
    pub exchange: Option<String>,
}

/// Database model for futures contracts
#[derive(Queryable, Selectable, Insertable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::futures_contracts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FuturesContractDB {
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

/// Database model for the sid → asset kind registry
#[derive(Queryable, Selectable, Insertable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::asset_router)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AssetRouterDB {
    pub sid: i64,
    pub asset_type: Option<String>,
}

impl AssetRouterDB {
    pub fn new(sid: i64, asset_type: AssetType) -> Self {
        Self {
            sid,
            asset_type: Some(asset_type.as_db_str().to_string()),
        }
    }
}

// Conversion implementations
impl TryFrom<AssetRouterDB> for AssetRouterEntry {
    type Error = Error;

    fn try_from(db: AssetRouterDB) -> Result<Self, Self::Error> {
        let kind = db
            .asset_type
            .ok_or_else(|| Error::Asset(format!("Sid {} has no asset type", db.sid)))?;
        let asset_type = AssetType::from_db_str(&kind).ok_or_else(|| {
            Error::Asset(format!("Unknown asset type '{}' for sid {}", kind, db.sid))
        })?;
        Ok(Self {
            sid: db.sid,
            asset_type,
        })
    }
}

impl From<EquityDB> for Equity {
    fn from(db: EquityDB) -> Self {
        Self {
            sid: db.sid,
            symbol: db.symbol,
            company_symbol: db.company_symbol,
            share_class_symbol: db.share_class_symbol,
            fuzzy_symbol: db.fuzzy_symbol,
            asset_name: db.asset_name,
            start_date: db.start_date,
            end_date: db.end_date,
            first_traded: db.first_traded,
            exchange: db.exchange,
        }
    }
}

impl From<NewEquity> for NewEquityDB {
    fn from(domain: NewEquity) -> Self {
        Self {
            sid: domain.sid,
            symbol: domain.symbol,
            company_symbol: domain.company_symbol,
            share_class_symbol: domain.share_class_symbol,
            fuzzy_symbol: domain.fuzzy_symbol,
            asset_name: domain.asset_name,
            start_date: domain.start_date,
            end_date: domain.end_date,
            first_traded: domain.first_traded,
            exchange: domain.exchange,
        }
    }
}

impl From<FuturesExchangeDB> for FuturesExchange {
    fn from(db: FuturesExchangeDB) -> Self {
        Self {
            exchange: db.exchange,
            timezone: db.timezone,
        }
    }
}

impl From<FuturesExchange> for FuturesExchangeDB {
    fn from(domain: FuturesExchange) -> Self {
        Self {
            exchange: domain.exchange,
            timezone: domain.timezone,
        }
    }
}

impl From<FuturesRootSymbolDB> for FuturesRootSymbol {
    fn from(db: FuturesRootSymbolDB) -> Self {
        Self {
            root_symbol: db.root_symbol,
            root_symbol_id: db.root_symbol_id,
            sector: db.sector,
            description: db.description,
            exchange: db.exchange,
        }
    }
}

impl From<FuturesRootSymbol> for FuturesRootSymbolDB {
    fn from(domain: FuturesRootSymbol) -> Self {
        Self {
            root_symbol: domain.root_symbol,
            root_symbol_id: domain.root_symbol_id,
            sector: domain.sector,
            description: domain.description,
            exchange: domain.exchange,
        }
    }
}

impl From<FuturesContractDB> for FuturesContract {
    fn from(db: FuturesContractDB) -> Self {
        Self {
            sid: db.sid,
            symbol: db.symbol,
            root_symbol: db.root_symbol,
            asset_name: db.asset_name,
            start_date: db.start_date,
            end_date: db.end_date,
            first_traded: db.first_traded,
            exchange: db.exchange,
            notice_date: db.notice_date,
            expiration_date: db.expiration_date,
            auto_close_date: db.auto_close_date,
            multiplier: db.multiplier,
            tick_size: db.tick_size,
        }
    }
}

impl From<FuturesContract> for FuturesContractDB {
    fn from(domain: FuturesContract) -> Self {
        Self {
            sid: domain.sid,
            symbol: domain.symbol,
            root_symbol: domain.root_symbol,
            asset_name: domain.asset_name,
            start_date: domain.start_date,
            end_date: domain.end_date,
            first_traded: domain.first_traded,
            exchange: domain.exchange,
            notice_date: domain.notice_date,
            expiration_date: domain.expiration_date,
            auto_close_date: domain.auto_close_date,
            multiplier: domain.multiplier,
            tick_size: domain.tick_size,
        }
    }
}
