//! Table definitions for the asset catalogue.

use super::types::{CheckConstraint, Column, ColumnType, TableSchema};

/// Names of all tables in the assets db, in creation order.
///
/// Every table appears after the tables it references, so dropping in
/// reverse order never trips a foreign key.
pub const ASSET_DB_TABLE_NAMES: [&str; 6] = [
    "version_info",
    "equities",
    "futures_exchanges",
    "futures_root_symbols",
    "futures_contracts",
    "asset_router",
];

pub static VERSION_INFO: TableSchema = TableSchema {
    name: "version_info",
    columns: &[
        Column::new("id", ColumnType::Integer).primary_key().unique(),
        Column::new("version", ColumnType::Integer).unique().not_null(),
    ],
    // Together these pin the table to the single row with id 1.
    checks: &[CheckConstraint::new("id <= 1"), CheckConstraint::new("id >= 1")],
};

pub static EQUITIES: TableSchema = TableSchema {
    name: "equities",
    columns: &[
        Column::new("sid", ColumnType::Integer).primary_key().unique(),
        Column::new("symbol", ColumnType::Text),
        Column::new("company_symbol", ColumnType::Text).indexed(),
        Column::new("share_class_symbol", ColumnType::Text),
        Column::new("fuzzy_symbol", ColumnType::Text).indexed(),
        Column::new("asset_name", ColumnType::Text),
        Column::new("start_date", ColumnType::Integer)
            .not_null()
            .default_int(0),
        Column::new("end_date", ColumnType::Integer).not_null(),
        Column::new("first_traded", ColumnType::Integer).not_null(),
        Column::new("exchange", ColumnType::Text),
    ],
    checks: &[],
};

pub static FUTURES_EXCHANGES: TableSchema = TableSchema {
    name: "futures_exchanges",
    columns: &[
        Column::new("exchange", ColumnType::Text).primary_key().unique(),
        Column::new("timezone", ColumnType::Text),
    ],
    checks: &[],
};

pub static FUTURES_ROOT_SYMBOLS: TableSchema = TableSchema {
    name: "futures_root_symbols",
    columns: &[
        Column::new("root_symbol", ColumnType::Text)
            .primary_key()
            .unique(),
        Column::new("root_symbol_id", ColumnType::Integer),
        Column::new("sector", ColumnType::Text),
        Column::new("description", ColumnType::Text),
        Column::new("exchange", ColumnType::Text).references("futures_exchanges", "exchange"),
    ],
    checks: &[],
};

pub static FUTURES_CONTRACTS: TableSchema = TableSchema {
    name: "futures_contracts",
    columns: &[
        Column::new("sid", ColumnType::Integer).primary_key().unique(),
        Column::new("symbol", ColumnType::Text).unique().indexed(),
        Column::new("root_symbol", ColumnType::Text)
            .references("futures_root_symbols", "root_symbol")
            .indexed(),
        Column::new("asset_name", ColumnType::Text),
        Column::new("start_date", ColumnType::Integer)
            .not_null()
            .default_int(0),
        Column::new("end_date", ColumnType::Integer).not_null(),
        Column::new("first_traded", ColumnType::Integer).not_null(),
        // Denormalized copy of the root symbol's venue.
        Column::new("exchange", ColumnType::Text).references("futures_exchanges", "exchange"),
        Column::new("notice_date", ColumnType::Integer).not_null(),
        Column::new("expiration_date", ColumnType::Integer).not_null(),
        Column::new("auto_close_date", ColumnType::Integer).not_null(),
        Column::new("multiplier", ColumnType::Float),
        Column::new("tick_size", ColumnType::Float),
    ],
    checks: &[],
};

pub static ASSET_ROUTER: TableSchema = TableSchema {
    name: "asset_router",
    columns: &[
        Column::new("sid", ColumnType::Integer).primary_key().unique(),
        Column::new("asset_type", ColumnType::Text),
    ],
    checks: &[],
};

/// All table definitions, in the same order as [`ASSET_DB_TABLE_NAMES`].
pub(crate) static ALL_TABLES: [&TableSchema; 6] = [
    &VERSION_INFO,
    &EQUITIES,
    &FUTURES_EXCHANGES,
    &FUTURES_ROOT_SYMBOLS,
    &FUTURES_CONTRACTS,
    &ASSET_ROUTER,
];
