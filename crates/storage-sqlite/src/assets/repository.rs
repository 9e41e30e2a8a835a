use async_trait::async_trait;
use diesel::prelude::*;
use log::{debug, info};
use std::sync::Arc;

use assetdb_core::assets::{
    Asset, AssetCatalogueReaderTrait, AssetCatalogueWriterTrait, AssetRouterEntry, AssetType,
    Equity, FuturesContract, FuturesExchange, FuturesRootSymbol, NewEquity,
};
use assetdb_core::errors::{DatabaseError, Result};

use super::model::{
    AssetRouterDB, EquityDB, FuturesContractDB, FuturesExchangeDB, FuturesRootSymbolDB,
    NewEquityDB,
};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{
    asset_router, equities, futures_contracts, futures_exchanges, futures_root_symbols,
};

/// Repository for the equity and futures tables and their router.
pub struct AssetCatalogueRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AssetCatalogueRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

fn insert_router_row(conn: &mut SqliteConnection, sid: i64, asset_type: AssetType) -> Result<()> {
    diesel::insert_into(asset_router::table)
        .values(AssetRouterDB::new(sid, asset_type))
        .execute(conn)
        .map_err(StorageError::from)?;
    Ok(())
}

fn load_asset_type(conn: &mut SqliteConnection, sid: i64) -> Result<Option<AssetType>> {
    let row = asset_router::table
        .find(sid)
        .select(AssetRouterDB::as_select())
        .first::<AssetRouterDB>(conn)
        .optional()
        .map_err(StorageError::from)?;

    let entry = row.map(AssetRouterEntry::try_from).transpose()?;
    Ok(entry.map(|e| e.asset_type))
}

fn load_equity(conn: &mut SqliteConnection, sid: i64) -> Result<Equity> {
    let row = equities::table
        .find(sid)
        .select(EquityDB::as_select())
        .first::<EquityDB>(conn)
        .map_err(StorageError::from)?;
    Ok(row.into())
}

fn load_futures_contract(conn: &mut SqliteConnection, sid: i64) -> Result<FuturesContract> {
    let row = futures_contracts::table
        .find(sid)
        .select(FuturesContractDB::as_select())
        .first::<FuturesContractDB>(conn)
        .map_err(StorageError::from)?;
    Ok(row.into())
}

fn load_asset(conn: &mut SqliteConnection, sid: i64) -> Result<Asset> {
    match load_asset_type(conn, sid)? {
        Some(AssetType::Equity) => load_equity(conn, sid).map(Asset::Equity),
        Some(AssetType::Future) => load_futures_contract(conn, sid).map(Asset::Future),
        None => Err(DatabaseError::NotFound(format!("No asset registered for sid {}", sid)).into()),
    }
}

#[async_trait]
impl AssetCatalogueWriterTrait for AssetCatalogueRepository {
    async fn write_exchanges(&self, exchanges: Vec<FuturesExchange>) -> Result<usize> {
        let rows: Vec<FuturesExchangeDB> = exchanges.into_iter().map(Into::into).collect();
        let count = self
            .writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                for row in &rows {
                    diesel::insert_into(futures_exchanges::table)
                        .values(row)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(rows.len())
            })
            .await?;
        debug!("Wrote {} futures exchanges", count);
        Ok(count)
    }

    async fn write_root_symbols(&self, root_symbols: Vec<FuturesRootSymbol>) -> Result<usize> {
        let rows: Vec<FuturesRootSymbolDB> = root_symbols.into_iter().map(Into::into).collect();
        let count = self
            .writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                for row in &rows {
                    diesel::insert_into(futures_root_symbols::table)
                        .values(row)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(rows.len())
            })
            .await?;
        debug!("Wrote {} futures root symbols", count);
        Ok(count)
    }

    async fn write_equities(&self, new_equities: Vec<NewEquity>) -> Result<Vec<Equity>> {
        for equity in &new_equities {
            equity.validate()?;
        }
        let rows: Vec<NewEquityDB> = new_equities
            .into_iter()
            .map(|e| NewEquityDB::from(e.with_split_symbol()))
            .collect();

        let written = self
            .writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Vec<Equity>> {
                let mut written = Vec::with_capacity(rows.len());
                for row in &rows {
                    let stored = diesel::insert_into(equities::table)
                        .values(row)
                        .returning(EquityDB::as_returning())
                        .get_result::<EquityDB>(conn)
                        .map_err(StorageError::from)?;
                    insert_router_row(conn, stored.sid, AssetType::Equity)?;
                    written.push(Equity::from(stored));
                }
                Ok(written)
            })
            .await?;
        info!("Wrote {} equities", written.len());
        Ok(written)
    }

    async fn write_futures(&self, contracts: Vec<FuturesContract>) -> Result<Vec<FuturesContract>> {
        for contract in &contracts {
            contract.validate()?;
        }
        let rows: Vec<FuturesContractDB> = contracts.into_iter().map(Into::into).collect();

        let written = self
            .writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Vec<FuturesContract>> {
                let mut written = Vec::with_capacity(rows.len());
                for row in &rows {
                    let stored = diesel::insert_into(futures_contracts::table)
                        .values(row)
                        .returning(FuturesContractDB::as_returning())
                        .get_result::<FuturesContractDB>(conn)
                        .map_err(StorageError::from)?;
                    insert_router_row(conn, stored.sid, AssetType::Future)?;
                    written.push(FuturesContract::from(stored));
                }
                Ok(written)
            })
            .await?;
        info!("Wrote {} futures contracts", written.len());
        Ok(written)
    }
}

impl AssetCatalogueReaderTrait for AssetCatalogueRepository {
    fn lookup_asset_type(&self, sid: i64) -> Result<Option<AssetType>> {
        let mut conn = get_connection(&self.pool)?;
        load_asset_type(&mut conn, sid)
    }

    fn retrieve_asset(&self, sid: i64) -> Result<Asset> {
        let mut conn = get_connection(&self.pool)?;
        load_asset(&mut conn, sid)
    }

    fn retrieve_all(&self, sids: &[i64]) -> Result<Vec<Asset>> {
        let mut conn = get_connection(&self.pool)?;
        sids.iter().map(|sid| load_asset(&mut conn, *sid)).collect()
    }

    fn retrieve_equity(&self, sid: i64) -> Result<Equity> {
        let mut conn = get_connection(&self.pool)?;
        load_equity(&mut conn, sid)
    }

    fn retrieve_futures_contract(&self, sid: i64) -> Result<FuturesContract> {
        let mut conn = get_connection(&self.pool)?;
        load_futures_contract(&mut conn, sid)
    }

    fn equities_by_symbol(&self, symbol: &str) -> Result<Vec<Equity>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = equities::table
            .filter(equities::symbol.eq(symbol))
            .order((equities::start_date.asc(), equities::sid.asc()))
            .select(EquityDB::as_select())
            .load::<EquityDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Equity::from).collect())
    }

    fn lookup_future_symbol(&self, symbol: &str) -> Result<FuturesContract> {
        let mut conn = get_connection(&self.pool)?;
        let row = futures_contracts::table
            .filter(futures_contracts::symbol.eq(symbol))
            .select(FuturesContractDB::as_select())
            .first::<FuturesContractDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(row.into())
    }

    fn futures_contracts_for_root(&self, root_symbol: &str) -> Result<Vec<FuturesContract>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = futures_contracts::table
            .filter(futures_contracts::root_symbol.eq(root_symbol))
            .order((
                futures_contracts::expiration_date.asc(),
                futures_contracts::sid.asc(),
            ))
            .select(FuturesContractDB::as_select())
            .load::<FuturesContractDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(FuturesContract::from).collect())
    }

    fn futures_exchange(&self, exchange: &str) -> Result<FuturesExchange> {
        let mut conn = get_connection(&self.pool)?;
        let row = futures_exchanges::table
            .find(exchange)
            .select(FuturesExchangeDB::as_select())
            .first::<FuturesExchangeDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(row.into())
    }

    fn root_symbol(&self, root_symbol: &str) -> Result<FuturesRootSymbol> {
        let mut conn = get_connection(&self.pool)?;
        let row = futures_root_symbols::table
            .find(root_symbol)
            .select(FuturesRootSymbolDB::as_select())
            .first::<FuturesRootSymbolDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(row.into())
    }

    fn list_root_symbols(&self, exchange: &str) -> Result<Vec<FuturesRootSymbol>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = futures_root_symbols::table
            .filter(futures_root_symbols::exchange.eq(exchange))
            .order(futures_root_symbols::root_symbol.asc())
            .select(FuturesRootSymbolDB::as_select())
            .load::<FuturesRootSymbolDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(FuturesRootSymbol::from).collect())
    }
}
