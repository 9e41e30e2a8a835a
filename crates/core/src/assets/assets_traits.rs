use super::assets_model::{
    Asset, AssetType, Equity, FuturesContract, FuturesExchange, FuturesRootSymbol, NewEquity,
};
use crate::errors::Result;

/// Trait defining the contract for writing catalogue rows.
///
/// Equity and futures writes insert the matching `asset_router` rows in the
/// same transaction; a batch is either written completely or not at all.
#[async_trait::async_trait]
pub trait AssetCatalogueWriterTrait: Send + Sync {
    async fn write_exchanges(&self, exchanges: Vec<FuturesExchange>) -> Result<usize>;
    async fn write_root_symbols(&self, root_symbols: Vec<FuturesRootSymbol>) -> Result<usize>;
    async fn write_equities(&self, equities: Vec<NewEquity>) -> Result<Vec<Equity>>;
    async fn write_futures(&self, contracts: Vec<FuturesContract>) -> Result<Vec<FuturesContract>>;
}

/// Trait defining the contract for reading catalogue rows.
pub trait AssetCatalogueReaderTrait: Send + Sync {
    /// Asset kind registered for `sid`, or `None` for an unknown sid.
    fn lookup_asset_type(&self, sid: i64) -> Result<Option<AssetType>>;

    /// Resolves `sid` through the router and loads it from the owning table.
    fn retrieve_asset(&self, sid: i64) -> Result<Asset>;

    /// Resolves several sids, preserving the requested order.
    fn retrieve_all(&self, sids: &[i64]) -> Result<Vec<Asset>>;

    fn retrieve_equity(&self, sid: i64) -> Result<Equity>;
    fn retrieve_futures_contract(&self, sid: i64) -> Result<FuturesContract>;

    /// Equities that have ever traded under `symbol`.
    fn equities_by_symbol(&self, symbol: &str) -> Result<Vec<Equity>>;

    fn lookup_future_symbol(&self, symbol: &str) -> Result<FuturesContract>;

    /// Contracts of a root symbol ordered by expiration, then sid.
    fn futures_contracts_for_root(&self, root_symbol: &str) -> Result<Vec<FuturesContract>>;

    fn futures_exchange(&self, exchange: &str) -> Result<FuturesExchange>;
    fn root_symbol(&self, root_symbol: &str) -> Result<FuturesRootSymbol>;
    fn list_root_symbols(&self, exchange: &str) -> Result<Vec<FuturesRootSymbol>>;
}
