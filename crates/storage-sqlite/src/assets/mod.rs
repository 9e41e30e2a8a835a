//! SQLite storage implementation for equities, futures and the asset router.

mod model;
mod repository;

pub use model::{
    AssetRouterDB, EquityDB, FuturesContractDB, FuturesExchangeDB, FuturesRootSymbolDB,
    NewEquityDB,
};
pub use repository::AssetCatalogueRepository;

// Re-export traits from core for convenience
pub use assetdb_core::assets::{AssetCatalogueReaderTrait, AssetCatalogueWriterTrait};
