//! Assets module - domain models and repository traits.

mod assets_model;
mod assets_traits;
mod symbol;


pub use assets_model::{
    Asset, AssetRouterEntry, AssetType, Equity, FuturesContract, FuturesExchange,
    FuturesRootSymbol, NewEquity,
};
pub use assets_traits::{AssetCatalogueReaderTrait, AssetCatalogueWriterTrait};
pub use symbol::{split_delimited_symbol, SYMBOL_DELIMITERS};
