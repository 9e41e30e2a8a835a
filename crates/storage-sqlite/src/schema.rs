// Diesel view of the asset catalogue. Must stay in step with the table
// descriptors in `assetdb_core::schema`, which own the DDL.

diesel::table! {
    version_info (id) {
        id -> Integer,
        version -> Integer,
    }
}

diesel::table! {
    equities (sid) {
        sid -> BigInt,
        symbol -> Nullable<Text>,
        company_symbol -> Nullable<Text>,
        share_class_symbol -> Nullable<Text>,
        fuzzy_symbol -> Nullable<Text>,
        asset_name -> Nullable<Text>,
        start_date -> BigInt,
        end_date -> BigInt,
        first_traded -> BigInt,
        exchange -> Nullable<Text>,
    }
}

diesel::table! {
    futures_exchanges (exchange) {
        exchange -> Text,
        timezone -> Nullable<Text>,
    }
}

diesel::table! {
    futures_root_symbols (root_symbol) {
        root_symbol -> Text,
        root_symbol_id -> Nullable<BigInt>,
        sector -> Nullable<Text>,
        description -> Nullable<Text>,
        exchange -> Nullable<Text>,
    }
}

diesel::table! {
    futures_contracts (sid) {
        sid -> BigInt,
        symbol -> Nullable<Text>,
        root_symbol -> Nullable<Text>,
        asset_name -> Nullable<Text>,
        start_date -> BigInt,
        end_date -> BigInt,
        first_traded -> BigInt,
        exchange -> Nullable<Text>,
        notice_date -> BigInt,
        expiration_date -> BigInt,
        auto_close_date -> BigInt,
        multiplier -> Nullable<Double>,
        tick_size -> Nullable<Double>,
    }
}

diesel::table! {
    asset_router (sid) {
        sid -> BigInt,
        asset_type -> Nullable<Text>,
    }
}

diesel::joinable!(futures_root_symbols -> futures_exchanges (exchange));
diesel::joinable!(futures_contracts -> futures_root_symbols (root_symbol));

diesel::allow_tables_to_appear_in_same_query!(
    version_info,
    equities,
    futures_exchanges,
    futures_root_symbols,
    futures_contracts,
    asset_router,
);
