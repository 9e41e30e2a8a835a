//! Renders backend-agnostic table descriptors as SQLite DDL.

use assetdb_core::schema::{Column, TableSchema};

/// `CREATE TABLE IF NOT EXISTS` statement for `table`.
///
/// Keys, uniqueness, checks and foreign keys are emitted as table
/// constraints. A single `INTEGER` primary key stays a rowid alias, so SQLite
/// assigns it when an insert leaves it out.
pub fn create_table_sql(table: &TableSchema) -> String {
    let mut lines: Vec<String> = table.columns.iter().map(column_sql).collect();

    let primary_key: Vec<&str> = table.primary_key().iter().map(|c| c.name).collect();
    if !primary_key.is_empty() {
        lines.push(format!("PRIMARY KEY ({})", primary_key.join(", ")));
    }

    for column in table.unique_columns() {
        lines.push(format!("UNIQUE ({})", column.name));
    }

    for check in table.checks {
        lines.push(format!("CHECK ({})", check.expression));
    }

    for (column, fk) in table.foreign_keys() {
        lines.push(format!(
            "FOREIGN KEY ({}) REFERENCES {} ({})",
            column.name, fk.table, fk.column
        ));
    }

    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
        table.name,
        lines.join(",\n    ")
    )
}

fn column_sql(column: &Column) -> String {
    let mut sql = format!("{} {}", column.name, column.column_type.sql_name());
    if !column.nullable {
        sql.push_str(" NOT NULL");
    }
    if let Some(default) = column.default {
        sql.push_str(&format!(" DEFAULT {}", default));
    }
    sql
}

/// Name of the index created for `column` of `table`.
pub fn index_name(table: &str, column: &str) -> String {
    format!("ix_{}_{}", table, column)
}

/// One `CREATE INDEX IF NOT EXISTS` statement per indexed column.
pub fn create_index_sql(table: &TableSchema) -> Vec<String> {
    table
        .indexed_columns()
        .iter()
        .map(|c| {
            format!(
                "CREATE INDEX IF NOT EXISTS {} ON {} ({})",
                index_name(table.name, c.name),
                table.name,
                c.name
            )
        })
        .collect()
}

pub fn drop_table_sql(table: &TableSchema) -> String {
    format!("DROP TABLE IF EXISTS {}", table.name)
}

/// Full creation script for `tables`, in the given order.
pub fn create_all_sql(tables: &[&TableSchema]) -> Vec<String> {
    let mut statements = Vec::new();
    for table in tables {
        statements.push(create_table_sql(table));
        statements.extend(create_index_sql(table));
    }
    statements
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetdb_core::schema::{EQUITIES, FUTURES_CONTRACTS, FUTURES_EXCHANGES, VERSION_INFO};

    #[test]
    fn test_version_info_ddl() {
        assert_eq!(
            create_table_sql(&VERSION_INFO),
            "CREATE TABLE IF NOT EXISTS version_info (\n    \
             id INTEGER NOT NULL,\n    \
             version INTEGER NOT NULL,\n    \
             PRIMARY KEY (id),\n    \
             UNIQUE (id),\n    \
             UNIQUE (version),\n    \
             CHECK (id <= 1),\n    \
             CHECK (id >= 1)\n)"
        );
    }

    #[test]
    fn test_equities_defaults_and_not_null() {
        let sql = create_table_sql(&EQUITIES);
        assert!(sql.contains("start_date INTEGER NOT NULL DEFAULT 0"));
        assert!(sql.contains("end_date INTEGER NOT NULL,"));
        assert!(sql.contains("first_traded INTEGER NOT NULL,"));
        assert!(sql.contains("    symbol TEXT,"));
        assert!(sql.contains("PRIMARY KEY (sid)"));
        assert!(!sql.contains("FOREIGN KEY"));
    }

    #[test]
    fn test_futures_contract_foreign_keys() {
        let sql = create_table_sql(&FUTURES_CONTRACTS);
        assert!(sql.contains(
            "FOREIGN KEY (root_symbol) REFERENCES futures_root_symbols (root_symbol)"
        ));
        assert!(sql.contains("FOREIGN KEY (exchange) REFERENCES futures_exchanges (exchange)"));
        assert!(sql.contains("UNIQUE (symbol)"));
        assert!(sql.contains("multiplier REAL,"));
    }

    #[test]
    fn test_index_statements() {
        assert_eq!(
            create_index_sql(&EQUITIES),
            vec![
                "CREATE INDEX IF NOT EXISTS ix_equities_company_symbol ON equities (company_symbol)",
                "CREATE INDEX IF NOT EXISTS ix_equities_fuzzy_symbol ON equities (fuzzy_symbol)",
            ]
        );
        assert_eq!(create_index_sql(&FUTURES_CONTRACTS).len(), 2);
        assert!(create_index_sql(&FUTURES_EXCHANGES).is_empty());
    }

    #[test]
    fn test_create_all_orders_tables_before_their_indexes() {
        let statements = create_all_sql(&[&EQUITIES, &FUTURES_EXCHANGES]);
        assert_eq!(statements.len(), 4);
        assert!(statements[0].starts_with("CREATE TABLE IF NOT EXISTS equities"));
        assert!(statements[1].starts_with("CREATE INDEX"));
        assert!(statements[3].starts_with("CREATE TABLE IF NOT EXISTS futures_exchanges"));
    }

    #[test]
    fn test_drop_table_sql() {
        assert_eq!(
            drop_table_sql(&FUTURES_EXCHANGES),
            "DROP TABLE IF EXISTS futures_exchanges"
        );
    }
}
