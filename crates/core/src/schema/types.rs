//! Backend-agnostic building blocks for table descriptors.
//!
//! Everything here is `Copy` and built with `const fn` so that table
//! definitions can live in `static` items and carry no runtime state.

use serde::Serialize;

/// Storage class of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnType {
    Integer,
    Text,
    Float,
}

impl ColumnType {
    /// SQL type name used in DDL.
    pub const fn sql_name(self) -> &'static str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Text => "TEXT",
            ColumnType::Float => "REAL",
        }
    }
}

/// A foreign-key edge from a column to `table.column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ForeignKey {
    pub table: &'static str,
    pub column: &'static str,
}

impl ForeignKey {
    pub const fn new(table: &'static str, column: &'static str) -> Self {
        Self { table, column }
    }

    /// `table.column`, the form used in error messages and DDL comments.
    pub fn target(&self) -> String {
        format!("{}.{}", self.table, self.column)
    }
}

/// Table-level boolean check evaluated by the storage on every write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CheckConstraint {
    pub expression: &'static str,
}

impl CheckConstraint {
    pub const fn new(expression: &'static str) -> Self {
        Self { expression }
    }
}

/// Column descriptor.
///
/// Columns start out nullable with no constraints; the builder methods add
/// them one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Column {
    pub name: &'static str,
    pub column_type: ColumnType,
    pub primary_key: bool,
    pub unique: bool,
    pub nullable: bool,
    pub index: bool,
    pub default: Option<i64>,
    pub foreign_key: Option<ForeignKey>,
}

impl Column {
    pub const fn new(name: &'static str, column_type: ColumnType) -> Self {
        Self {
            name,
            column_type,
            primary_key: false,
            unique: false,
            nullable: true,
            index: false,
            default: None,
            foreign_key: None,
        }
    }

    /// Primary keys are never nullable.
    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub const fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub const fn indexed(mut self) -> Self {
        self.index = true;
        self
    }

    pub const fn default_int(mut self, value: i64) -> Self {
        self.default = Some(value);
        self
    }

    pub const fn references(mut self, table: &'static str, column: &'static str) -> Self {
        self.foreign_key = Some(ForeignKey::new(table, column));
        self
    }

    /// True when an insert must supply a value for this column: it is not
    /// nullable, has no default and is not a storage-assigned key.
    pub const fn is_required(&self) -> bool {
        !self.nullable && self.default.is_none() && !self.primary_key
    }
}

/// Table descriptor: name, ordered columns and check constraints.
#[derive(Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [Column],
    pub checks: &'static [CheckConstraint],
}

impl TableSchema {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }

    pub fn primary_key(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.primary_key).collect()
    }

    pub fn unique_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.unique).collect()
    }

    pub fn indexed_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.index).collect()
    }

    pub fn required_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.is_required()).collect()
    }

    /// Columns with a foreign-key edge, paired with the edge.
    pub fn foreign_keys(&self) -> Vec<(&Column, ForeignKey)> {
        self.columns
            .iter()
            .filter_map(|c| c.foreign_key.map(|fk| (c, fk)))
            .collect()
    }

    /// Names of the tables this table references.
    pub fn referenced_tables(&self) -> Vec<&'static str> {
        let mut tables: Vec<&'static str> = Vec::new();
        for (_, fk) in self.foreign_keys() {
            if !tables.contains(&fk.table) {
                tables.push(fk.table);
            }
        }
        tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_defaults_to_nullable() {
        let col = Column::new("symbol", ColumnType::Text);
        assert!(col.nullable);
        assert!(!col.primary_key);
        assert!(!col.unique);
        assert!(!col.index);
        assert_eq!(col.default, None);
        assert!(!col.is_required());
    }

    #[test]
    fn test_primary_key_is_not_null() {
        let col = Column::new("sid", ColumnType::Integer).primary_key();
        assert!(!col.nullable);
        // Storage assigns keys, so they are never counted as required input.
        assert!(!col.is_required());
    }

    #[test]
    fn test_default_makes_column_optional_on_insert() {
        let col = Column::new("start_date", ColumnType::Integer)
            .not_null()
            .default_int(0);
        assert!(!col.nullable);
        assert!(!col.is_required());
    }

    #[test]
    fn test_references_sets_foreign_key() {
        let col = Column::new("exchange", ColumnType::Text)
            .references("futures_exchanges", "exchange");
        let fk = col.foreign_key.unwrap();
        assert_eq!(fk.target(), "futures_exchanges.exchange");
    }

    #[test]
    fn test_sql_names() {
        assert_eq!(ColumnType::Integer.sql_name(), "INTEGER");
        assert_eq!(ColumnType::Text.sql_name(), "TEXT");
        assert_eq!(ColumnType::Float.sql_name(), "REAL");
    }
}
