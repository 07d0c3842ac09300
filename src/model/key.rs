//! Key column handling

use crate::config::NullKeyPolicy;
use crate::error::{DedupError, Result};

use super::table::{CellValue, Row, Table};

/// Identity of a row for deduplication purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKey<'a> {
    /// Null key under `NullKeyPolicy::Equal`; all such rows compare equal
    Null,
    Value(&'a str),
}

/// A key column resolved against a table
#[derive(Debug, Clone, Copy)]
pub struct KeyColumn {
    index: usize,
    null_keys: NullKeyPolicy,
}

impl KeyColumn {
    /// Resolve `name` against the table's columns
    pub fn resolve(table: &Table, name: &str, null_keys: NullKeyPolicy) -> Result<Self> {
        let index = table
            .column_index(name)
            .ok_or_else(|| DedupError::MissingColumn {
                column: name.to_string(),
                available: table.column_names().map(str::to_string).collect(),
            })?;
        Ok(Self { index, null_keys })
    }

    /// Column index of the key
    pub fn index(&self) -> usize {
        self.index
    }

    /// Key of a row, or `None` when the row never collides with another
    /// (a null key under `NullKeyPolicy::Distinct`)
    pub fn key_of<'a>(&self, row: &'a Row) -> Option<RowKey<'a>> {
        match row.get(self.index) {
            Some(CellValue::Text(s)) => Some(RowKey::Value(s)),
            Some(CellValue::Null) | None => match self.null_keys {
                NullKeyPolicy::Equal => Some(RowKey::Null),
                NullKeyPolicy::Distinct => None,
            },
        }
    }
}
