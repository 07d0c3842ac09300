//! Deduplication by key column

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::config::NullKeyPolicy;
use crate::error::Result;
use crate::model::{KeyColumn, Row, Table};

/// Row counts before and after deduplication
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DedupStats {
    pub original_rows: usize,
    pub kept_rows: usize,
}

impl DedupStats {
    /// Number of rows dropped as duplicates
    pub fn removed(&self) -> usize {
        self.original_rows - self.kept_rows
    }

    pub fn has_duplicates(&self) -> bool {
        self.kept_rows < self.original_rows
    }
}

/// Keeps the first row for every distinct key value
#[derive(Debug, Clone)]
pub struct Deduplicator {
    key_column: String,
    null_keys: NullKeyPolicy,
}

impl Deduplicator {
    pub fn new(key_column: impl Into<String>) -> Self {
        Self {
            key_column: key_column.into(),
            null_keys: NullKeyPolicy::default(),
        }
    }

    pub fn with_null_keys(mut self, policy: NullKeyPolicy) -> Self {
        self.null_keys = policy;
        self
    }

    /// Produce a new table holding the first row per key value, in input order
    pub fn apply(&self, table: &Table) -> Result<Table> {
        let key = KeyColumn::resolve(table, &self.key_column, self.null_keys)?;

        let mut seen = FxHashSet::default();
        let mut kept: Vec<Row> = Vec::with_capacity(table.row_count());
        let mut null_keys = 0usize;

        for row in &table.rows {
            if row.get(key.index()).map_or(true, |c| c.is_null()) {
                null_keys += 1;
            }
            let is_first = match key.key_of(row) {
                Some(k) => seen.insert(k),
                None => true,
            };
            if is_first {
                kept.push(row.clone());
            } else {
                debug!(line = row.source_line, "dropping duplicate row");
            }
        }

        if null_keys > 0 {
            warn!(
                column = %self.key_column,
                count = null_keys,
                policy = ?self.null_keys,
                "key column contains null values"
            );
        }

        Ok(table.with_rows(kept))
    }
}

/// Convenience function: deduplicate and report counts
pub fn drop_duplicates(
    table: &Table,
    key_column: &str,
    null_keys: NullKeyPolicy,
) -> Result<(Table, DedupStats)> {
    let deduped = Deduplicator::new(key_column)
        .with_null_keys(null_keys)
        .apply(table)?;
    let stats = DedupStats {
        original_rows: table.row_count(),
        kept_rows: deduped.row_count(),
    };
    Ok((deduped, stats))
}
