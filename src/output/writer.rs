//! Delimited file writer

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{DedupError, Result};
use crate::model::Table;
use crate::parser::delimiter_for;

/// Writes a table as delimited text with a header row
#[derive(Debug, Clone, Copy)]
pub struct CsvWriter {
    delimiter: u8,
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvWriter {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Writer using the delimiter implied by the file extension
    pub fn for_path(path: &Path) -> Self {
        Self::new(delimiter_for(path))
    }

    /// Write `table` to `path`, truncating any existing file
    ///
    /// The path itself is opened, so a symlink keeps pointing at the file it
    /// names and that file receives the new content.
    pub fn save(&self, table: &Table, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| DedupError::write(path, e))?;
        self.write_to(table, BufWriter::new(file))
            .map_err(|e| DedupError::write(path, e))?;

        debug!(path = %path.display(), rows = table.row_count(), "saved table");
        Ok(())
    }

    /// Serialize `table` into any writer
    pub fn write_to<W: Write>(&self, table: &Table, writer: W) -> io::Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(writer);

        csv_writer.write_record(table.column_names())?;
        for row in &table.rows {
            csv_writer.write_record(row.cells.iter().map(|c| c.as_field()))?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Write a table to `path` with the delimiter implied by its extension
pub fn save_table(table: &Table, path: &Path) -> Result<()> {
    CsvWriter::for_path(path).save(table, path)
}
