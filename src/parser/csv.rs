//! Delimited text parser

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use indexmap::IndexSet;
use tracing::debug;

use crate::error::{DedupError, Result};
use crate::model::{CellValue, Column, Table};

use super::delimiter_for;

/// Parser for comma/tab delimited files with a header row
#[derive(Debug, Clone, Copy)]
pub struct CsvParser {
    delimiter: u8,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvParser {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Parser using the delimiter implied by the file extension
    pub fn for_path(path: &Path) -> Self {
        Self::new(delimiter_for(path))
    }

    /// Open and parse a file
    pub fn parse(&self, path: &Path) -> Result<Table> {
        let file = File::open(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => DedupError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => DedupError::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let table = self.parse_reader(BufReader::new(file), path)?;
        debug!(
            path = %path.display(),
            rows = table.row_count(),
            columns = table.column_count(),
            "loaded table"
        );
        Ok(table)
    }

    /// Parse delimited content from any reader; `path` is only used in errors
    ///
    /// A header that repeats a column name is rejected with `Parse`, since
    /// rows are addressed by column name.
    pub fn parse_reader<R: Read>(&self, reader: R, path: &Path) -> Result<Table> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .delimiter(self.delimiter)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| classify(path, e))?
            .clone();

        if headers.is_empty() {
            return Err(DedupError::parse(path, "missing header row"));
        }

        let mut seen = IndexSet::with_capacity(headers.len());
        for name in headers.iter() {
            if !seen.insert(name) {
                return Err(DedupError::parse(
                    path,
                    format!("duplicate column name '{}' in header", name),
                ));
            }
        }

        let columns: Vec<Column> = headers
            .iter()
            .enumerate()
            .map(|(i, name)| Column::new(name, i))
            .collect();

        let mut table = Table::new(columns);

        for (idx, result) in csv_reader.records().enumerate() {
            let record = result.map_err(|e| classify(path, e))?;
            let source_line = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(idx + 2); // +2 for 1-indexing and header

            let cells = record.iter().map(CellValue::from_field).collect();
            table.add_row(cells, source_line);
        }

        Ok(table)
    }
}

/// Split csv errors into I/O failures and malformed content
fn classify(path: &Path, err: csv::Error) -> DedupError {
    if !err.is_io_error() {
        return DedupError::parse(path, err.to_string());
    }
    match err.into_kind() {
        csv::ErrorKind::Io(source) => DedupError::Read {
            path: path.to_path_buf(),
            source,
        },
        kind => DedupError::parse(path, format!("{:?}", kind)),
    }
}
