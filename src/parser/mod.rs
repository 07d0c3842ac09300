//! Parser layer for reading delimited tabular files

mod csv;

use std::path::Path;

use crate::error::Result;
use crate::model::Table;

pub use self::csv::CsvParser;

/// Field delimiter implied by a file extension: tab for `.tsv`/`.tab`, comma otherwise
pub fn delimiter_for(path: &Path) -> u8 {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "tsv" | "tab" => b'\t',
        _ => b',',
    }
}

/// Load a table from `path`
pub fn load_table(path: &Path) -> Result<Table> {
    CsvParser::for_path(path).parse(path)
}
