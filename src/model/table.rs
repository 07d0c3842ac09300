//! Table, Row, and Cell data structures

use std::borrow::Cow;

use indexmap::IndexSet;

use super::schema::Column;

/// Raw field text read as a missing value
const NULL_MARKERS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "<NA>",
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "1.#IND", "1.#QNAN",
];

/// A single field; text is kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CellValue {
    Null,
    Text(String),
}

impl CellValue {
    /// Build a cell from raw field text, mapping missing-value markers to `Null`
    pub fn from_field(raw: &str) -> Self {
        if NULL_MARKERS.contains(&raw) {
            CellValue::Null
        } else {
            CellValue::Text(raw.to_string())
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Text written back to a delimited file; nulls become empty fields
    pub fn as_field(&self) -> &str {
        match self {
            CellValue::Null => "",
            CellValue::Text(s) => s,
        }
    }

    /// Convert to a display string
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            CellValue::Null => Cow::Borrowed("NULL"),
            CellValue::Text(s) => Cow::Borrowed(s.as_str()),
        }
    }
}

/// A row in the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Cell values in column order
    pub cells: Vec<CellValue>,
    /// Original line number in source file (1-indexed, header is line 1)
    pub source_line: usize,
}

impl Row {
    pub fn new(cells: Vec<CellValue>, source_line: usize) -> Self {
        Self { cells, source_line }
    }

    /// Get a cell value by column index
    pub fn get(&self, index: usize) -> Option<&CellValue> {
        self.cells.get(index)
    }
}

/// A table containing columns and rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column definitions, in header order
    pub columns: Vec<Column>,
    /// All rows in the table
    pub rows: Vec<Row>,
    /// Column names for ordered name → index lookup
    names: IndexSet<String>,
}

impl Table {
    /// Create a new empty table with column definitions
    ///
    /// Column names are expected to be unique; the loader rejects
    /// headers that repeat a name before a table is built.
    pub fn new(columns: Vec<Column>) -> Self {
        let names = columns.iter().map(|c| c.name.clone()).collect();
        Self {
            columns,
            rows: Vec::new(),
            names,
        }
    }

    /// Build a table from header names and string rows
    pub fn from_records<H, R>(headers: H, records: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator,
        R::Item: IntoIterator,
        <R::Item as IntoIterator>::Item: AsRef<str>,
    {
        let columns = headers
            .into_iter()
            .enumerate()
            .map(|(i, name)| Column::new(name, i))
            .collect();
        let mut table = Table::new(columns);
        for (i, record) in records.into_iter().enumerate() {
            let cells = record
                .into_iter()
                .map(|f| CellValue::from_field(f.as_ref()))
                .collect();
            table.add_row(cells, i + 2);
        }
        table
    }

    /// Add a row to the table
    pub fn add_row(&mut self, cells: Vec<CellValue>, source_line: usize) {
        self.rows.push(Row::new(cells, source_line));
    }

    /// Copy of this table's columns with the given rows
    pub fn with_rows(&self, rows: Vec<Row>) -> Self {
        Self {
            columns: self.columns.clone(),
            rows,
            names: self.names.clone(),
        }
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.names.get_index_of(name)
    }

    /// Column names in header order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Look up a cell by row position and column name
    pub fn value(&self, row: usize, column: &str) -> Option<&CellValue> {
        let col_idx = self.column_index(column)?;
        self.rows.get(row)?.get(col_idx)
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
