//! Data model for tabular data representation

mod key;
mod schema;
mod table;

pub use key::{KeyColumn, RowKey};
pub use schema::Column;
pub use table::{CellValue, Row, Table};
