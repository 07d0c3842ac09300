//! Output: the cleaned file and the row count report

mod report;
mod writer;

pub use report::write_report;
pub use writer::{save_table, CsvWriter};
