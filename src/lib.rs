//! csvdedup - Remove duplicate rows from delimited tabular files
//!
//! Loads a table with a header row, keeps the first row for every distinct
//! value of a key column, writes the result and reports row counts.

pub mod config;
pub mod dedup;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;
pub mod pipeline;

pub use config::Config;
pub use dedup::DedupStats;
pub use error::DedupError;
pub use model::Table;
pub use pipeline::run;
