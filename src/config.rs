//! Configuration handling for csvdedup

use std::path::PathBuf;

/// Default input file, relative to the working directory
pub const DEFAULT_INPUT: &str = "data/animals.csv";
/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "data/clean.csv";
/// Default key column
pub const DEFAULT_KEY_COLUMN: &str = "Animal";

/// How rows with a null key value are deduplicated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NullKeyPolicy {
    /// All null keys count as the same value; only the first null-keyed row survives
    #[default]
    Equal,
    /// Every null key is unique; all null-keyed rows survive
    Distinct,
}

/// Configuration for a deduplication run
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read
    pub input: PathBuf,
    /// File to write
    pub output: PathBuf,
    /// Column whose value identifies a row
    pub key_column: String,
    /// Treatment of null key values
    pub null_keys: NullKeyPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            key_column: DEFAULT_KEY_COLUMN.to_string(),
            null_keys: NullKeyPolicy::default(),
        }
    }
}

impl Config {
    /// Create a new Config with file paths
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self {
            input,
            output,
            ..Default::default()
        }
    }

    /// Set the key column
    pub fn with_key_column(mut self, column: impl Into<String>) -> Self {
        self.key_column = column.into();
        self
    }

    /// Set the null key policy
    pub fn with_null_keys(mut self, policy: NullKeyPolicy) -> Self {
        self.null_keys = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from("data/animals.csv"));
        assert_eq!(config.output, PathBuf::from("data/clean.csv"));
        assert_eq!(config.key_column, "Animal");
        assert_eq!(config.null_keys, NullKeyPolicy::Equal);
    }
}
