//! Load → deduplicate → save → report

use std::io::Write;

use tracing::info;

use crate::config::Config;
use crate::dedup::{drop_duplicates, DedupStats};
use crate::error::{DedupError, Result};
use crate::output::{save_table, write_report};
use crate::parser::load_table;

/// Run the whole pipeline, writing the report to `report`
///
/// Stops at the first failing stage; nothing is written to the output path
/// unless loading and deduplication both succeeded.
pub fn run(config: &Config, report: &mut dyn Write) -> Result<DedupStats> {
    info!(input = %config.input.display(), "loading");
    let table = load_table(&config.input)?;

    let (deduped, stats) = drop_duplicates(&table, &config.key_column, config.null_keys)?;
    info!(
        key = %config.key_column,
        original = stats.original_rows,
        kept = stats.kept_rows,
        removed = stats.removed(),
        "deduplicated"
    );

    save_table(&deduped, &config.output)?;
    info!(output = %config.output.display(), "saved");

    write_report(&stats, report).map_err(DedupError::Report)?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    use crate::config::NullKeyPolicy;

    fn config_in(dir: &Path) -> Config {
        Config::new(dir.join("animals.csv"), dir.join("clean.csv"))
    }

    fn run_to_string(config: &Config) -> (Result<DedupStats>, String) {
        let mut out = Vec::new();
        let result = run(config, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_cat_dog_cat() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.input, "Animal,Legs\nCat,4\nDog,4\nCat,4\n").unwrap();

        let (result, report) = run_to_string(&config);
        let stats = result.unwrap();

        assert_eq!(stats.original_rows, 3);
        assert_eq!(stats.kept_rows, 2);
        assert_eq!(report, "Original rows: 3\nRows after removing duplicates: 2\n");
        assert_eq!(
            fs::read_to_string(&config.output).unwrap(),
            "Animal,Legs\nCat,4\nDog,4\n"
        );
    }

    #[test]
    fn test_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.input, "Animal,Legs\n").unwrap();

        let (result, report) = run_to_string(&config);
        result.unwrap();

        assert_eq!(report, "Original rows: 0\nRows after removing duplicates: 0\n");
        assert_eq!(fs::read_to_string(&config.output).unwrap(), "Animal,Legs\n");
    }

    #[test]
    fn test_missing_key_column_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.input, "Name,Legs\nCat,4\n").unwrap();

        let (result, report) = run_to_string(&config);

        assert!(matches!(result, Err(DedupError::MissingColumn { .. })));
        assert!(report.is_empty());
        assert!(!config.output.exists());
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let (result, _) = run_to_string(&config);

        assert!(matches!(result, Err(DedupError::FileNotFound { .. })));
        assert!(!config.output.exists());
    }

    #[test]
    fn test_custom_key_and_null_policy() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path())
            .with_key_column("Legs")
            .with_null_keys(NullKeyPolicy::Distinct);
        fs::write(&config.input, "Animal,Legs\nCat,4\nSnake,\nDog,4\nWorm,\n").unwrap();

        let (result, _) = run_to_string(&config);
        let stats = result.unwrap();

        assert_eq!(stats.kept_rows, 3);
        assert_eq!(
            fs::read_to_string(&config.output).unwrap(),
            "Animal,Legs\nCat,4\nSnake,\nWorm,\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_output_keeps_link() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let target = dir.path().join("real.csv");
        fs::write(&config.input, "Animal,Legs\nCat,4\nCat,4\n").unwrap();
        fs::write(&target, "old\n").unwrap();
        std::os::unix::fs::symlink(&target, &config.output).unwrap();

        let (result, _) = run_to_string(&config);
        result.unwrap();

        assert!(fs::symlink_metadata(&config.output)
            .unwrap()
            .file_type()
            .is_symlink());
        assert_eq!(fs::read_to_string(&target).unwrap(), "Animal,Legs\nCat,4\n");
    }
}
