//! csvdedup - Remove duplicate rows by key column

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

use csvdedup::config::{self, Config, NullKeyPolicy};
use csvdedup::DedupStats;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliNullKeys {
    Equal,
    Distinct,
}

impl From<CliNullKeys> for NullKeyPolicy {
    fn from(p: CliNullKeys) -> Self {
        match p {
            CliNullKeys::Equal => NullKeyPolicy::Equal,
            CliNullKeys::Distinct => NullKeyPolicy::Distinct,
        }
    }
}

/// Remove duplicate rows from a CSV file, keeping the first row per key value
#[derive(Parser, Debug)]
#[command(name = "csvdedup")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to read
    #[arg(short, long, default_value = config::DEFAULT_INPUT)]
    input: PathBuf,

    /// File to write (overwritten if present)
    #[arg(short, long, default_value = config::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Column whose value identifies duplicate rows
    #[arg(short, long, default_value = config::DEFAULT_KEY_COLUMN)]
    key: String,

    /// How empty/NA key values are compared
    #[arg(long, value_enum, default_value = "equal")]
    null_keys: CliNullKeys,
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout carries only the report
fn init_logging() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<DedupStats> {
    let cli = Cli::parse();

    let config = Config::new(cli.input, cli.output)
        .with_key_column(cli.key)
        .with_null_keys(cli.null_keys.into());

    let mut stdout = std::io::stdout().lock();
    csvdedup::run(&config, &mut stdout).with_context(|| {
        format!(
            "Failed to deduplicate {} into {}",
            config.input.display(),
            config.output.display()
        )
    })
}
