//! Row count report

use std::io::{self, Write};

use crate::dedup::DedupStats;

/// Print the original and deduplicated row counts, one per line
pub fn write_report(stats: &DedupStats, writer: &mut dyn Write) -> io::Result<()> {
    writeln!(writer, "Original rows: {}", stats.original_rows)?;
    writeln!(writer, "Rows after removing duplicates: {}", stats.kept_rows)?;
    writer.flush()
}
