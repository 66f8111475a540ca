//! Line counting engine behind the `srclines` CLI.
//!
//! [`run`] scans one directory, keeps the files whose names end with one of
//! the configured suffixes, and counts their lines (and non-blank lines).

pub mod config;
pub mod error;
pub mod filesystem;
pub mod options;
pub mod processor;
pub mod stats;

use crate::config::Config;
use crate::error::Result;
use crate::filesystem::SuffixFilter;
use crate::stats::{RunResult, Summary};

/// Run the line counter.
///
/// Files are read one at a time, in listing order, and the result is sorted
/// afterwards according to `config.sort`.
///
/// # Errors
///
/// The first failure aborts the run: a missing or non-directory root, a walk
/// error, or a qualifying file that cannot be read. No partial result is
/// returned.
pub fn run(config: &Config) -> Result<RunResult> {
    let filter = SuffixFilter::new(&config.filter);
    let mut files = Vec::new();

    filesystem::walk(&config.walk, &filter, |candidate| {
        files.push(processor::process_file(candidate, config)?);
        Ok(())
    })?;

    if let Some(key) = config.sort {
        stats::sort_stats(&mut files, key, config.descending);
    }

    let summary = Summary::from_files(&files, config.count_non_blank);
    log::info!(
        "scanned {}: {} files, {} lines",
        config.walk.root.display(),
        summary.files,
        summary.lines
    );

    Ok(RunResult { files, summary })
}
