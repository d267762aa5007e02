use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

use crate::{AnalyzerOptions, Analysis, Args, LogAnalyzer};

/// Streams the lines of a domain log. Read failures, including invalid
/// UTF-8, carry the line number they happened on.
pub fn read_log_lines(path: &Path) -> Result<impl Iterator<Item = Result<String>>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    info!(action = "open", component = "log_file", file_path = ?path, "Opened domain log");

    let path: PathBuf = path.to_path_buf();
    Ok(BufReader::new(file)
        .lines()
        .enumerate()
        .map(move |(index, line)| {
            line.with_context(|| {
                format!("Failed to read line {} of {}", index + 1, path.display())
            })
        }))
}

pub fn analyze_log_file(args: &Args) -> Result<Analysis> {
    let total_start_time = Instant::now();
    info!(
        action = "start",
        component = "log_analysis",
        file_path = ?args.domain_log_file,
        "Analyzing domain log file"
    );

    let analyzer = LogAnalyzer::new(AnalyzerOptions::default())?;
    let lines = read_log_lines(&args.domain_log_file)?;
    let analysis = analyzer.try_process(lines)?;

    info!(
        action = "complete",
        component = "log_analysis",
        lines_processed = analysis.lines_processed,
        unique_domains = analysis.domain_count(),
        invalid_addresses = analysis.invalid_addresses.len(),
        duration_ms = total_start_time.elapsed().as_millis(),
        "Analysis completed successfully"
    );

    Ok(analysis)
}
