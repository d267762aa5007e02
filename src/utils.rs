use time::format_description::well_known::Rfc3339;
use time::UtcOffset;
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout only carries the report. `RUST_LOG` wins over
/// the verbose flag when set.
pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Local offset is unavailable on some multi-threaded unix setups.
    let timer = OffsetTime::local_rfc_3339()
        .unwrap_or_else(|_| OffsetTime::new(UtcOffset::UTC, Rfc3339));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(timer)
        .with_writer(std::io::stderr)
        .init();
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    if !args.domain_log_file.is_file() {
        anyhow::bail!("{} is not a file", args.domain_log_file.display());
    }

    Ok(())
}
