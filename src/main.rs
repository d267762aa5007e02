use anyhow::Result;
use clap::Parser;
use tracing::debug;

use domainlog::output::print_analysis_results;
use domainlog::utils::{setup_logging, validate_args};
use domainlog::{analyze_log_file, Args};

fn run(args: &Args) -> Result<()> {
    validate_args(args)?;
    let analysis = analyze_log_file(args)?;
    print_analysis_results(&analysis)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    if let Err(e) = run(&args) {
        debug!(action = "abort", component = "main", error = %e, "Analysis failed");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
