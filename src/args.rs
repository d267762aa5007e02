use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "domainlog",
    about = "Report total unique domain names, top five most frequent domain names, and lines containing invalid IPv4 addresses in a domain log file",
    version,
    long_about = None
)]
pub struct Args {
    /// Filepath to the domain log
    #[arg(value_name = "DOMAIN_LOG_FILE")]
    pub domain_log_file: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
