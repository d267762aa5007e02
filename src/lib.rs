pub mod analyzer;
pub mod args;
pub mod error;
pub mod line;
pub mod logfile;
pub mod output;
pub mod patterns;
pub mod stats;
pub mod utils;

pub use analyzer::{AnalyzerOptions, LogAnalyzer, DEFAULT_TOP_N};
pub use args::Args;
pub use error::AnalyzeError;
pub use logfile::analyze_log_file;
pub use patterns::{AddressMatch, Ipv4Validator};
pub use stats::{Analysis, DomainTally, InvalidAddress};
