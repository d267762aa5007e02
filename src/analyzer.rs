use std::time::Instant;
use tracing::{debug, info};

use crate::error::AnalyzeError;
use crate::line::parse_line;
use crate::patterns::{AddressMatch, Ipv4Validator};
use crate::stats::{Analysis, DomainTally, InvalidAddress};

pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerOptions {
    pub top_n: usize,
    pub address_match: AddressMatch,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            address_match: AddressMatch::Prefix,
        }
    }
}

/// Single forward pass over a domain log: tallies domains, collects lines
/// with invalid addresses and ranks the busiest domains.
#[derive(Debug, Clone)]
pub struct LogAnalyzer {
    validator: Ipv4Validator,
    top_n: usize,
}

impl LogAnalyzer {
    pub fn new(options: AnalyzerOptions) -> Result<Self, AnalyzeError> {
        Ok(Self {
            validator: Ipv4Validator::new(options.address_match)?,
            top_n: options.top_n,
        })
    }

    /// Analyzes in-memory lines. Line numbers start at 1.
    pub fn process<I, S>(&self, lines: I) -> Result<Analysis, AnalyzeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.try_process(lines.into_iter().map(Ok::<S, AnalyzeError>))
    }

    /// Like [`LogAnalyzer::process`] but for sources that can fail while
    /// producing lines. The first error of either kind ends the run and no
    /// partial analysis is returned.
    pub fn try_process<I, S, E>(&self, lines: I) -> Result<Analysis, E>
    where
        I: IntoIterator<Item = Result<S, E>>,
        S: AsRef<str>,
        E: From<AnalyzeError>,
    {
        let start_time = Instant::now();
        info!(
            action = "start",
            component = "analyzer",
            address_match = ?self.validator.mode(),
            "Starting domain log analysis"
        );

        let mut tally = DomainTally::new();
        let mut invalid_addresses = Vec::new();
        let mut lines_processed = 0;

        for (index, line) in lines.into_iter().enumerate() {
            let line_number = index + 1;
            let line = line?;
            let record = parse_line(line_number, line.as_ref())?;

            let count = tally.record(record.domain);
            debug!(
                action = "tally",
                component = "analyzer",
                line_number,
                domain = record.domain,
                count,
                "Counted domain"
            );

            if !self.validator.is_valid(record.address) {
                info!(
                    action = "reject",
                    component = "ipv4_validation",
                    line_number,
                    domain = record.domain,
                    address = record.address,
                    "Invalid IPv4 address"
                );
                invalid_addresses.push(InvalidAddress {
                    line_number,
                    domain: record.domain.to_string(),
                    address: record.address.to_string(),
                });
            }
            lines_processed = line_number;
        }

        let top_domains = tally.top(self.top_n);

        info!(
            action = "complete",
            component = "analyzer",
            lines_processed,
            unique_domains = tally.len(),
            invalid_addresses = invalid_addresses.len(),
            duration_ms = start_time.elapsed().as_millis(),
            "Domain log analysis completed"
        );

        Ok(Analysis {
            invalid_addresses,
            tally,
            top_n: self.top_n,
            top_domains,
            lines_processed,
        })
    }
}
