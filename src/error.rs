//! Errors raised by the analysis core.
//!
//! Invalid IPv4 addresses are not errors; they are collected into the
//! report. Only structural problems with the input abort a run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// A line did not split into exactly `timestamp domain address`.
    #[error(
        "malformed line {line_number}: expected 3 space-separated fields, found {tokens}: {line:?}"
    )]
    MalformedLine {
        line_number: usize,
        line: String,
        tokens: usize,
    },

    #[error("failed to compile IPv4 pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl AnalyzeError {
    pub fn malformed(line_number: usize, line: &str, tokens: usize) -> Self {
        AnalyzeError::MalformedLine {
            line_number,
            line: line.to_string(),
            tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_line_message_names_line_and_count() {
        let err = AnalyzeError::malformed(7, "onlytwo tokens", 2);
        let msg = err.to_string();
        assert!(msg.contains("malformed line 7"));
        assert!(msg.contains("found 2"));
        assert!(msg.contains("\"onlytwo tokens\""));
    }
}
