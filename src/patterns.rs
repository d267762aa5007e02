use regex::Regex;

use crate::error::AnalyzeError;

/// One decimal octet in 0..=255 without leading zeros.
const OCTET: &str = r"(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])";

/// How much of an address token the IPv4 grammar has to cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressMatch {
    /// The token only has to start with a valid address, so `1.2.3.4extra`
    /// passes. The last octet must not run on into more digits.
    #[default]
    Prefix,
    /// The whole token has to be a valid address.
    Exact,
}

#[derive(Debug, Clone)]
pub struct Ipv4Validator {
    pattern: Regex,
    mode: AddressMatch,
}

impl Ipv4Validator {
    pub fn new(mode: AddressMatch) -> Result<Self, AnalyzeError> {
        let body = format!(r"^(?:{OCTET}\.){{3}}{OCTET}");
        let source = match mode {
            AddressMatch::Prefix => format!("{body}(?:[^0-9]|$)"),
            AddressMatch::Exact => format!("{body}$"),
        };

        Ok(Self {
            pattern: Regex::new(&source)?,
            mode,
        })
    }

    pub fn mode(&self) -> AddressMatch {
        self.mode
    }

    pub fn is_valid(&self, address: &str) -> bool {
        self.pattern.is_match(address)
    }
}
