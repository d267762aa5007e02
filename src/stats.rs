use std::collections::HashMap;
use std::fmt;

/// Per-domain occurrence counts.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DomainTally {
    counts: HashMap<String, u64>,
}

impl DomainTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more occurrence of `domain` and returns its new total.
    pub fn record(&mut self, domain: &str) -> u64 {
        if let Some(count) = self.counts.get_mut(domain) {
            *count += 1;
            return *count;
        }
        self.counts.insert(domain.to_string(), 1);
        1
    }

    pub fn get(&self, domain: &str) -> Option<u64> {
        self.counts.get(domain).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// All domains ordered by count, highest first. Equal counts are ordered
    /// by name, descending.
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        let mut sorted_domains: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(domain, count)| (domain.as_str(), *count))
            .collect();
        sorted_domains.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(a.0)));
        sorted_domains
    }

    pub fn top(&self, n: usize) -> Vec<String> {
        self.ranked()
            .into_iter()
            .take(n)
            .map(|(domain, _)| domain.to_string())
            .collect()
    }
}

/// A line whose address failed IPv4 validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidAddress {
    pub line_number: usize,
    pub domain: String,
    pub address: String,
}

impl fmt::Display for InvalidAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.line_number, self.domain, self.address)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub invalid_addresses: Vec<InvalidAddress>,
    pub tally: DomainTally,
    pub top_n: usize,
    pub top_domains: Vec<String>,
    pub lines_processed: usize,
}

impl Analysis {
    pub fn domain_count(&self) -> usize {
        self.tally.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally_of(domains: &[&str]) -> DomainTally {
        let mut tally = DomainTally::new();
        for domain in domains {
            tally.record(domain);
        }
        tally
    }

    #[test]
    fn record_returns_running_count() {
        let mut tally = DomainTally::new();
        assert_eq!(tally.record("a.com"), 1);
        assert_eq!(tally.record("a.com"), 2);
        assert_eq!(tally.record("b.com"), 1);
        assert_eq!(tally.get("a.com"), Some(2));
        assert_eq!(tally.get("c.com"), None);
        assert_eq!(tally.len(), 2);
    }

    #[test]
    fn counts_are_64_bit() {
        let mut tally = DomainTally::new();
        let count: u64 = tally.record("a.com");
        assert_eq!(count, 1);
        assert_eq!(tally.ranked(), vec![("a.com", 1u64)]);
    }

    #[test]
    fn ranked_breaks_ties_by_descending_name() {
        let tally = tally_of(&["b.com", "a.com", "c.com", "a.com", "z.com", "z.com"]);
        assert_eq!(
            tally.ranked(),
            vec![("z.com", 2), ("a.com", 2), ("c.com", 1), ("b.com", 1)]
        );
    }

    #[test]
    fn top_truncates_and_handles_small_tallies() {
        let tally = tally_of(&["a", "b", "c", "d", "e", "f", "f", "e"]);
        assert_eq!(tally.top(5), vec!["f", "e", "d", "c", "b"]);
        assert_eq!(tally_of(&["only"]).top(5), vec!["only"]);
        assert!(DomainTally::new().top(5).is_empty());
    }

    #[test]
    fn invalid_address_displays_as_report_line() {
        let record = InvalidAddress {
            line_number: 2,
            domain: "beta.com".to_string(),
            address: "999.1.1.1".to_string(),
        };
        assert_eq!(record.to_string(), "2 beta.com 999.1.1.1");
    }
}
