use crate::error::AnalyzeError;

/// One `timestamp domain address` record borrowed from a raw log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLine<'a> {
    pub timestamp: &'a str,
    pub domain: &'a str,
    pub address: &'a str,
}

/// Splits `line` on single spaces and trims each field.
///
/// Runs of spaces produce empty fields, so `"a  b c"` has four fields and is
/// rejected just like a line with too few.
pub fn parse_line(line_number: usize, line: &str) -> Result<LogLine<'_>, AnalyzeError> {
    let mut fields = line.split(' ').map(str::trim);

    match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(timestamp), Some(domain), Some(address), None) => Ok(LogLine {
            timestamp,
            domain,
            address,
        }),
        _ => Err(AnalyzeError::malformed(
            line_number,
            line,
            line.split(' ').count(),
        )),
    }
}
