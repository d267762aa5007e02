use std::io::{self, Write};

use crate::Analysis;

/// Writes the invalid-address lines followed by the domain summary.
pub fn write_report<W: Write>(out: &mut W, analysis: &Analysis) -> io::Result<()> {
    for record in &analysis.invalid_addresses {
        writeln!(out, "{record}")?;
    }

    writeln!(out)?;
    writeln!(out, "Total unique domain names: {}", analysis.domain_count())?;
    writeln!(out)?;
    writeln!(
        out,
        "Top {} domain names with most occurrences:",
        analysis.top_n
    )?;

    if analysis.top_domains.is_empty() {
        writeln!(out)?;
    }
    for domain in &analysis.top_domains {
        writeln!(out, "{domain}")?;
    }

    Ok(())
}

pub fn print_analysis_results(analysis: &Analysis) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, analysis)?;
    out.flush()
}
