use std::io::Write;

use crate::domain::model::{Outcome, StockReport};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Writes the report and returns the process exit code for its outcome.
pub fn render<W: Write>(report: &StockReport, format: OutputFormat, out: &mut W) -> Result<u8> {
    match format {
        OutputFormat::Text => render_text(report, out),
        OutputFormat::Json => render_json(report, out),
    }
}

pub fn render_text<W: Write>(report: &StockReport, out: &mut W) -> Result<u8> {
    if report.outcome == Outcome::NotFound {
        writeln!(
            out,
            "No product information containing {} was found. Check the URL or page structure.",
            report.keyword
        )?;
        return Ok(report.outcome.exit_code());
    }

    writeln!(out, "=== MapCamera stock check ({}) ===", report.keyword)?;
    for (i, status) in report.statuses.iter().enumerate() {
        writeln!(out, "[{}] {}: {}", i + 1, status.label(), status.title)?;
        writeln!(out, "    excerpt: {}", status.snippet)?;
    }

    if report.outcome == Outcome::InStock {
        writeln!(out, "\nResult: in-stock notation detected.")?;
    } else {
        writeln!(out, "\nResult: no in-stock notation detected.")?;
    }

    Ok(report.outcome.exit_code())
}

pub fn render_json<W: Write>(report: &StockReport, out: &mut W) -> Result<u8> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(report.outcome.exit_code())
}
