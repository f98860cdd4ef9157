use std::io::Write;

use crate::core::engine::CheckEngine;
use crate::core::report::{render, OutputFormat};
use crate::core::Pipeline;
use crate::utils::error::CheckError;

/// Runs the engine, prints the report to `out` (diagnostics to `err`) and
/// returns the process exit code.
pub async fn run_check<P, O, E>(
    engine: &CheckEngine<P>,
    format: OutputFormat,
    out: &mut O,
    err: &mut E,
) -> u8
where
    P: Pipeline,
    O: Write,
    E: Write,
{
    match engine.run().await {
        Ok(report) => match render(&report, format, out) {
            Ok(code) => code,
            Err(e) => report_error(&e, err),
        },
        Err(e) => report_error(&e, err),
    }
}

/// Prints a failure the way every binary reports it and returns its exit code.
pub fn report_error<E: Write>(e: &CheckError, err: &mut E) -> u8 {
    tracing::debug!("❌ Stock check failed: {} (Category: {:?})", e, e.category());

    // Nothing sensible is left to do if stderr itself is gone.
    let _ = writeln!(err, "{}", e);
    let _ = writeln!(err, "💡 {}", e.recovery_suggestion());

    e.exit_code()
}
