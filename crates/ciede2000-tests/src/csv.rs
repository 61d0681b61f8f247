//! CSV batch driver
//!
//! Reads `L1,a1,b1,L2,a2,b2` rows and writes each row back with the ΔE2000
//! appended as a seventh column. The ΔE is printed with 17 significant
//! digits, enough to round-trip any `f64`, so output files from independent
//! implementations can be compared at the bit level.
//!
//! ```text
//! in : 67.24,-14.22,70,65,8,46
//! out: 67.24,-14.22,70,65,8,46,15.467235479431412
//! ```

use ciede2000_core::{LabPair, Result};
use serde::Serialize;
use std::io::{BufRead, Write};

/// Significant digits used for ΔE in CSV output
pub const SIGNIFICANT_DIGITS: usize = 17;

/// Format a ΔE with [`SIGNIFICANT_DIGITS`] significant digits, fixed notation
pub fn format_delta_e(value: f64) -> String {
    format_significant(value, SIGNIFICANT_DIGITS)
}

/// Fixed-notation formatting with `digits` significant digits
pub fn format_significant(value: f64, digits: usize) -> String {
    if !value.is_finite() || value == 0.0 {
        return format!("{:.*}", digits.saturating_sub(1), value);
    }
    let magnitude = value.abs().log10().floor() as i64;
    let decimals = (digits as i64 - 1 - magnitude).max(0) as usize;
    format!("{:.*}", decimals, value)
}

/// Outcome of a driver run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DriverSummary {
    /// Rows written with a ΔE column
    pub processed: usize,
    /// Rows skipped because they were not six finite numbers
    pub skipped: usize,
}

/// Append ΔE2000 to every well-formed row of `input`
///
/// Blank rows, malformed rows and rows with NaN or infinite values are
/// skipped, not fatal. I/O errors propagate.
pub fn run_driver<R: BufRead, W: Write>(input: R, mut output: W) -> Result<DriverSummary> {
    let mut summary = DriverSummary::default();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let row = line.trim_end();
        if row.is_empty() {
            continue;
        }

        match row.parse::<LabPair>() {
            Ok(pair) if pair.is_finite() => {
                writeln!(output, "{},{}", row, format_delta_e(pair.delta_e()))?;
                summary.processed += 1;
            }
            Ok(_) => {
                tracing::debug!(line = index + 1, "skipping non-finite row");
                summary.skipped += 1;
            }
            Err(err) => {
                tracing::debug!(line = index + 1, %err, "skipping malformed row");
                summary.skipped += 1;
            }
        }
    }

    output.flush()?;
    if summary.skipped > 0 {
        tracing::warn!(skipped = summary.skipped, "malformed rows skipped");
    }
    Ok(summary)
}
