//! Verification of ΔE2000 result files
//!
//! Reads `L1,a1,b1,L2,a2,b2,ΔE` rows produced by any implementation,
//! recomputes each ΔE and counts the rows that disagree by more than the
//! tolerance. Rows that are not seven finite numbers are skipped.
//!
//! Input is streamed in chunks of [`VerifyOptions::chunk_rows`] rows, each
//! chunk recomputed in parallel, so memory stays bounded however many rows
//! are piped in.

use ciede2000_core::{Ciede2000, HueMeanConvention, Lab, Result, parse_fields};
use rayon::prelude::*;
use serde::Serialize;
use std::io::BufRead;
use std::time::Instant;

/// Tolerance for files written in double precision
pub const DOUBLE_PRECISION_TOLERANCE: f64 = 1e-10;

/// Tolerance for files written by a single-precision implementation
pub const SINGLE_PRECISION_TOLERANCE: f64 = 1e-2;

/// Rows read before each parallel recompute
pub const DEFAULT_CHUNK_ROWS: usize = 65_536;

/// Verification settings
#[derive(Debug, Clone)]
pub struct VerifyOptions {
    /// Largest accepted |expected - actual|
    pub tolerance: f64,
    /// Number of mismatches kept as examples
    pub max_examples: usize,
    /// Convention the file is expected to follow
    pub convention: HueMeanConvention,
    /// Rows buffered per parallel batch
    pub chunk_rows: usize,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            tolerance: DOUBLE_PRECISION_TOLERANCE,
            max_examples: 10,
            convention: HueMeanConvention::default(),
            chunk_rows: DEFAULT_CHUNK_ROWS,
        }
    }
}

impl VerifyOptions {
    /// Loosened tolerance for 32-bit producers
    pub fn single_precision() -> Self {
        Self {
            tolerance: SINGLE_PRECISION_TOLERANCE,
            ..Self::default()
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_convention(mut self, convention: HueMeanConvention) -> Self {
        self.convention = convention;
        self
    }

    pub fn with_chunk_rows(mut self, chunk_rows: usize) -> Self {
        self.chunk_rows = chunk_rows.max(1);
        self
    }
}

/// One row whose ΔE disagrees with ours
#[derive(Debug, Clone, Serialize)]
pub struct Mismatch {
    /// 1-based line number
    pub line: usize,
    pub row: String,
    /// ΔE we computed
    pub expected: f64,
    /// ΔE found in the file
    pub found: f64,
}

/// Verification outcome
#[derive(Debug, Clone, Default, Serialize)]
pub struct VerifySummary {
    pub successes: usize,
    pub errors: usize,
    /// Rows that were not seven finite numbers
    pub skipped: usize,
    pub max_difference: f64,
    pub last_verified: Option<String>,
    pub duration_secs: f64,
    /// First few mismatches
    pub examples: Vec<Mismatch>,
}

impl VerifySummary {
    pub fn passed(&self) -> bool {
        self.errors == 0
    }
}

struct Row {
    line: usize,
    text: String,
    values: [f64; 7],
}

/// Verify every row of `input`
pub fn verify<R: BufRead>(input: R, options: &VerifyOptions) -> Result<VerifySummary> {
    let start = Instant::now();
    let ciede = Ciede2000::new().with_convention(options.convention);
    let chunk_rows = options.chunk_rows.max(1);

    let mut summary = VerifySummary::default();
    let mut chunk = Vec::with_capacity(chunk_rows);

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        match parse_fields::<7>(text) {
            Ok(values) if values.iter().all(|v| v.is_finite()) => {
                chunk.push(Row {
                    line: index + 1,
                    text: text.to_string(),
                    values,
                });
                if chunk.len() == chunk_rows {
                    check_chunk(&ciede, &mut chunk, options, &mut summary);
                }
            }
            Ok(_) => summary.skipped += 1,
            Err(err) => {
                tracing::trace!(line = index + 1, %err, "skipping row");
                summary.skipped += 1;
            }
        }
    }
    check_chunk(&ciede, &mut chunk, options, &mut summary);

    summary.duration_secs = start.elapsed().as_secs_f64();

    tracing::info!(
        successes = summary.successes,
        errors = summary.errors,
        skipped = summary.skipped,
        max_difference = summary.max_difference,
        "verification finished"
    );
    Ok(summary)
}

/// Recompute one chunk in parallel, fold it into `summary` and drain it
fn check_chunk(ciede: &Ciede2000, chunk: &mut Vec<Row>, options: &VerifyOptions, summary: &mut VerifySummary) {
    if chunk.is_empty() {
        return;
    }

    let diffs: Vec<(f64, f64)> = chunk
        .par_iter()
        .map(|row| {
            let v = &row.values;
            let expected = ciede.difference(Lab::new(v[0], v[1], v[2]), Lab::new(v[3], v[4], v[5]));
            (expected, (expected - v[6]).abs())
        })
        .collect();

    for (row, (expected, diff)) in chunk.iter().zip(diffs) {
        if diff > options.tolerance || diff.is_nan() {
            summary.errors += 1;
            if summary.examples.len() < options.max_examples {
                summary.examples.push(Mismatch {
                    line: row.line,
                    row: row.text.clone(),
                    expected,
                    found: row.values[6],
                });
            }
        } else {
            summary.successes += 1;
        }
        if diff > summary.max_difference {
            summary.max_difference = diff;
        }
    }

    summary.last_verified = chunk.pop().map(|row| row.text);
    chunk.clear();
    tracing::debug!(verified = summary.successes + summary.errors, "chunk verified");
}
