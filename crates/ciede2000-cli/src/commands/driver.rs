//! CSV batch driver command

use crate::DriverArgs;
use anyhow::{Context, Result};
use ciede2000_tests::run_driver;
use std::time::Instant;

pub fn run(args: DriverArgs, verbose: u8) -> Result<()> {
    let input = super::open_input(&args.input)?;
    let output = super::open_output(args.output.as_deref())?;

    let start = Instant::now();
    let summary = run_driver(input, output)
        .with_context(|| format!("Driver failed on {}", args.input.display()))?;

    if verbose > 0 {
        eprintln!(
            "Processed {} rows, skipped {} in {:.3}s",
            summary.processed,
            summary.skipped,
            start.elapsed().as_secs_f64()
        );
    }
    Ok(())
}
