//! Result-file verification command

use crate::VerifyArgs;
use anyhow::{Context, Result, bail};
use ciede2000_tests::{VerifyOptions, verify};

pub fn run(args: VerifyArgs, verbose: u8) -> Result<()> {
    let mut options = if args.single_precision {
        VerifyOptions::single_precision()
    } else {
        VerifyOptions::default()
    };
    if let Some(tolerance) = args.tolerance {
        options = options.with_tolerance(tolerance);
    }
    options = options.with_convention(args.convention.into());

    let input = super::open_input(&args.input)?;
    let summary = verify(input, &options).with_context(|| format!("Failed to verify {}", args.input.display()))?;

    if args.json {
        super::print_json(&summary)?;
    } else {
        println!("Verifying {} (tolerance {:e}, {})", args.input.display(), options.tolerance, options.convention);
        if let Some(last) = &summary.last_verified {
            println!("  Last verified:   {}", last);
        }
        println!("  Successes:       {}", summary.successes);
        println!("  Errors:          {}", summary.errors);
        if summary.skipped > 0 || verbose > 0 {
            println!("  Skipped:         {}", summary.skipped);
        }
        println!("  Max difference:  {:e}", summary.max_difference);
        println!("  Duration:        {:.3}s", summary.duration_secs);
        for example in &summary.examples {
            println!(
                "  line {}: {} (expected {}, diff {:e})",
                example.line,
                example.row,
                example.expected,
                (example.expected - example.found).abs()
            );
        }
    }

    if !summary.passed() {
        bail!("FAIL: {} of {} rows differ by more than {:e}", summary.errors, summary.errors + summary.successes, options.tolerance);
    }
    if !args.json {
        println!("PASS");
    }
    Ok(())
}
