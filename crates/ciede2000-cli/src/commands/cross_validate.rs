//! Cross-implementation parity command

use crate::CrossValidateArgs;
use anyhow::{Result, bail};
use ciede2000_tests::CrossValidation;

pub fn run(args: CrossValidateArgs, verbose: u8) -> Result<()> {
    let mut validation = CrossValidation::new(args.reference).with_count(args.count);
    if let Some(seed) = args.seed {
        validation = validation.with_seed(seed);
    }
    if let Some(threshold) = args.threshold {
        validation = validation.with_threshold(threshold);
    }

    let result = validation.run();

    if args.json {
        super::print_json(&result)?;
    } else {
        println!("Comparing against {} on {} pairs (seed {})", result.reference, result.stats.count, result.seed);
        println!("  Max divergence:  {:e}", result.stats.max);
        println!("  Mean divergence: {:e}", result.stats.mean);
        println!("  P95 divergence:  {:e}", result.stats.p95);
        if result.non_finite > 0 {
            println!("  Non-finite:      {}", result.non_finite);
        }
        if let Some(worst) = result.worst.as_ref().filter(|_| verbose > 0 || !result.passed) {
            let [l1, a1, b1, l2, a2, b2] = worst.pair.to_array();
            println!("  Worst case:      {},{},{},{},{},{}", l1, a1, b1, l2, a2, b2);
            println!("    ours {} vs {} {}", worst.ours, result.reference, worst.theirs);
        }
    }

    if !result.passed {
        bail!("FAIL: max divergence {:e} exceeds threshold {:e}", result.stats.max, result.threshold);
    }
    if !args.json {
        println!("PASS");
    }
    Ok(())
}
