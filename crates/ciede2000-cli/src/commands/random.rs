//! Random test-vector command

use crate::RandomArgs;
use anyhow::{Context, Result};
use ciede2000_tests::generator::Rounding;
use ciede2000_tests::{GeneratorConfig, VectorGenerator};

pub fn run(args: RandomArgs, verbose: u8) -> Result<()> {
    let mut config = GeneratorConfig::default();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if !args.rounding.is_empty() {
        let roundings: Vec<Rounding> = args.rounding.iter().map(|&r| r.into()).collect();
        config = config.with_roundings(&roundings);
    }

    let mut generator = VectorGenerator::new(config);
    let output = super::open_output(args.output.as_deref())?;
    generator
        .write_csv(args.count, output)
        .context("Failed to write vectors")?;

    tracing::info!(count = args.count, seed = generator.seed(), "vectors written");
    if verbose > 0 {
        eprintln!("Wrote {} rows (seed {})", args.count, generator.seed());
    }
    Ok(())
}
