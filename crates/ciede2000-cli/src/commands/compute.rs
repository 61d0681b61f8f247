//! One-off ΔE2000 evaluation

use crate::ComputeArgs;
use anyhow::{Result, bail};
use ciede2000_core::{Ciede2000, HueMeanConvention, Lab, ParametricFactors};
use serde::Serialize;

#[derive(Serialize)]
struct ComputeReport {
    reference: Lab,
    sample: Lab,
    convention: HueMeanConvention,
    factors: ParametricFactors,
    precision: &'static str,
    delta_e: f64,
}

pub fn run(args: ComputeArgs) -> Result<()> {
    let [l1, a1, b1, l2, a2, b2] = <[f64; 6]>::try_from(args.values.as_slice())
        .map_err(|_| anyhow::anyhow!("expected 6 values, got {}", args.values.len()))?;
    if [args.kl, args.kc, args.kh].iter().any(|k| !k.is_finite() || *k <= 0.0) {
        bail!("parametric factors must be positive: kl={} kc={} kh={}", args.kl, args.kc, args.kh);
    }

    let ciede = Ciede2000::new()
        .with_convention(args.convention.into())
        .with_factors(ParametricFactors::new(args.kl, args.kc, args.kh));
    let reference = Lab::new(l1, a1, b1);
    let sample = Lab::new(l2, a2, b2);

    let (delta_e, precision) = if args.single {
        let de = ciede.difference_f32(
            [l1 as f32, a1 as f32, b1 as f32],
            [l2 as f32, a2 as f32, b2 as f32],
        );
        (f64::from(de), "f32")
    } else {
        (ciede.difference(reference, sample), "f64")
    };
    tracing::debug!(convention = %ciede.convention, precision, delta_e, "computed");

    if args.json {
        return super::print_json(&ComputeReport {
            reference,
            sample,
            convention: ciede.convention,
            factors: ciede.factors,
            precision,
            delta_e,
        });
    }

    println!("{}", delta_e);
    Ok(())
}
