//! Fuzz parity between the single-pass kernel and the textbook formulation
//!
//! The two implementations share no arithmetic: the kernel works in radians
//! with the sine form of T, the textbook version in degrees with the cosine
//! form and explicit S_L, S_C, S_H terms. Under the same mean-hue convention
//! they must agree to 1e-10 on any input.

use ciede2000_core::{Ciede2000, HueMeanConvention};
use ciede2000_tests::generator::{GeneratorConfig, VectorGenerator};
use ciede2000_tests::parity::{CrossValidation, ReferenceImpl, compare_pairs};
use ciede2000_tests::patterns::{LabPattern, generate_pattern, sizes};
use ciede2000_tests::reference::delta_e_textbook;
use rayon::prelude::*;

const THRESHOLD: f64 = 1e-10;

#[test]
fn test_fuzz_lindbloom_against_textbook() {
    let result = CrossValidation::new(ReferenceImpl::Textbook)
        .with_count(20_000)
        .with_seed(2000)
        .run();
    assert!(result.passed, "max divergence {:e}", result.stats.max);
    assert!(result.stats.count == 20_000);
}

#[test]
fn test_fuzz_sharma_against_textbook() {
    let pairs = VectorGenerator::new(GeneratorConfig::default().continuous().with_seed(2005)).pairs(10_000);
    let sharma = Ciede2000::new().with_convention(HueMeanConvention::Sharma);

    let max = pairs
        .par_iter()
        .map(|pair| {
            let ours = sharma.difference(pair.reference, pair.sample);
            let theirs = delta_e_textbook(pair, HueMeanConvention::Sharma);
            (ours - theirs).abs()
        })
        .reduce(|| 0.0, f64::max);

    assert!(max < THRESHOLD, "max divergence {:e}", max);
}

#[test]
fn test_edge_patterns_against_textbook() {
    for pattern in LabPattern::ALL {
        let pairs = generate_pattern(pattern, sizes::MEDIUM);
        let comparison = compare_pairs(ReferenceImpl::Textbook, &pairs);
        assert_eq!(comparison.non_finite, 0, "{:?}", pattern);
        assert!(
            comparison.stats.max < THRESHOLD,
            "{:?}: max divergence {:e} at {:?}",
            pattern,
            comparison.stats.max,
            comparison.worst.map(|w| w.pair.to_array())
        );
    }
}

#[test]
fn test_conventions_differ_only_slightly() {
    let result = CrossValidation::new(ReferenceImpl::Sharma)
        .with_count(10_000)
        .with_seed(93)
        .with_threshold(1e-3)
        .run();
    assert!(result.passed, "max divergence {:e}", result.stats.max);
    assert!(!result.is_exact(), "conventions should differ somewhere in 10 000 pairs");
}
