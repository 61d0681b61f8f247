//! Invariants of ΔE2000 over the structured edge-case patterns

use ciede2000_core::{Ciede2000, HueMeanConvention, Lab, LabPair, delta_e_2000};
use ciede2000_tests::patterns::{LabPattern, generate_pattern, sizes};
use std::f64::consts::PI;

fn conventions() -> [Ciede2000; 2] {
    [
        Ciede2000::new(),
        Ciede2000::new().with_convention(HueMeanConvention::Sharma),
    ]
}

#[test]
fn test_finite_and_non_negative() {
    for pattern in LabPattern::ALL {
        for ciede in conventions() {
            for pair in generate_pattern(pattern, sizes::MEDIUM) {
                let de = ciede.difference(pair.reference, pair.sample);
                assert!(de.is_finite(), "{:?}: non-finite ΔE for {:?}", pattern, pair.to_array());
                assert!(de >= 0.0, "{:?}: negative ΔE {} for {:?}", pattern, de, pair.to_array());
            }
        }
    }
}

#[test]
fn test_symmetric_under_swap() {
    for pattern in LabPattern::ALL {
        for ciede in conventions() {
            for pair in generate_pattern(pattern, sizes::SMALL) {
                let forward = ciede.difference(pair.reference, pair.sample);
                let backward = ciede.difference(pair.sample, pair.reference);
                assert!(
                    (forward - backward).abs() < 1e-12,
                    "{:?} ({}): {} vs {} for {:?}",
                    pattern,
                    ciede.convention,
                    forward,
                    backward,
                    pair.to_array()
                );
            }
        }
    }
}

#[test]
fn test_identical_is_zero() {
    for pair in generate_pattern(LabPattern::Identical, sizes::MEDIUM) {
        assert_eq!(pair.delta_e(), 0.0, "{:?}", pair.reference);
    }
}

#[test]
fn test_achromatic_reduces_to_lightness_term() {
    // With a = b = 0 only the S_L-weighted lightness difference is left
    for pair in generate_pattern(LabPattern::Achromatic, sizes::SMALL) {
        let (l1, l2) = (pair.reference.l, pair.sample.l);
        let l_mean = (l1 + l2) / 2.0;
        let x = (l_mean - 50.0).powi(2);
        let s_l = 1.0 + 0.015 * x / (20.0 + x).sqrt();
        let expected = ((l2 - l1) / s_l).abs();
        assert!((pair.delta_e() - expected).abs() < 1e-12, "{:?}", pair.to_array());
    }
}

#[test]
fn test_lightness_ramp_is_smooth() {
    let values: Vec<f64> = generate_pattern(LabPattern::LightnessRamp, sizes::MEDIUM)
        .iter()
        .map(LabPair::delta_e)
        .collect();
    for window in values.windows(2) {
        assert!((window[0] - window[1]).abs() < 1e-3, "{:?}", window);
    }
}

#[test]
fn test_near_opposite_hues_are_continuous() {
    // Offsets of a few ulps around a half turn must not split into two branches
    let reference = Lab::new(50.0, 20.0, 0.0);
    let exact = delta_e_2000(50.0, 20.0, 0.0, 55.0, -20.0, 0.0);
    for offset in [1e-15, -1e-15, 5e-15, -5e-15] {
        let hue = PI + offset;
        let sample = Lab::new(55.0, 20.0 * hue.cos(), 20.0 * hue.sin());
        for ciede in conventions() {
            let nudged = ciede.difference(reference, sample);
            assert!((nudged - exact).abs() < 1e-9, "offset {:e}: {} vs {}", offset, nudged, exact);
        }
    }
}

#[test]
fn test_mirrored_pairs_ignore_convention() {
    // Exactly opposite hues take the snapped branch, where the mean hue is never shifted
    for pair in generate_pattern(LabPattern::Mirrored, sizes::SMALL) {
        let [lindbloom, sharma] = conventions().map(|c| c.difference(pair.reference, pair.sample));
        assert_eq!(lindbloom, sharma, "{:?}", pair.to_array());
    }
}
