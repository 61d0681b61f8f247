//! Reference implementation wrappers
//!
//! Provides unified interfaces to ΔE2000 implementations that share no code
//! with `ciede2000-core`, for cross-checking its output.

use crate::parity::ReferenceImpl;
use ciede2000_core::{Ciede2000, HueMeanConvention, LabPair};
use palette::color_difference::Ciede2000 as _;
use palette::Lab;
use palette::white_point::D65;

/// ΔE2000 computed by the `palette` crate
///
/// `palette` applies the unconditional `+180°` mean-hue correction, so it is
/// comparable with [`HueMeanConvention::Lindbloom`].
pub fn delta_e_palette(pair: &LabPair) -> f64 {
    let reference: Lab<D65, f64> = Lab::new(pair.reference.l, pair.reference.a, pair.reference.b);
    let sample: Lab<D65, f64> = Lab::new(pair.sample.l, pair.sample.a, pair.sample.b);
    reference.difference(sample)
}

/// ΔE2000 following the step-by-step published formulation
///
/// Works in degrees with explicit C', h', Δh', H̄', S_L, S_C, S_H and R_T
/// terms, special-casing zero chroma. Only the mean-hue convention and the
/// near-180° snapping are shared with the kernel in `ciede2000-core`.
pub fn delta_e_textbook(pair: &LabPair, convention: HueMeanConvention) -> f64 {
    let [l1, a1, b1] = pair.reference.to_array();
    let [l2, a2, b2] = pair.sample.to_array();

    // Parametric weighting factors
    let k_l = 1.0;
    let k_c = 1.0;
    let k_h = 1.0;

    // Calculate C* (chroma)
    let c1 = (a1 * a1 + b1 * b1).sqrt();
    let c2 = (a2 * a2 + b2 * b2).sqrt();
    let c_avg = (c1 + c2) / 2.0;

    // Calculate G (adjustment factor for a*)
    let c_avg_pow7 = c_avg.powi(7);
    let g = 0.5 * (1.0 - (c_avg_pow7 / (c_avg_pow7 + 25.0_f64.powi(7))).sqrt());

    // Adjusted a* values
    let a1_prime = a1 * (1.0 + g);
    let a2_prime = a2 * (1.0 + g);

    // Calculate C'
    let c1_prime = (a1_prime * a1_prime + b1 * b1).sqrt();
    let c2_prime = (a2_prime * a2_prime + b2 * b2).sqrt();
    let c_avg_prime = (c1_prime + c2_prime) / 2.0;

    // Calculate h' (hue angle)
    let h1_prime = hue_degrees(a1_prime, b1);
    let h2_prime = hue_degrees(a2_prime, b2);

    // Same rounding window as the kernel, in degrees
    let mut abs_diff = (h1_prime - h2_prime).abs();
    if (abs_diff - 180.0).abs() < 1e-14_f64.to_degrees() {
        abs_diff = 180.0;
    }

    // Calculate delta h'
    let delta_h_prime = if c1_prime * c2_prime == 0.0 {
        0.0
    } else {
        let diff = h2_prime - h1_prime;
        if abs_diff <= 180.0 {
            diff
        } else if diff > 180.0 {
            diff - 360.0
        } else {
            diff + 360.0
        }
    };

    // Calculate Delta H'
    let delta_h_prime_big =
        2.0 * (c1_prime * c2_prime).sqrt() * (delta_h_prime.to_radians() / 2.0).sin();

    // Calculate H' average
    let h_avg_prime = if c1_prime * c2_prime == 0.0 {
        h1_prime + h2_prime
    } else if abs_diff <= 180.0 {
        (h1_prime + h2_prime) / 2.0
    } else {
        match convention {
            HueMeanConvention::Lindbloom => (h1_prime + h2_prime + 360.0) / 2.0,
            HueMeanConvention::Sharma if h1_prime + h2_prime < 360.0 => {
                (h1_prime + h2_prime + 360.0) / 2.0
            }
            HueMeanConvention::Sharma => (h1_prime + h2_prime - 360.0) / 2.0,
        }
    };

    // Calculate T
    let t = 1.0 - 0.17 * (h_avg_prime - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_avg_prime).to_radians().cos()
        + 0.32 * (3.0 * h_avg_prime + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_avg_prime - 63.0).to_radians().cos();

    // Calculate delta L', delta C'
    let delta_l_prime = l2 - l1;
    let delta_c_prime = c2_prime - c1_prime;

    // Calculate L' average
    let l_avg_prime = (l1 + l2) / 2.0;

    // Calculate S_L, S_C, S_H
    let l_avg_minus_50_sq = (l_avg_prime - 50.0).powi(2);
    let s_l = 1.0 + (0.015 * l_avg_minus_50_sq) / (20.0 + l_avg_minus_50_sq).sqrt();
    let s_c = 1.0 + 0.045 * c_avg_prime;
    let s_h = 1.0 + 0.015 * c_avg_prime * t;

    // Calculate R_T (rotation function)
    let delta_theta = 30.0 * (-((h_avg_prime - 275.0) / 25.0).powi(2)).exp();
    let c_avg_prime_pow7 = c_avg_prime.powi(7);
    let r_c = 2.0 * (c_avg_prime_pow7 / (c_avg_prime_pow7 + 25.0_f64.powi(7))).sqrt();
    let r_t = -r_c * (2.0 * delta_theta.to_radians()).sin();

    // Calculate final deltaE2000
    let term1 = delta_l_prime / (k_l * s_l);
    let term2 = delta_c_prime / (k_c * s_c);
    let term3 = delta_h_prime_big / (k_h * s_h);

    (term1 * term1 + term2 * term2 + term3 * term3 + r_t * term2 * term3).sqrt()
}

/// h' in degrees, 0..360, with h' = 0 for a' = b = 0
fn hue_degrees(a_prime: f64, b: f64) -> f64 {
    if a_prime == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a_prime).to_degrees();
    if h < 0.0 { h + 360.0 } else { h }
}

/// Evaluate a pair with the named reference implementation
pub fn evaluate(reference: ReferenceImpl, pair: &LabPair) -> f64 {
    match reference {
        ReferenceImpl::Palette => delta_e_palette(pair),
        ReferenceImpl::Textbook => delta_e_textbook(pair, HueMeanConvention::Lindbloom),
        ReferenceImpl::Sharma => Ciede2000::new()
            .with_convention(HueMeanConvention::Sharma)
            .difference(pair.reference, pair.sample),
    }
}
