//! CIEDE2000 color difference
//!
//! The formula is evaluated in a fixed operation order with fixed constants,
//! so independent implementations in other languages agree with this one to
//! about 1e-10 on ΔE. Two places matter most for that agreement:
//!
//! - the hue difference is snapped to exactly π when it lies within 1e-14 of
//!   π, so that `atan2` rounding cannot push a pair of opposite hues into the
//!   quadrant-correction branch in one implementation and not in another;
//! - the mean-hue correction follows one named [`HueMeanConvention`], never a
//!   mix of the two published variants.
//!
//! Angles are handled in radians throughout. 25⁷ is written out as
//! `6103515625.0`.

use crate::color::Lab;
use crate::scalar::{Scalar, pow7};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 25⁷
const TWENTY_FIVE_POW_7: f64 = 6103515625.0;

/// Half-width of the window around π in which the hue difference is snapped
const PI_SNAP_EPSILON: f64 = 1e-14;

/// Rule for correcting the mean hue when the two hues are more than π apart
///
/// The two variants differ by up to about 3e-4 in ΔE, only for pairs whose
/// hues straddle the 0/2π boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HueMeanConvention {
    /// `h_m += π` unconditionally
    ///
    /// Bruce Lindbloom's tables, Netflix VMAF and the `palette` crate.
    #[default]
    Lindbloom,
    /// `h_m += π` below π, `h_m -= π` otherwise
    ///
    /// Gaurav Sharma's reference formulation and OpenJDK.
    Sharma,
}

impl fmt::Display for HueMeanConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HueMeanConvention::Lindbloom => write!(f, "lindbloom"),
            HueMeanConvention::Sharma => write!(f, "sharma"),
        }
    }
}

/// Parametric weighting factors k_L, k_C, k_H
///
/// All three are 1 under reference viewing conditions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParametricFactors {
    /// Lightness weight
    pub k_l: f64,
    /// Chroma weight
    pub k_c: f64,
    /// Hue weight
    pub k_h: f64,
}

impl ParametricFactors {
    /// k_L = k_C = k_H = 1
    pub const REFERENCE: Self = Self {
        k_l: 1.0,
        k_c: 1.0,
        k_h: 1.0,
    };

    pub const fn new(k_l: f64, k_c: f64, k_h: f64) -> Self {
        Self { k_l, k_c, k_h }
    }

    /// k_L = 2, commonly used for textiles
    pub const fn textiles() -> Self {
        Self::new(2.0, 1.0, 1.0)
    }
}

impl Default for ParametricFactors {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Configured ΔE2000 evaluator
///
/// ```
/// use ciede2000_core::{Ciede2000, HueMeanConvention, Lab};
///
/// let de = Ciede2000::new()
///     .with_convention(HueMeanConvention::Sharma)
///     .difference(Lab::new(93.1, 39.1, -1.8), Lab::new(93.6, 33.8, 1.8));
/// assert!((de - 2.9146004027).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ciede2000 {
    pub factors: ParametricFactors,
    pub convention: HueMeanConvention,
}

impl Ciede2000 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_factors(mut self, factors: ParametricFactors) -> Self {
        self.factors = factors;
        self
    }

    pub fn with_convention(mut self, convention: HueMeanConvention) -> Self {
        self.convention = convention;
        self
    }

    /// ΔE2000 between two Lab colors in double precision
    #[inline]
    pub fn difference(&self, reference: Lab, sample: Lab) -> f64 {
        kernel(
            [reference.l, reference.a, reference.b],
            [sample.l, sample.a, sample.b],
            self.factors,
            self.convention,
        )
    }

    /// ΔE2000 evaluated entirely in single precision
    #[inline]
    pub fn difference_f32(&self, reference: [f32; 3], sample: [f32; 3]) -> f32 {
        kernel(reference, sample, self.factors, self.convention)
    }
}

/// ΔE2000 between (L1, a1, b1) and (L2, a2, b2)
///
/// Uses k_L = k_C = k_H = 1 and the [`HueMeanConvention::Lindbloom`] mean-hue
/// correction. L ranges over 0..=100; a and b are unbounded and usually
/// within -128..=127. The result is non-negative and at most about 185 for
/// in-gamut colors. Non-finite inputs yield NaN.
///
/// ```
/// use ciede2000_core::delta_e_2000;
///
/// let de = delta_e_2000(19.9, 115.3644, 13.3, 68.258, -120.0, 49.8956);
/// assert!((de - 123.1230776496).abs() < 1e-9);
/// ```
#[inline]
pub fn delta_e_2000(l1: f64, a1: f64, b1: f64, l2: f64, a2: f64, b2: f64) -> f64 {
    kernel(
        [l1, a1, b1],
        [l2, a2, b2],
        ParametricFactors::REFERENCE,
        HueMeanConvention::Lindbloom,
    )
}

/// Single-precision [`delta_e_2000`]
///
/// Typically within ±2e-4 of the double-precision result.
#[inline]
pub fn delta_e_2000_f32(l1: f32, a1: f32, b1: f32, l2: f32, a2: f32, b2: f32) -> f32 {
    kernel(
        [l1, a1, b1],
        [l2, a2, b2],
        ParametricFactors::REFERENCE,
        HueMeanConvention::Lindbloom,
    )
}

/// sqrt(c⁷ / (c⁷ + 25⁷)) given c⁷, which tends to 1 once c⁷ overflows
#[inline(always)]
fn chroma_weight<T: Scalar>(c_pow7: T, pow_25_7: T) -> T {
    if c_pow7.is_infinite() {
        return T::one();
    }
    (c_pow7 / (c_pow7 + pow_25_7)).sqrt()
}

fn kernel<T: Scalar>(
    [l1, a1, b1]: [T; 3],
    [l2, a2, b2]: [T; 3],
    factors: ParametricFactors,
    convention: HueMeanConvention,
) -> T {
    let pi = T::PI();
    let one = T::one();
    let two = T::lit(2.0);
    let half = T::lit(0.5);
    let pow_25_7 = T::lit(TWENTY_FIVE_POW_7);

    // G, the a* stretch, from the mean raw chroma
    let mut n = (a1.hypot(b1) + a2.hypot(b2)) * half;
    n = pow7(n);
    let g = one + half * (one - chroma_weight(n, pow_25_7));

    let c1 = (a1 * g).hypot(b1);
    let c2 = (a2 * g).hypot(b2);

    let mut h1 = b1.atan2(a1 * g);
    let mut h2 = b2.atan2(a2 * g);
    if h1 < T::zero() {
        h1 = h1 + two * pi;
    }
    if h2 < T::zero() {
        h2 = h2 + two * pi;
    }

    n = (h2 - h1).abs();
    let eps = T::lit(PI_SNAP_EPSILON);
    if pi - eps < n && n < pi + eps {
        n = pi;
    }

    let mut h_m = (h1 + h2) * half;
    let mut h_d = (h2 - h1) * half;
    if pi < n {
        if T::zero() < h_d {
            h_d = h_d - pi;
        } else {
            h_d = h_d + pi;
        }
        h_m = match convention {
            HueMeanConvention::Lindbloom => h_m + pi,
            HueMeanConvention::Sharma if h_m < pi => h_m + pi,
            HueMeanConvention::Sharma => h_m - pi,
        };
    }

    // Rotation term, significant only in the blue region
    let p = T::lit(36.0) * h_m - T::lit(55.0) * pi;
    n = pow7((c1 + c2) * half);
    let r_t = -two
        * chroma_weight(n, pow_25_7)
        * (pi / T::lit(3.0) * (p * p / (T::lit(-25.0) * pi * pi)).exp()).sin();

    n = (l1 + l2) * half;
    n = (n - T::lit(50.0)) * (n - T::lit(50.0));
    let l = (l2 - l1)
        / (T::lit(factors.k_l) * (one + T::lit(0.015) * n / (T::lit(20.0) + n).sqrt()));

    let t = one + T::lit(0.24) * (two * h_m + pi * half).sin()
        + T::lit(0.32) * (T::lit(3.0) * h_m + T::lit(8.0) * pi / T::lit(15.0)).sin()
        - T::lit(0.17) * (h_m + pi / T::lit(3.0)).sin()
        - T::lit(0.20) * (T::lit(4.0) * h_m + T::lit(3.0) * pi / T::lit(20.0)).sin();

    n = c1 + c2;
    // C1·C2 overflows before either chroma does
    let mut root_c1_c2 = (c1 * c2).sqrt();
    if root_c1_c2.is_infinite() {
        root_c1_c2 = c1.sqrt() * c2.sqrt();
    }
    let h = two * root_c1_c2 * h_d.sin()
        / (T::lit(factors.k_h) * (one + T::lit(0.0075) * n * t));
    let c = (c2 - c1) / (T::lit(factors.k_c) * (one + T::lit(0.0225) * n));

    (l * l + h * h + c * c + c * h * r_t).sqrt()
}
