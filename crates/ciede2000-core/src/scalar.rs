//! Floating-point abstraction for the ΔE2000 kernel
//!
//! The kernel is written once and evaluated in either `f32` or `f64`.
//! Constants are spelled as `f64` literals and narrowed through [`Scalar::lit`],
//! so both precisions see the same decimal values.

use num_traits::{Float, FloatConst};

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating-point type the kernel can run in
pub trait Scalar: Float + FloatConst + private::Sealed {
    /// Convert an `f64` literal to this precision
    fn lit(v: f64) -> Self;
}

impl Scalar for f32 {
    #[inline(always)]
    fn lit(v: f64) -> Self {
        v as f32
    }
}

impl Scalar for f64 {
    #[inline(always)]
    fn lit(v: f64) -> Self {
        v
    }
}

/// x⁷ by repeated multiplication
///
/// `powi` may be lowered differently across targets; six multiplications
/// in a fixed order are bit-reproducible.
#[inline(always)]
pub(crate) fn pow7<T: Scalar>(x: T) -> T {
    x * x * x * x * x * x * x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow7_matches_powi_for_small_integers() {
        for i in 0..20 {
            let x = i as f64;
            assert_eq!(pow7(x), x.powi(7));
        }
    }

    #[test]
    fn test_lit_f32_narrows() {
        assert_eq!(<f32 as Scalar>::lit(0.5), 0.5f32);
        assert_eq!(<f64 as Scalar>::lit(6103515625.0), 6103515625.0);
    }
}
