//! # ciede2000 - CIEDE2000 color difference
//!
//! A pure, stateless implementation of the CIE ΔE2000 perceptual color
//! difference between two L*a*b* colors.
//!
//! ## Goals
//!
//! - **Reproducible**: fixed operation order and constants, so results agree
//!   with independent implementations in other languages to about 1e-10
//! - **Explicit**: one named mean-hue convention per evaluation, never a mix
//! - **Total**: no error path for finite inputs, no allocation, no state
//!
//! ## Quick Start
//!
//! ```
//! use ciede2000_core::{Lab, delta_e_2000};
//!
//! let de = delta_e_2000(4.6495, 57.5, -52.142, 9.8849, 74.4788, -92.0);
//! assert!((de - 11.09285729741).abs() < 1e-9);
//!
//! let reference = Lab::new(38.13, -29.1972, -25.5468);
//! let sample = Lab::new(38.159, -29.1972, -25.5468);
//! assert!((reference.delta_e(&sample) - 0.02486308193).abs() < 1e-9);
//! ```

pub mod ciede2000;
pub mod color;
pub mod error;
mod scalar;

pub use ciede2000::{Ciede2000, HueMeanConvention, ParametricFactors, delta_e_2000, delta_e_2000_f32};
pub use color::{Lab, LabPair, parse_fields};
pub use error::{Error, Result};
pub use scalar::Scalar;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_non_negative(
            l1 in -10.0f64..110.0, a1 in -160.0f64..160.0, b1 in -160.0f64..160.0,
            l2 in -10.0f64..110.0, a2 in -160.0f64..160.0, b2 in -160.0f64..160.0
        ) {
            let de = delta_e_2000(l1, a1, b1, l2, a2, b2);
            prop_assert!(de.is_finite());
            prop_assert!(de >= 0.0);
        }

        #[test]
        fn prop_extreme_chroma_finite(
            l1 in -10.0f64..110.0, a1 in -1e250f64..1e250, b1 in -1e250f64..1e250,
            l2 in -10.0f64..110.0, a2 in -1e250f64..1e250, b2 in -1e250f64..1e250
        ) {
            let de = delta_e_2000(l1, a1, b1, l2, a2, b2);
            prop_assert!(de.is_finite() && de >= 0.0, "{}", de);
            prop_assert_eq!(delta_e_2000(l1, a1, b1, l1, a1, b1), 0.0);
        }

        #[test]
        fn prop_identical_is_zero(l in 0.0f64..100.0, a in -128.0f64..127.0, b in -128.0f64..127.0) {
            prop_assert!(delta_e_2000(l, a, b, l, a, b) < 1e-9);
        }

        #[test]
        fn prop_swap_symmetric(
            l1 in 0.0f64..100.0, a1 in -128.0f64..127.0, b1 in -128.0f64..127.0,
            l2 in 0.0f64..100.0, a2 in -128.0f64..127.0, b2 in -128.0f64..127.0
        ) {
            let forward = delta_e_2000(l1, a1, b1, l2, a2, b2);
            let backward = delta_e_2000(l2, a2, b2, l1, a1, b1);
            prop_assert!((forward - backward).abs() < 1e-9, "{} vs {}", forward, backward);
        }

        #[test]
        fn prop_conventions_within_tolerance(
            l1 in 0.0f64..100.0, a1 in -128.0f64..127.0, b1 in -128.0f64..127.0,
            l2 in 0.0f64..100.0, a2 in -128.0f64..127.0, b2 in -128.0f64..127.0
        ) {
            let reference = Lab::new(l1, a1, b1);
            let sample = Lab::new(l2, a2, b2);
            let lindbloom = Ciede2000::new().difference(reference, sample);
            let sharma = Ciede2000::new()
                .with_convention(HueMeanConvention::Sharma)
                .difference(reference, sample);
            prop_assert!((lindbloom - sharma).abs() < 1e-3);
        }

        #[test]
        fn prop_pair_row_parses_back(
            l1 in 0.0f64..100.0, a1 in -128.0f64..127.0, b1 in -128.0f64..127.0,
            l2 in 0.0f64..100.0, a2 in -128.0f64..127.0, b2 in -128.0f64..127.0
        ) {
            let row = format!("{},{},{},{},{},{}", l1, a1, b1, l2, a2, b2);
            let pair: LabPair = row.parse().unwrap();
            prop_assert_eq!(pair.to_array(), [l1, a1, b1, l2, a2, b2]);
        }
    }
}
