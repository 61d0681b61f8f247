//! CIELAB (L*a*b*) coordinates
//!
//! - L*: Lightness (0 = black, 100 = white)
//! - a*: Green-red axis (negative = green, positive = red)
//! - b*: Blue-yellow axis (negative = blue, positive = yellow)
//!
//! Values outside the nominal ranges are kept as given; ΔE2000 is defined
//! over all finite reals.

use crate::ciede2000::delta_e_2000;
use serde::{Deserialize, Serialize};

/// CIELAB color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Lab {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Green-red axis (typically -128 to 127)
    pub a: f64,
    /// Blue-yellow axis (typically -128 to 127)
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Create Lab from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            l: arr[0],
            a: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Chroma C*ab, before the ΔE2000 a* stretch
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Hue angle in radians (-π to π)
    #[inline]
    pub fn hue(&self) -> f64 {
        self.b.atan2(self.a)
    }

    /// Hue angle in degrees (0-360)
    #[inline]
    pub fn hue_degrees(&self) -> f64 {
        let h = self.hue().to_degrees();
        if h < 0.0 { h + 360.0 } else { h }
    }

    /// All three coordinates finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.l.is_finite() && self.a.is_finite() && self.b.is_finite()
    }

    /// ΔE2000 from `self` (reference) to `other` (sample)
    #[inline]
    pub fn delta_e(&self, other: &Self) -> f64 {
        delta_e_2000(self.l, self.a, self.b, other.l, other.a, other.b)
    }
}

impl From<[f64; 3]> for Lab {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Lab> for [f64; 3] {
    fn from(lab: Lab) -> Self {
        lab.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_chroma() {
        let lab = Lab::new(50.0, 3.0, 4.0);
        assert!((lab.chroma() - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_hue() {
        let lab = Lab::new(50.0, 1.0, 0.0);
        assert!(lab.hue().abs() < EPSILON);

        let lab = Lab::new(50.0, 0.0, 1.0);
        assert!((lab.hue() - std::f64::consts::FRAC_PI_2).abs() < EPSILON);
    }

    #[test]
    fn test_hue_degrees_wraps_negative() {
        let lab = Lab::new(50.0, 0.0, -1.0);
        assert!((lab.hue_degrees() - 270.0).abs() < EPSILON);
    }

    #[test]
    fn test_delta_e_identical() {
        let lab = Lab::new(50.0, 25.0, -30.0);
        assert!(lab.delta_e(&lab) < EPSILON, "Identical colors should have ΔE=0");
    }

    #[test]
    fn test_delta_e_perceptible() {
        let red = Lab::new(50.0, 50.0, 0.0);
        let green = Lab::new(50.0, -50.0, 0.0);
        assert!(red.delta_e(&green) > 50.0);
    }

    #[test]
    fn test_array_conversions() {
        let lab: Lab = [12.5, -3.0, 7.25].into();
        let arr: [f64; 3] = lab.into();
        assert_eq!(arr, [12.5, -3.0, 7.25]);
    }

    #[test]
    fn test_is_finite() {
        assert!(Lab::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Lab::new(1.0, f64::INFINITY, 3.0).is_finite());
    }
}
