//! Test pattern generation
//!
//! Structured color pairs aimed at the numerically delicate parts of
//! ΔE2000: zero chroma, opposite hues, the 0/2π hue seam and the blue
//! region where the rotation term peaks.

use ciede2000_core::{Lab, LabPair};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::f64::consts::{PI, TAU};

/// Test pattern types
#[derive(Debug, Clone, Copy)]
pub enum LabPattern {
    /// Reference and sample equal
    Identical,
    /// Both colors on the neutral axis (a = b = 0)
    Achromatic,
    /// Sample is the reference with a and b negated
    Mirrored,
    /// Sample hue rotated by half a turn plus or minus a tiny offset
    NearOpposite,
    /// Hue pairs placed on either side of the 0/2π seam
    HueSeam,
    /// Mean hue swept through the blue region around 275°
    BlueRegion,
    /// Lightness-only differences across the L range
    LightnessRamp,
    /// Uniform random pairs with seed
    Random(u64),
}

impl LabPattern {
    /// Every deterministic pattern plus one seeded random pattern
    pub const ALL: [LabPattern; 8] = [
        LabPattern::Identical,
        LabPattern::Achromatic,
        LabPattern::Mirrored,
        LabPattern::NearOpposite,
        LabPattern::HueSeam,
        LabPattern::BlueRegion,
        LabPattern::LightnessRamp,
        LabPattern::Random(42),
    ];
}

fn polar(l: f64, chroma: f64, hue: f64) -> Lab {
    Lab::new(l, chroma * hue.cos(), chroma * hue.sin())
}

/// Generate `count` pairs following `pattern`
pub fn generate_pattern(pattern: LabPattern, count: usize) -> Vec<LabPair> {
    let step = |i: usize| i as f64 / count.max(1) as f64;

    match pattern {
        LabPattern::Identical => (0..count)
            .map(|i| {
                let t = step(i);
                let lab = polar(100.0 * t, 128.0 * t, TAU * t);
                LabPair::new(lab, lab)
            })
            .collect(),
        LabPattern::Achromatic => (0..count)
            .map(|i| {
                let t = step(i);
                LabPair::new(Lab::new(100.0 * t, 0.0, 0.0), Lab::new(100.0 * (1.0 - t), 0.0, 0.0))
            })
            .collect(),
        LabPattern::Mirrored => (0..count)
            .map(|i| {
                let t = step(i);
                let lab = polar(50.0, 5.0 + 100.0 * t, TAU * t);
                LabPair::new(lab, Lab::new(lab.l, -lab.a, -lab.b))
            })
            .collect(),
        LabPattern::NearOpposite => (0..count)
            .map(|i| {
                let t = step(i);
                let hue = TAU * t;
                let offset = if i % 2 == 0 { 1e-15 } else { -1e-15 };
                LabPair::new(polar(40.0, 30.0, hue), polar(45.0, 30.0, hue + PI + offset))
            })
            .collect(),
        LabPattern::HueSeam => (0..count)
            .map(|i| {
                let t = step(i);
                let spread = 0.01 + 3.0 * t;
                LabPair::new(polar(60.0, 40.0, -spread / 2.0), polar(62.0, 45.0, spread / 2.0))
            })
            .collect(),
        LabPattern::BlueRegion => (0..count)
            .map(|i| {
                let t = step(i);
                let hue = (230.0 + 90.0 * t).to_radians();
                LabPair::new(polar(35.0, 60.0, hue - 0.05), polar(38.0, 70.0, hue + 0.05))
            })
            .collect(),
        LabPattern::LightnessRamp => (0..count)
            .map(|i| {
                let t = step(i);
                LabPair::new(Lab::new(100.0 * t, 10.0, -10.0), Lab::new(100.0 * t + 1.0, 10.0, -10.0))
            })
            .collect(),
        LabPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut lab = || {
                Lab::new(
                    rng.gen_range(0.0..=100.0),
                    rng.gen_range(-128.0..=127.0),
                    rng.gen_range(-128.0..=127.0),
                )
            };
            (0..count).map(|_| LabPair::new(lab(), lab())).collect()
        }
    }
}

/// Standard pattern sizes
pub mod sizes {
    pub const SMALL: usize = 256;
    pub const MEDIUM: usize = 4096;
}
