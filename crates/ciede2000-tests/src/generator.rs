//! Random L*a*b* test vectors
//!
//! Values are drawn uniformly (L in 0..=100, a and b in -128..=128) and then
//! each value is independently snapped to one of the configured
//! [`Rounding`] modes. Integer and one-decimal snapping produce the
//! degenerate cases that matter for ΔE2000: equal channels, zero chroma and
//! mirrored hues.

use crate::csv::format_delta_e;
use ciede2000_core::{Lab, LabPair, Result};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::io::Write;
use std::ops::RangeInclusive;

/// Precision a generated value is snapped to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Nearest integer
    Integer,
    /// Nearest 0.1
    OneDecimal,
    /// Nearest 0.01
    TwoDecimals,
    /// Full double precision
    Raw,
}

impl Rounding {
    /// Every mode, in the mix used by the CSV generator
    pub const ALL: [Rounding; 4] = [
        Rounding::Integer,
        Rounding::OneDecimal,
        Rounding::TwoDecimals,
        Rounding::Raw,
    ];

    #[inline]
    pub fn apply(self, v: f64) -> f64 {
        match self {
            Rounding::Integer => v.round(),
            Rounding::OneDecimal => (v * 10.0).round() / 10.0,
            Rounding::TwoDecimals => (v * 100.0).round() / 100.0,
            Rounding::Raw => v,
        }
    }
}

/// Generator settings
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for reproducible output; `None` draws one from the OS
    pub seed: Option<u64>,
    /// Rounding modes picked from uniformly per value
    pub roundings: Vec<Rounding>,
    /// Lightness range
    pub l_range: RangeInclusive<f64>,
    /// Range shared by a* and b*
    pub ab_range: RangeInclusive<f64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            roundings: Rounding::ALL.to_vec(),
            l_range: 0.0..=100.0,
            ab_range: -128.0..=128.0,
        }
    }
}

impl GeneratorConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_roundings(mut self, roundings: &[Rounding]) -> Self {
        self.roundings = roundings.to_vec();
        self
    }

    /// Unrounded values only, for comparing continuous inputs
    pub fn continuous(self) -> Self {
        self.with_roundings(&[Rounding::Raw])
    }
}

/// Seeded source of random color pairs
pub struct VectorGenerator {
    rng: ChaCha8Rng,
    config: GeneratorConfig,
    seed: u64,
}

impl VectorGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        tracing::debug!(seed, roundings = ?config.roundings, "vector generator seeded");
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            config,
            seed,
        }
    }

    /// Seed actually in use, so an unseeded run can be replayed
    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn value(&mut self, range: RangeInclusive<f64>) -> f64 {
        let v = self.rng.gen_range(range);
        match self.config.roundings.choose(&mut self.rng) {
            Some(rounding) => rounding.apply(v),
            None => v,
        }
    }

    fn lab(&mut self) -> Lab {
        let l = self.value(self.config.l_range.clone());
        let a = self.value(self.config.ab_range.clone());
        let b = self.value(self.config.ab_range.clone());
        Lab::new(l, a, b)
    }

    /// Next random pair
    pub fn next_pair(&mut self) -> LabPair {
        let reference = self.lab();
        let sample = self.lab();
        LabPair::new(reference, sample)
    }

    /// `count` random pairs
    pub fn pairs(&mut self, count: usize) -> Vec<LabPair> {
        (0..count).map(|_| self.next_pair()).collect()
    }

    /// Write `count` rows of `L1,a1,b1,L2,a2,b2,ΔE`
    pub fn write_csv<W: Write>(&mut self, count: usize, mut out: W) -> Result<()> {
        for _ in 0..count {
            let pair = self.next_pair();
            let [l1, a1, b1, l2, a2, b2] = pair.to_array();
            writeln!(
                out,
                "{},{},{},{},{},{},{}",
                l1,
                a1,
                b1,
                l2,
                a2,
                b2,
                format_delta_e(pair.delta_e())
            )?;
        }
        out.flush()?;
        Ok(())
    }
}

impl Iterator for VectorGenerator {
    type Item = LabPair;

    fn next(&mut self) -> Option<LabPair> {
        Some(self.next_pair())
    }
}
