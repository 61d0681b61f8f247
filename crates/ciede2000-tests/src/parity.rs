//! Parity testing framework
//!
//! Compares `ciede2000-core` output against reference implementations on
//! the same random inputs and reports the largest observed divergence.

use crate::accuracy::DivergenceStats;
use crate::generator::{GeneratorConfig, VectorGenerator};
use crate::reference;
use ciede2000_core::LabPair;
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Default agreement threshold between implementations of one convention
pub const DEFAULT_THRESHOLD: f64 = 1e-10;

/// Default threshold against the other mean-hue convention
pub const CONVENTION_THRESHOLD: f64 = 1e-3;

/// Reference ΔE2000 implementation for comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceImpl {
    /// The `palette` crate
    Palette,
    /// Step-by-step formulation in degrees, same convention
    Textbook,
    /// This crate under the other mean-hue convention
    Sharma,
}

impl ReferenceImpl {
    pub const ALL: [ReferenceImpl; 3] = [
        ReferenceImpl::Palette,
        ReferenceImpl::Textbook,
        ReferenceImpl::Sharma,
    ];

    /// Threshold a run against this reference is expected to meet
    pub fn default_threshold(self) -> f64 {
        match self {
            ReferenceImpl::Palette | ReferenceImpl::Textbook => DEFAULT_THRESHOLD,
            ReferenceImpl::Sharma => CONVENTION_THRESHOLD,
        }
    }
}

impl fmt::Display for ReferenceImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceImpl::Palette => write!(f, "palette"),
            ReferenceImpl::Textbook => write!(f, "textbook"),
            ReferenceImpl::Sharma => write!(f, "sharma"),
        }
    }
}

impl FromStr for ReferenceImpl {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "palette" => Ok(ReferenceImpl::Palette),
            "textbook" => Ok(ReferenceImpl::Textbook),
            "sharma" => Ok(ReferenceImpl::Sharma),
            other => Err(format!("unknown reference implementation: {other}")),
        }
    }
}

/// The input on which two implementations disagreed most
#[derive(Debug, Clone, Serialize)]
pub struct WorstCase {
    pub pair: LabPair,
    /// ΔE from `ciede2000-core`
    pub ours: f64,
    /// ΔE from the reference
    pub theirs: f64,
    pub diff: f64,
}

/// Result of a cross-validation run
#[derive(Debug, Clone, Serialize)]
pub struct ParityResult {
    pub reference: ReferenceImpl,
    /// Seed of the generated inputs
    pub seed: u64,
    pub threshold: f64,
    pub stats: DivergenceStats,
    /// `None` only when no samples were evaluated
    pub worst: Option<WorstCase>,
    /// Non-finite results from either side
    pub non_finite: usize,
    pub passed: bool,
}

impl ParityResult {
    /// Check if this result indicates exact match
    pub fn is_exact(&self) -> bool {
        self.stats.is_exact()
    }
}

/// Divergence of this crate from a reference over one set of pairs
#[derive(Debug, Clone)]
pub struct Comparison {
    pub stats: DivergenceStats,
    pub worst: Option<WorstCase>,
    /// Pairs where either side returned NaN or infinity
    pub non_finite: usize,
}

/// Compare this crate against a reference over one set of pairs
pub fn compare_pairs(reference: ReferenceImpl, pairs: &[LabPair]) -> Comparison {
    let evaluated: Vec<(f64, f64)> = pairs
        .par_iter()
        .map(|pair| (pair.delta_e(), reference::evaluate(reference, pair)))
        .collect();

    let non_finite = evaluated
        .iter()
        .filter(|(ours, theirs)| !ours.is_finite() || !theirs.is_finite())
        .count();

    let worst = evaluated
        .iter()
        .zip(pairs)
        .map(|(&(ours, theirs), pair)| WorstCase {
            pair: *pair,
            ours,
            theirs,
            diff: (ours - theirs).abs(),
        })
        .max_by(|a, b| a.diff.total_cmp(&b.diff));

    let diffs = evaluated.iter().map(|(ours, theirs)| (ours - theirs).abs()).collect();
    Comparison {
        stats: DivergenceStats::from_samples(diffs),
        worst,
        non_finite,
    }
}

/// A cross-validation run over random continuous inputs
#[derive(Debug, Clone)]
pub struct CrossValidation {
    pub reference: ReferenceImpl,
    pub count: usize,
    pub seed: Option<u64>,
    pub threshold: f64,
}

impl CrossValidation {
    /// Create a new cross-validation with 10 000 samples and the reference's default threshold
    pub fn new(reference: ReferenceImpl) -> Self {
        Self {
            reference,
            count: 10_000,
            seed: None,
            threshold: reference.default_threshold(),
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn run(&self) -> ParityResult {
        let mut config = GeneratorConfig::default().continuous();
        config.seed = self.seed;
        let mut generator = VectorGenerator::new(config);
        let seed = generator.seed();
        let pairs = generator.pairs(self.count);

        tracing::info!(reference = %self.reference, count = self.count, seed, "cross-validating");
        let Comparison {
            stats,
            worst,
            non_finite,
        } = compare_pairs(self.reference, &pairs);
        let passed = non_finite == 0 && stats.within(self.threshold);
        if !passed {
            tracing::warn!(reference = %self.reference, max = stats.max, threshold = self.threshold, "divergence above threshold");
        }

        ParityResult {
            reference: self.reference,
            seed,
            threshold: self.threshold,
            stats,
            worst,
            non_finite,
            passed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_parse_and_display() {
        for reference in ReferenceImpl::ALL {
            assert_eq!(reference.to_string().parse::<ReferenceImpl>(), Ok(reference));
        }
        assert!("lcms".parse::<ReferenceImpl>().is_err());
    }

    #[test]
    fn test_textbook_small_run_passes() {
        let result = CrossValidation::new(ReferenceImpl::Textbook)
            .with_count(500)
            .with_seed(11)
            .run();
        assert!(result.passed, "max divergence {}", result.stats.max);
        assert_eq!(result.stats.count, 500);
        assert_eq!(result.seed, 11);
        assert!(result.worst.is_some());
    }

    #[test]
    fn test_empty_run() {
        let result = CrossValidation::new(ReferenceImpl::Textbook).with_count(0).with_seed(1).run();
        assert!(result.passed);
        assert!(result.worst.is_none());
    }

    #[test]
    fn test_result_serializes_to_json() {
        let result = CrossValidation::new(ReferenceImpl::Sharma).with_count(10).with_seed(4).run();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["reference"], "sharma");
        assert_eq!(json["seed"], 4);
        assert_eq!(json["stats"]["count"], 10);
        assert!(json["worst"]["pair"]["reference"]["l"].is_number());
    }

    #[test]
    fn test_sharma_default_threshold_passes() {
        let validation = CrossValidation::new(ReferenceImpl::Sharma).with_count(2_000).with_seed(21);
        assert_eq!(validation.threshold, CONVENTION_THRESHOLD);
        let result = validation.run();
        assert!(result.passed, "max divergence {:e}", result.stats.max);
        assert!(result.stats.max > DEFAULT_THRESHOLD);

        assert_eq!(CrossValidation::new(ReferenceImpl::Palette).threshold, DEFAULT_THRESHOLD);
        assert_eq!(
            CrossValidation::new(ReferenceImpl::Sharma).with_threshold(1e-12).threshold,
            1e-12
        );
    }
}
