//! Divergence statistics between two ΔE2000 implementations

use serde::Serialize;

/// Statistics over absolute ΔE differences
#[derive(Debug, Clone, Default, Serialize)]
pub struct DivergenceStats {
    /// Mean absolute difference
    pub mean: f64,
    /// Maximum absolute difference
    pub max: f64,
    /// 95th percentile absolute difference
    pub p95: f64,
    /// Number of samples
    pub count: usize,
}

impl DivergenceStats {
    /// Summarize a set of absolute differences
    ///
    /// NaN samples sort last and therefore surface as `max`.
    pub fn from_samples(mut diffs: Vec<f64>) -> Self {
        if diffs.is_empty() {
            return Self::default();
        }

        diffs.sort_by(|a, b| a.total_cmp(b));

        let count = diffs.len();
        let mean = diffs.iter().sum::<f64>() / count as f64;
        let max = diffs[count - 1];
        let p95_idx = ((count as f64 * 0.95) as usize).min(count - 1);
        let p95 = diffs[p95_idx];

        Self {
            mean,
            max,
            p95,
            count,
        }
    }

    /// Every sample within `tolerance`
    pub fn within(&self, tolerance: f64) -> bool {
        self.max <= tolerance
    }

    /// Bit-level agreement to the precision of a 17-digit CSV round trip
    pub fn is_exact(&self) -> bool {
        self.max < 1e-12
    }
}
