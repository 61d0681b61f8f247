//! Reference/sample color pairs and their CSV row form

use crate::color::Lab;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Two colors to compare: a reference and a sample
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LabPair {
    pub reference: Lab,
    pub sample: Lab,
}

impl LabPair {
    pub const fn new(reference: Lab, sample: Lab) -> Self {
        Self { reference, sample }
    }

    /// Build from `[L1, a1, b1, L2, a2, b2]`
    pub const fn from_array(v: [f64; 6]) -> Self {
        Self {
            reference: Lab::new(v[0], v[1], v[2]),
            sample: Lab::new(v[3], v[4], v[5]),
        }
    }

    /// `[L1, a1, b1, L2, a2, b2]`
    pub const fn to_array(&self) -> [f64; 6] {
        [
            self.reference.l,
            self.reference.a,
            self.reference.b,
            self.sample.l,
            self.sample.a,
            self.sample.b,
        ]
    }

    /// ΔE2000 from reference to sample
    #[inline]
    pub fn delta_e(&self) -> f64 {
        self.reference.delta_e(&self.sample)
    }

    pub fn is_finite(&self) -> bool {
        self.reference.is_finite() && self.sample.is_finite()
    }
}

impl FromStr for LabPair {
    type Err = Error;

    /// Parse `L1,a1,b1,L2,a2,b2`
    fn from_str(s: &str) -> Result<Self> {
        parse_fields::<6>(s).map(Self::from_array)
    }
}

/// Split a comma-separated row into exactly `N` numbers
///
/// Surrounding whitespace on each field and a trailing carriage return are
/// ignored.
pub fn parse_fields<const N: usize>(line: &str) -> Result<[f64; N]> {
    let line = line.trim_end_matches(['\r', '\n']);
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != N {
        return Err(Error::FieldCount {
            expected: N,
            actual: parts.len(),
        });
    }

    let mut out = [0.0; N];
    for (i, (slot, part)) in out.iter_mut().zip(&parts).enumerate() {
        let part = part.trim();
        *slot = part.parse::<f64>().map_err(|_| Error::ParseFloat {
            field: i,
            value: part.to_string(),
        })?;
    }
    Ok(out)
}
