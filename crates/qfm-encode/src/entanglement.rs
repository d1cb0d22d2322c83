//! Entangler maps for second-order expansions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{EncodeError, EncodeResult};

/// Built-in entanglement patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Entanglement {
    /// Every pair `i < j`.
    #[default]
    Full,
    /// Nearest neighbours `(i, i + 1)`.
    Linear,
}

impl fmt::Display for Entanglement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entanglement::Full => write!(f, "full"),
            Entanglement::Linear => write!(f, "linear"),
        }
    }
}

impl FromStr for Entanglement {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(Entanglement::Full),
            "linear" => Ok(Entanglement::Linear),
            other => Err(EncodeError::config(format!(
                "unknown entanglement '{other}' (expected 'full' or 'linear')"
            ))),
        }
    }
}

/// Source qubit → target qubits. Iteration is ordered by source, then by
/// the order targets were listed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntanglerMap(BTreeMap<u32, Vec<u32>>);

impl EntanglerMap {
    /// Build the map for a built-in pattern.
    pub fn from_pattern(pattern: Entanglement, num_qubits: u32) -> Self {
        match pattern {
            Entanglement::Full => Self::full(num_qubits),
            Entanglement::Linear => Self::linear(num_qubits),
        }
    }

    /// Every pair `i < j`.
    pub fn full(num_qubits: u32) -> Self {
        Self(
            (0..num_qubits.saturating_sub(1))
                .map(|i| (i, ((i + 1)..num_qubits).collect()))
                .collect(),
        )
    }

    /// Nearest neighbours.
    pub fn linear(num_qubits: u32) -> Self {
        Self(
            (0..num_qubits.saturating_sub(1))
                .map(|i| (i, vec![i + 1]))
                .collect(),
        )
    }

    /// Wrap an explicit map.
    pub fn from_map(map: BTreeMap<u32, Vec<u32>>) -> Self {
        Self(map)
    }

    /// Check every index is below `num_qubits` and no qubit targets itself.
    pub fn validate(&self, num_qubits: u32) -> EncodeResult<()> {
        for (src, targ) in self.pairs() {
            if src >= num_qubits || targ >= num_qubits {
                return Err(EncodeError::config(format!(
                    "entangler map pair ({src}, {targ}) is out of range for {num_qubits} qubits"
                )));
            }
            if src == targ {
                return Err(EncodeError::config(format!(
                    "entangler map entangles qubit {src} with itself"
                )));
            }
        }
        Ok(())
    }

    /// All `(source, target)` pairs in deterministic order.
    pub fn pairs(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.0
            .iter()
            .flat_map(|(&src, targets)| targets.iter().map(move |&targ| (src, targ)))
    }

    /// Number of pairs.
    pub fn num_pairs(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}
