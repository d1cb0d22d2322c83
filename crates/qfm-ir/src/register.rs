//! Named quantum registers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

use crate::error::{IrError, IrResult};
use crate::qubit::{Qubit, QubitId};

/// Name given to registers allocated on the caller's behalf.
pub const DEFAULT_REGISTER_NAME: &str = "q";

/// An ordered, named collection of addressable qubits.
///
/// Registers only hand out [`QubitId`]s; wires are created when a register
/// is added to a [`Circuit`](crate::Circuit).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuantumRegister {
    name: String,
    qubits: Vec<QubitId>,
}

impl QuantumRegister {
    /// Allocate a register of `size` qubits numbered from zero.
    pub fn new(name: impl Into<String>, size: u32) -> Self {
        Self {
            name: name.into(),
            qubits: (0..size).map(QubitId).collect(),
        }
    }

    /// Allocate a register of `size` qubits numbered from `first`.
    ///
    /// Fails if the last id would not fit in a `u32`.
    pub fn with_offset(name: impl Into<String>, first: u32, size: u32) -> IrResult<Self> {
        let name = name.into();
        let end = first
            .checked_add(size)
            .ok_or_else(|| IrError::RegisterOverflow {
                register: name.clone(),
                first,
                size,
            })?;
        Ok(Self {
            name,
            qubits: (first..end).map(QubitId).collect(),
        })
    }

    /// Register name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of qubits.
    pub fn len(&self) -> usize {
        self.qubits.len()
    }

    /// True if the register holds no qubits.
    pub fn is_empty(&self) -> bool {
        self.qubits.is_empty()
    }

    /// Qubit at register slot `index`.
    pub fn get(&self, index: usize) -> Option<QubitId> {
        self.qubits.get(index).copied()
    }

    /// Slot of `qubit` within this register.
    pub fn index_of(&self, qubit: QubitId) -> Option<usize> {
        self.qubits.iter().position(|&q| q == qubit)
    }

    /// Check register membership.
    pub fn contains(&self, qubit: QubitId) -> bool {
        self.index_of(qubit).is_some()
    }

    /// Iterate over the qubit ids in slot order.
    pub fn iter(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.qubits.iter().copied()
    }

    /// The qubits as register-bound [`Qubit`] records.
    pub fn qubits(&self) -> Vec<Qubit> {
        self.qubits
            .iter()
            .enumerate()
            .map(|(i, &id)| Qubit::new(id, &self.name, i as u32))
            .collect()
    }
}

impl Index<usize> for QuantumRegister {
    type Output = QubitId;

    fn index(&self, index: usize) -> &Self::Output {
        &self.qubits[index]
    }
}

impl fmt::Display for QuantumRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "qreg {}[{}]", self.name, self.qubits.len())
    }
}
