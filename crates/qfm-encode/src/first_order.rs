//! First-order expansion: a Hadamard-style rotation and a data phase per qubit.
//!
//! Each round applies `U2(0, π)` and then `U1(2·x[i])` to every qubit `i`.
//! The map produces no entanglement, so qubits evolve independently.

use ndarray::ArrayView1;
use qfm_ir::{CompositeGate, Instruction, QuantumRegister, StandardGate};

use crate::config::{FeatureMapConfig, FirstOrderOptions};
use crate::error::EncodeResult;
use crate::feature_map::FeatureMapBuilder;
use crate::schema::FeatureMapKind;

/// Append one rotation layer: `U2(0, π)` then `U1(2·x[i])` on qubit `i`,
/// qubit by qubit.
pub(crate) fn append_rotation_layer(
    gate: &mut CompositeGate,
    x: ArrayView1<'_, f64>,
    register: &QuantumRegister,
) -> EncodeResult<()> {
    for (i, &xi) in x.iter().enumerate() {
        let qubit = register[i];
        gate.attach(Instruction::single_qubit_gate(
            StandardGate::hadamard_u2(),
            qubit,
        ))?
        .u1(2.0 * xi, qubit)?;
    }
    Ok(())
}

/// The first-order expansion feature map.
#[derive(Debug, Clone, PartialEq)]
pub struct FirstOrderExpansion {
    config: FeatureMapConfig,
}

impl FirstOrderExpansion {
    /// Create from an already validated configuration.
    pub fn new(config: FeatureMapConfig) -> Self {
        Self { config }
    }

    /// Create with an explicit depth.
    pub fn with_depth(num_qubits: u32, depth: u32) -> EncodeResult<Self> {
        Ok(Self::new(FeatureMapConfig::new(num_qubits, depth)?))
    }

    /// Create from parsed options.
    pub fn from_options(num_qubits: u32, options: &FirstOrderOptions) -> EncodeResult<Self> {
        Self::with_depth(num_qubits, options.depth)
    }
}

impl FeatureMapBuilder for FirstOrderExpansion {
    fn kind(&self) -> FeatureMapKind {
        FeatureMapKind::FirstOrderExpansion
    }

    fn config(&self) -> &FeatureMapConfig {
        &self.config
    }

    fn num_operations(&self) -> usize {
        self.config.depth() as usize * self.config.num_qubits() as usize * 2
    }

    fn build_composite_gate(
        &self,
        x: ArrayView1<'_, f64>,
        register: &QuantumRegister,
    ) -> EncodeResult<CompositeGate> {
        let mut gate = CompositeGate::new(self.kind().gate_name(), register.clone());
        for _ in 0..self.config.depth() {
            append_rotation_layer(&mut gate, x, register)?;
        }
        Ok(gate)
    }
}
