//! The feature map contract and strategy dispatch.

use ndarray::ArrayView1;
use qfm_ir::{Circuit, CompositeGate, DEFAULT_REGISTER_NAME, QuantumRegister};
use tracing::{debug, instrument};

use crate::config::{FeatureMapConfig, FeatureMapDocument};
use crate::data::{FeatureInput, validate_input};
use crate::error::{ArgumentError, EncodeResult};
use crate::first_order::FirstOrderExpansion;
use crate::schema::FeatureMapKind;
use crate::second_order::SecondOrderExpansion;

/// A deterministic mapping from a data vector to a gate sequence.
///
/// Implementors only describe how to lay out gates for an already validated
/// vector; input validation, register handling and inversion are shared.
pub trait FeatureMapBuilder {
    /// Which strategy this is.
    fn kind(&self) -> FeatureMapKind;

    /// The immutable configuration.
    fn config(&self) -> &FeatureMapConfig;

    /// Number of operations every circuit from this map contains.
    fn num_operations(&self) -> usize;

    /// Lay out the encoding of `x` over `register`.
    ///
    /// `x.len()` and `register.len()` both equal the configured qubit count.
    fn build_composite_gate(
        &self,
        x: ArrayView1<'_, f64>,
        register: &QuantumRegister,
    ) -> EncodeResult<CompositeGate>;

    /// Number of qubits, equal to the data dimension.
    fn num_qubits(&self) -> u32 {
        self.config().num_qubits()
    }

    /// Number of encoding rounds.
    fn depth(&self) -> u32 {
        self.config().depth()
    }

    /// Build the circuit encoding `x`, or its inverse.
    ///
    /// Without a register a fresh one named `q` is allocated and bound to
    /// the circuit. All validation happens before any gate is emitted.
    #[instrument(level = "debug", skip_all, fields(kind = %self.kind(), inverse = inverse))]
    fn construct_circuit<'a>(
        &self,
        x: impl Into<FeatureInput<'a>>,
        register: Option<&QuantumRegister>,
        inverse: bool,
    ) -> EncodeResult<Circuit>
    where
        Self: Sized,
    {
        let num_qubits = self.num_qubits();
        let x = validate_input(&x.into(), num_qubits)?;

        let register = match register {
            Some(qr) if qr.len() != num_qubits as usize => {
                return Err(ArgumentError::RegisterSize {
                    register: qr.name().to_string(),
                    len: qr.len(),
                    num_qubits,
                }
                .into());
            }
            Some(qr) => qr.clone(),
            None => {
                debug!("no register supplied, allocating '{DEFAULT_REGISTER_NAME}'");
                QuantumRegister::new(DEFAULT_REGISTER_NAME, num_qubits)
            }
        };

        let gate = self.build_composite_gate(x.view(), &register)?;
        let gate = if inverse { gate.inverse() } else { gate };

        let mut circuit = Circuit::from_register(gate.name(), &register)?;
        circuit.attach(&gate)?;

        debug!(
            "Built {} over {} with {} ops, depth {}",
            gate.name(),
            register,
            circuit.num_ops(),
            circuit.depth()
        );
        Ok(circuit)
    }
}

/// A feature map of any supported kind.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureMap {
    /// See [`FirstOrderExpansion`].
    FirstOrder(FirstOrderExpansion),
    /// See [`SecondOrderExpansion`].
    SecondOrder(SecondOrderExpansion),
}

impl FeatureMap {
    /// Build a feature map of `kind` with default options.
    pub fn with_defaults(kind: FeatureMapKind, num_qubits: u32) -> EncodeResult<Self> {
        Self::from_document(&FeatureMapDocument::new(kind, num_qubits))
    }

    /// Build a feature map from a configuration document.
    pub fn from_document(doc: &FeatureMapDocument) -> EncodeResult<Self> {
        let map = match doc.name {
            FeatureMapKind::FirstOrderExpansion => FeatureMap::FirstOrder(
                FirstOrderExpansion::from_options(doc.num_qubits, &doc.first_order_options()?)?,
            ),
            FeatureMapKind::SecondOrderExpansion => FeatureMap::SecondOrder(
                SecondOrderExpansion::from_options(doc.num_qubits, &doc.second_order_options()?)?,
            ),
        };
        debug!(
            "Configured {} with {} qubits, depth {}",
            map.kind(),
            map.num_qubits(),
            map.depth()
        );
        Ok(map)
    }
}

impl FeatureMapBuilder for FeatureMap {
    fn kind(&self) -> FeatureMapKind {
        match self {
            FeatureMap::FirstOrder(m) => m.kind(),
            FeatureMap::SecondOrder(m) => m.kind(),
        }
    }

    fn config(&self) -> &FeatureMapConfig {
        match self {
            FeatureMap::FirstOrder(m) => m.config(),
            FeatureMap::SecondOrder(m) => m.config(),
        }
    }

    fn num_operations(&self) -> usize {
        match self {
            FeatureMap::FirstOrder(m) => m.num_operations(),
            FeatureMap::SecondOrder(m) => m.num_operations(),
        }
    }

    fn build_composite_gate(
        &self,
        x: ArrayView1<'_, f64>,
        register: &QuantumRegister,
    ) -> EncodeResult<CompositeGate> {
        match self {
            FeatureMap::FirstOrder(m) => m.build_composite_gate(x, register),
            FeatureMap::SecondOrder(m) => m.build_composite_gate(x, register),
        }
    }
}

impl From<FirstOrderExpansion> for FeatureMap {
    fn from(map: FirstOrderExpansion) -> Self {
        FeatureMap::FirstOrder(map)
    }
}

impl From<SecondOrderExpansion> for FeatureMap {
    fn from(map: SecondOrderExpansion) -> Self {
        FeatureMap::SecondOrder(map)
    }
}
