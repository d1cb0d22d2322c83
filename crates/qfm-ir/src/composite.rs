//! Composite gates: named, invertible gate sequences over a register.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::Instruction;
use crate::inverse::inverse_sequence;
use crate::parameter::ParameterExpression;
use crate::qubit::QubitId;
use crate::register::QuantumRegister;

/// An ordered sequence of gate applications over a fixed register.
///
/// Every attached instruction is checked against the register, so a
/// composite gate can always be attached to a circuit holding that register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeGate {
    name: String,
    register: QuantumRegister,
    instructions: Vec<Instruction>,
}

impl CompositeGate {
    /// Create an empty composite gate acting on `register`.
    pub fn new(name: impl Into<String>, register: QuantumRegister) -> Self {
        Self {
            name: name.into(),
            register,
            instructions: vec![],
        }
    }

    /// Append an instruction.
    pub fn attach(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        let expected = instruction.gate.num_qubits();
        let got = instruction.qubits.len() as u32;
        if expected != got {
            return Err(IrError::QubitCountMismatch {
                gate_name: instruction.name().to_string(),
                expected,
                got,
            });
        }

        let mut seen = FxHashSet::default();
        for &qubit in &instruction.qubits {
            if !self.register.contains(qubit) {
                return Err(IrError::QubitNotFound {
                    qubit,
                    gate_name: Some(instruction.name().to_string()),
                });
            }
            if !seen.insert(qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: Some(instruction.name().to_string()),
                });
            }
        }

        self.instructions.push(instruction);
        Ok(self)
    }

    /// Append U1(λ).
    pub fn u1(
        &mut self,
        lambda: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.attach(Instruction::single_qubit_gate(
            StandardGate::U1(lambda.into()),
            qubit,
        ))
    }

    /// Append U2(φ, λ).
    pub fn u2(
        &mut self,
        phi: impl Into<ParameterExpression>,
        lambda: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.attach(Instruction::single_qubit_gate(
            StandardGate::U2(phi.into(), lambda.into()),
            qubit,
        ))
    }

    /// Append CNOT.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.attach(Instruction::two_qubit_gate(StandardGate::CX, control, target))
    }

    /// The inverse sequence: reversed, every gate replaced by its adjoint.
    ///
    /// The result is named `<name>_dg`.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            name: format!("{}_dg", self.name),
            register: self.register.clone(),
            instructions: inverse_sequence(&self.instructions),
        }
    }

    /// Composite gate name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The register the sequence acts on.
    pub fn register(&self) -> &QuantumRegister {
        &self.register
    }

    /// The instructions in application order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of gate applications.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// True if nothing has been attached.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
