//! High-level circuit container.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::composite::CompositeGate;
use crate::dag::CircuitDag;
use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::Instruction;
use crate::parameter::ParameterExpression;
use crate::qubit::{Qubit, QubitId};
use crate::register::QuantumRegister;

/// A quantum circuit built over one or more registers.
///
/// Gates are applied either one at a time or by attaching a
/// [`CompositeGate`], whose instructions are appended in order.
#[derive(Debug, Clone)]
pub struct Circuit {
    name: String,
    registers: Vec<QuantumRegister>,
    qubits: Vec<Qubit>,
    dag: CircuitDag,
}

impl Circuit {
    /// Create a new empty circuit without registers.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            registers: vec![],
            qubits: vec![],
            dag: CircuitDag::new(),
        }
    }

    /// Create a circuit over a single register.
    pub fn from_register(name: impl Into<String>, register: &QuantumRegister) -> IrResult<Self> {
        let mut circuit = Self::new(name);
        circuit.add_register(register)?;
        Ok(circuit)
    }

    /// Add a register to the circuit.
    pub fn add_register(&mut self, register: &QuantumRegister) -> IrResult<&mut Self> {
        if self.registers.iter().any(|r| r.name() == register.name()) {
            return Err(IrError::DuplicateRegister(register.name().to_string()));
        }
        let mut seen = FxHashSet::default();
        for qubit in register.iter() {
            if let Some(owner) = self.qubits.iter().find(|q| q.id == qubit) {
                return Err(IrError::QubitAlreadyAllocated {
                    qubit,
                    register: owner.register.clone(),
                });
            }
            // Ids must also be distinct within the register.
            if !seen.insert(qubit) {
                return Err(IrError::QubitAlreadyAllocated {
                    qubit,
                    register: register.name().to_string(),
                });
            }
        }

        for qubit in register.qubits() {
            self.dag.add_qubit(qubit.id);
            self.qubits.push(qubit);
        }
        self.registers.push(register.clone());
        Ok(self)
    }

    /// Append the instructions of a composite gate.
    ///
    /// The composite gate's register must be one of the circuit's registers.
    /// Nothing is applied if the check fails.
    pub fn attach(&mut self, gate: &CompositeGate) -> IrResult<&mut Self> {
        if !self.registers.iter().any(|r| r == gate.register()) {
            return Err(IrError::RegisterMismatch {
                gate: gate.name().to_string(),
                register: gate.register().name().to_string(),
            });
        }
        for instruction in gate.instructions() {
            self.dag.apply(instruction.clone())?;
        }
        debug_assert!(
            self.dag.verify_integrity().is_ok(),
            "DAG broken after attaching '{}'",
            gate.name()
        );
        Ok(self)
    }

    /// Apply a single instruction.
    pub fn apply(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        self.dag.apply(instruction)?;
        Ok(self)
    }

    /// Apply U1(λ).
    pub fn u1(
        &mut self,
        lambda: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(
            StandardGate::U1(lambda.into()),
            qubit,
        ))
    }

    /// Apply U2(φ, λ).
    pub fn u2(
        &mut self,
        phi: impl Into<ParameterExpression>,
        lambda: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(
            StandardGate::U2(phi.into(), lambda.into()),
            qubit,
        ))
    }

    /// Apply CNOT.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(StandardGate::CX, control, target))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers in the order they were added.
    pub fn registers(&self) -> &[QuantumRegister] {
        &self.registers
    }

    /// All qubits with their register slots.
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Get the number of operations.
    pub fn num_ops(&self) -> usize {
        self.dag.num_ops()
    }

    /// Get the circuit depth.
    pub fn depth(&self) -> usize {
        self.dag.depth()
    }

    /// Instructions in application order.
    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> + '_ {
        self.dag.ops()
    }

    /// Get a reference to the underlying DAG.
    pub fn dag(&self) -> &CircuitDag {
        &self.dag
    }

    /// Serializable view of the circuit.
    pub fn snapshot(&self) -> CircuitSnapshot {
        CircuitSnapshot {
            name: self.name.clone(),
            registers: self.registers.clone(),
            depth: self.depth(),
            instructions: self.instructions().cloned().collect(),
        }
    }

    fn qubit_label(&self, id: QubitId) -> String {
        self.qubits
            .iter()
            .find(|q| q.id == id)
            .map_or_else(|| id.to_string(), ToString::to_string)
    }
}

impl PartialEq for Circuit {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.registers == other.registers
            && self.instructions().eq(other.instructions())
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "// {}", self.name)?;
        for register in &self.registers {
            writeln!(f, "{register};")?;
        }
        for inst in self.instructions() {
            let operands: Vec<String> =
                inst.qubits.iter().map(|&q| self.qubit_label(q)).collect();
            writeln!(f, "{} {};", inst.gate, operands.join(", "))?;
        }
        Ok(())
    }
}

/// Plain-data form of a [`Circuit`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitSnapshot {
    /// Circuit name.
    pub name: String,
    /// Registers in declaration order.
    pub registers: Vec<QuantumRegister>,
    /// Circuit depth.
    pub depth: usize,
    /// Instructions in application order.
    pub instructions: Vec<Instruction>,
}
