//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur while building gate sequences and circuits.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit not present in the circuit or register.
    #[error("Qubit {qubit} not found{}", format_gate_context(.gate_name))]
    QubitNotFound {
        /// The qubit that was not found.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Gate requires a different number of qubits.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of qubits.
        expected: u32,
        /// Actual number of qubits provided.
        got: u32,
    },

    /// Duplicate qubit in operation.
    #[error("Duplicate qubit {qubit} in operation{}", format_gate_context(.gate_name))]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// A register with this name is already part of the circuit.
    #[error("Register '{0}' already exists in circuit")]
    DuplicateRegister(String),

    /// A qubit is claimed by two registers.
    #[error("Qubit {qubit} already belongs to register '{register}'")]
    QubitAlreadyAllocated {
        /// The contested qubit.
        qubit: QubitId,
        /// Register that owns it.
        register: String,
    },

    /// Register ids would run past `u32::MAX`.
    #[error("Register '{register}' of {size} qubits starting at {first} overflows the qubit id space")]
    RegisterOverflow {
        /// Register name.
        register: String,
        /// First qubit id.
        first: u32,
        /// Requested size.
        size: u32,
    },

    /// Composite gate attached to a circuit that does not hold its register.
    #[error("Composite gate '{gate}' acts on register '{register}' which is not part of the circuit")]
    RegisterMismatch {
        /// Composite gate name.
        gate: String,
        /// Register the composite gate was built over.
        register: String,
    },

    /// Invalid DAG structure.
    #[error("Invalid DAG structure: {0}")]
    InvalidDag(String),
}

#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
