//! QFM Circuit Representation
//!
//! This crate provides the circuit data structures that QFM feature maps
//! build into: registers, gates, invertible composite gates and a DAG-backed
//! circuit container.
//!
//! # Core Components
//!
//! - **Registers**: [`QuantumRegister`] hands out [`QubitId`]s under a name
//! - **Gates**: [`StandardGate`] (`U1`, `U2`, `CX`) with [`ParameterExpression`] angles
//! - **Instructions**: [`Instruction`] binds a gate to its operands
//! - **Composite gates**: [`CompositeGate`] is an ordered gate sequence over a
//!   register that can be inverted as a unit
//! - **Circuit**: [`Circuit`] owns registers and a [`CircuitDag`]
//!
//! # Example: Attaching an Inverted Sequence
//!
//! ```rust
//! use qfm_ir::{Circuit, CompositeGate, ParameterExpression, QuantumRegister};
//!
//! let qr = QuantumRegister::new("q", 1);
//! let mut encoding = CompositeGate::new("encoding", qr.clone());
//! encoding.u2(0.0, ParameterExpression::pi(), qr[0]).unwrap();
//! encoding.u1(0.6, qr[0]).unwrap();
//!
//! let mut circuit = Circuit::from_register("decode", &qr).unwrap();
//! circuit.attach(&encoding.inverse()).unwrap();
//!
//! assert_eq!(circuit.num_ops(), 2);
//! assert_eq!(circuit.instructions().next().unwrap().name(), "u1");
//! ```

pub mod circuit;
pub mod composite;
pub mod dag;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod inverse;
pub mod parameter;
pub mod qubit;
pub mod register;
pub mod unitary;

pub use circuit::{Circuit, CircuitSnapshot};
pub use composite::CompositeGate;
pub use dag::{CircuitDag, DagEdge, DagNode, NodeIndex};
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::Instruction;
pub use inverse::{inverse_gate, inverse_instruction, inverse_sequence, is_self_inverse};
pub use parameter::ParameterExpression;
pub use qubit::{Qubit, QubitId};
pub use register::{DEFAULT_REGISTER_NAME, QuantumRegister};
pub use unitary::Unitary2x2;
