//! QFM Feature Maps
//!
//! This crate encodes classical data vectors as quantum circuits. A feature
//! map is configured once (qubit count, depth, strategy options) and then
//! turns any number of vectors into circuits over a [`qfm_ir::QuantumRegister`].
//!
//! # Strategies
//!
//! - [`FirstOrderExpansion`]: per round and per qubit, `U2(0, π)` then `U1(2·x[i])`
//! - [`SecondOrderExpansion`]: the same rotations followed by `CX · U1 · CX`
//!   entanglers over an [`EntanglerMap`]
//!
//! Both implement [`FeatureMapBuilder`]; [`FeatureMap`] dispatches over them
//! when the strategy is only known at runtime (e.g. from a config file).
//!
//! # Example
//!
//! ```rust
//! use qfm_encode::{FeatureMapBuilder, FirstOrderExpansion};
//!
//! let map = FirstOrderExpansion::with_depth(2, 1).unwrap();
//! let circuit = map.construct_circuit(&[0.5, 1.0], None, false).unwrap();
//!
//! assert_eq!(circuit.num_ops(), 4);
//! assert_eq!(circuit.registers()[0].name(), "q");
//!
//! // The inverse undoes the encoding, gate by gate.
//! let inverse = map.construct_circuit(&[0.5, 1.0], None, true).unwrap();
//! assert_eq!(inverse.instructions().next().unwrap().to_string(), "u1(-2) q1");
//! ```

pub mod config;
pub mod data;
pub mod entanglement;
pub mod error;
pub mod feature_map;
pub mod first_order;
pub mod schema;
pub mod second_order;

pub use config::{
    DEFAULT_DEPTH, DEPTH_ENV_VAR, FeatureMapConfig, FeatureMapDocument, FirstOrderOptions,
    SecondOrderOptions,
};
pub use data::{FeatureInput, validate_input};
pub use entanglement::{Entanglement, EntanglerMap};
pub use error::{ArgumentError, EncodeError, EncodeResult};
pub use feature_map::{FeatureMap, FeatureMapBuilder};
pub use first_order::FirstOrderExpansion;
pub use schema::{FeatureMapDescriptor, FeatureMapKind};
pub use second_order::SecondOrderExpansion;
