//! Error types for feature map construction.

use qfm_ir::IrError;
use thiserror::Error;

/// Why an input vector was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ArgumentError {
    /// The input is not a numeric array.
    #[error("x should be a numeric array, got {found}")]
    Type {
        /// Description of what was supplied.
        found: String,
    },

    /// The input is an array but not one-dimensional.
    #[error("x should be a 1-D array, got {ndim} dimensions")]
    Dimension {
        /// Number of dimensions found.
        ndim: usize,
    },

    /// The array is ragged and has no well-defined shape.
    #[error("x has an inhomogeneous shape at depth {depth}")]
    Inhomogeneous {
        /// Nesting level where row lengths disagree.
        depth: usize,
    },

    /// Data dimension and qubit count differ.
    #[error("number of qubits ({num_qubits}) and data dimension ({len}) must be the same")]
    Length {
        /// Configured qubit count.
        num_qubits: u32,
        /// Length of the supplied vector.
        len: usize,
    },

    /// A supplied register does not match the qubit count.
    #[error("register '{register}' has {len} qubits, feature map needs {num_qubits}")]
    RegisterSize {
        /// Register name.
        register: String,
        /// Register size.
        len: usize,
        /// Configured qubit count.
        num_qubits: u32,
    },
}

impl ArgumentError {
    /// True for type errors, false for shape errors.
    pub fn is_type_error(&self) -> bool {
        matches!(self, ArgumentError::Type { .. })
    }

    /// True for errors about dimensionality, length or register size.
    pub fn is_shape_error(&self) -> bool {
        !self.is_type_error()
    }
}

/// Errors that can occur while configuring or running a feature map.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EncodeError {
    /// Input vector rejected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    /// Configuration rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Circuit construction failed.
    #[error("Circuit error: {0}")]
    Circuit(#[from] IrError),

    /// Configuration file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl EncodeError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        EncodeError::InvalidConfiguration(msg.into())
    }
}

/// Result type for feature map operations.
pub type EncodeResult<T> = Result<T, EncodeError>;
