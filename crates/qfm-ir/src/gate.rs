//! Gates emitted by feature maps.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::parameter::ParameterExpression;
use crate::unitary::Unitary2x2;

/// Standard gates with known semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Phase rotation U1(λ) = diag(1, e^{iλ}).
    U1(ParameterExpression),
    /// Single-pulse gate U2(φ, λ). `U2(0, π)` is the Hadamard.
    U2(ParameterExpression, ParameterExpression),
    /// Controlled-X (CNOT) gate.
    CX,
}

impl StandardGate {
    /// The fixed rotation placed ahead of every data rotation.
    pub fn hadamard_u2() -> Self {
        StandardGate::U2(ParameterExpression::constant(0.0), ParameterExpression::pi())
    }

    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::U1(_) => "u1",
            StandardGate::U2(_, _) => "u2",
            StandardGate::CX => "cx",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::U1(_) | StandardGate::U2(_, _) => 1,
            StandardGate::CX => 2,
        }
    }

    /// Get parameters of this gate.
    pub fn parameters(&self) -> Vec<&ParameterExpression> {
        match self {
            StandardGate::U1(lambda) => vec![lambda],
            StandardGate::U2(phi, lambda) => vec![phi, lambda],
            StandardGate::CX => vec![],
        }
    }

    /// 2x2 unitary of a single-qubit gate.
    pub fn matrix(&self) -> Option<Unitary2x2> {
        match self {
            StandardGate::U1(lambda) => Some(Unitary2x2::u1(lambda.value())),
            StandardGate::U2(phi, lambda) => Some(Unitary2x2::u2(phi.value(), lambda.value())),
            StandardGate::CX => None,
        }
    }

    /// Numeric equality of gate kind and angles.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.name() == other.name()
            && self
                .parameters()
                .iter()
                .zip(other.parameters())
                .all(|(a, b)| a.approx_eq(b, tolerance))
    }
}

impl fmt::Display for StandardGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self.parameters();
        if params.is_empty() {
            return write!(f, "{}", self.name());
        }
        let rendered: Vec<String> = params.iter().map(ToString::to_string).collect();
        write!(f, "{}({})", self.name(), rendered.join(", "))
    }
}
