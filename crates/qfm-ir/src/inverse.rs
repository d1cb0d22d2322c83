//! Gate inversion.

use crate::gate::StandardGate;
use crate::instruction::Instruction;
use crate::parameter::ParameterExpression;

/// Compute the inverse of a standard gate.
///
/// For unitary gates U, this returns U† (U-dagger):
///
/// - U1(λ)† = U1(-λ)
/// - U2(φ, λ)† = U2(-λ - π, -φ + π)
/// - CX† = CX
///
/// Angles of the inverse are folded to constants.
pub fn inverse_gate(gate: &StandardGate) -> StandardGate {
    match gate {
        StandardGate::U1(lambda) => StandardGate::U1(negate_param(lambda)),
        StandardGate::U2(phi, lambda) => StandardGate::U2(
            (-lambda.clone() - ParameterExpression::pi()).simplify(),
            (-phi.clone() + ParameterExpression::pi()).simplify(),
        ),
        self_inverse => {
            debug_assert!(is_self_inverse(self_inverse));
            self_inverse.clone()
        }
    }
}

fn negate_param(param: &ParameterExpression) -> ParameterExpression {
    (-param.clone()).simplify()
}

/// Compute the inverse of an instruction. Operands are unchanged.
pub fn inverse_instruction(instruction: &Instruction) -> Instruction {
    Instruction {
        gate: inverse_gate(&instruction.gate),
        qubits: instruction.qubits.clone(),
    }
}

/// Invert an ordered gate sequence: reverse it and invert every gate.
pub fn inverse_sequence(instructions: &[Instruction]) -> Vec<Instruction> {
    instructions.iter().rev().map(inverse_instruction).collect()
}

/// Check if a gate is self-inverse (Hermitian).
pub fn is_self_inverse(gate: &StandardGate) -> bool {
    matches!(gate, StandardGate::CX)
}
