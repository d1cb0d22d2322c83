//! Integration tests for circuit construction.
//!
//! These cover the observable contract of every feature map: operation
//! counts, determinism, the inverse law and input rejection.

use ndarray::{Array2, array};
use qfm_encode::{
    ArgumentError, EncodeError, Entanglement, FeatureMap, FeatureMapBuilder, FeatureMapDocument,
    FeatureMapKind, FirstOrderExpansion, SecondOrderExpansion,
};
use qfm_ir::{
    Circuit, Instruction, IrError, QuantumRegister, QubitId, StandardGate, Unitary2x2,
    inverse_sequence,
};
use serde_json::json;

const TOLERANCE: f64 = 1e-12;

/// Helper: collect a circuit's instructions.
fn ops(circuit: &Circuit) -> Vec<Instruction> {
    circuit.instructions().cloned().collect()
}

/// Helper: multiply out the single-qubit gates acting on `qubit`.
fn qubit_unitary(instructions: &[Instruction], qubit: QubitId) -> Unitary2x2 {
    instructions
        .iter()
        .filter(|inst| inst.qubits == [qubit])
        .fold(Unitary2x2::identity(), |acc, inst| {
            inst.gate.matrix().unwrap().mul(&acc)
        })
}

fn assert_invalid_argument(result: Result<Circuit, EncodeError>) -> ArgumentError {
    match result {
        Err(EncodeError::InvalidArgument(err)) => err,
        Err(other) => panic!("Expected InvalidArgument, got {other}"),
        Ok(_) => panic!("Expected InvalidArgument, got a circuit"),
    }
}

// ============================================================================
// Documented scenarios
// ============================================================================

#[test]
fn test_scenario_two_qubits_depth_one() {
    let map = FirstOrderExpansion::with_depth(2, 1).unwrap();
    let circuit = map.construct_circuit(&[0.5, 1.0], None, false).unwrap();

    let rendered: Vec<_> = circuit.instructions().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        ["u2(0, π) q0", "u1(1) q0", "u2(0, π) q1", "u1(2) q1"]
    );
}

#[test]
fn test_scenario_one_qubit_depth_two() {
    let map = FirstOrderExpansion::with_depth(1, 2).unwrap();
    let circuit = map.construct_circuit(&[0.3], None, false).unwrap();

    let ops = ops(&circuit);
    assert_eq!(ops.len(), 4);
    for round in ops.chunks(2) {
        assert_eq!(round[0].gate, StandardGate::hadamard_u2());
        assert!(round[1].gate.approx_eq(&StandardGate::U1(0.6.into()), TOLERANCE));
        assert!(round.iter().all(|inst| inst.qubits == [QubitId(0)]));
    }
}

// ============================================================================
// Registers
// ============================================================================

#[test]
fn test_default_register_is_bound() {
    let map = FirstOrderExpansion::with_depth(3, 1).unwrap();
    let circuit = map.construct_circuit(&[0.1, 0.2, 0.3], None, false).unwrap();

    assert_eq!(circuit.registers(), &[QuantumRegister::new("q", 3)]);
    assert_eq!(circuit.num_qubits(), 3);
    assert_eq!(circuit.name(), "first_order_expansion");
    assert!(circuit.to_string().contains("u1(0.4) q[1];"));
}

#[test]
fn test_supplied_register_is_used() {
    let qr = QuantumRegister::with_offset("data", 4, 2).unwrap();
    let map = FirstOrderExpansion::with_depth(2, 1).unwrap();
    let circuit = map.construct_circuit(&[0.5, 1.0], Some(&qr), false).unwrap();

    assert_eq!(circuit.registers(), &[qr]);
    let touched: Vec<_> = circuit.instructions().map(|i| i.qubits[0]).collect();
    assert_eq!(touched, [QubitId(4), QubitId(4), QubitId(5), QubitId(5)]);
}

#[test]
fn test_register_with_repeated_qubit_rejected() {
    let aliased: QuantumRegister =
        serde_json::from_str(r#"{"name": "d", "qubits": [0, 0]}"#).unwrap();
    let map = FirstOrderExpansion::with_depth(2, 1).unwrap();

    match map.construct_circuit(&[0.5, 1.0], Some(&aliased), false) {
        Err(EncodeError::Circuit(IrError::QubitAlreadyAllocated { qubit, .. })) => {
            assert_eq!(qubit, QubitId(0));
        }
        Err(other) => panic!("Expected QubitAlreadyAllocated, got {other}"),
        Ok(circuit) => panic!("Expected an error, got:\n{circuit}"),
    }
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_operation_count_matches_formula() {
    for num_qubits in 1..=4_u32 {
        for depth in 1..=3_u32 {
            let x: Vec<f64> = (0..num_qubits).map(|i| f64::from(i) * 0.25).collect();
            let map = FirstOrderExpansion::with_depth(num_qubits, depth).unwrap();
            let circuit = map.construct_circuit(&x, None, false).unwrap();
            assert_eq!(circuit.num_ops(), (depth * num_qubits * 2) as usize);
            assert_eq!(circuit.num_ops(), map.num_operations());
        }
    }
}

#[test]
fn test_construction_is_deterministic() {
    let map = FeatureMap::with_defaults(FeatureMapKind::SecondOrderExpansion, 3).unwrap();
    let x = [0.7, -0.2, 1.4];
    let first = map.construct_circuit(&x, None, false).unwrap();
    let second = map.construct_circuit(&x, None, false).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.snapshot(), second.snapshot());
}

#[test]
fn test_inverse_is_structural_inverse() {
    let maps: Vec<FeatureMap> = vec![
        FirstOrderExpansion::with_depth(3, 2).unwrap().into(),
        SecondOrderExpansion::with_pattern(3, 2, Entanglement::Full)
            .unwrap()
            .into(),
    ];
    let x = [0.1, 0.9, -1.3];

    for map in maps {
        let forward = map.construct_circuit(&x, None, false).unwrap();
        let inverse = map.construct_circuit(&x, None, true).unwrap();

        let expected = inverse_sequence(&ops(&forward));
        let got = ops(&inverse);
        assert_eq!(got.len(), expected.len());
        for (a, b) in got.iter().zip(&expected) {
            assert!(a.approx_eq(b, TOLERANCE), "{a} != {b}");
        }
        assert_eq!(inverse.name(), format!("{}_dg", forward.name()));
    }
}

#[test]
fn test_inverse_undoes_first_order_encoding() {
    let map = FirstOrderExpansion::with_depth(2, 3).unwrap();
    let x = [0.42, -2.5];
    let mut combined = ops(&map.construct_circuit(&x, None, false).unwrap());
    combined.extend(ops(&map.construct_circuit(&x, None, true).unwrap()));

    for qubit in [QubitId(0), QubitId(1)] {
        assert!(qubit_unitary(&combined, qubit).is_identity(1e-9));
    }
}

#[test]
fn test_kernel_style_composition() {
    // U(x)† U(x) on a shared register, as a kernel estimator would build it.
    let map = FeatureMap::with_defaults(FeatureMapKind::SecondOrderExpansion, 2).unwrap();
    let qr = QuantumRegister::new("q", 2);
    let x = array![0.3, 0.8];

    let mut circuit = map.construct_circuit(&x, Some(&qr), false).unwrap();
    let gate = map.build_composite_gate(x.view(), &qr).unwrap().inverse();
    circuit.attach(&gate).unwrap();
    assert_eq!(circuit.num_ops(), 2 * map.num_operations());
}

// ============================================================================
// Rejection
// ============================================================================

#[test]
fn test_two_dimensional_input_rejected() {
    let map = FirstOrderExpansion::with_depth(2, 2).unwrap();
    let data = Array2::<f64>::zeros((1, 2));
    let err = assert_invalid_argument(map.construct_circuit(&data, None, false));
    assert!(err.is_shape_error());
}

#[test]
fn test_wrong_length_rejected() {
    let map = FirstOrderExpansion::with_depth(3, 2).unwrap();
    for x in [vec![0.1, 0.2], vec![0.1, 0.2, 0.3, 0.4]] {
        let err = assert_invalid_argument(map.construct_circuit(&x, None, false));
        assert!(matches!(err, ArgumentError::Length { num_qubits: 3, .. }));
    }
}

#[test]
fn test_non_numeric_input_rejected() {
    let map = FirstOrderExpansion::with_depth(2, 2).unwrap();
    for value in [json!("0.1,0.2"), json!({"x": [0.1, 0.2]}), json!([0.1, true])] {
        let err = assert_invalid_argument(map.construct_circuit(&value, None, false));
        assert!(err.is_type_error(), "{value} should be a type error");
    }
}

#[test]
fn test_invalid_configuration_rejected() {
    assert!(matches!(
        FirstOrderExpansion::with_depth(0, 2),
        Err(EncodeError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        FirstOrderExpansion::with_depth(2, 0),
        Err(EncodeError::InvalidConfiguration(_))
    ));

    let doc = FeatureMapDocument::from_json_str(
        r#"{"name": "FirstOrderExpansion", "num_qubits": 2, "options": {"depht": 3}}"#,
    )
    .unwrap();
    assert!(matches!(
        FeatureMap::from_document(&doc),
        Err(EncodeError::InvalidConfiguration(_))
    ));
}
