//! Second-order expansion: first-order rotations plus pairwise entanglers.
//!
//! Each round applies the first-order rotation layer, then for every
//! entangler pair `(s, t)` the block `CX(s, t) · U1(2(π - x[s])(π - x[t])) on t · CX(s, t)`.

use ndarray::ArrayView1;
use qfm_ir::{CompositeGate, ParameterExpression, QuantumRegister};
use tracing::debug;

use crate::config::{FeatureMapConfig, SecondOrderOptions};
use crate::entanglement::{Entanglement, EntanglerMap};
use crate::error::EncodeResult;
use crate::feature_map::FeatureMapBuilder;
use crate::first_order::append_rotation_layer;
use crate::schema::FeatureMapKind;

/// Angle of the phase gate between `x_s` and `x_t`.
fn pair_angle(xs: f64, xt: f64) -> ParameterExpression {
    let (pi, c) = (ParameterExpression::pi, ParameterExpression::constant);
    (ParameterExpression::from(2) * (pi() - c(xs)) * (pi() - c(xt))).simplify()
}

/// The second-order expansion feature map.
#[derive(Debug, Clone, PartialEq)]
pub struct SecondOrderExpansion {
    config: FeatureMapConfig,
    entangler_map: EntanglerMap,
}

impl SecondOrderExpansion {
    /// Create with an explicit entangler map, checked against the qubit count.
    pub fn new(config: FeatureMapConfig, entangler_map: EntanglerMap) -> EncodeResult<Self> {
        entangler_map.validate(config.num_qubits())?;
        Ok(Self {
            config,
            entangler_map,
        })
    }

    /// Create with a built-in entanglement pattern.
    pub fn with_pattern(
        num_qubits: u32,
        depth: u32,
        entanglement: Entanglement,
    ) -> EncodeResult<Self> {
        let config = FeatureMapConfig::new(num_qubits, depth)?;
        Self::new(config, EntanglerMap::from_pattern(entanglement, num_qubits))
    }

    /// Create from parsed options. An explicit map wins over the pattern.
    pub fn from_options(num_qubits: u32, options: &SecondOrderOptions) -> EncodeResult<Self> {
        let config = FeatureMapConfig::new(num_qubits, options.depth)?;
        let map = match &options.entangler_map {
            Some(map) => {
                debug!("Using explicit entangler map with {} pairs", map.num_pairs());
                map.clone()
            }
            None => EntanglerMap::from_pattern(options.entanglement, num_qubits),
        };
        Self::new(config, map)
    }

    /// The pairs entangled in every round.
    pub fn entangler_map(&self) -> &EntanglerMap {
        &self.entangler_map
    }
}

impl FeatureMapBuilder for SecondOrderExpansion {
    fn kind(&self) -> FeatureMapKind {
        FeatureMapKind::SecondOrderExpansion
    }

    fn config(&self) -> &FeatureMapConfig {
        &self.config
    }

    fn num_operations(&self) -> usize {
        let per_round =
            2 * self.config.num_qubits() as usize + 3 * self.entangler_map.num_pairs();
        self.config.depth() as usize * per_round
    }

    fn build_composite_gate(
        &self,
        x: ArrayView1<'_, f64>,
        register: &QuantumRegister,
    ) -> EncodeResult<CompositeGate> {
        let mut gate = CompositeGate::new(self.kind().gate_name(), register.clone());
        for _ in 0..self.config.depth() {
            append_rotation_layer(&mut gate, x, register)?;
            for (src, targ) in self.entangler_map.pairs() {
                let (s, t) = (src as usize, targ as usize);
                gate.cx(register[s], register[t])?
                    .u1(pair_angle(x[s], x[t]), register[t])?
                    .cx(register[s], register[t])?;
            }
        }
        Ok(gate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EncodeError;
    use qfm_ir::QubitId;
    use std::collections::BTreeMap;
    use std::f64::consts::PI;

    #[test]
    fn test_pair_angle() {
        let angle = pair_angle(0.5, 1.0).value();
        assert!((angle - 2.0 * (PI - 0.5) * (PI - 1.0)).abs() < 1e-12);
        assert!(pair_angle(0.5, 1.0).is_atomic());
    }

    #[test]
    fn test_two_qubit_round() {
        let map = SecondOrderExpansion::with_pattern(2, 1, Entanglement::Full).unwrap();
        let circuit = map.construct_circuit(&[0.5, 1.0], None, false).unwrap();

        let names: Vec<_> = circuit.instructions().map(|i| i.name().to_string()).collect();
        assert_eq!(names, ["u2", "u1", "u2", "u1", "cx", "u1", "cx"]);

        let ops: Vec<_> = circuit.instructions().collect();
        assert_eq!(ops[4].qubits, vec![QubitId(0), QubitId(1)]);
        assert_eq!(ops[5].qubits, vec![QubitId(1)]);
        let expected = 2.0 * (PI - 0.5) * (PI - 1.0);
        assert!((ops[5].gate.parameters()[0].value() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_operation_count_full() {
        let map = SecondOrderExpansion::with_pattern(4, 2, Entanglement::Full).unwrap();
        // 2 × (4 × 2 + 6 pairs × 3)
        assert_eq!(map.num_operations(), 52);
        let circuit = map
            .construct_circuit(&[0.1, 0.2, 0.3, 0.4], None, false)
            .unwrap();
        assert_eq!(circuit.num_ops(), 52);
    }

    #[test]
    fn test_explicit_map_overrides_pattern() {
        let options = SecondOrderOptions {
            depth: 1,
            entanglement: Entanglement::Full,
            entangler_map: Some(EntanglerMap::from_map(BTreeMap::from([(2, vec![0])]))),
        };
        let map = SecondOrderExpansion::from_options(3, &options).unwrap();
        assert_eq!(map.entangler_map().pairs().collect::<Vec<_>>(), vec![(2, 0)]);
        assert_eq!(map.num_operations(), 9);
    }

    #[test]
    fn test_out_of_range_map_rejected() {
        let options = SecondOrderOptions {
            entangler_map: Some(EntanglerMap::from_map(BTreeMap::from([(0, vec![5])]))),
            ..SecondOrderOptions::default()
        };
        assert!(matches!(
            SecondOrderExpansion::from_options(3, &options),
            Err(EncodeError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_single_qubit_degenerates_to_rotations() {
        let map = SecondOrderExpansion::with_pattern(1, 2, Entanglement::Linear).unwrap();
        let circuit = map.construct_circuit(&[0.3], None, false).unwrap();
        assert_eq!(circuit.num_ops(), 4);
        assert!(circuit.instructions().all(|i| i.name() != "cx"));
    }
}
