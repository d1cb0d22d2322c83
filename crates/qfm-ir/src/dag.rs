//! DAG-based circuit representation.

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex as PetNodeIndex};
use petgraph::visit::EdgeRef;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{IrError, IrResult};
use crate::instruction::Instruction;
use crate::qubit::QubitId;

/// Node index type for the circuit DAG.
pub type NodeIndex = PetNodeIndex<u32>;

/// A node in the circuit DAG.
#[derive(Debug, Clone, PartialEq)]
pub enum DagNode {
    /// Input node for a qubit wire.
    In(QubitId),
    /// Output node for a qubit wire.
    Out(QubitId),
    /// Operation node containing an instruction.
    Op(Instruction),
}

impl DagNode {
    /// Get the instruction if this is an operation node.
    #[inline]
    pub fn instruction(&self) -> Option<&Instruction> {
        match self {
            DagNode::Op(inst) => Some(inst),
            _ => None,
        }
    }
}

/// An edge in the circuit DAG, labelled with the qubit wire it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DagEdge {
    /// The wire this edge represents.
    pub wire: QubitId,
}

/// DAG-based circuit representation.
///
/// - Every qubit wire runs from an `In` node to an `Out` node
/// - Operation nodes sit on the wires of the qubits they touch
/// - Application order is recorded separately, so operations on
///   independent wires are still reported in the order they were applied
#[derive(Debug, Clone, Default)]
pub struct CircuitDag {
    graph: DiGraph<DagNode, DagEdge, u32>,
    qubit_inputs: FxHashMap<QubitId, NodeIndex>,
    qubit_outputs: FxHashMap<QubitId, NodeIndex>,
    /// Node just before each wire's output node.
    wire_front: FxHashMap<QubitId, NodeIndex>,
    /// Operation nodes in application order.
    order: Vec<NodeIndex>,
}

impl CircuitDag {
    /// Create a new empty circuit DAG.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a qubit wire. Adding an existing qubit is a no-op.
    pub fn add_qubit(&mut self, qubit: QubitId) {
        if self.qubit_inputs.contains_key(&qubit) {
            return;
        }
        let in_node = self.graph.add_node(DagNode::In(qubit));
        let out_node = self.graph.add_node(DagNode::Out(qubit));
        self.graph.add_edge(in_node, out_node, DagEdge { wire: qubit });
        self.qubit_inputs.insert(qubit, in_node);
        self.qubit_outputs.insert(qubit, out_node);
        self.wire_front.insert(qubit, in_node);
    }

    /// Check whether a qubit wire exists.
    #[inline]
    pub fn has_qubit(&self, qubit: QubitId) -> bool {
        self.qubit_inputs.contains_key(&qubit)
    }

    /// Apply an instruction at the end of its wires.
    pub fn apply(&mut self, instruction: Instruction) -> IrResult<NodeIndex> {
        let gate_name = instruction.name().to_string();

        let expected = instruction.gate.num_qubits();
        let got = instruction.qubits.len() as u32;
        if expected != got {
            return Err(IrError::QubitCountMismatch {
                gate_name,
                expected,
                got,
            });
        }

        let mut seen = FxHashSet::default();
        for &qubit in &instruction.qubits {
            if !self.has_qubit(qubit) {
                return Err(IrError::QubitNotFound {
                    qubit,
                    gate_name: Some(gate_name),
                });
            }
            if !seen.insert(qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: Some(gate_name),
                });
            }
        }

        let qubits = instruction.qubits.clone();
        let op_node = self.graph.add_node(DagNode::Op(instruction));

        for qubit in qubits {
            let out_node = self.qubit_outputs[&qubit];
            let prev_node = self.wire_front[&qubit];

            let edge_id = self
                .graph
                .edges_directed(prev_node, Direction::Outgoing)
                .find(|e| e.weight().wire == qubit && e.target() == out_node)
                .map(|e| e.id())
                .ok_or_else(|| {
                    IrError::InvalidDag(format!(
                        "Missing edge from predecessor to output for wire {qubit}"
                    ))
                })?;

            self.graph.remove_edge(edge_id);
            self.graph.add_edge(prev_node, op_node, DagEdge { wire: qubit });
            self.graph.add_edge(op_node, out_node, DagEdge { wire: qubit });
            self.wire_front.insert(qubit, op_node);
        }

        self.order.push(op_node);
        Ok(op_node)
    }

    /// Iterate over operations in application order.
    pub fn ops(&self) -> impl Iterator<Item = &Instruction> + '_ {
        self.order
            .iter()
            .filter_map(|&idx| self.graph[idx].instruction())
    }

    /// Get the number of qubit wires.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.qubit_inputs.len()
    }

    /// Get the number of operations.
    #[inline]
    pub fn num_ops(&self) -> usize {
        self.order.len()
    }

    /// Longest path through the DAG, counted in operations.
    pub fn depth(&self) -> usize {
        let mut depths: FxHashMap<NodeIndex, usize> =
            FxHashMap::with_capacity_and_hasher(self.graph.node_count(), Default::default());
        let mut max_depth = 0usize;

        // Application order is already a topological order of the op nodes;
        // input nodes have depth zero.
        for &node in &self.order {
            let max_pred_depth = self
                .graph
                .edges_directed(node, Direction::Incoming)
                .map(|e| depths.get(&e.source()).copied().unwrap_or(0))
                .max()
                .unwrap_or(0);
            let node_depth = max_pred_depth + 1;
            max_depth = max_depth.max(node_depth);
            depths.insert(node, node_depth);
        }

        max_depth
    }

    /// Get a reference to the underlying graph.
    pub fn graph(&self) -> &DiGraph<DagNode, DagEdge, u32> {
        &self.graph
    }

    /// Verify the structural integrity of the DAG.
    ///
    /// Checks that the graph is acyclic and that every wire forms a single
    /// path from its input node to its output node.
    pub fn verify_integrity(&self) -> IrResult<()> {
        if petgraph::algo::is_cyclic_directed(&self.graph) {
            return Err(IrError::InvalidDag("Graph contains a cycle".into()));
        }

        for (&qubit, &in_node) in &self.qubit_inputs {
            let out_node = self.qubit_outputs.get(&qubit).copied().ok_or_else(|| {
                IrError::InvalidDag(format!("Wire {qubit} has no output node"))
            })?;

            let mut current = in_node;
            let mut steps = 0usize;
            while current != out_node {
                let mut next = self
                    .graph
                    .edges_directed(current, Direction::Outgoing)
                    .filter(|e| e.weight().wire == qubit);
                let edge = next.next().ok_or_else(|| {
                    IrError::InvalidDag(format!("Wire {qubit} is broken"))
                })?;
                if next.next().is_some() {
                    return Err(IrError::InvalidDag(format!("Wire {qubit} forks")));
                }
                current = edge.target();
                steps += 1;
                if steps > self.graph.node_count() {
                    return Err(IrError::InvalidDag(format!("Wire {qubit} does not terminate")));
                }
            }
        }

        Ok(())
    }
}
