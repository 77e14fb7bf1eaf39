use crate::error::MicroRustError;
use crate::value::Value;
use crate::value_data::ValueData;
use log::{debug, trace as log_trace};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// Stable identity of a graph node.
///
/// Wraps the address of the shared `RefCell<ValueData>`, so every clone of a
/// `Value` handle maps to the same id for as long as the node is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) *const RefCell<ValueData>);

impl NodeId {
    /// Numeric form of the id, e.g. for naming nodes in a rendered graph.
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum VisitState {
    InProgress,
    Done,
}

/// Builds a topological order of every node reachable from `root` through
/// operand edges.
///
/// The returned list is a depth-first post-order: each node comes after all
/// of its operands, and `root` is last. Iterating it in reverse therefore
/// visits every node only once all of its consumers have been visited.
///
/// # Errors
/// `MicroRustError::CycleDetected` if a node is reached again while it is
/// still on the traversal path.
pub fn build_topo(root: &Value) -> Result<Vec<Value>, MicroRustError> {
    let mut state: HashMap<NodeId, VisitState> = HashMap::new();
    let mut sorted_list = Vec::new();
    // (node, index of the next operand to visit)
    let mut stack: Vec<(Value, usize)> = vec![(root.clone(), 0)];
    state.insert(root.id(), VisitState::InProgress);

    loop {
        let next_operand = match stack.last_mut() {
            None => break,
            Some((node, next_index)) => {
                let operand = node.borrow_node().operands.get(*next_index).cloned();
                *next_index += 1;
                operand
            }
        };

        match next_operand {
            Some(operand) => match state.get(&operand.id()) {
                Some(VisitState::Done) => {}
                Some(VisitState::InProgress) => {
                    debug!("build_topo: node {:?} reached twice on one path", operand.id());
                    return Err(MicroRustError::CycleDetected);
                }
                None => {
                    state.insert(operand.id(), VisitState::InProgress);
                    stack.push((operand, 0));
                }
            },
            None => {
                if let Some((node, _)) = stack.pop() {
                    state.insert(node.id(), VisitState::Done);
                    sorted_list.push(node);
                }
            }
        }
    }

    Ok(sorted_list)
}

/// Runs the backward pass from `root`.
///
/// Seeds `root.grad = 1`, then calls each node's local-derivative rule in
/// reverse topological order. Gradients of the other nodes are accumulated
/// into, never reset; zeroing them beforehand is the caller's job.
pub fn backward(root: &Value) -> Result<(), MicroRustError> {
    let sorted_list = build_topo(root)?;

    root.set_grad(1.0);
    if root.is_leaf() {
        debug!("backward() called on a leaf value. No operation to perform.");
        return Ok(());
    }

    debug!("backward: propagating through {} nodes", sorted_list.len());
    for node in sorted_list.iter().rev() {
        log_trace!("backward: visiting {:?}", node);
        node.propagate_grad();
    }
    Ok(())
}

/// Read-only snapshot of the graph below a root.
#[derive(Debug, Clone, Default)]
pub struct GraphTrace {
    /// Every reachable node, in depth-first discovery order starting at the root.
    pub nodes: Vec<Value>,
    /// Directed `(operand, result)` pairs. A value used twice by the same
    /// result (`a + a`) produces a single edge.
    pub edges: Vec<(Value, Value)>,
}

/// Collects all nodes and operand edges reachable from `root`.
///
/// Shared operands are reported once. The traversal keeps a visited set, so
/// it terminates even on a malformed (cyclic) graph.
pub fn trace(root: &Value) -> GraphTrace {
    let mut graph = GraphTrace::default();
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut seen_edges: HashSet<(NodeId, NodeId)> = HashSet::new();
    let mut stack = vec![root.clone()];

    while let Some(node) = stack.pop() {
        if !visited.insert(node.id()) {
            continue;
        }
        let operands = node.operands();
        for operand in operands.iter() {
            if seen_edges.insert((operand.id(), node.id())) {
                graph.edges.push((operand.clone(), node.clone()));
            }
        }
        // Reversed so the first operand is explored first.
        stack.extend(operands.into_iter().rev());
        graph.nodes.push(node);
    }

    graph
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
