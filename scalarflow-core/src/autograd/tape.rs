use super::backward_op::Op;
use super::graph::topological_sort;
use crate::error::ScalarFlowError;
use crate::var::Var;
use log::debug;
use std::cell::{RefCell, RefMut};
use std::fmt;

/// Index of a node inside its [`Tape`].
///
/// Ids are handed out in creation order, so every operand id is smaller than
/// the id of the node computed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Storage for one scalar in the computation graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Node {
    /// Forward value.
    pub(crate) data: f64,
    /// Gradient accumulator, written by `backward()`.
    pub(crate) grad: f64,
    /// The operation that produced this node, with its operand ids.
    pub(crate) op: Op,
}

impl Node {
    pub(crate) fn new(data: f64, op: Op) -> Self {
        Node { data, grad: 0.0, op }
    }
}

/// Length of a tape at some point in time, see [`Tape::mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TapeMark(usize);

/// Arena holding every node of a computation graph.
///
/// Nodes refer to their operands by [`NodeId`], so the graph never forms
/// reference cycles. The tape uses interior mutability: graph construction,
/// parameter updates and `backward()` all work through shared references,
/// which lets many [`Var`] handles borrow the same tape.
#[derive(Default)]
pub struct Tape {
    nodes: RefCell<Vec<Node>>,
}

impl Tape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a leaf node holding `data`.
    pub fn var(&self, data: f64) -> Var<'_> {
        self.push(data, Op::Leaf)
    }

    /// Number of nodes currently stored.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    /// Records the current length of the tape.
    ///
    /// Typically taken right after a network is built, so that every node of a
    /// training step can be dropped again with [`Tape::rewind`].
    pub fn mark(&self) -> TapeMark {
        TapeMark(self.len())
    }

    /// Drops every node created after `mark`.
    ///
    /// `Var`s pointing at dropped nodes become invalid: `backward()` on them
    /// reports [`ScalarFlowError::NodeNotFound`] and value accessors panic.
    pub fn rewind(&self, mark: TapeMark) {
        let mut nodes = self.nodes.borrow_mut();
        if mark.0 < nodes.len() {
            debug!("Tape: rewinding from {} to {} nodes", nodes.len(), mark.0);
            nodes.truncate(mark.0);
        }
    }

    pub(crate) fn push(&self, data: f64, op: Op) -> Var<'_> {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(Node::new(data, op));
        Var::from_parts(self, id)
    }

    pub(crate) fn nodes_mut(&self) -> RefMut<'_, Vec<Node>> {
        self.nodes.borrow_mut()
    }

    /// Copy of the node behind `id`.
    ///
    /// # Panics
    /// Panics if `id` was dropped by a rewind.
    pub(crate) fn node(&self, id: NodeId) -> Node {
        self.nodes.borrow()[id.0]
    }

    /// Runs reverse-mode differentiation rooted at `root`.
    ///
    /// The traversal order is computed up front; gradients are only touched once
    /// it is known, so an ordering error leaves the tape unchanged. Every node
    /// reachable from `root` has its gradient reset to zero before `root` is
    /// seeded with 1 and the local rules run, consumers before operands.
    pub(crate) fn backward(&self, root: NodeId) -> Result<(), ScalarFlowError> {
        let order = {
            let nodes = self.nodes.borrow();
            topological_sort(&nodes, root)?
        };
        debug!(
            "Tape: backward from {:?} over {} reachable nodes",
            root,
            order.len()
        );

        let mut nodes = self.nodes.borrow_mut();
        for id in &order {
            nodes[id.0].grad = 0.0;
        }
        nodes[root.0].grad = 1.0;

        for id in order.iter().rev() {
            let output = nodes[id.0];
            for (input, contribution) in output.op.backward(&nodes, &output) {
                nodes[input.0].grad += contribution;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tape").field("len", &self.len()).finish()
    }
}

#[cfg(test)]
#[path = "tape_test.rs"]
mod tests;
