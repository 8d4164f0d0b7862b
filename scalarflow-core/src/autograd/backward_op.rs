use super::tape::{Node, NodeId};
use std::fmt;

/// The operation that produced a node, together with the ids of its operands.
///
/// Every node stores its `Op` instead of a backward closure. During the backward
/// pass the tape dispatches on the variant to find the local-gradient rule, so
/// the graph holds plain indices and cannot form reference cycles.
///
/// Subtraction and division have no variant of their own: they are built from
/// `Add`/`Neg` and `Mul`/`Pow`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// A node created directly from a scalar. Its rule is a no-op.
    Leaf,
    Add(NodeId, NodeId),
    Mul(NodeId, NodeId),
    /// Power by a numeric exponent; the exponent is not a graph node.
    Pow(NodeId, f64),
    Neg(NodeId),
    Exp(NodeId),
    Tanh(NodeId),
    Relu(NodeId),
}

impl Op {
    /// Returns the operand ids, in the order they were passed to the operator.
    pub fn inputs(&self) -> Vec<NodeId> {
        match *self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) | Op::Mul(a, b) => vec![a, b],
            Op::Pow(a, _) | Op::Neg(a) | Op::Exp(a) | Op::Tanh(a) | Op::Relu(a) => vec![a],
        }
    }

    /// The `index`-th operand id, without building the full list.
    pub(crate) fn input(&self, index: usize) -> Option<NodeId> {
        match (*self, index) {
            (Op::Add(a, _) | Op::Mul(a, _), 0) => Some(a),
            (Op::Add(_, b) | Op::Mul(_, b), 1) => Some(b),
            (Op::Pow(a, _) | Op::Neg(a) | Op::Exp(a) | Op::Tanh(a) | Op::Relu(a), 0) => Some(a),
            _ => None,
        }
    }

    /// Computes the gradient contribution of `output` to each of its operands.
    ///
    /// `output.grad` is the fully accumulated gradient of the node at the time
    /// the rule runs. The returned pairs must be *added* to the operands'
    /// gradients; an operand that appears twice (e.g. `a * a`) gets two entries.
    ///
    /// All operand ids must exist in `nodes`; the backward traversal checks
    /// this while ordering the graph.
    pub(crate) fn backward(&self, nodes: &[Node], output: &Node) -> Vec<(NodeId, f64)> {
        let g = output.grad;
        match *self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) => vec![(a, g), (b, g)],
            Op::Mul(a, b) => {
                let a_data = nodes[a.0].data;
                let b_data = nodes[b.0].data;
                vec![(a, b_data * g), (b, a_data * g)]
            }
            Op::Pow(a, k) => {
                let a_data = nodes[a.0].data;
                vec![(a, k * a_data.powf(k - 1.0) * g)]
            }
            Op::Neg(a) => vec![(a, -g)],
            Op::Exp(a) => vec![(a, output.data * g)],
            Op::Tanh(a) => vec![(a, (1.0 - output.data * output.data) * g)],
            Op::Relu(a) => {
                let contribution = if nodes[a.0].data > 0.0 { g } else { 0.0 };
                vec![(a, contribution)]
            }
        }
    }
}

/// Diagnostic label of the operation; leaves have an empty label.
impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => Ok(()),
            Op::Add(..) => write!(f, "+"),
            Op::Mul(..) => write!(f, "*"),
            Op::Pow(_, k) => write!(f, "**{}", k),
            Op::Neg(_) => write!(f, "neg"),
            Op::Exp(_) => write!(f, "exp"),
            Op::Tanh(_) => write!(f, "tanh"),
            Op::Relu(_) => write!(f, "relu"),
        }
    }
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
