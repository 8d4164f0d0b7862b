use crate::autograd::{NodeId, Op, Tape};
use crate::error::ScalarFlowError;
use crate::ops::activation::{relu_op, tanh_op};
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, powf_op, sub_op};
use crate::ops::math_elem::exp_op;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Handle to a scalar node on a [`Tape`].
///
/// `Var` is `Copy`: it is only a tape reference plus a [`NodeId`]. Arithmetic
/// through `std::ops` (with another `Var` or an `f64` on either side) and the
/// methods below record new nodes on the same tape.
///
/// ```
/// use scalarflow_core::Tape;
///
/// let tape = Tape::new();
/// let a = tape.var(2.0);
/// let b = tape.var(-3.0);
/// let f = a * b + b;
/// f.backward().unwrap();
/// assert_eq!(f.data(), -9.0);
/// assert_eq!(a.grad(), -3.0);
/// assert_eq!(b.grad(), 3.0);
/// ```
#[derive(Clone, Copy)]
pub struct Var<'t> {
    tape: &'t Tape,
    id: NodeId,
}

impl<'t> Var<'t> {
    pub(crate) fn from_parts(tape: &'t Tape, id: NodeId) -> Self {
        Var { tape, id }
    }

    pub fn tape(&self) -> &'t Tape {
        self.tape
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Forward value of the node.
    ///
    /// # Panics
    /// Panics if the node was dropped by [`Tape::rewind`].
    pub fn data(&self) -> f64 {
        self.tape.node(self.id).data
    }

    /// Gradient accumulated by the last `backward()` that reached this node.
    pub fn grad(&self) -> f64 {
        self.tape.node(self.id).grad
    }

    /// Overwrites the forward value. Meant for parameter updates between
    /// training steps; nodes already computed from this one are not refreshed.
    pub fn set_data(&self, data: f64) {
        self.tape.nodes_mut()[self.id.0].data = data;
    }

    pub fn set_grad(&self, grad: f64) {
        self.tape.nodes_mut()[self.id.0].grad = grad;
    }

    pub fn op(&self) -> Op {
        self.tape.node(self.id).op
    }

    /// Diagnostic label of the producing operation (`"+"`, `"tanh"`, ...).
    pub fn op_tag(&self) -> String {
        self.op().to_string()
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.op(), Op::Leaf)
    }

    /// The nodes this one was computed from, in operator order.
    pub fn operands(&self) -> Vec<Var<'t>> {
        self.op()
            .inputs()
            .into_iter()
            .map(|id| Var::from_parts(self.tape, id))
            .collect()
    }

    pub fn exp(self) -> Var<'t> {
        exp_op(self)
    }

    pub fn tanh(self) -> Var<'t> {
        tanh_op(self)
    }

    pub fn relu(self) -> Var<'t> {
        relu_op(self)
    }

    /// Raises the node to a numeric power.
    pub fn powf(self, exponent: f64) -> Var<'t> {
        powf_op(self, exponent)
    }

    /// Raises the node to `exponent`, which must resolve to a scalar.
    ///
    /// # Errors
    /// `InvalidExponent` if `exponent` is a graph node.
    pub fn pow(self, exponent: impl Into<Operand<'t>>) -> Result<Var<'t>, ScalarFlowError> {
        pow_op(self, exponent)
    }

    /// Computes the gradient of this node with respect to every node it
    /// depends on.
    ///
    /// Gradients of all reachable nodes are reset first, so repeated calls do
    /// not accumulate across passes.
    ///
    /// # Errors
    /// `NodeNotFound` if the node (or an operand) was dropped by a rewind and
    /// `CycleDetected` if the graph is not acyclic. No gradient is modified in
    /// either case.
    pub fn backward(&self) -> Result<(), ScalarFlowError> {
        self.tape.backward(self.id)
    }
}

impl fmt::Display for Var<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Var(data={}, grad={})", self.data(), self.grad())
    }
}

impl fmt::Debug for Var<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.tape.node(self.id);
        f.debug_struct("Var")
            .field("id", &self.id)
            .field("data", &node.data)
            .field("grad", &node.grad)
            .field("op", &node.op)
            .finish()
    }
}

/// Argument of an operator: either an existing node or a raw scalar.
///
/// Operators resolve an operand to a node before recording anything; a scalar
/// becomes a fresh leaf on the tape of the other argument.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'t> {
    Node(Var<'t>),
    Scalar(f64),
}

impl<'t> Operand<'t> {
    pub(crate) fn resolve(self, tape: &'t Tape) -> Var<'t> {
        match self {
            Operand::Node(var) => {
                debug_assert!(
                    std::ptr::eq(var.tape, tape),
                    "operands must live on the same tape"
                );
                var
            }
            Operand::Scalar(value) => tape.var(value),
        }
    }
}

impl<'t> From<Var<'t>> for Operand<'t> {
    fn from(var: Var<'t>) -> Self {
        Operand::Node(var)
    }
}

impl<'t> From<&Var<'t>> for Operand<'t> {
    fn from(var: &Var<'t>) -> Self {
        Operand::Node(*var)
    }
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<'t> $trait<Var<'t>> for Var<'t> {
            type Output = Var<'t>;
            fn $method(self, rhs: Var<'t>) -> Var<'t> {
                $op_fn(self, rhs)
            }
        }

        impl<'t> $trait<f64> for Var<'t> {
            type Output = Var<'t>;
            fn $method(self, rhs: f64) -> Var<'t> {
                $op_fn(self, rhs)
            }
        }

        // Reflected form: the scalar becomes the left-hand leaf.
        impl<'t> $trait<Var<'t>> for f64 {
            type Output = Var<'t>;
            fn $method(self, rhs: Var<'t>) -> Var<'t> {
                $op_fn(rhs.tape().var(self), rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl<'t> Neg for Var<'t> {
    type Output = Var<'t>;
    fn neg(self) -> Var<'t> {
        neg_op(self)
    }
}

#[cfg(test)]
#[path = "var_test.rs"]
mod tests;
