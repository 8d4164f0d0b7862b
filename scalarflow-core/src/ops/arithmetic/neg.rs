use crate::autograd::Op;
use crate::var::Var;

/// Negates a node. Local gradient: `-1`.
pub fn neg_op(a: Var<'_>) -> Var<'_> {
    a.tape().push(-a.data(), Op::Neg(a.id()))
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
