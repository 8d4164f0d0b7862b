use super::{add_op, neg_op};
use crate::var::{Operand, Var};

/// Computes `a - b` as `a + (-b)`.
///
/// No dedicated backward rule is needed: the gradient flows through the
/// recorded `Add` and `Neg` nodes.
pub fn sub_op<'t>(a: Var<'t>, b: impl Into<Operand<'t>>) -> Var<'t> {
    let b = b.into().resolve(a.tape());
    add_op(a, neg_op(b))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
