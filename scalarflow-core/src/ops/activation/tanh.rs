use crate::autograd::Op;
use crate::var::Var;

/// Applies the hyperbolic tangent.
///
/// Local gradient: `1 - tanh(x)^2`, read from the output node.
pub fn tanh_op(a: Var<'_>) -> Var<'_> {
    a.tape().push(a.data().tanh(), Op::Tanh(a.id()))
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
