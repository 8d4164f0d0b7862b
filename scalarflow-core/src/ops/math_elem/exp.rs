use crate::autograd::Op;
use crate::var::Var;

/// Computes `e^x`. Local gradient: the output value itself.
pub fn exp_op(a: Var<'_>) -> Var<'_> {
    a.tape().push(a.data().exp(), Op::Exp(a.id()))
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
