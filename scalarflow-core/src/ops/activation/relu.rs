use crate::autograd::Op;
use crate::var::Var;

/// Applies the Rectified Linear Unit: `max(0, x)`.
///
/// Local gradient: `1` where the input is strictly positive, `0` elsewhere
/// (including at `x == 0`), scaled by the upstream gradient like every other
/// rule.
pub fn relu_op(a: Var<'_>) -> Var<'_> {
    let x = a.data();
    let data = if x > 0.0 { x } else { 0.0 };
    a.tape().push(data, Op::Relu(a.id()))
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
