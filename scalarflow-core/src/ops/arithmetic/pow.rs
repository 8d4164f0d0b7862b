use crate::autograd::Op;
use crate::error::ScalarFlowError;
use crate::var::{Operand, Var};

/// Raises a node to a numeric exponent.
///
/// Local gradient: `k * a^(k-1)`.
pub fn powf_op(base: Var<'_>, exponent: f64) -> Var<'_> {
    let data = base.data().powf(exponent);
    base.tape().push(data, Op::Pow(base.id(), exponent))
}

/// Fallible form of [`powf_op`] taking an [`Operand`] exponent.
///
/// Only scalar exponents are supported; differentiating with respect to the
/// exponent is not.
///
/// # Errors
/// `InvalidExponent` if `exponent` is a graph node. Nothing is recorded on the
/// tape in that case.
pub fn pow_op<'t>(
    base: Var<'t>,
    exponent: impl Into<Operand<'t>>,
) -> Result<Var<'t>, ScalarFlowError> {
    match exponent.into() {
        Operand::Scalar(k) => Ok(powf_op(base, k)),
        Operand::Node(node) => Err(ScalarFlowError::InvalidExponent {
            exponent: node.data(),
        }),
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
