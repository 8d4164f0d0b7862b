use super::{mul_op, powf_op};
use crate::var::{Operand, Var};

/// Computes `a / b` as `a * b^-1`.
///
/// Dividing by a zero-valued node gives an infinite forward value, following
/// IEEE-754; no error is raised.
pub fn div_op<'t>(a: Var<'t>, b: impl Into<Operand<'t>>) -> Var<'t> {
    let b = b.into().resolve(a.tape());
    mul_op(a, powf_op(b, -1.0))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
