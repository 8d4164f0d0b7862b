use crate::autograd::Op;
use crate::var::{Operand, Var};

/// Multiplies two nodes (or a node and a scalar).
///
/// Local gradient: the *other* operand's data.
pub fn mul_op<'t>(a: Var<'t>, b: impl Into<Operand<'t>>) -> Var<'t> {
    let tape = a.tape();
    let b = b.into().resolve(tape);
    let data = a.data() * b.data();
    tape.push(data, Op::Mul(a.id(), b.id()))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
