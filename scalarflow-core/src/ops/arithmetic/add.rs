use crate::autograd::Op;
use crate::var::{Operand, Var};

/// Adds two nodes (or a node and a scalar).
///
/// Local gradient: `1` for both operands.
pub fn add_op<'t>(a: Var<'t>, b: impl Into<Operand<'t>>) -> Var<'t> {
    let tape = a.tape();
    let b = b.into().resolve(tape);
    let data = a.data() + b.data();
    tape.push(data, Op::Add(a.id(), b.id()))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
