use super::*;
use crate::autograd::Tape;
use crate::error::ScalarFlowError;
use approx::assert_relative_eq;

#[test]
fn test_add_forward() {
    let tape = Tape::new();
    let a = tape.var(1.0);
    let b = tape.var(4.0);
    assert_relative_eq!(add_op(a, b).data(), 5.0);
    assert_relative_eq!(add_op(a, 2.5).data(), 3.5);
}

#[test]
fn test_add_backward() -> Result<(), ScalarFlowError> {
    let tape = Tape::new();
    let a = tape.var(1.0);
    let b = tape.var(4.0);
    let c = add_op(a, b);
    c.backward()?;
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 1.0);
    Ok(())
}

#[test]
fn test_add_same_operand_twice() -> Result<(), ScalarFlowError> {
    let tape = Tape::new();
    let a = tape.var(3.0);
    let c = add_op(a, a);
    c.backward()?;
    assert_eq!(c.data(), 6.0);
    assert_eq!(a.grad(), 2.0);
    Ok(())
}
