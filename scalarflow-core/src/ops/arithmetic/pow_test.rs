use super::*;
use crate::autograd::Tape;
use approx::assert_relative_eq;

#[test]
fn test_powf_forward_backward() -> Result<(), ScalarFlowError> {
    let tape = Tape::new();
    let a = tape.var(3.0);
    let b = powf_op(a, 3.0);
    assert_relative_eq!(b.data(), 27.0);
    b.backward()?;
    assert_relative_eq!(a.grad(), 27.0);
    Ok(())
}

#[test]
fn test_powf_negative_exponent() -> Result<(), ScalarFlowError> {
    let tape = Tape::new();
    let a = tape.var(2.0);
    let b = powf_op(a, -2.0);
    assert_relative_eq!(b.data(), 0.25);
    b.backward()?;
    assert_relative_eq!(a.grad(), -0.25);
    Ok(())
}

#[test]
fn test_pow_chain_rule() -> Result<(), ScalarFlowError> {
    // (2a)^2 at a = 1.5: d/da = 8a = 12
    let tape = Tape::new();
    let a = tape.var(1.5);
    let b = pow_op(a * 2.0, 2.0)?;
    b.backward()?;
    assert_relative_eq!(a.grad(), 12.0);
    Ok(())
}

#[test]
fn test_pow_shared_operand_accumulates() -> Result<(), ScalarFlowError> {
    // a^2 * a^3 = a^5, derivative 5a^4
    let tape = Tape::new();
    let a = tape.var(1.2);
    let f = powf_op(a, 2.0) * powf_op(a, 3.0);
    f.backward()?;
    assert_relative_eq!(a.grad(), 5.0 * 1.2f64.powi(4), epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_pow_node_exponent_fails() {
    let tape = Tape::new();
    let a = tape.var(3.0);
    let k = tape.var(0.5);
    assert_eq!(
        pow_op(a, k).err(),
        Some(ScalarFlowError::InvalidExponent { exponent: 0.5 })
    );
}
