use super::*;
use crate::autograd::Tape;
use crate::error::ScalarFlowError;
use approx::assert_relative_eq;

#[test]
fn test_tanh_forward() {
    let tape = Tape::new();
    assert_eq!(tanh_op(tape.var(0.0)).data(), 0.0);
    assert_relative_eq!(tanh_op(tape.var(0.5)).data(), 0.5f64.tanh());
    // saturates without overflow
    assert_relative_eq!(tanh_op(tape.var(50.0)).data(), 1.0);
}

#[test]
fn test_tanh_backward() -> Result<(), ScalarFlowError> {
    let tape = Tape::new();
    let a = tape.var(0.8814);
    let b = tanh_op(a);
    b.backward()?;
    let t = 0.8814f64.tanh();
    assert_relative_eq!(a.grad(), 1.0 - t * t, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_tanh_matches_exp_composition() -> Result<(), ScalarFlowError> {
    for &x in &[0.7, -1.3, 9.8] {
        let tape = Tape::new();
        let a = tape.var(x);
        let direct = tanh_op(a);
        direct.backward()?;
        let direct_grad = a.grad();

        let e = (a * 2.0).exp();
        let composed = (e - 1.0) / (e + 1.0);
        composed.backward()?;

        assert_relative_eq!(direct.data(), composed.data(), epsilon = 1e-12);
        assert_relative_eq!(direct_grad, a.grad(), epsilon = 1e-9);
    }
    Ok(())
}
