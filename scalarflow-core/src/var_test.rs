use super::*;
use approx::assert_relative_eq;

#[test]
fn test_operators_with_scalars_on_either_side() {
    let tape = Tape::new();
    let a = tape.var(-6.5);
    assert_relative_eq!((a + 0.5).data(), -6.0);
    assert_relative_eq!((0.5 + a).data(), -6.0);
    assert_relative_eq!((a * 0.5).data(), -3.25);
    assert_relative_eq!((0.5 * a).data(), -3.25);
    assert_relative_eq!((a - 0.5).data(), -7.0);
    assert_relative_eq!((0.5 - a).data(), 7.0);
    assert_relative_eq!((a / 2.0).data(), -3.25);
    assert_relative_eq!((13.0 / a).data(), -2.0, epsilon = 1e-12);
    assert_relative_eq!((-a).data(), 6.5);
}

#[test]
fn test_reflected_scalar_becomes_leaf_operand() {
    let tape = Tape::new();
    let a = tape.var(9.8);
    let b = 0.4 + a;
    let operands = b.operands();
    assert_eq!(operands.len(), 2);
    assert!(operands[0].is_leaf());
    assert_eq!(operands[0].data(), 0.4);
    assert_eq!(operands[1].id(), a.id());
}

#[test]
fn test_op_tags() {
    let tape = Tape::new();
    let a = tape.var(2.0);
    assert_eq!((a + a).op_tag(), "+");
    assert_eq!((a * a).op_tag(), "*");
    assert_eq!(a.powf(3.0).op_tag(), "**3");
    assert_eq!((-a).op_tag(), "neg");
    assert_eq!(a.exp().op_tag(), "exp");
    assert_eq!(a.tanh().op_tag(), "tanh");
    assert_eq!(a.relu().op_tag(), "relu");
    // sub and div are compositions
    assert_eq!((a - a).op_tag(), "+");
    assert_eq!((a / a).op_tag(), "*");
}

#[test]
fn test_pow_accepts_scalar_operand() -> Result<(), ScalarFlowError> {
    let tape = Tape::new();
    let a = tape.var(3.0);
    let b = a.pow(2.0)?;
    assert_relative_eq!(b.data(), 9.0);
    Ok(())
}

#[test]
fn test_pow_rejects_node_exponent() {
    let tape = Tape::new();
    let a = tape.var(3.0);
    let k = tape.var(2.0);
    let len = tape.len();
    assert_eq!(
        a.pow(k).err(),
        Some(ScalarFlowError::InvalidExponent { exponent: 2.0 })
    );
    assert_eq!(tape.len(), len);
}

#[test]
fn test_set_data_and_grad() {
    let tape = Tape::new();
    let p = tape.var(1.0);
    p.set_data(0.25);
    p.set_grad(-4.0);
    assert_eq!(p.data(), 0.25);
    assert_eq!(p.grad(), -4.0);
}

#[test]
fn test_display() {
    let tape = Tape::new();
    let a = tape.var(1.5);
    assert_eq!(a.to_string(), "Var(data=1.5, grad=0)");
    assert!(format!("{:?}", a).contains("Leaf"));
}

#[test]
fn test_operand_conversions() {
    let tape = Tape::new();
    let a = tape.var(1.0);
    assert!(matches!(Operand::from(a), Operand::Node(_)));
    assert!(matches!(Operand::from(&a), Operand::Node(_)));
    assert!(matches!(Operand::from(2.0), Operand::Scalar(x) if x == 2.0));
}
