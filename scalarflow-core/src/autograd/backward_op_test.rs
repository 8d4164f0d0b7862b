use super::*;
use crate::autograd::Tape;
use approx::assert_relative_eq;

fn node(data: f64, grad: f64, op: Op) -> Node {
    Node { data, grad, op }
}

#[test]
fn test_inputs_order() {
    let a = NodeId(0);
    let b = NodeId(1);
    assert!(Op::Leaf.inputs().is_empty());
    assert_eq!(Op::Add(a, b).inputs(), vec![a, b]);
    assert_eq!(Op::Mul(b, a).inputs(), vec![b, a]);
    assert_eq!(Op::Pow(a, 3.0).inputs(), vec![a]);
    assert_eq!(Op::Tanh(b).inputs(), vec![b]);
}

#[test]
fn test_input_by_index_matches_inputs() {
    let a = NodeId(0);
    let b = NodeId(1);
    let ops = [
        Op::Leaf,
        Op::Add(a, b),
        Op::Mul(b, a),
        Op::Pow(a, 2.0),
        Op::Neg(b),
        Op::Exp(a),
        Op::Tanh(b),
        Op::Relu(a),
    ];
    for op in ops {
        let by_index: Vec<NodeId> = (0..3).map_while(|i| op.input(i)).collect();
        assert_eq!(by_index, op.inputs(), "{:?}", op);
        assert_eq!(op.input(op.inputs().len()), None);
    }
}

#[test]
fn test_labels() {
    let a = NodeId(0);
    assert_eq!(Op::Leaf.to_string(), "");
    assert_eq!(Op::Add(a, a).to_string(), "+");
    assert_eq!(Op::Mul(a, a).to_string(), "*");
    assert_eq!(Op::Pow(a, 2.0).to_string(), "**2");
    assert_eq!(Op::Pow(a, -0.5).to_string(), "**-0.5");
    assert_eq!(Op::Neg(a).to_string(), "neg");
    assert_eq!(Op::Exp(a).to_string(), "exp");
    assert_eq!(Op::Tanh(a).to_string(), "tanh");
    assert_eq!(Op::Relu(a).to_string(), "relu");
}

#[test]
fn test_rules_scale_by_upstream_grad() {
    let a = NodeId(0);
    let b = NodeId(1);
    let nodes = vec![node(3.0, 0.0, Op::Leaf), node(-2.0, 0.0, Op::Leaf)];
    let g = 0.5;

    let out = node(1.0, g, Op::Add(a, b));
    assert_eq!(out.op.backward(&nodes, &out), vec![(a, 0.5), (b, 0.5)]);

    let out = node(-6.0, g, Op::Mul(a, b));
    assert_eq!(out.op.backward(&nodes, &out), vec![(a, -1.0), (b, 1.5)]);

    let out = node(9.0, g, Op::Pow(a, 2.0));
    assert_eq!(out.op.backward(&nodes, &out), vec![(a, 3.0)]);

    let out = node(-3.0, g, Op::Neg(a));
    assert_eq!(out.op.backward(&nodes, &out), vec![(a, -0.5)]);

    let out = node(3.0f64.exp(), g, Op::Exp(a));
    let contributions = out.op.backward(&nodes, &out);
    assert_relative_eq!(contributions[0].1, 0.5 * 3.0f64.exp());

    let t = 3.0f64.tanh();
    let out = node(t, g, Op::Tanh(a));
    let contributions = out.op.backward(&nodes, &out);
    assert_relative_eq!(contributions[0].1, 0.5 * (1.0 - t * t));

    // relu: the upstream gradient passes through for positive inputs.
    let out = node(3.0, g, Op::Relu(a));
    assert_eq!(out.op.backward(&nodes, &out), vec![(a, 0.5)]);
    let out = node(0.0, g, Op::Relu(b));
    assert_eq!(out.op.backward(&nodes, &out), vec![(b, 0.0)]);
}

#[test]
fn test_leaf_rule_is_noop() {
    let nodes = vec![node(1.0, 1.0, Op::Leaf)];
    assert!(Op::Leaf.backward(&nodes, &nodes[0]).is_empty());
}

#[test]
fn test_pow_accumulates_with_other_consumers() -> Result<(), crate::ScalarFlowError> {
    // a feeds both a^2 and 3a: d/da (a^2 + 3a) = 2a + 3.
    let tape = Tape::new();
    let a = tape.var(4.0);
    let f = a.powf(2.0) + a * 3.0;
    f.backward()?;
    assert_relative_eq!(a.grad(), 11.0);
    Ok(())
}
