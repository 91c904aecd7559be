use super::*;
use crate::autograd::grad_check::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_tanh_forward_and_backward() -> Result<(), ScalarustError> {
    let mut graph = Graph::new();
    let x = graph.leaf(0.8814);
    let y = tanh_op(&mut graph, x)?;

    let t = 0.8814_f64.tanh();
    assert_eq!(graph.data(y)?, t);
    assert_eq!(graph.op(y)?, Op::Tanh(x));

    graph.backward(y)?;
    assert_relative_eq!(graph.grad(x)?, 1.0 - t * t);
    Ok(())
}

#[test]
fn test_tanh_at_zero_has_unit_slope() -> Result<(), ScalarustError> {
    let mut graph = Graph::new();
    let x = graph.leaf(0.0);
    let y = graph.tanh(x)?;
    graph.backward(y)?;
    assert_eq!(graph.data(y)?, 0.0);
    assert_eq!(graph.grad(x)?, 1.0);
    Ok(())
}

#[test]
fn test_tanh_check_grad() {
    for &x0 in &[-2.0, -0.3, 0.0, 0.9, 3.0] {
        let func = |g: &mut Graph, x: &[NodeId]| -> Result<NodeId, ScalarustError> { g.tanh(x[0]) };
        check_grad(func, &[x0], 1e-6, 1e-6).unwrap();
    }
}
