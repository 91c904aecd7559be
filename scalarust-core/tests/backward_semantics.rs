use approx::assert_relative_eq;
use scalarust_core::autograd::grad_check::check_grad;
use scalarust_core::{Graph, NodeId, ScalarustError};

mod common;
use common::{grads, init_logger};

#[test]
fn test_diamond_graph_accumulates_before_propagating() -> Result<(), ScalarustError> {
    init_logger();
    // x feeds two branches that rejoin: f = tanh(x) * x^2
    let mut graph = Graph::new();
    let x = graph.leaf(0.7);
    let t = graph.tanh(x)?;
    let sq = graph.pow(x, 2.0)?;
    let f = graph.mul(t, sq)?;
    graph.backward(f)?;

    let th = 0.7_f64.tanh();
    let expected = (1.0 - th * th) * 0.49 + th * 2.0 * 0.7;
    assert_relative_eq!(graph.grad(x)?, expected, max_relative = 1e-12);
    Ok(())
}

#[test]
fn test_zero_then_backward_matches_fresh_graph() -> Result<(), ScalarustError> {
    init_logger();
    let build = |g: &mut Graph| -> Result<(Vec<NodeId>, NodeId), ScalarustError> {
        let xs = g.scalars(&[0.4, -1.1, 2.0]);
        let a = g.mul(xs[0], xs[1])?;
        let b = g.relu(xs[2])?;
        let c = g.add(a, b)?;
        let d = g.tanh(c)?;
        let e = g.mul(d, xs[0])?;
        Ok((xs, e))
    };

    let mut fresh = Graph::new();
    let (fresh_xs, fresh_out) = build(&mut fresh)?;
    fresh.backward(fresh_out)?;
    let expected = grads(&fresh, &fresh_xs)?;

    let mut reused = Graph::new();
    let (xs, out) = build(&mut reused)?;
    reused.backward(out)?;
    reused.backward(out)?;
    // Interior nodes keep their first-pass grads too, so the second pass
    // lands on top of stale state.
    assert_ne!(grads(&reused, &xs)?, expected);

    reused.zero_grad_all();
    reused.backward(out)?;
    assert_eq!(grads(&reused, &xs)?, expected);
    Ok(())
}

#[test]
fn test_composite_expression_matches_finite_differences() {
    init_logger();
    let func = |g: &mut Graph, x: &[NodeId]| -> Result<NodeId, ScalarustError> {
        // (a*b + b^3) / (1 + relu(c)) - tanh(a)
        let ab = g.mul(x[0], x[1])?;
        let b3 = g.pow(x[1], 3.0)?;
        let num = g.add(ab, b3)?;
        let r = g.relu(x[2])?;
        let den = g.add_scalar(r, 1.0)?;
        let q = g.div(num, den)?;
        let t = g.tanh(x[0])?;
        g.sub(q, t)
    };
    check_grad(func, &[0.6, -1.3, 0.8], 1e-6, 1e-5).unwrap();
}
