use super::*;
use approx::assert_relative_eq;

#[test]
fn test_topological_sort_is_post_order() -> Result<(), ScalarustError> {
    let mut graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(-3.0);
    let c = graph.leaf(10.0);
    let e = graph.mul(a, b)?;
    let d = graph.add(e, c)?;

    let order = topological_sort(&graph, d)?;
    assert_eq!(order, vec![a, b, e, c, d]);
    Ok(())
}

#[test]
fn test_topological_sort_visits_shared_node_once() -> Result<(), ScalarustError> {
    let mut graph = Graph::new();
    let a = graph.leaf(3.0);
    let b = graph.add(a, a)?;
    let c = graph.mul(b, a)?;

    let order = topological_sort(&graph, c)?;
    assert_eq!(order, vec![a, b, c]);
    Ok(())
}

#[test]
fn test_topological_sort_ignores_unreachable() -> Result<(), ScalarustError> {
    let mut graph = Graph::new();
    let a = graph.leaf(1.0);
    let unrelated = graph.leaf(4.0);
    let b = graph.tanh(a)?;
    let _other = graph.relu(unrelated)?;

    let order = topological_sort(&graph, b)?;
    assert_eq!(order, vec![a, b]);
    Ok(())
}

#[test]
fn test_backward_scalar_expression() -> Result<(), ScalarustError> {
    let mut graph = Graph::new();
    let a = graph.leaf_labeled(2.0, "a");
    let b = graph.leaf_labeled(-3.0, "b");
    let c = graph.leaf_labeled(10.0, "c");
    let ab = graph.mul(a, b)?;
    let d = graph.add(ab, c)?;

    assert_eq!(graph.data(d)?, 4.0);
    graph.backward(d)?;

    assert_eq!(graph.grad(d)?, 1.0);
    assert_eq!(graph.grad(c)?, 1.0);
    assert_eq!(graph.grad(ab)?, 1.0);
    assert_eq!(graph.grad(a)?, -3.0);
    assert_eq!(graph.grad(b)?, 2.0);
    Ok(())
}

#[test]
fn test_backward_self_add_accumulates() -> Result<(), ScalarustError> {
    let mut graph = Graph::new();
    let a = graph.leaf(3.0);
    let b = graph.add(a, a)?;

    assert_eq!(graph.data(b)?, 6.0);
    graph.backward(b)?;
    assert_eq!(graph.grad(a)?, 2.0);
    Ok(())
}

#[test]
fn test_backward_shared_subgraph_waits_for_all_parents() -> Result<(), ScalarustError> {
    // f = (a*b) * (a*b + b), with the product reused.
    let mut graph = Graph::new();
    let a = graph.leaf(-2.0);
    let b = graph.leaf(3.0);
    let d = graph.mul(a, b)?;
    let e = graph.add(d, b)?;
    let f = graph.mul(d, e)?;
    graph.backward(f)?;

    // df/dd = e + d = 2ab + b = -9; df/da = b * df/dd = -27
    // df/db = a * df/dd + d = 18 - 6 = 12
    assert_eq!(graph.data(f)?, 18.0);
    assert_eq!(graph.grad(d)?, -9.0);
    assert_eq!(graph.grad(a)?, -27.0);
    assert_eq!(graph.grad(b)?, 12.0);
    Ok(())
}

#[test]
fn test_backward_all_ops_chain() -> Result<(), ScalarustError> {
    let mut graph = Graph::new();
    let a = graph.leaf(-4.0);
    let b = graph.relu(a)?;
    assert_eq!(graph.data(b)?, 0.0);
    let c = graph.add_scalar(b, 10.0)?;
    assert_eq!(graph.data(c)?, 10.0);
    let d = graph.tanh(c)?;
    assert_eq!(graph.data(d)?, 10.0_f64.tanh());
    let e = graph.neg(d)?;
    assert_eq!(graph.data(e)?, -(10.0_f64.tanh()));
    let f = graph.pow(e, 2.0)?;
    assert_eq!(graph.data(f)?.round(), 1.0);
    let ten = graph.constant(10.0);
    let g = graph.sub(f, ten)?;
    assert_eq!(graph.data(g)?.round(), -9.0);

    graph.backward(g)?;
    let t = 10.0_f64.tanh();
    let expected = 2.0 * -t * -1.0 * (1.0 - t * t);
    assert_relative_eq!(graph.grad(b)?, expected, max_relative = 1e-9);
    assert_relative_eq!(graph.grad(b)?, 1.6489228991292286e-08, max_relative = 1e-6);
    // relu was inactive
    assert_eq!(graph.grad(a)?, 0.0);
    Ok(())
}

#[test]
fn test_backward_twice_accumulates() -> Result<(), ScalarustError> {
    let mut graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(5.0);
    let c = graph.mul(a, b)?;

    graph.backward(c)?;
    assert_eq!(graph.grad(a)?, 5.0);
    graph.backward(c)?;
    assert_eq!(graph.grad(a)?, 10.0);
    assert_eq!(graph.grad(b)?, 4.0);
    Ok(())
}

#[test]
fn test_backward_after_zero_grad_matches_single_pass() -> Result<(), ScalarustError> {
    let mut graph = Graph::new();
    let a = graph.leaf(0.3);
    let b = graph.leaf(-1.2);
    let ab = graph.mul(a, b)?;
    let c = graph.tanh(ab)?;
    let out = graph.add(c, a)?;

    graph.backward(out)?;
    let first = (graph.grad(a)?, graph.grad(b)?);

    graph.zero_grad_all();
    graph.backward(out)?;
    assert_eq!((graph.grad(a)?, graph.grad(b)?), first);
    Ok(())
}

#[test]
fn test_backward_on_leaf_seeds_itself() -> Result<(), ScalarustError> {
    let mut graph = Graph::new();
    let a = graph.leaf(7.0);
    graph.backward(a)?;
    assert_eq!(graph.grad(a)?, 1.0);
    Ok(())
}

#[test]
fn test_backward_deep_chain_does_not_overflow() -> Result<(), ScalarustError> {
    let mut graph = Graph::new();
    let x = graph.leaf(1.0);
    let mut acc = graph.constant(0.0);
    for _ in 0..200_000 {
        acc = graph.add(acc, x)?;
    }
    graph.backward(acc)?;
    assert_eq!(graph.grad(x)?, 200_000.0);
    Ok(())
}

#[test]
fn test_backward_invalid_root() {
    let mut graph = Graph::new();
    let stranger = Graph::new().leaf(1.0);
    let result = graph.backward(stranger);
    assert_eq!(result, Err(ScalarustError::InvalidNode { id: 0, len: 0 }));
}
