use scalarust_core::{Graph, NodeId, ScalarustError};

// Shared by several integration test crates; not every crate uses every helper.
#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The four-example dataset used by the training tests.
#[allow(dead_code)]
pub(crate) fn toy_dataset() -> (Vec<Vec<f64>>, Vec<f64>) {
    let xs = vec![
        vec![2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let ys = vec![1.0, -1.0, -1.0, 1.0];
    (xs, ys)
}

/// Gradients of `ids`, in order.
#[allow(dead_code)]
pub(crate) fn grads(graph: &Graph, ids: &[NodeId]) -> Result<Vec<f64>, ScalarustError> {
    ids.iter().map(|&id| graph.grad(id)).collect()
}
