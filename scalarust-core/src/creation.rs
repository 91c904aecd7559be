use crate::autograd::{Graph, NodeId};

/// Allocates one leaf per value, in order.
pub fn scalars(graph: &mut Graph, values: &[f64]) -> Vec<NodeId> {
    values.iter().map(|&v| graph.leaf(v)).collect()
}

/// Allocates leaves for each row of a batch.
pub fn scalar_batches(graph: &mut Graph, rows: &[Vec<f64>]) -> Vec<Vec<NodeId>> {
    rows.iter().map(|row| scalars(graph, row)).collect()
}

impl Graph {
    pub fn scalars(&mut self, values: &[f64]) -> Vec<NodeId> {
        scalars(self, values)
    }
}
