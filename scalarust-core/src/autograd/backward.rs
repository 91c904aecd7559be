use crate::autograd::backward_op::propagate;
use crate::autograd::graph::Graph;
use crate::autograd::node::NodeId;
use crate::error::ScalarustError;
use log::{debug, trace, warn};

/// Topological order of the subgraph reachable from `root`.
///
/// Depth-first over the operands in call order, appending a node only after
/// all of its operands have been appended (post-order). A visited set keyed
/// by node id guarantees each node appears exactly once even when it is
/// reachable along several paths or used twice by the same operation.
///
/// The traversal keeps its own stack, so long chains (a loss summed over
/// many examples) cannot exhaust the call stack. The order produced is the
/// same as the recursive formulation.
pub fn topological_sort(graph: &Graph, root: NodeId) -> Result<Vec<NodeId>, ScalarustError> {
    graph.check(root)?;
    let nodes = graph.nodes();

    let mut visited = vec![false; nodes.len()];
    let mut order = Vec::new();
    // (node, index of the next operand to visit)
    let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
    visited[root.index] = true;

    while let Some(&(id, next)) = stack.last() {
        match nodes[id.index].op.child(next) {
            Some(child) => {
                if let Some(top) = stack.last_mut() {
                    top.1 += 1;
                }
                if !visited[child.index] {
                    visited[child.index] = true;
                    stack.push((child, 0));
                }
            }
            None => {
                order.push(id);
                stack.pop();
            }
        }
    }

    Ok(order)
}

impl Graph {
    /// Computes d`root`/d`node` for every node reachable from `root`.
    ///
    /// Seeds `root.grad = 1` and applies each node's local rule in reverse
    /// topological order, so a node's gradient is complete before it is
    /// pushed further upstream. Gradients accumulate: calling this twice
    /// without zeroing adds the second pass on top of the first.
    pub fn backward(&mut self, root: NodeId) -> Result<(), ScalarustError> {
        let order = topological_sort(self, root)?;

        if order.len() == 1 {
            warn!("backward() called on leaf node {}. Only its own gradient is seeded.", root);
        }

        let nodes = self.nodes_mut();
        nodes[root.index].grad = 1.0;
        for &id in order.iter().rev() {
            trace!("backward: node {} ({:?}) grad={}", id, nodes[id.index].op, nodes[id.index].grad);
            propagate(nodes, id);
        }

        debug!("backward from {} finished over {} nodes", root, order.len());
        Ok(())
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
