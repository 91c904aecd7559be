// scalarust-core/src/ops/arithmetic/add.rs

use crate::autograd::{Graph, NodeId, Op};
use crate::error::ScalarustError;

/// Adds two nodes.
///
/// `out = lhs + rhs`; backward adds `out.grad` to both operands. Passing the
/// same node twice is valid and gives it a gradient of `2 * out.grad`.
pub fn add_op(graph: &mut Graph, lhs: NodeId, rhs: NodeId) -> Result<NodeId, ScalarustError> {
    let a = graph.data(lhs)?;
    let b = graph.data(rhs)?;
    Ok(graph.push(a + b, Op::Add(lhs, rhs)))
}

/// Sums a non-empty slice of nodes by folding `add` from the left.
pub fn sum_op(graph: &mut Graph, terms: &[NodeId]) -> Result<NodeId, ScalarustError> {
    let (&first, rest) = terms.split_first().ok_or(ScalarustError::EmptyInput)?;
    for &id in terms {
        graph.check(id)?;
    }
    let mut acc = first;
    for &term in rest {
        acc = add_op(graph, acc, term)?;
    }
    Ok(acc)
}

impl Graph {
    pub fn add(&mut self, lhs: NodeId, rhs: NodeId) -> Result<NodeId, ScalarustError> {
        add_op(self, lhs, rhs)
    }

    /// `lhs + rhs` where `rhs` becomes a new constant leaf.
    pub fn add_scalar(&mut self, lhs: NodeId, rhs: f64) -> Result<NodeId, ScalarustError> {
        self.check(lhs)?;
        let c = self.constant(rhs);
        add_op(self, lhs, c)
    }

    pub fn sum(&mut self, terms: &[NodeId]) -> Result<NodeId, ScalarustError> {
        sum_op(self, terms)
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
