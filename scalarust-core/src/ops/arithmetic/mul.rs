// scalarust-core/src/ops/arithmetic/mul.rs

use crate::autograd::{Graph, NodeId, Op};
use crate::error::ScalarustError;

/// Multiplies two nodes.
///
/// Backward: `lhs.grad += rhs.data * out.grad`, `rhs.grad += lhs.data * out.grad`.
pub fn mul_op(graph: &mut Graph, lhs: NodeId, rhs: NodeId) -> Result<NodeId, ScalarustError> {
    let a = graph.data(lhs)?;
    let b = graph.data(rhs)?;
    Ok(graph.push(a * b, Op::Mul(lhs, rhs)))
}

impl Graph {
    pub fn mul(&mut self, lhs: NodeId, rhs: NodeId) -> Result<NodeId, ScalarustError> {
        mul_op(self, lhs, rhs)
    }

    /// `lhs * rhs` where `rhs` becomes a new constant leaf.
    pub fn mul_scalar(&mut self, lhs: NodeId, rhs: f64) -> Result<NodeId, ScalarustError> {
        self.check(lhs)?;
        let c = self.constant(rhs);
        mul_op(self, lhs, c)
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
