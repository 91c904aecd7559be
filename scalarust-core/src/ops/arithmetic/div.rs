// scalarust-core/src/ops/arithmetic/div.rs

use crate::autograd::{Graph, NodeId};
use crate::error::ScalarustError;
use crate::ops::arithmetic::{mul::mul_op, pow::pow_op};

/// `lhs / rhs`, built as `lhs * rhs^-1`.
///
/// Division by zero is not checked; it yields infinities like plain `f64`
/// division would.
pub fn div_op(graph: &mut Graph, lhs: NodeId, rhs: NodeId) -> Result<NodeId, ScalarustError> {
    graph.check(lhs)?;
    let reciprocal = pow_op(graph, rhs, -1.0)?;
    mul_op(graph, lhs, reciprocal)
}

impl Graph {
    pub fn div(&mut self, lhs: NodeId, rhs: NodeId) -> Result<NodeId, ScalarustError> {
        div_op(self, lhs, rhs)
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
