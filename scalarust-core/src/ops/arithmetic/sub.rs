// scalarust-core/src/ops/arithmetic/sub.rs

use crate::autograd::{Graph, NodeId};
use crate::error::ScalarustError;
use crate::ops::arithmetic::{add::add_op, neg::neg_op};

/// `lhs - rhs`, built as `lhs + neg(rhs)`.
pub fn sub_op(graph: &mut Graph, lhs: NodeId, rhs: NodeId) -> Result<NodeId, ScalarustError> {
    graph.check(lhs)?;
    let negated = neg_op(graph, rhs)?;
    add_op(graph, lhs, negated)
}

impl Graph {
    pub fn sub(&mut self, lhs: NodeId, rhs: NodeId) -> Result<NodeId, ScalarustError> {
        sub_op(self, lhs, rhs)
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
