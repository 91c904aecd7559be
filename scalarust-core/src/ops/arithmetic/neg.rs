// scalarust-core/src/ops/arithmetic/neg.rs

use crate::autograd::{Graph, NodeId};
use crate::error::ScalarustError;
use crate::ops::arithmetic::mul::mul_op;

/// Negation, expressed as `input * -1` so it needs no op of its own.
pub fn neg_op(graph: &mut Graph, input: NodeId) -> Result<NodeId, ScalarustError> {
    graph.check(input)?;
    let minus_one = graph.constant(-1.0);
    mul_op(graph, input, minus_one)
}

impl Graph {
    pub fn neg(&mut self, input: NodeId) -> Result<NodeId, ScalarustError> {
        neg_op(self, input)
    }
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
