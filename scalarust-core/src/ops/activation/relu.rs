use crate::autograd::{Graph, NodeId, Op};
use crate::error::ScalarustError;

/// Rectified Linear Unit: `max(0, x)`.
///
/// The gradient passes through only where the output is strictly positive.
/// At `x == 0` the derivative is taken as zero.
pub fn relu_op(graph: &mut Graph, input: NodeId) -> Result<NodeId, ScalarustError> {
    let x = graph.data(input)?;
    let y = if x > 0.0 { x } else { 0.0 };
    Ok(graph.push(y, Op::Relu(input)))
}

impl Graph {
    pub fn relu(&mut self, input: NodeId) -> Result<NodeId, ScalarustError> {
        relu_op(self, input)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
