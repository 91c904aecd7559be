use crate::autograd::{Graph, NodeId, Op};
use crate::error::ScalarustError;

/// Hyperbolic tangent.
///
/// With `t = tanh(x)`, backward adds `(1 - t^2) * out.grad` to `x`. The
/// output value is `t` itself, so the rule reads it back from the node.
pub fn tanh_op(graph: &mut Graph, input: NodeId) -> Result<NodeId, ScalarustError> {
    let x = graph.data(input)?;
    Ok(graph.push(x.tanh(), Op::Tanh(input)))
}

impl Graph {
    pub fn tanh(&mut self, input: NodeId) -> Result<NodeId, ScalarustError> {
        tanh_op(self, input)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
