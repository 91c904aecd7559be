use crate::autograd::{Graph, NodeId};
use crate::error::ScalarustError;

/// Nonlinearity applied to a neuron's weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    Relu,
    /// No nonlinearity; the weighted sum is the output.
    Identity,
}

impl Activation {
    pub fn apply(self, graph: &mut Graph, input: NodeId) -> Result<NodeId, ScalarustError> {
        match self {
            Activation::Tanh => graph.tanh(input),
            Activation::Relu => graph.relu(input),
            Activation::Identity => {
                graph.check(input)?;
                Ok(input)
            }
        }
    }
}
