use crate::autograd::{Graph, NodeId};
use crate::error::ScalarustError;
use crate::nn::init::Initializer;
use crate::nn::{Activation, Parameters};
use log::trace;

/// A single unit: `activation(bias + sum(input_i * weight_i))`.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    weights: Vec<NodeId>,
    bias: NodeId,
    activation: Activation,
}

impl Neuron {
    /// Allocates `num_inputs` weight leaves and one bias leaf in `graph`.
    ///
    /// The bias is drawn first, then the weights in order.
    ///
    /// # Errors
    /// `InvalidArgument` if `num_inputs` is zero.
    pub fn new(
        graph: &mut Graph,
        num_inputs: usize,
        init: &mut Initializer,
    ) -> Result<Self, ScalarustError> {
        if num_inputs == 0 {
            return Err(ScalarustError::InvalidArgument(
                "Neuron needs at least one input".to_string(),
            ));
        }
        let bias = graph.leaf(init.sample());
        let weights = (0..num_inputs).map(|_| graph.leaf(init.sample())).collect();
        Ok(Neuron {
            weights,
            bias,
            activation: Activation::Tanh,
        })
    }

    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    pub fn num_inputs(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[NodeId] {
        &self.weights
    }

    pub fn bias(&self) -> NodeId {
        self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub(crate) fn set_activation(&mut self, activation: Activation) {
        self.activation = activation;
    }

    /// Builds this neuron's output node for `inputs`.
    pub fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<NodeId, ScalarustError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarustError::LengthMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron forward".to_string(),
            });
        }
        for &x in inputs {
            graph.check(x)?;
        }

        let mut act = self.bias;
        for (&x, &w) in inputs.iter().zip(&self.weights) {
            let product = graph.mul(x, w)?;
            act = graph.add(act, product)?;
        }
        trace!("Neuron: pre-activation node {}", act);
        self.activation.apply(graph, act)
    }

    /// Weights in order, then the bias.
    pub fn parameters(&self) -> Parameters {
        let mut params: Parameters = self.weights.clone().into();
        params.push(self.bias);
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
