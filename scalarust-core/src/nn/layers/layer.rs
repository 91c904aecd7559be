use crate::autograd::{Graph, NodeId};
use crate::error::ScalarustError;
use crate::nn::init::Initializer;
use crate::nn::layers::Neuron;
use crate::nn::{Activation, Module, Parameters};

/// A fully connected layer: `num_outputs` neurons sharing one input vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    neurons: Vec<Neuron>,
    in_features: usize,
}

impl Layer {
    /// Creates a layer with `out_features` neurons of `in_features` inputs.
    ///
    /// # Errors
    /// `InvalidArgument` if either size is zero, reported before any leaf is
    /// allocated.
    pub fn new(
        graph: &mut Graph,
        in_features: usize,
        out_features: usize,
        init: &mut Initializer,
    ) -> Result<Self, ScalarustError> {
        if in_features == 0 {
            return Err(ScalarustError::InvalidArgument(
                "Layer needs at least one input".to_string(),
            ));
        }
        if out_features == 0 {
            return Err(ScalarustError::InvalidArgument(
                "Layer needs at least one output".to_string(),
            ));
        }
        let neurons = (0..out_features)
            .map(|_| Neuron::new(graph, in_features, init))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer {
            neurons,
            in_features,
        })
    }

    /// Replaces the nonlinearity of every neuron in the layer.
    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.set_activation(activation);
        self
    }

    pub(crate) fn set_activation(&mut self, activation: Activation) {
        for neuron in &mut self.neurons {
            neuron.set_activation(activation);
        }
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarustError> {
        if inputs.len() != self.in_features {
            return Err(ScalarustError::LengthMismatch {
                expected: self.in_features,
                actual: inputs.len(),
                operation: "Layer forward".to_string(),
            });
        }
        self.neurons
            .iter()
            .map(|neuron| neuron.forward(graph, inputs))
            .collect()
    }

    fn parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        for neuron in &self.neurons {
            params.extend(neuron.parameters());
        }
        params
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
