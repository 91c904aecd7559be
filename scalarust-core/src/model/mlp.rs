use crate::autograd::{Graph, NodeId};
use crate::error::ScalarustError;
use crate::nn::init::Initializer;
use crate::nn::layers::Layer;
use crate::nn::{Activation, Module, Parameters};
use log::debug;

/// Multi-layer perceptron chaining `num_inputs -> sizes[0] -> ... -> sizes[n-1]`.
///
/// Every layer applies `tanh`, the output layer included. Use
/// [`Mlp::with_output_activation`] to opt into a different output
/// nonlinearity (e.g. [`Activation::Identity`] for regression).
#[derive(Debug, Clone, PartialEq)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Builds the network, allocating all parameter leaves in `graph`.
    ///
    /// # Errors
    /// `InvalidArgument` if `sizes` is empty or any size (including
    /// `num_inputs`) is zero. The topology is validated before the first
    /// leaf is allocated, so a failed build leaves `graph` untouched.
    pub fn new(
        graph: &mut Graph,
        num_inputs: usize,
        sizes: &[usize],
        init: &mut Initializer,
    ) -> Result<Self, ScalarustError> {
        if sizes.is_empty() {
            return Err(ScalarustError::InvalidArgument(
                "Mlp needs at least one layer".to_string(),
            ));
        }
        if num_inputs == 0 {
            return Err(ScalarustError::InvalidArgument(
                "Mlp needs at least one input".to_string(),
            ));
        }
        if let Some(layer) = sizes.iter().position(|&size| size == 0) {
            return Err(ScalarustError::InvalidArgument(format!(
                "Mlp layer {} has zero outputs (sizes {:?})",
                layer, sizes
            )));
        }

        let mut layers = Vec::with_capacity(sizes.len());
        let mut fan_in = num_inputs;
        for &fan_out in sizes {
            layers.push(Layer::new(graph, fan_in, fan_out, init)?);
            fan_in = fan_out;
        }

        let mlp = Mlp { layers };
        debug!(
            "Mlp: built {} -> {:?} with {} parameters ({:?})",
            num_inputs,
            sizes,
            mlp.num_parameters(),
            init
        );
        Ok(mlp)
    }

    pub fn with_output_activation(mut self, activation: Activation) -> Self {
        if let Some(last) = self.layers.last_mut() {
            last.set_activation(activation);
        }
        self
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn num_inputs(&self) -> usize {
        self.layers.first().map_or(0, Layer::in_features)
    }

    pub fn num_outputs(&self) -> usize {
        self.layers.last().map_or(0, Layer::out_features)
    }
}

impl Module for Mlp {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarustError> {
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(graph, &current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        for layer in &self.layers {
            params.extend(layer.parameters());
        }
        params
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
