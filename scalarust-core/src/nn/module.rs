use crate::autograd::{Graph, NodeId};
use crate::error::ScalarustError;
use crate::nn::Parameters;

/// The base trait for network building blocks (layers and containers).
///
/// A module owns parameter leaves allocated in a [`Graph`] at construction
/// time. `forward` reads them as operands of freshly allocated nodes and
/// never replaces them.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass.
    ///
    /// # Errors
    /// `LengthMismatch` when `inputs` does not have the expected length. The
    /// check happens before any node is allocated.
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarustError>;

    /// All learnable parameters, flattened in a stable order.
    fn parameters(&self) -> Parameters;

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
