use crate::autograd::Graph;
use crate::error::ScalarustError;

/// Trait defining the common interface for all optimizers.
///
/// An optimizer holds the ids of the parameters it manages; the values and
/// gradients themselves live in the [`Graph`] passed to each call.
pub trait Optimizer {
    /// Performs a single optimization step using the accumulated gradients.
    fn step(&mut self, graph: &mut Graph) -> Result<(), ScalarustError>;

    /// Clears the gradients of all managed parameters.
    ///
    /// Call this before each backward pass; gradients otherwise accumulate
    /// across iterations.
    fn zero_grad(&self, graph: &mut Graph) -> Result<(), ScalarustError>;

    fn learning_rate(&self) -> f64;
}
