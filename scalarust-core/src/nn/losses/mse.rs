// scalarust-core/src/nn/losses/mse.rs

use crate::autograd::{Graph, NodeId};
use crate::error::ScalarustError;

/// Specifies the reduction applied to the squared errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    /// `sum((p - t)^2)`.
    #[default]
    Sum,
    /// `sum((p - t)^2) / n`.
    Mean,
}

/// Squared-error loss between predictions and targets.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds the loss node.
    ///
    /// # Errors
    /// `LengthMismatch` if the slices differ in length, `EmptyInput` for a
    /// `Mean` reduction over nothing. Both are reported before any node is
    /// allocated.
    pub fn calculate(
        &self,
        graph: &mut Graph,
        targets: &[NodeId],
        predictions: &[NodeId],
    ) -> Result<NodeId, ScalarustError> {
        if targets.len() != predictions.len() {
            return Err(ScalarustError::LengthMismatch {
                expected: targets.len(),
                actual: predictions.len(),
                operation: "MSELoss calculate".to_string(),
            });
        }
        if self.reduction == Reduction::Mean && targets.is_empty() {
            return Err(ScalarustError::EmptyInput);
        }
        for &id in targets.iter().chain(predictions) {
            graph.check(id)?;
        }

        let mut loss = graph.constant(0.0);
        for (&target, &prediction) in targets.iter().zip(predictions) {
            let diff = graph.sub(prediction, target)?;
            let squared = graph.pow(diff, 2.0)?;
            loss = graph.add(loss, squared)?;
        }

        match self.reduction {
            Reduction::Sum => Ok(loss),
            Reduction::Mean => graph.mul_scalar(loss, 1.0 / targets.len() as f64),
        }
    }
}

/// Summed squared error, `sum((prediction_i - target_i)^2)`.
///
/// Despite the name there is no division by the count; learning rates used
/// with this loss assume the summed scale.
pub fn mean_squared_error(
    graph: &mut Graph,
    targets: &[NodeId],
    predictions: &[NodeId],
) -> Result<NodeId, ScalarustError> {
    MSELoss::new(Reduction::Sum).calculate(graph, targets, predictions)
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
