use crate::autograd::graph::Graph;
use crate::autograd::node::NodeId;
use crate::error::ScalarustError;
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Epsilon must be finite and positive, got {0}")]
    InvalidEpsilon(f64),

    #[error("Graph error during gradient check: {0}")]
    GraphError(ScalarustError),
}

impl From<ScalarustError> for GradCheckError {
    fn from(err: ScalarustError) -> Self {
        GradCheckError::GraphError(err)
    }
}

/// Evaluates `func` on a fresh graph whose leaves hold `inputs`.
fn evaluate<F>(func: &F, inputs: &[f64]) -> Result<(Graph, Vec<NodeId>, NodeId), ScalarustError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarustError>,
{
    let mut graph = Graph::with_capacity(inputs.len() * 4);
    let leaves: Vec<NodeId> = inputs.iter().map(|&x| graph.leaf(x)).collect();
    let output = func(&mut graph, &leaves)?;
    Ok((graph, leaves, output))
}

/// Checks analytical gradients against central finite differences.
///
/// `func` builds a scalar output from leaves holding `inputs`. It is called
/// once for the analytical pass and twice per input for the numerical one,
/// each time on a fresh graph.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarustError>,
{
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }

    let (mut graph, leaves, output) = evaluate(&func, inputs)?;
    graph.backward(output)?;

    let mut perturbed = inputs.to_vec();
    for (i, &leaf) in leaves.iter().enumerate() {
        let analytical_grad = graph.grad(leaf)?;
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let original = perturbed[i];
        perturbed[i] = original + epsilon;
        let (g_plus, _, out_plus) = evaluate(&func, &perturbed)?;
        let loss_plus = g_plus.data(out_plus)?;
        perturbed[i] = original - epsilon;
        let (g_minus, _, out_minus) = evaluate(&func, &perturbed)?;
        let loss_minus = g_minus.data(out_minus)?;
        perturbed[i] = original;

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        debug!(
            "grad_check: input {} analytical={} numerical={}",
            i, analytical_grad, numerical_grad
        );
        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
