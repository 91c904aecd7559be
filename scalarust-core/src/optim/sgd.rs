use crate::autograd::Graph;
use crate::error::ScalarustError;
use crate::nn::Parameters;
use crate::optim::Optimizer;
use log::{debug, warn};

/// Plain gradient descent: `data += -lr * grad` for every parameter.
#[derive(Debug, Clone)]
pub struct Sgd {
    params: Parameters,
    lr: f64,
    steps: u64,
}

impl Sgd {
    /// # Errors
    /// `InvalidArgument` unless `lr` is finite and positive.
    pub fn new(params: Parameters, lr: f64) -> Result<Self, ScalarustError> {
        check_lr(lr)?;
        Ok(Sgd {
            params,
            lr,
            steps: 0,
        })
    }

    pub fn set_learning_rate(&mut self, lr: f64) -> Result<(), ScalarustError> {
        check_lr(lr)?;
        self.lr = lr;
        Ok(())
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Number of steps taken so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

fn check_lr(lr: f64) -> Result<(), ScalarustError> {
    if lr.is_finite() && lr > 0.0 {
        Ok(())
    } else {
        Err(ScalarustError::InvalidArgument(format!(
            "learning rate must be finite and positive, got {}",
            lr
        )))
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, graph: &mut Graph) -> Result<(), ScalarustError> {
        self.params.descend(graph, self.lr)?;
        self.steps += 1;

        let non_finite = self
            .params
            .iter()
            .filter(|&&id| graph.data(id).map_or(false, |x| !x.is_finite()))
            .count();
        if non_finite > 0 {
            warn!(
                "Sgd: {} of {} parameters are non-finite after step {}",
                non_finite,
                self.params.len(),
                self.steps
            );
        }
        debug!("Sgd: step {} applied with lr {}", self.steps, self.lr);
        Ok(())
    }

    fn zero_grad(&self, graph: &mut Graph) -> Result<(), ScalarustError> {
        self.params.zero_grad(graph)
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
