use crate::autograd::{Graph, NodeId};
use crate::error::ScalarustError;

/// Ordered, non-owning view over the parameter leaves of a module.
///
/// Holds ids only; the values live in the [`Graph`]. Operations on the view
/// (zeroing, descent) therefore act on the network's actual weights.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters(Vec<NodeId>);

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> &[NodeId] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NodeId> {
        self.0.iter()
    }

    pub fn push(&mut self, id: NodeId) {
        self.0.push(id);
    }

    pub fn extend(&mut self, other: Parameters) {
        self.0.extend(other.0);
    }

    /// Resets every parameter's gradient to zero.
    pub fn zero_grad(&self, graph: &mut Graph) -> Result<(), ScalarustError> {
        for &id in &self.0 {
            graph.zero_grad(id)?;
        }
        Ok(())
    }

    /// Applies `data += -learning_rate * grad` to every parameter.
    pub fn descend(&self, graph: &mut Graph, learning_rate: f64) -> Result<(), ScalarustError> {
        for &id in &self.0 {
            graph.descend(id, learning_rate)?;
        }
        Ok(())
    }

    /// Current values, in order.
    pub fn values(&self, graph: &Graph) -> Result<Vec<f64>, ScalarustError> {
        self.0.iter().map(|&id| graph.data(id)).collect()
    }

    /// Current gradients, in order.
    pub fn grads(&self, graph: &Graph) -> Result<Vec<f64>, ScalarustError> {
        self.0.iter().map(|&id| graph.grad(id)).collect()
    }
}

impl From<Vec<NodeId>> for Parameters {
    fn from(ids: Vec<NodeId>) -> Self {
        Parameters(ids)
    }
}

impl IntoIterator for Parameters {
    type Item = NodeId;
    type IntoIter = std::vec::IntoIter<NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a NodeId;
    type IntoIter = std::slice::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
