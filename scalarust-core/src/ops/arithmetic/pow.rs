// scalarust-core/src/ops/arithmetic/pow.rs

use crate::autograd::{Graph, NodeId, Op};
use crate::error::ScalarustError;

/// Raises a node to a constant real exponent.
///
/// Forward is `f64::powf`, backward is `k * base^(k-1) * out.grad`. Domain
/// problems are not errors: a negative base with a fractional exponent gives
/// NaN, and `0^k` with `k < 1` gives an infinite derivative, both of which
/// propagate through the graph unchanged.
pub fn pow_op(graph: &mut Graph, base: NodeId, exponent: f64) -> Result<NodeId, ScalarustError> {
    let x = graph.data(base)?;
    Ok(graph.push(x.powf(exponent), Op::Pow { base, exponent }))
}

impl Graph {
    pub fn pow(&mut self, base: NodeId, exponent: f64) -> Result<NodeId, ScalarustError> {
        pow_op(self, base, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
