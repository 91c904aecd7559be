//! Reverse-mode differentiation over an arena of scalar nodes.
//!
//! - [`graph`]: the [`Graph`] arena and node accessors.
//! - [`node`]: [`Node`], [`NodeId`] and the [`Op`] tag recording provenance.
//! - [`backward_op`]: the local chain rule of each op.
//! - [`backward`]: topological ordering and the backward pass.
//! - [`grad_check`]: finite-difference verification of analytical gradients.

pub mod backward;
pub(crate) mod backward_op;
pub mod grad_check;
pub mod graph;
pub mod node;

pub use backward::topological_sort;
pub use graph::{Checkpoint, Graph};
pub use node::{Node, NodeId, Op};
