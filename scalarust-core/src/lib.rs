//! Scalar reverse-mode automatic differentiation.
//!
//! Values live in a [`Graph`] arena and are addressed by [`NodeId`].
//! Operations on the graph allocate new nodes that remember their operands;
//! [`Graph::backward`] then walks the reachable subgraph in reverse
//! topological order and accumulates gradients into every node.
//!
//! On top of the engine, [`nn`] and [`model`] compose neurons, layers and a
//! multi-layer perceptron, and [`optim`] applies gradient descent.

pub mod autograd;
pub mod creation;
pub mod error;
pub mod model;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod viz;

pub use autograd::{Checkpoint, Graph, Node, NodeId, Op};
pub use error::ScalarustError;
pub use model::Mlp;
pub use nn::{mean_squared_error, Initializer, Module, Parameters};
pub use optim::{Optimizer, Sgd};
