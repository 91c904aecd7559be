//! # Graph builder operations (`ops`)
//!
//! Every operation allocates exactly one new node (plus, for the derived
//! ops, the constants and intermediates they are composed of) whose [`Op`]
//! tag records its operands in call order. Operands are never modified.
//!
//! - **`_op` functions:** the free functions (`add_op`, `tanh_op`, ...) do the
//!   work; the same operations are exposed as [`Graph`] methods.
//! - **Validation:** ids are checked before anything is allocated, so a
//!   failed call leaves the graph unchanged.
//!
//! ## Submodules
//!
//! - [`arithmetic`]: add, mul, neg, sub, pow, div, sum.
//! - [`activation`]: tanh, relu.
//!
//! [`Op`]: crate::autograd::Op
//! [`Graph`]: crate::autograd::Graph

pub mod activation;
pub mod arithmetic;

pub use activation::{relu_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op, sum_op};
