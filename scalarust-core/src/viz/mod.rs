//! Read-only rendering of computation graphs.

pub mod dot;

pub use dot::draw_dot;
