use std::fmt;

/// Stable handle to a node stored in a [`Graph`](super::Graph).
///
/// Besides the arena index, an id carries the identity of the graph that
/// issued it and the generation it was issued in. The graph rejects ids
/// from another graph, and ids whose slot was dropped by
/// [`Graph::rewind`](super::Graph::rewind) and later refilled. A derived
/// node's operands always have smaller indices than the node itself, which
/// keeps the graph acyclic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) index: usize,
    pub(crate) graph: u32,
    pub(crate) generation: u32,
}

impl NodeId {
    /// Position of the node in its arena.
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// How a node was produced.
///
/// The operands are stored in the variant itself, in call order, so the tag
/// doubles as the node's children list. `Pow` carries its exponent because
/// the local derivative needs it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Leaf,
    Add(NodeId, NodeId),
    Mul(NodeId, NodeId),
    Pow { base: NodeId, exponent: f64 },
    Tanh(NodeId),
    Relu(NodeId),
}

impl Op {
    /// Operands of the node, in call order. Empty for leaves.
    pub fn children(&self) -> Vec<NodeId> {
        match *self {
            Op::Leaf => Vec::new(),
            Op::Add(lhs, rhs) | Op::Mul(lhs, rhs) => vec![lhs, rhs],
            Op::Pow { base, .. } => vec![base],
            Op::Tanh(x) | Op::Relu(x) => vec![x],
        }
    }

    /// The `index`-th operand, without allocating.
    pub(crate) fn child(&self, index: usize) -> Option<NodeId> {
        match (*self, index) {
            (Op::Add(lhs, _), 0) | (Op::Mul(lhs, _), 0) => Some(lhs),
            (Op::Add(_, rhs), 1) | (Op::Mul(_, rhs), 1) => Some(rhs),
            (Op::Pow { base, .. }, 0) => Some(base),
            (Op::Tanh(x), 0) | (Op::Relu(x), 0) => Some(x),
            _ => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Op::Leaf)
    }

    /// Short symbol used when rendering the graph.
    pub fn name(&self) -> String {
        match self {
            Op::Leaf => String::new(),
            Op::Add(..) => "+".to_string(),
            Op::Mul(..) => "*".to_string(),
            Op::Pow { exponent, .. } => format!("**{:.4}", exponent),
            Op::Tanh(_) => "tanh".to_string(),
            Op::Relu(_) => "ReLU".to_string(),
        }
    }
}

/// A single scalar value in the computation graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) data: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    pub(crate) label: Option<String>,
    pub(crate) generation: u32,
}

impl Node {
    pub(crate) fn new(data: f64, op: Op, generation: u32) -> Self {
        Node {
            data,
            grad: 0.0,
            op,
            label: None,
            generation,
        }
    }

    pub fn data(&self) -> f64 {
        self.data
    }

    pub fn grad(&self) -> f64 {
        self.grad
    }

    pub fn op(&self) -> &Op {
        &self.op
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar(data={:.4}, grad={:.4})", self.data, self.grad)
    }
}
