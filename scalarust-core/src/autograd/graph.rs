use crate::autograd::node::{Node, NodeId, Op};
use crate::error::ScalarustError;
use log::debug;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_GRAPH_TAG: AtomicU32 = AtomicU32::new(0);

/// Arena holding every node of a computation graph.
///
/// There is no separate edge list: a node's operands live in its [`Op`] tag,
/// so the graph is the transitive closure of those references. Nodes are
/// never removed individually; [`Graph::rewind`] drops everything allocated
/// after a [`Checkpoint`], which is how a training loop discards the
/// per-iteration graph while keeping its parameter leaves.
///
/// Each graph gets its own tag, and every rewind starts a new generation.
/// Both are stamped into the ids it hands out. A clone keeps the tag, so
/// ids stay valid in the copy.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
    tag: u32,
    generation: u32,
}

/// Arena length captured by [`Graph::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(capacity),
            tag: NEXT_GRAPH_TAG.fetch_add(1, Ordering::Relaxed),
            generation: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn push(&mut self, data: f64, op: Op) -> NodeId {
        let id = NodeId {
            index: self.nodes.len(),
            graph: self.tag,
            generation: self.generation,
        };
        self.nodes.push(Node::new(data, op, self.generation));
        id
    }

    /// Creates a leaf node (an input or a parameter).
    pub fn leaf(&mut self, data: f64) -> NodeId {
        self.push(data, Op::Leaf)
    }

    /// Creates a leaf node carrying a display label.
    pub fn leaf_labeled(&mut self, data: f64, label: impl Into<String>) -> NodeId {
        let id = self.leaf(data);
        self.nodes[id.index].label = Some(label.into());
        id
    }

    /// Creates a constant operand. Constants are ordinary leaves; they simply
    /// never get updated by an optimizer.
    pub fn constant(&mut self, data: f64) -> NodeId {
        self.leaf(data)
    }

    /// Returns an error unless `id` names a live node of this arena: issued
    /// by this graph, and not dropped by a rewind since.
    pub(crate) fn check(&self, id: NodeId) -> Result<(), ScalarustError> {
        match self.nodes.get(id.index) {
            Some(node) if id.graph == self.tag && id.generation == node.generation => Ok(()),
            _ => Err(ScalarustError::InvalidNode {
                id: id.index,
                len: self.nodes.len(),
            }),
        }
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, ScalarustError> {
        self.check(id)?;
        Ok(&self.nodes[id.index])
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, ScalarustError> {
        self.check(id)?;
        Ok(&mut self.nodes[id.index])
    }

    pub fn data(&self, id: NodeId) -> Result<f64, ScalarustError> {
        Ok(self.node(id)?.data)
    }

    pub fn grad(&self, id: NodeId) -> Result<f64, ScalarustError> {
        Ok(self.node(id)?.grad)
    }

    pub fn op(&self, id: NodeId) -> Result<Op, ScalarustError> {
        Ok(self.node(id)?.op)
    }

    pub fn label(&self, id: NodeId) -> Result<Option<&str>, ScalarustError> {
        Ok(self.node(id)?.label())
    }

    pub fn children(&self, id: NodeId) -> Result<Vec<NodeId>, ScalarustError> {
        Ok(self.node(id)?.op.children())
    }

    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) -> Result<(), ScalarustError> {
        self.node_mut(id)?.label = Some(label.into());
        Ok(())
    }

    /// Overwrites the value of a leaf.
    ///
    /// Derived nodes are rejected: their value is a function of their
    /// operands and would silently go stale.
    pub fn set_data(&mut self, id: NodeId, data: f64) -> Result<(), ScalarustError> {
        let node = self.node_mut(id)?;
        if !node.op.is_leaf() {
            return Err(ScalarustError::InvalidArgument(format!(
                "set_data on derived node {} ({})",
                id,
                node.op.name()
            )));
        }
        node.data = data;
        Ok(())
    }

    pub fn zero_grad(&mut self, id: NodeId) -> Result<(), ScalarustError> {
        self.node_mut(id)?.grad = 0.0;
        Ok(())
    }

    /// Resets the gradient of every node in the arena.
    pub fn zero_grad_all(&mut self) {
        for node in &mut self.nodes {
            node.grad = 0.0;
        }
    }

    /// Gradient descent step on a single node: `data += -learning_rate * grad`.
    pub fn descend(&mut self, id: NodeId, learning_rate: f64) -> Result<(), ScalarustError> {
        let node = self.node_mut(id)?;
        node.data += -learning_rate * node.grad;
        Ok(())
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.nodes.len())
    }

    /// Drops every node allocated after `checkpoint`.
    ///
    /// Ids handed out after the checkpoint become invalid. Their slots are
    /// reused by later allocations, which get a new generation, so the old
    /// ids keep failing with `InvalidNode`.
    pub fn rewind(&mut self, checkpoint: Checkpoint) -> Result<(), ScalarustError> {
        if checkpoint.0 > self.nodes.len() {
            return Err(ScalarustError::InvalidCheckpoint {
                mark: checkpoint.0,
                len: self.nodes.len(),
            });
        }
        debug!(
            "Graph: rewinding from {} to {} nodes",
            self.nodes.len(),
            checkpoint.0
        );
        self.nodes.truncate(checkpoint.0);
        self.generation = self.generation.wrapping_add(1);
        Ok(())
    }

    /// Unchecked access for the backward pass, which only visits ids it
    /// reached from a validated root.
    pub(crate) fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
