use crate::autograd::{Graph, NodeId};
use crate::error::ScalarustError;
use std::collections::HashMap;
use std::fmt::Write;

/// Renders the subgraph reachable from `root` in Graphviz DOT format.
///
/// Each value becomes a `record` node showing its label, data and grad;
/// each derived value also gets a small node for its op, wired
/// `operand -> op -> value`. The graph is only read.
pub fn draw_dot(graph: &Graph, root: NodeId) -> Result<String, ScalarustError> {
    graph.check(root)?;
    let nodes = graph.nodes();

    // Pre-order walk assigning display ids on first visit.
    let mut ids: HashMap<NodeId, usize> = HashMap::new();
    let mut order = Vec::new();
    let mut edges = Vec::new();
    let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
    ids.insert(root, 1);
    order.push(root);

    while let Some(&(id, next)) = stack.last() {
        match nodes[id.index].op.child(next) {
            Some(child) => {
                if let Some(top) = stack.last_mut() {
                    top.1 += 1;
                }
                edges.push((child, id));
                if !ids.contains_key(&child) {
                    ids.insert(child, ids.len() + 1);
                    order.push(child);
                    stack.push((child, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    let mut out = String::new();
    writeln!(out, "digraph G {{")?;
    writeln!(out, "\trankdir=LR;")?;
    for &id in &order {
        let node = &nodes[id.index];
        let dot_id = ids[&id];
        let label = match node.label() {
            Some(name) => format!(
                "{{ {} | data {:.4} | grad {:.4} }}",
                escape(name),
                node.data(),
                node.grad()
            ),
            None => format!("{{ data {:.4} | grad {:.4} }}", node.data(), node.grad()),
        };
        writeln!(out, "\t_{} [label=\"{}\", shape=record];", dot_id, label)?;
        if !node.op().is_leaf() {
            let op_name = node.op().name();
            writeln!(out, "\t\"_{}{}\" [label=\"{}\"];", dot_id, op_name, op_name)?;
            writeln!(out, "\t\"_{}{}\" -> _{};", dot_id, op_name, dot_id)?;
        }
    }
    for (src, dst) in edges {
        let dst_id = ids[&dst];
        writeln!(
            out,
            "\t_{} -> \"_{}{}\";",
            ids[&src],
            dst_id,
            nodes[dst.index].op().name()
        )?;
    }
    writeln!(out, "}}")?;
    Ok(out)
}

/// Escapes characters that are structural inside a DOT record label.
fn escape(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        if matches!(c, '"' | '{' | '}' | '|' | '<' | '>' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
#[path = "dot_test.rs"]
mod tests;
