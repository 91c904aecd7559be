use crate::autograd::node::{Node, NodeId, Op};

/// Applies the local chain rule of node `id`.
///
/// Reads the node's accumulated `grad` (dL/dOutput) and its forward value,
/// then adds dL/dInput for each operand into that operand's `grad`. The
/// update is always `+=`: an operand may be consumed by several nodes, or
/// twice by the same node (`a + a`, `a * a`), and every contribution has to
/// survive.
///
/// Leaves have no rule and are left untouched. Non-finite values are not
/// special-cased; they propagate exactly as IEEE arithmetic dictates.
pub(crate) fn propagate(nodes: &mut [Node], id: NodeId) {
    let out_grad = nodes[id.index].grad;
    let out_data = nodes[id.index].data;

    match nodes[id.index].op {
        Op::Leaf => {}
        Op::Add(lhs, rhs) => {
            nodes[lhs.index].grad += out_grad;
            nodes[rhs.index].grad += out_grad;
        }
        Op::Mul(lhs, rhs) => {
            let lhs_data = nodes[lhs.index].data;
            let rhs_data = nodes[rhs.index].data;
            nodes[lhs.index].grad += rhs_data * out_grad;
            nodes[rhs.index].grad += lhs_data * out_grad;
        }
        Op::Pow { base, exponent } => {
            let base_data = nodes[base.index].data;
            nodes[base.index].grad += exponent * base_data.powf(exponent - 1.0) * out_grad;
        }
        Op::Tanh(x) => {
            // out_data == tanh(x.data)
            nodes[x.index].grad += (1.0 - out_data * out_data) * out_grad;
        }
        Op::Relu(x) => {
            if out_data > 0.0 {
                nodes[x.index].grad += out_grad;
            }
        }
    }
}
