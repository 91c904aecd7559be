use super::*;

#[test]
fn test_draw_dot_expression() -> Result<(), ScalarustError> {
    let mut graph = Graph::new();
    let a = graph.leaf_labeled(2.0, "a");
    let b = graph.leaf_labeled(-3.0, "b");
    let c = graph.leaf_labeled(10.0, "c");
    let ab = graph.mul(a, b)?;
    graph.set_label(ab, "a*b")?;
    let d = graph.add(ab, c)?;
    graph.set_label(d, "d")?;
    graph.backward(d)?;

    let dot = draw_dot(&graph, d)?;
    let expected = "digraph G {
\trankdir=LR;
\t_1 [label=\"{ d | data 4.0000 | grad 1.0000 }\", shape=record];
\t\"_1+\" [label=\"+\"];
\t\"_1+\" -> _1;
\t_2 [label=\"{ a*b | data -6.0000 | grad 1.0000 }\", shape=record];
\t\"_2*\" [label=\"*\"];
\t\"_2*\" -> _2;
\t_3 [label=\"{ a | data 2.0000 | grad -3.0000 }\", shape=record];
\t_4 [label=\"{ b | data -3.0000 | grad 2.0000 }\", shape=record];
\t_5 [label=\"{ c | data 10.0000 | grad 1.0000 }\", shape=record];
\t_2 -> \"_1+\";
\t_3 -> \"_2*\";
\t_4 -> \"_2*\";
\t_5 -> \"_1+\";
}
";
    assert_eq!(dot, expected);
    Ok(())
}

#[test]
fn test_draw_dot_shared_operand_and_unlabeled() -> Result<(), ScalarustError> {
    let mut graph = Graph::new();
    let a = graph.leaf(1.0);
    let b = graph.add(a, a)?;

    let dot = draw_dot(&graph, b)?;
    assert!(dot.contains("_1 [label=\"{ data 2.0000 | grad 0.0000 }\", shape=record];"));
    // one node for `a`, two edges into the op
    assert_eq!(dot.matches("_2 [label=").count(), 1);
    assert_eq!(dot.matches("_2 -> \"_1+\";").count(), 2);
    Ok(())
}

#[test]
fn test_draw_dot_escapes_labels_and_leaves_graph_untouched() -> Result<(), ScalarustError> {
    let mut graph = Graph::new();
    let x = graph.leaf_labeled(0.5, "x|{y}");
    let p = graph.pow(x, 2.0)?;
    let before = graph.clone();

    let dot = draw_dot(&graph, p)?;
    assert!(dot.contains("x\\|\\{y\\}"));
    assert!(dot.contains("\"_1**2.0000\" [label=\"**2.0000\"];"));
    assert_eq!(graph.len(), before.len());
    assert_eq!(graph.node(x)?, before.node(x)?);
    Ok(())
}

#[test]
fn test_draw_dot_invalid_root() {
    let graph = Graph::new();
    let mut other = Graph::new();
    let stranger = other.scalars(&[0.0; 4])[3];
    assert!(draw_dot(&graph, stranger).is_err());
}
