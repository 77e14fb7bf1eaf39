use microrust_core::autograd::trace;
use microrust_core::Value;
use microrust_viz::draw_dot;

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn test_neuron_graph_rendering() {
    let x1 = Value::with_label(2.0, "x1");
    let x2 = Value::with_label(0.0, "x2");
    let w1 = Value::with_label(-3.0, "w1");
    let w2 = Value::with_label(1.0, "w2");
    let b = Value::with_label(6.8813735870195432, "b");
    let x1w1 = (&x1 * &w1).labeled("x1*w1");
    let x2w2 = (&x2 * &w2).labeled("x2*w2");
    let sum = (&x1w1 + &x2w2).labeled("x1*w1 + x2*w2");
    let n = (&sum + &b).labeled("n");
    let o = n.tanh().labeled("o");
    o.backward().unwrap();

    let graph = trace(&o);
    let dot = draw_dot(&o);

    // One record per value, one op node per non-leaf value.
    assert_eq!(count(&dot, "shape=record"), graph.nodes.len());
    let non_leaves = graph.nodes.iter().filter(|v| !v.is_leaf()).count();
    assert_eq!(count(&dot, "->"), non_leaves + graph.edges.len());

    assert!(dot.contains("{ x1 | data 2.0000 | grad -1.5000 }"));
    assert!(dot.contains("{ w1 | data -3.0000 | grad 1.0000 }"));
    assert!(dot.contains("{ o | data 0.7071 | grad 1.0000 }"));
    assert!(dot.contains("[label=\"exp\"]"));
}

#[test]
fn test_shared_operand_single_edge() {
    let a = Value::with_label(3.0, "a");
    let b = (&a + &a).labeled("b");
    let dot = draw_dot(&b);

    let a_name = a.id().as_usize().to_string();
    let b_name = b.id().as_usize().to_string();
    let edge = format!("\"{}\" -> \"{}+\"", a_name, b_name);
    assert_eq!(count(&dot, &edge), 1);
    assert!(dot.contains(&format!("\"{}+\" -> \"{}\"", b_name, b_name)));
}
