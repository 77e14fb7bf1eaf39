//! # Rendering a Neuron's Graph
//!
//! Builds `o = tanh(x1*w1 + x2*w2 + b)`, backpropagates, and prints the graph
//! as Graphviz DOT source with every node's data and gradient.
//!
//! ## Running
//! `cargo run --example draw_neuron > neuron.dot && dot -Tsvg neuron.dot -o neuron.svg`

use microrust_core::{MicroRustError, Value};
use microrust_viz::draw_dot;

fn main() -> Result<(), MicroRustError> {
    // inputs x1, x2
    let x1 = Value::with_label(2.0, "x1");
    let x2 = Value::with_label(0.0, "x2");
    // weights w1, w2
    let w1 = Value::with_label(-3.0, "w1");
    let w2 = Value::with_label(1.0, "w2");
    // bias of the neuron
    let b = Value::with_label(6.8813735870195432, "b");

    let x1w1 = (&x1 * &w1).labeled("x1*w1");
    let x2w2 = (&x2 * &w2).labeled("x2*w2");
    let x1w1x2w2 = (&x1w1 + &x2w2).labeled("x1*w1 + x2*w2");
    let n = (&x1w1x2w2 + &b).labeled("n");
    let o = n.tanh().labeled("o");

    o.backward()?;

    print!("{}", draw_dot(&o));
    Ok(())
}
