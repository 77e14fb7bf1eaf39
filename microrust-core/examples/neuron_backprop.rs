//! # Backpropagating Through One Neuron
//!
//! Builds `o = tanh(x1*w1 + x2*w2 + b)` out of scalar values, runs
//! `backward`, and prints the gradient of every input. With
//! `b = 6.8813735870195432` the pre-activation is `ln(1 + sqrt(2))`, so
//! `o = sqrt(2)/2` and the gradients come out as round numbers.
//!
//! ## Running
//! `cargo run --example neuron_backprop`

use microrust_core::autograd::trace;
use microrust_core::{MicroRustError, Value};

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

    println!("o = {:.4}", o.data());
    for v in [&x1, &w1, &x2, &w2, &b, &n] {
        println!("d(o)/d({}) = {:.4}", v.label(), v.grad());
    }

    let graph = trace(&o);
    println!(
        "\nGraph: {} nodes, {} edges",
        graph.nodes.len(),
        graph.edges.len()
    );
    Ok(())
}
