use super::*;
use crate::autograd::OpKind;
use approx::assert_relative_eq;
use num_traits::{One, Zero};

#[test]
fn test_leaf_creation() {
    let v = Value::new(3.5);
    assert_eq!(v.data(), 3.5);
    assert_eq!(v.grad(), 0.0);
    assert!(v.is_leaf());
    assert_eq!(v.op(), None);
    assert!(v.operands().is_empty());
    assert_eq!(v.label(), "");
}

#[test]
fn test_labels_are_cosmetic() {
    let x = Value::with_label(1.0, "x");
    let y = (&x * 2.0).labeled("y");
    assert_eq!(y.label(), "y");
    y.set_label("renamed");
    assert_eq!(y.label(), "renamed");
    assert_relative_eq!(y.data(), 2.0);
}

#[test]
fn test_clone_shares_node() {
    let a = Value::new(1.0);
    let alias = a.clone();
    alias.set_data(5.0);
    alias.set_grad(0.5);
    assert_eq!(a.data(), 5.0);
    assert_eq!(a.grad(), 0.5);
    assert_eq!(a, alias);
    assert_ne!(a, Value::new(5.0), "equality is identity, not data");
}

#[test]
fn test_chain_composition() {
    let x = Value::new(1.0);
    let y = (&x + 2.0) * 3.0;
    assert_relative_eq!(y.data(), 9.0);
    y.backward().unwrap();
    assert_relative_eq!(x.grad(), 3.0);
}

#[test]
fn test_additive_accumulation() {
    let a = Value::new(-2.0);
    let b = &a + &a;
    b.backward().unwrap();
    assert_relative_eq!(a.grad(), 2.0);
}

#[test]
fn test_accumulation_across_independent_paths() {
    // f = a*b + exp(a), df/da = b + e^a
    let a = Value::new(0.5);
    let b = Value::new(3.0);
    let f = &(&a * &b) + &a.exp();
    f.backward().unwrap();
    assert_relative_eq!(a.grad(), 3.0 + 0.5f64.exp(), epsilon = 1e-12);
    assert_relative_eq!(b.grad(), 0.5);
}

#[test]
fn test_backward_does_not_reset_grads() {
    let x = Value::new(2.0);
    let y = &x * 3.0;
    y.backward().unwrap();
    y.backward().unwrap();
    assert_relative_eq!(x.grad(), 6.0);
    x.zero_grad();
    y.backward().unwrap();
    assert_relative_eq!(x.grad(), 3.0);
}

#[test]
fn test_mixed_scalar_operators() {
    let x = Value::new(4.0);
    assert_relative_eq!((&x + 1.0).data(), 5.0);
    assert_relative_eq!((1.0 + &x).data(), 5.0);
    assert_relative_eq!((&x - 1.0).data(), 3.0);
    assert_relative_eq!((10.0 - &x).data(), 6.0);
    assert_relative_eq!((&x * 0.5).data(), 2.0);
    assert_relative_eq!((2.0 * &x).data(), 8.0);
    assert_relative_eq!((&x / 8.0).data(), 0.5);
    assert_relative_eq!((8.0 / &x).data(), 2.0);
    assert_relative_eq!((-&x).data(), -4.0);
    assert_relative_eq!(x.pow(2.0).data(), 16.0);
}

#[test]
fn test_owned_operators_consume_handles_not_nodes() {
    let a = Value::new(1.5);
    let b = Value::new(2.0);
    let c = a.clone() * b.clone() - a.clone();
    c.backward().unwrap();
    assert_relative_eq!(c.data(), 1.5);
    assert_relative_eq!(a.grad(), 1.0);
    assert_relative_eq!(b.grad(), 1.5);
}

#[test]
fn test_constant_is_wrapped_as_leaf() {
    let x = Value::new(3.0);
    let y = 2.0 * &x;
    assert_eq!(y.op(), Some(OpKind::Mul));
    let operands = y.operands();
    assert!(operands[0].is_leaf());
    assert_eq!(operands[0].data(), 2.0);
    assert_eq!(operands[1], x);
}

#[test]
fn test_sum_iterator() {
    let xs = from_slice(&[1.0, 2.0, 3.5]);
    let total: Value = xs.iter().sum();
    assert_relative_eq!(total.data(), 6.5);
    total.backward().unwrap();
    for x in &xs {
        assert_relative_eq!(x.grad(), 1.0);
    }

    let empty: Value = Vec::<Value>::new().into_iter().sum();
    assert!(empty.is_zero());
    assert!(empty.is_leaf());
}

#[test]
fn test_zero_and_one() {
    assert_eq!(Value::zero().data(), 0.0);
    assert_eq!(Value::one().data(), 1.0);
    assert!(!Value::one().is_zero());
}

#[test]
fn test_debug_and_display() {
    let x = Value::with_label(2.0, "x");
    let y = &x * &x;
    assert_eq!(format!("{}", y), "Value(data=4)");
    let debug = format!("{:?}", y);
    assert!(debug.contains("op=Some(\"*\")"));
    assert!(debug.contains("operands=2"));
}

#[test]
fn test_set_data_does_not_recompute_results() {
    let w = Value::new(1.0);
    let y = &w * 3.0;
    w.set_data(2.0);
    assert_relative_eq!(y.data(), 3.0);
    assert_relative_eq!((&w * 3.0).data(), 6.0);
}
