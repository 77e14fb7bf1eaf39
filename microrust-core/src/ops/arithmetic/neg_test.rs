use super::*;
use crate::autograd::grad_check::check_grad;
use crate::autograd::OpKind;
use approx::assert_relative_eq;

#[test]
fn test_neg_ok() {
    let a = Value::new(2.5);
    let b = neg_op(&a);
    assert_relative_eq!(b.data(), -2.5);
    assert_eq!(b.op(), Some(OpKind::Neg));
    b.backward().unwrap();
    assert_relative_eq!(a.grad(), -1.0);
}

#[test]
fn test_double_negation() {
    let a = Value::new(-1.0);
    let b = neg_op(&neg_op(&a));
    b.backward().unwrap();
    assert_relative_eq!(b.data(), -1.0);
    assert_relative_eq!(a.grad(), 1.0);
}

#[test]
fn test_neg_grad_check() {
    check_grad(|v: &[Value]| Ok(neg_op(&v[0])), &[Value::new(0.9)], 1e-6, 1e-4).unwrap();
}
