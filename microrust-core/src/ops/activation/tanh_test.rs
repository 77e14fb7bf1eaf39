use super::*;
use crate::autograd::grad_check::check_grad;
use approx::{assert_abs_diff_eq, assert_relative_eq};

#[test]
fn test_tanh_matches_std() {
    for x in [-2.0, -0.3, 0.0, 0.5, 1.7, 20.0, -20.0] {
        let y = tanh_op(&Value::new(x));
        assert_relative_eq!(y.data(), f64::tanh(x), epsilon = 1e-12);
    }
}

#[test]
fn test_tanh_backward_closed_form() {
    let x = Value::new(0.8);
    let y = tanh_op(&x);
    y.backward().unwrap();
    let t = f64::tanh(0.8);
    assert_relative_eq!(x.grad(), 1.0 - t * t, epsilon = 1e-12);
}

#[test]
fn test_tanh_saturation() {
    let mut previous_grad = f64::INFINITY;
    for x in [1.0, 3.0, 5.0, 10.0] {
        let input = Value::new(x);
        let y = tanh_op(&input);
        y.backward().unwrap();
        assert!(input.grad() < previous_grad);
        previous_grad = input.grad();
    }
    let input = Value::new(10.0);
    let y = tanh_op(&input);
    y.backward().unwrap();
    assert_abs_diff_eq!(y.data(), 1.0, epsilon = 1e-8);
    assert_abs_diff_eq!(input.grad(), 0.0, epsilon = 1e-7);
}

#[test]
fn test_tanh_large_inputs_stay_finite() {
    for (x, expected) in [(400.0, 1.0), (-400.0, -1.0), (1e6, 1.0), (-1e6, -1.0)] {
        let input = Value::new(x);
        let y = tanh_op(&input);
        y.backward().unwrap();
        assert_eq!(y.data(), expected);
        assert_eq!(input.grad(), 0.0);
    }
}

#[test]
fn test_tanh_grad_check() {
    for x in [-1.2, -0.05, 0.1, 0.88, 4.0] {
        check_grad(|v: &[Value]| Ok(tanh_op(&v[0])), &[Value::new(x)], 1e-6, 1e-4).unwrap();
    }
}
