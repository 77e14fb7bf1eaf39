use crate::value::Value;

/// Checks that each value's `data` is within `tolerance` of the expected
/// number. Panics with the offending index otherwise.
pub fn check_values_near(actual: &[Value], expected_data: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected_data.len(), "Length mismatch");

    for (i, (a, e)) in actual.iter().zip(expected_data.iter()).enumerate() {
        let diff = (a.data() - *e).abs();
        if diff > tolerance {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                a.data(),
                e,
                diff,
                tolerance
            );
        }
    }
}

/// Same as [`check_values_near`], on gradients.
pub fn check_grads_near(actual: &[Value], expected_grads: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected_grads.len(), "Length mismatch");

    for (i, (a, e)) in actual.iter().zip(expected_grads.iter()).enumerate() {
        let diff = (a.grad() - *e).abs();
        if diff > tolerance {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                a.grad(),
                e,
                diff,
                tolerance
            );
        }
    }
}
