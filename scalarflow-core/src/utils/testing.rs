use crate::var::Var;

/// Checks that the data of `actual` matches `expected` within `tolerance`.
/// Panics with the first offending index otherwise.
pub fn check_values_near(actual: &[Var<'_>], expected: &[f64], tolerance: f64) {
    let values: Vec<f64> = actual.iter().map(|v| v.data()).collect();
    check_slices_near(&values, expected, tolerance, "data");
}

/// Same as [`check_values_near`] for the gradients of `actual`.
pub fn check_grads_near(actual: &[Var<'_>], expected: &[f64], tolerance: f64) {
    let grads: Vec<f64> = actual.iter().map(|v| v.grad()).collect();
    check_slices_near(&grads, expected, tolerance, "grad");
}

fn check_slices_near(actual: &[f64], expected: &[f64], tolerance: f64, what: &str) {
    assert_eq!(actual.len(), expected.len(), "Length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "{} mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                what, i, a, e, diff, tolerance
            );
        }
    }
}
