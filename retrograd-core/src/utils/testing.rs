use crate::tensor::Tensor;

/// Checks that `actual` has `expected_shape` and that every element is within
/// `tolerance` of `expected_data` (row-major order).
/// Panics with the first offending index otherwise.
pub fn check_tensor_near(
    actual: &Tensor,
    expected_shape: &[usize],
    expected_data: &[f64],
    tolerance: f64,
) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");
    assert_eq!(
        actual.len(),
        expected_data.len(),
        "Data length mismatch"
    );

    for (i, (a, e)) in actual.iter().zip(expected_data.iter()).enumerate() {
        let diff = (*a - *e).abs();
        if diff.is_nan() || diff > tolerance {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}
