use trio_nn::Neuron;

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual} (tolerance {tolerance})"
    );
}

pub fn assert_neuron_close(actual: &Neuron, expected: &Neuron, tolerance: f64) {
    assert_close(actual.weight1, expected.weight1, tolerance);
    assert_close(actual.weight2, expected.weight2, tolerance);
    assert_close(actual.bias, expected.bias, tolerance);
}
