/// Logistic sigmoid: `1 / (1 + e^-x)`, mapping ℝ onto (0, 1).
///
/// No clamping is applied. Very negative inputs overflow `e^-x` to infinity
/// and the result saturates to `0.0`; very positive inputs saturate to `1.0`.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid, `σ(x) · (1 - σ(x))`.
///
/// `x` must be the pre-activation (the raw weighted sum), not the output of
/// `sigmoid`. Passing an already-squashed activation silently yields the
/// wrong slope.
pub fn deriv_sigmoid(x: f64) -> f64 {
    let fx = sigmoid(x);
    fx * (1.0 - fx)
}
