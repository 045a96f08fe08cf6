use crate::data::example::Example;

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((expected - predicted)²) over index-aligned slices.
    ///
    /// An empty dataset yields `NaN`.
    ///
    /// # Panics
    /// Panics if `examples` and `predictions` differ in length.
    pub fn loss(examples: &[Example], predictions: &[f64]) -> f64 {
        assert_eq!(
            examples.len(),
            predictions.len(),
            "examples and predictions must have equal length"
        );
        let n = examples.len() as f64;
        examples.iter().zip(predictions.iter())
            .map(|(e, p)| (e.expected - p).powi(2))
            .sum::<f64>() / n
    }

    /// Per-example gradient: ∂(expected - predicted)²/∂predicted
    pub fn derivative(expected: f64, predicted: f64) -> f64 {
        -2.0 * (expected - predicted)
    }
}

/// Alias for `MseLoss::loss`.
pub fn mean_squared_error(examples: &[Example], predictions: &[f64]) -> f64 {
    MseLoss::loss(examples, predictions)
}
