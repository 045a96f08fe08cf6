use rand::Rng;
use rand_distr::StandardNormal;

use crate::activation::sigmoid;
use crate::data::example::Example;

/// A single affine unit with a sigmoid non-linearity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neuron {
    pub weight1: f64,
    pub weight2: f64,
    pub bias: f64,
}

impl Neuron {
    pub fn new(weight1: f64, weight2: f64, bias: f64) -> Neuron {
        Neuron { weight1, weight2, bias }
    }

    /// Draws all three parameters independently from N(0, 1).
    pub fn random<R: Rng>(rng: &mut R) -> Neuron {
        Neuron {
            weight1: rng.sample(StandardNormal),
            weight2: rng.sample(StandardNormal),
            bias: rng.sample(StandardNormal),
        }
    }

    /// Raw weighted sum `w1·x1 + w2·x2 + b`.
    pub fn preactivation(&self, x1: f64, x2: f64) -> f64 {
        self.weight1 * x1 + self.weight2 * x2 + self.bias
    }
}

/// Evaluates `neuron` on `example`, returning `(activation, preactivation)`.
///
/// The pre-activation is returned alongside the activation because the
/// derivative of the sigmoid has to be taken at the pre-activation.
pub fn apply_neuron(example: &Example, neuron: &Neuron) -> (f64, f64) {
    let preactivation = neuron.preactivation(example.one, example.two);
    (sigmoid(preactivation), preactivation)
}
