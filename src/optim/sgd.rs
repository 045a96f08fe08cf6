use crate::network::{Gradients, Network, NeuronGradients};
use crate::neuron::Neuron;

/// Plain stochastic gradient descent with a fixed learning rate.
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one update, `param -= learning_rate · gradient`, to all nine
    /// parameters of `network`.
    pub fn step(&self, network: &mut Network, grads: &Gradients) {
        self.apply(&mut network.hidden1, &grads.hidden1);
        self.apply(&mut network.hidden2, &grads.hidden2);
        self.apply(&mut network.output, &grads.output);
    }

    fn apply(&self, neuron: &mut Neuron, grads: &NeuronGradients) {
        neuron.weight1 -= self.learning_rate * grads.weight1;
        neuron.weight2 -= self.learning_rate * grads.weight2;
        neuron.bias -= self.learning_rate * grads.bias;
    }
}
