use rand::Rng;

use crate::activation::deriv_sigmoid;
use crate::data::example::Example;
use crate::loss::mse::MseLoss;
use crate::neuron::{apply_neuron, Neuron};

/// Two hidden neurons feeding one output neuron.
///
/// The output neuron reads the hidden activations as its two inputs:
/// `hidden1` into `weight1`, `hidden2` into `weight2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Network {
    pub hidden1: Neuron,
    pub hidden2: Neuron,
    pub output: Neuron,
}

/// Every intermediate value of one forward pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardPass {
    pub hidden1_activation: f64,
    pub hidden1_preactivation: f64,
    pub hidden2_activation: f64,
    pub hidden2_preactivation: f64,
    pub output_activation: f64,
    pub output_preactivation: f64,
}

/// `∂L/∂param` for each of the three parameters of one neuron.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NeuronGradients {
    pub weight1: f64,
    pub weight2: f64,
    pub bias: f64,
}

/// Loss gradients for all nine parameters of a `Network`, taken on one example.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Gradients {
    pub hidden1: NeuronGradients,
    pub hidden2: NeuronGradients,
    pub output: NeuronGradients,
}

impl Network {
    pub fn new(hidden1: Neuron, hidden2: Neuron, output: Neuron) -> Network {
        Network { hidden1, hidden2, output }
    }

    /// Standard-normal initialization of all nine parameters.
    pub fn random<R: Rng>(rng: &mut R) -> Network {
        Network {
            hidden1: Neuron::random(rng),
            hidden2: Neuron::random(rng),
            output: Neuron::random(rng),
        }
    }

    /// Runs the full network and keeps every intermediate value.
    pub fn forward(&self, example: &Example) -> ForwardPass {
        let (hidden1_activation, hidden1_preactivation) = apply_neuron(example, &self.hidden1);
        let (hidden2_activation, hidden2_preactivation) = apply_neuron(example, &self.hidden2);

        // The hidden activations become a synthetic example; its label is unused.
        let hidden = Example::new(hidden1_activation, hidden2_activation, 0.0);
        let (output_activation, output_preactivation) = apply_neuron(&hidden, &self.output);

        ForwardPass {
            hidden1_activation,
            hidden1_preactivation,
            hidden2_activation,
            hidden2_preactivation,
            output_activation,
            output_preactivation,
        }
    }

    /// The network's output activation for `example`.
    pub fn predict(&self, example: &Example) -> f64 {
        self.forward(example).output_activation
    }

    /// Predictions for every example, in order.
    pub fn predict_all(&self, examples: &[Example]) -> Vec<f64> {
        examples.iter().map(|e| self.predict(e)).collect()
    }

    /// Backpropagates the squared error of a single example.
    ///
    /// Every gradient is read off the current parameters, so applying the
    /// result afterwards matches updating all nine scalars "at once": the
    /// hidden-layer chain always sees the output weights from before the update.
    pub fn gradients(&self, example: &Example) -> Gradients {
        self.backward(example, &self.forward(example))
    }

    /// Same as `gradients`, reusing a forward pass already computed for `example`.
    pub fn backward(&self, example: &Example, pass: &ForwardPass) -> Gradients {
        let d_loss = MseLoss::derivative(example.expected, pass.output_activation);

        // Output neuron.
        let d_output = deriv_sigmoid(pass.output_preactivation);
        let output = NeuronGradients {
            weight1: d_loss * (pass.hidden1_activation * d_output),
            weight2: d_loss * (pass.hidden2_activation * d_output),
            bias: d_loss * d_output,
        };

        // Signal reaching each hidden activation through the output neuron.
        let d_hidden1_activation = self.output.weight1 * d_output;
        let d_hidden2_activation = self.output.weight2 * d_output;

        let hidden1 = hidden_gradients(
            example,
            d_loss * d_hidden1_activation,
            deriv_sigmoid(pass.hidden1_preactivation),
        );
        let hidden2 = hidden_gradients(
            example,
            d_loss * d_hidden2_activation,
            deriv_sigmoid(pass.hidden2_preactivation),
        );

        Gradients { hidden1, hidden2, output }
    }
}

/// `upstream` is `∂L/∂activation` for the hidden neuron, `slope` its
/// `σ'(preactivation)`.
fn hidden_gradients(example: &Example, upstream: f64, slope: f64) -> NeuronGradients {
    NeuronGradients {
        weight1: upstream * (example.one * slope),
        weight2: upstream * (example.two * slope),
        bias: upstream * slope,
    }
}

/// Free-function form of `Network::predict` over three loose neurons.
pub fn predict(n1: &Neuron, n2: &Neuron, n3: &Neuron, example: &Example) -> f64 {
    Network::new(*n1, *n2, *n3).predict(example)
}
