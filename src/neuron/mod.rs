pub mod neuron;

pub use neuron::{apply_neuron, Neuron};
