pub mod network;

pub use network::{predict, ForwardPass, Gradients, Network, NeuronGradients};
