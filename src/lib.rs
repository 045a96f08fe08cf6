pub mod activation;
pub mod config;
pub mod data;
pub mod error;
pub mod loss;
pub mod network;
pub mod neuron;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use activation::{deriv_sigmoid, sigmoid};
pub use config::{Probe, RunConfig};
pub use data::{load_dataset, load_dataset_from_path, Dataset, Example, LoadOptions};
pub use error::{NetErr, Result};
pub use loss::{mean_squared_error, MseLoss};
pub use network::{predict, Gradients, Network};
pub use neuron::{apply_neuron, Neuron};
pub use optim::Sgd;
pub use train::{train_epoch, train_loop, train_step, EpochStats, TrainConfig};
