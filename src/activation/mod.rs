pub mod activation;

pub use activation::{deriv_sigmoid, sigmoid};
