use crate::{
    data::example::Example,
    network::network::Network,
    optim::sgd::Sgd,
};

/// One online SGD update on a single example.
///
/// All nine gradients are taken from the parameters as they were before this
/// call; only then is the update applied. Returns the prediction the network
/// made for `example` before updating.
pub fn train_step(network: &mut Network, example: &Example, optimizer: &Sgd) -> f64 {
    let pass = network.forward(example);
    let grads = network.backward(example, &pass);
    optimizer.step(network, &grads);
    pass.output_activation
}

/// One full pass over `examples`, in stored order, updating after every example.
pub fn train_epoch(network: &mut Network, examples: &[Example], optimizer: &Sgd) {
    for example in examples {
        train_step(network, example, optimizer);
    }
}
