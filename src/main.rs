// Trains the three-neuron network on `inputs.csv` and prints the two probes.
//
// Set TRIO_NN_CONFIG to a JSON `RunConfig` file to change the input path,
// hyperparameters or probes; RUST_LOG controls diagnostics on stderr.
use std::{env, process};

use log::{error, info};
use rand::{rngs::StdRng, SeedableRng};

use trio_nn::{load_dataset_from_path, train_loop, Network, Result, RunConfig};

const CONFIG_ENV: &str = "TRIO_NN_CONFIG";

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{e}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = match env::var_os(CONFIG_ENV) {
        Some(path) => {
            info!("reading run configuration from {}", path.to_string_lossy());
            RunConfig::load_json(path)?
        }
        None => RunConfig::default(),
    };

    let mut network = match config.train.seed {
        Some(seed) => Network::random(&mut StdRng::seed_from_u64(seed)),
        None => Network::random(&mut rand::thread_rng()),
    };

    let dataset = load_dataset_from_path(&config.input_path, &config.load)?;

    let optimizer = config.train.optimizer();
    train_loop(&mut network, &dataset.examples, &optimizer, &config.train, |stats| {
        println!("Epoch {} loss {:.4}", stats.epoch, stats.loss);
    });

    for probe in &config.probes {
        println!("{} expected is {:.4}", probe.name, network.predict(&probe.example()));
    }

    Ok(())
}
