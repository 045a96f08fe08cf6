use std::time::Instant;

use log::{debug, info};

use crate::data::example::Example;
use crate::loss::mse::MseLoss;
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_epoch;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` for `config.epochs` epochs and returns every loss report.
///
/// # Arguments
/// - `network`   — mutable reference to the network; modified in place
/// - `examples`  — training data, visited in stored order every epoch
/// - `optimizer` — SGD optimizer (carries the learning rate)
/// - `config`    — epoch count and report interval
/// - `on_report` — called with each `EpochStats` as soon as it is computed
///
/// On every report epoch the loss is the mean squared error of a fresh
/// prediction pass over all of `examples`, taken after that epoch's updates.
pub fn train_loop<F>(
    network: &mut Network,
    examples: &[Example],
    optimizer: &Sgd,
    config: &TrainConfig,
    mut on_report: F,
) -> Vec<EpochStats>
where
    F: FnMut(&EpochStats),
{
    info!(
        "training on {} examples for {} epochs (learning rate {})",
        examples.len(),
        config.epochs,
        optimizer.learning_rate
    );

    let started = Instant::now();
    let mut reports = Vec::new();

    for epoch in 1..=config.epochs {
        train_epoch(network, examples, optimizer);

        if config.is_report_epoch(epoch) {
            let stats = EpochStats {
                epoch,
                total_epochs: config.epochs,
                loss: evaluate(network, examples),
                elapsed_ms: started.elapsed().as_millis() as u64,
            };
            debug!(
                "epoch {}/{}: loss {:.6} ({} ms)",
                stats.epoch, stats.total_epochs, stats.loss, stats.elapsed_ms
            );
            on_report(&stats);
            reports.push(stats);
        }
    }

    info!(
        "training finished after {} ms",
        started.elapsed().as_millis()
    );

    reports
}

/// Mean squared error of `network` over `examples` (eval mode, no updates).
pub fn evaluate(network: &Network, examples: &[Example]) -> f64 {
    let predictions = network.predict_all(examples);
    MseLoss::loss(examples, &predictions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neuron::Neuron;

    fn dataset() -> Vec<Example> {
        vec![
            Example::new(-1.0, -1.0, 1.0),
            Example::new(1.0, 1.0, 0.0),
            Example::new(-1.0, 1.0, 1.0),
            Example::new(1.0, -1.0, 0.0),
        ]
    }

    fn start() -> Network {
        Network::new(
            Neuron::new(0.3, -0.2, 0.1),
            Neuron::new(-0.5, 0.4, 0.0),
            Neuron::new(0.7, -0.6, 0.2),
        )
    }

    #[test]
    fn reports_on_every_interval() {
        let mut net = start();
        let config = TrainConfig::new(2500, 0.01, 1000);
        let mut seen = Vec::new();
        let reports = train_loop(&mut net, &dataset(), &config.optimizer(), &config, |s| {
            seen.push(s.epoch)
        });
        assert_eq!(seen, vec![1000, 2000]);
        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| r.total_epochs == 2500));
        assert!(reports[0].elapsed_ms <= reports[1].elapsed_ms);
    }

    #[test]
    fn reported_loss_matches_a_fresh_evaluation() {
        let mut net = start();
        let config = TrainConfig::new(3, 0.1, 3);
        let reports = train_loop(&mut net, &dataset(), &config.optimizer(), &config, |_| {});
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].loss, evaluate(&net, &dataset()));
    }

    #[test]
    fn zero_epochs_leaves_network_untouched() {
        let mut net = start();
        let config = TrainConfig::new(0, 0.1, 1);
        let reports = train_loop(&mut net, &dataset(), &config.optimizer(), &config, |_| {});
        assert!(reports.is_empty());
        assert_eq!(net, start());
    }

    #[test]
    fn empty_dataset_reports_nan() {
        let mut net = start();
        let config = TrainConfig::new(2, 0.1, 1);
        let reports = train_loop(&mut net, &[], &config.optimizer(), &config, |_| {});
        assert_eq!(reports.len(), 2);
        assert!(reports[0].loss.is_nan());
        assert_eq!(net, start());
    }
}
