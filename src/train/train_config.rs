use serde::{Deserialize, Serialize};

use crate::error::{NetErr, Result};
use crate::optim::sgd::Sgd;

/// Hyperparameters for a `train_loop` run.
///
/// # Fields
/// - `epochs`          — total number of full passes over the training data
/// - `learning_rate`   — fixed SGD step size, no schedule or decay
/// - `report_interval` — the loss is evaluated on every epoch that is a
///                       multiple of this (1-based); `0` disables reporting
/// - `seed`            — seeds the parameter initialization; `None` draws
///                       from the thread-local generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub report_interval: usize,
    pub seed: Option<u64>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            epochs: 4000,
            learning_rate: 0.0001,
            report_interval: 1000,
            seed: None,
        }
    }
}

impl TrainConfig {
    pub fn new(epochs: usize, learning_rate: f64, report_interval: usize) -> Self {
        TrainConfig {
            epochs,
            learning_rate,
            report_interval,
            seed: None,
        }
    }

    /// Whether the loss is reported after `epoch` (1-based).
    pub fn is_report_epoch(&self, epoch: usize) -> bool {
        self.report_interval != 0 && epoch % self.report_interval == 0
    }

    pub fn optimizer(&self) -> Sgd {
        Sgd::new(self.learning_rate)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() {
            return Err(NetErr::InvalidConfig(format!(
                "learning_rate must be finite, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}
