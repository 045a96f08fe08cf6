/// Loss report emitted by `train_loop` on every report epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean squared error over the whole dataset after this epoch's updates.
    pub loss: f64,
    /// Wall-clock time since training started, in milliseconds.
    pub elapsed_ms: u64,
}
