//! Per-run performance counters.

/// Timing and snapshot counters collected over one solve.
///
/// Durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SolveMetrics {
    /// Wall-clock time for the whole run, including snapshot output.
    pub total_us: u64,
    /// Time spent inside sweeps.
    pub sweep_us: u64,
    /// Time spent mirroring and handing snapshots to the sink.
    pub snapshot_us: u64,
    /// Snapshots the sink accepted.
    pub snapshots_written: u64,
    /// Snapshots the sink rejected.
    pub snapshot_failures: u64,
}

impl SolveMetrics {
    /// Mean sweep time in microseconds, or `0.0` before the first sweep.
    pub fn mean_sweep_us(&self, iterations: u64) -> f64 {
        if iterations == 0 {
            0.0
        } else {
            self.sweep_us as f64 / iterations as f64
        }
    }
}
