//! Per-stage timing for a single evaluation
//!
//! Metrics are plain values collected by the caller and returned with the
//! report; nothing is recorded globally.
//!
//! ```
//! use litigation_engine::metrics::StageMetrics;
//!
//! let mut metrics = StageMetrics::new();
//! let total = metrics.time("count", true, || (1..=4).sum::<u32>());
//! assert_eq!(total, 10);
//! assert_eq!(metrics.into_vec()[0].stage, "count");
//! ```

use std::time::Instant;

use shared_types::StageMetric;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct StageMetrics {
    stages: Vec<StageMetric>,
}

impl StageMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` as stage `name`, recording its duration and `success`
    pub fn time<T>(&mut self, name: &str, success: bool, f: impl FnOnce() -> T) -> T {
        self.time_with(name, f, |_| success)
    }

    /// Run `f` as stage `name`; `succeeded` decides the success flag from the output
    pub fn time_with<T>(
        &mut self,
        name: &str,
        f: impl FnOnce() -> T,
        succeeded: impl FnOnce(&T) -> bool,
    ) -> T {
        let start = Instant::now();
        let output = f();
        let elapsed = start.elapsed();
        let success = succeeded(&output);

        debug!(stage = name, elapsed_us = elapsed.as_micros() as u64, success, "stage finished");
        self.stages.push(StageMetric {
            stage: name.to_string(),
            elapsed_us: elapsed.as_micros() as u64,
            success,
        });
        output
    }

    pub fn stages(&self) -> &[StageMetric] {
        &self.stages
    }

    pub fn into_vec(self) -> Vec<StageMetric> {
        self.stages
    }
}
