// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Benchmark harness for running and timing operations.
//!
//! This is the non-criterion measurement path used by the `run_benchmarks`
//! binary: warmup then fixed-count measurement, returning raw nanosecond
//! samples for the metrics module to summarize.

use std::time::{Duration, Instant};

/// A benchmark harness for measuring operation latency.
pub struct BenchmarkHarness {
    /// Number of warmup iterations before measurement
    warmup_iterations: u64,
    /// Number of measurement iterations
    measurement_iterations: u64,
    /// Whether to keep raw sample data
    keep_raw_samples: bool,
}

impl BenchmarkHarness {
    /// Create a new benchmark harness with default settings.
    pub fn new() -> Self {
        Self {
            warmup_iterations: 10,
            measurement_iterations: 100,
            keep_raw_samples: true,
        }
    }

    /// Set the number of warmup iterations.
    pub fn warmup(mut self, iterations: u64) -> Self {
        self.warmup_iterations = iterations;
        self
    }

    /// Set the number of measurement iterations.
    pub fn iterations(mut self, iterations: u64) -> Self {
        self.measurement_iterations = iterations;
        self
    }

    /// Set whether to keep raw sample data.
    pub fn keep_samples(mut self, keep: bool) -> Self {
        self.keep_raw_samples = keep;
        self
    }

    /// Run a benchmark and collect latency samples.
    ///
    /// The closure performs a single iteration of the operation being
    /// measured. Returns latency samples in nanoseconds.
    pub fn run<F>(&self, mut operation: F) -> Vec<u64>
    where
        F: FnMut(),
    {
        for _ in 0..self.warmup_iterations {
            operation();
        }

        let mut samples = Vec::with_capacity(self.measurement_iterations as usize);
        for _ in 0..self.measurement_iterations {
            let start = Instant::now();
            operation();
            samples.push(start.elapsed().as_nanos() as u64);
        }

        samples
    }

    /// Run a benchmark whose input must be rebuilt before every iteration.
    ///
    /// `setup` produces a fresh input outside the timed window; only
    /// `operation` is measured. The sorting fixture uses this so each
    /// iteration sorts an unsorted clone rather than its own prior output.
    pub fn run_with_setup<I, S, O>(&self, mut setup: S, mut operation: O) -> Vec<u64>
    where
        S: FnMut() -> I,
        O: FnMut(I),
    {
        for _ in 0..self.warmup_iterations {
            let input = setup();
            operation(input);
        }

        let mut samples = Vec::with_capacity(self.measurement_iterations as usize);
        for _ in 0..self.measurement_iterations {
            let input = setup();
            let start = Instant::now();
            operation(input);
            samples.push(start.elapsed().as_nanos() as u64);
        }

        samples
    }

    /// Run a throughput benchmark for a fixed wall-clock duration.
    ///
    /// The closure returns bytes processed per call. Returns
    /// `(operations, total_bytes, total_duration_ns)`.
    pub fn run_throughput<F>(&self, duration: Duration, mut operation: F) -> (u64, u64, u64)
    where
        F: FnMut() -> u64,
    {
        for _ in 0..self.warmup_iterations {
            operation();
        }

        let start = Instant::now();
        let mut operations = 0u64;
        let mut bytes = 0u64;

        while start.elapsed() < duration {
            bytes += operation();
            operations += 1;
        }

        (operations, bytes, start.elapsed().as_nanos() as u64)
    }

    /// Check if raw samples should be kept.
    pub fn should_keep_samples(&self) -> bool {
        self.keep_raw_samples
    }
}

impl Default for BenchmarkHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Measure the execution time of a closure.
pub fn measure<F, T>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    (result, elapsed)
}

/// Measure multiple executions and return nanosecond samples.
pub fn measure_n<F>(iterations: u64, mut f: F) -> Vec<u64>
where
    F: FnMut(),
{
    let mut samples = Vec::with_capacity(iterations as usize);
    for _ in 0..iterations {
        let start = Instant::now();
        f();
        samples.push(start.elapsed().as_nanos() as u64);
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_harness_basic() {
        let harness = BenchmarkHarness::new().warmup(5).iterations(20);

        let samples = harness.run(|| {
            thread::sleep(Duration::from_micros(100));
        });

        assert_eq!(samples.len(), 20);
        for sample in &samples {
            assert!(*sample >= 100_000, "Sample {} < 100μs", sample);
        }
    }

    #[test]
    fn test_run_with_setup_excludes_setup() {
        let harness = BenchmarkHarness::new().warmup(0).iterations(5);

        let samples = harness.run_with_setup(
            || {
                // Setup is slow on purpose; it must not show up in samples.
                thread::sleep(Duration::from_millis(5));
                vec![3, 1, 2]
            },
            |mut v| v.sort(),
        );

        assert_eq!(samples.len(), 5);
        for sample in &samples {
            assert!(*sample < 5_000_000, "Setup leaked into sample: {}ns", sample);
        }
    }

    #[test]
    fn test_run_throughput() {
        let harness = BenchmarkHarness::new().warmup(1);
        let (ops, bytes, duration_ns) =
            harness.run_throughput(Duration::from_millis(20), || 64);

        assert!(ops > 0);
        assert_eq!(bytes, ops * 64);
        assert!(duration_ns >= 20_000_000);
    }

    #[test]
    fn test_measure() {
        let (result, duration) = measure(|| {
            thread::sleep(Duration::from_millis(5));
            42
        });

        assert_eq!(result, 42);
        assert!(duration >= Duration::from_millis(5));
    }

    #[test]
    fn test_measure_n() {
        let samples = measure_n(10, || {
            thread::sleep(Duration::from_micros(50));
        });

        assert_eq!(samples.len(), 10);
    }
}
