// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Standardized metrics types for benchmark results.
//!
//! This module defines the data structures used to capture and serialize
//! benchmark measurements across the fixture suite.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use sysinfo::System;
use uuid::Uuid;

/// The benchmark fixtures covered by this suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureCategory {
    /// Char vs str containment and search over strings
    StringSearch,
    /// Cryptographic and non-cryptographic digest comparisons
    Hashing,
    /// Numeric parse, format, sum and multiply across representations
    Numeric,
    /// Stable vs keyed vs unstable sorting
    Sorting,
    /// Loop vs iterator vs slice containment checks
    Containment,
    /// Logging call-path overhead
    Logging,
    /// Static vs inherent vs virtual dispatch cost
    Dispatch,
}

impl FixtureCategory {
    pub const ALL: [FixtureCategory; 7] = [
        FixtureCategory::StringSearch,
        FixtureCategory::Hashing,
        FixtureCategory::Numeric,
        FixtureCategory::Sorting,
        FixtureCategory::Containment,
        FixtureCategory::Logging,
        FixtureCategory::Dispatch,
    ];
}

impl std::fmt::Display for FixtureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FixtureCategory::StringSearch => write!(f, "string_search"),
            FixtureCategory::Hashing => write!(f, "hashing"),
            FixtureCategory::Numeric => write!(f, "numeric"),
            FixtureCategory::Sorting => write!(f, "sorting"),
            FixtureCategory::Containment => write!(f, "containment"),
            FixtureCategory::Logging => write!(f, "logging"),
            FixtureCategory::Dispatch => write!(f, "dispatch"),
        }
    }
}

/// Latency metrics with percentile distributions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyMetrics {
    /// Minimum observed latency in nanoseconds
    pub min_ns: u64,
    /// Maximum observed latency in nanoseconds
    pub max_ns: u64,
    /// Arithmetic mean latency in nanoseconds
    pub mean_ns: f64,
    /// Median (p50) latency in nanoseconds
    pub median_ns: u64,
    /// 95th percentile latency in nanoseconds
    pub p95_ns: u64,
    /// 99th percentile latency in nanoseconds
    pub p99_ns: u64,
    /// Standard deviation in nanoseconds
    pub std_dev_ns: f64,
    /// Raw sample data (optional, may be downsampled)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<Vec<u64>>,
}

impl LatencyMetrics {
    /// Calculate metrics from a vector of latency samples (in nanoseconds).
    pub fn from_samples(mut samples: Vec<u64>, keep_raw: bool) -> Self {
        if samples.is_empty() {
            return Self {
                min_ns: 0,
                max_ns: 0,
                mean_ns: 0.0,
                median_ns: 0,
                p95_ns: 0,
                p99_ns: 0,
                std_dev_ns: 0.0,
                samples: None,
            };
        }

        samples.sort_unstable();
        let len = samples.len();

        let min_ns = samples[0];
        let max_ns = samples[len - 1];
        let sum: u64 = samples.iter().sum();
        let mean_ns = sum as f64 / len as f64;
        let median_ns = samples[len / 2];
        let p95_ns = samples[((len as f64 * 0.95) as usize).min(len - 1)];
        let p99_ns = samples[((len as f64 * 0.99) as usize).min(len - 1)];

        let variance: f64 = samples
            .iter()
            .map(|&x| {
                let diff = x as f64 - mean_ns;
                diff * diff
            })
            .sum::<f64>()
            / len as f64;
        let std_dev_ns = variance.sqrt();

        // Downsample very large sample sets before persisting.
        let raw_samples = if keep_raw {
            if len > 10_000 {
                Some(samples.iter().step_by(len / 1000).copied().collect())
            } else {
                Some(samples)
            }
        } else {
            None
        };

        Self {
            min_ns,
            max_ns,
            mean_ns,
            median_ns,
            p95_ns,
            p99_ns,
            std_dev_ns,
            samples: raw_samples,
        }
    }

    /// Format latency in human-readable form (auto-selects ns/μs/ms).
    pub fn format_latency(ns: u64) -> String {
        if ns < 1_000 {
            format!("{}ns", ns)
        } else if ns < 1_000_000 {
            format!("{:.2}μs", ns as f64 / 1_000.0)
        } else if ns < 1_000_000_000 {
            format!("{:.2}ms", ns as f64 / 1_000_000.0)
        } else {
            format!("{:.2}s", ns as f64 / 1_000_000_000.0)
        }
    }
}

/// Throughput metrics for byte-oriented fixtures (hashing).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThroughputMetrics {
    /// Operations per second
    pub ops_per_sec: f64,
    /// Bytes processed per second
    pub bytes_per_sec: f64,
    /// Total operations performed
    pub total_ops: u64,
    /// Total bytes processed
    pub total_bytes: u64,
    /// Duration of the benchmark in nanoseconds
    pub duration_ns: u64,
}

impl ThroughputMetrics {
    /// Calculate throughput from operation count, byte count, and duration.
    pub fn calculate(ops: u64, bytes: u64, duration_ns: u64) -> Self {
        let duration_secs = duration_ns as f64 / 1_000_000_000.0;
        Self {
            ops_per_sec: ops as f64 / duration_secs,
            bytes_per_sec: bytes as f64 / duration_secs,
            total_ops: ops,
            total_bytes: bytes,
            duration_ns,
        }
    }

    /// Format throughput in human-readable form.
    pub fn format_bytes_per_sec(bps: f64) -> String {
        if bps < 1_000.0 {
            format!("{:.2} B/s", bps)
        } else if bps < 1_000_000.0 {
            format!("{:.2} KB/s", bps / 1_000.0)
        } else if bps < 1_000_000_000.0 {
            format!("{:.2} MB/s", bps / 1_000_000.0)
        } else {
            format!("{:.2} GB/s", bps / 1_000_000_000.0)
        }
    }
}

/// System information captured at benchmark time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating system name
    pub os: String,
    /// OS version
    pub os_version: String,
    /// Kernel version (Linux)
    pub kernel_version: Option<String>,
    /// CPU model name
    pub cpu_model: String,
    /// Number of CPU cores
    pub cpu_cores: usize,
    /// Total system memory in bytes
    pub memory_bytes: u64,
    /// Hostname
    pub hostname: String,
}

impl SystemInfo {
    /// Collect current system information.
    pub fn collect() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();

        Self {
            os: System::name().unwrap_or_else(|| "Unknown".to_string()),
            os_version: System::os_version().unwrap_or_else(|| "Unknown".to_string()),
            kernel_version: System::kernel_version(),
            cpu_model: sys
                .cpus()
                .first()
                .map(|cpu| cpu.brand().to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            cpu_cores: sys.cpus().len(),
            memory_bytes: sys.total_memory(),
            hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

/// A single benchmark result with all associated metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Name of the benchmark variant
    pub name: String,
    /// Fixture the variant belongs to
    pub category: FixtureCategory,
    /// Latency metrics (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency: Option<LatencyMetrics>,
    /// Throughput metrics (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throughput: Option<ThroughputMetrics>,
    /// Number of iterations/samples
    pub iterations: u64,
    /// Swept parameters and other variant-specific metadata
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl BenchmarkResult {
    /// Create a new latency-focused benchmark result.
    pub fn latency(
        name: impl Into<String>,
        category: FixtureCategory,
        samples: Vec<u64>,
        keep_raw_samples: bool,
    ) -> Self {
        let iterations = samples.len() as u64;
        Self {
            name: name.into(),
            category,
            latency: Some(LatencyMetrics::from_samples(samples, keep_raw_samples)),
            throughput: None,
            iterations,
            metadata: HashMap::new(),
        }
    }

    /// Create a new throughput-focused benchmark result.
    pub fn throughput(
        name: impl Into<String>,
        category: FixtureCategory,
        ops: u64,
        bytes: u64,
        duration_ns: u64,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            latency: None,
            throughput: Some(ThroughputMetrics::calculate(ops, bytes, duration_ns)),
            iterations: ops,
            metadata: HashMap::new(),
        }
    }

    /// Add metadata to the result.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(value) = serde_json::to_value(value) {
            self.metadata.insert(key.into(), value);
        }
        self
    }
}

/// Complete benchmark suite report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Suite identifier
    pub benchmark_suite: String,
    /// Suite version
    pub version: String,
    /// Unique identifier for this run
    pub run_id: Uuid,
    /// Timestamp when benchmarks were run
    pub timestamp: DateTime<Utc>,
    /// System information
    pub system_info: SystemInfo,
    /// Individual benchmark results
    pub results: Vec<BenchmarkResult>,
}

impl BenchmarkReport {
    /// Create a new benchmark report.
    pub fn new() -> Self {
        Self {
            benchmark_suite: "stdlib-microbench".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            run_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            system_info: SystemInfo::collect(),
            results: Vec::new(),
        }
    }

    /// Add a result to the report.
    pub fn add_result(&mut self, result: BenchmarkResult) {
        self.results.push(result);
    }

    /// Results belonging to the given fixture.
    pub fn results_for(&self, category: FixtureCategory) -> impl Iterator<Item = &BenchmarkResult> {
        self.results.iter().filter(move |r| r.category == category)
    }
}

impl Default for BenchmarkReport {
    fn default() -> Self {
        Self::new()
    }
}
