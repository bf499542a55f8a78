// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Standard-library Microbenchmark Suite
//!
//! A collection of isolated microbenchmarks comparing standard-library
//! operations: string containment and search, cryptographic and
//! non-cryptographic hashing, numeric parse/format/arithmetic across
//! representations, collection containment checks, stable sorting, logging
//! call paths, and static vs virtual dispatch.
//!
//! # Fixtures
//!
//! Each fixture is a self-contained setup-then-measure unit: inputs are
//! built once per parameter combination in [`generators`], measured variants
//! live under `benches/`, and all variants within a comparison group operate
//! on identical input.
//!
//! # Data Output
//!
//! The criterion benches report through criterion's own machinery; the
//! `run_benchmarks` binary runs the same fixtures through
//! [`BenchmarkHarness`] and writes standardized JSON reports.

pub mod dispatch;
pub mod generators;
pub mod harness;
pub mod logging;
pub mod metrics;
pub mod reporter;

pub use harness::BenchmarkHarness;
pub use logging::{DebugExt, NullLogger, TestLogger, TestLoggerConfig, TestLoggerProvider};
pub use metrics::{
    BenchmarkReport, BenchmarkResult, FixtureCategory, LatencyMetrics, SystemInfo,
};
pub use reporter::JsonReporter;
