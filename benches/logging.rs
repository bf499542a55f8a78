// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Logging call-path microbenchmarks.
//!
//! Measures the cost of reaching a sink through `&dyn Log`: an unguarded
//! `log()` call, an explicit `enabled()` guard at the call site, and the
//! guarded `DebugExt` helper, at message arities 0-3. The call-path fixture
//! sweeps three sinks: the null sink, a level-filtered sink with debug
//! enabled, and one with debug disabled. A second fixture repeats the
//! arity-3 helper inside a loop, and a third compares eager argument
//! serialization against closure-deferred serialization; both run against
//! the null sink.

use chrono::{DateTime, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use log::{Level, LevelFilter, Log, Metadata};
use serde::Serialize;
use stdlib_microbench::logging::{
    debug_unguarded, DebugExt, NullLogger, TestLogger, TestLoggerConfig, BENCH_TARGET,
};

const INT_VALUE: i32 = 42;
const STRING_VALUE: &str = "Hello, World!";

/// Loop counts for the in-loop fixture.
const LOOP_COUNTS: &[u64] = &[100, 1000, 1_000_000];

fn sink(filter: LevelFilter) -> TestLogger {
    TestLogger::new(
        "bench",
        TestLoggerConfig {
            level_filter: filter,
            use_formatter: false,
        },
    )
}

fn debug_metadata() -> Metadata<'static> {
    Metadata::builder()
        .level(Level::Debug)
        .target(BENCH_TARGET)
        .build()
}

fn bench_call_paths(c: &mut Criterion) {
    let start_time = Utc::now();

    let null_logger = NullLogger;
    let debug_enabled = sink(LevelFilter::Debug);
    let debug_disabled = sink(LevelFilter::Info);
    let sinks: [(&str, &dyn Log); 3] = [
        ("null", &null_logger),
        ("enabled", &debug_enabled),
        ("disabled", &debug_disabled),
    ];

    for (label, logger) in sinks {
        let mut group = c.benchmark_group(format!("log_call_path_{label}"));

        group.bench_function("unguarded_0", |b| {
            b.iter(|| debug_unguarded(logger, format_args!("Test message")));
        });
        group.bench_function("unguarded_1", |b| {
            b.iter(|| debug_unguarded(logger, format_args!("Test message: int {INT_VALUE}")));
        });
        group.bench_function("unguarded_2", |b| {
            b.iter(|| {
                debug_unguarded(
                    logger,
                    format_args!("Test message: int {INT_VALUE} and {STRING_VALUE}"),
                )
            });
        });
        group.bench_function("unguarded_3", |b| {
            b.iter(|| {
                debug_unguarded(
                    logger,
                    format_args!(
                        "Test message: int {INT_VALUE}, {STRING_VALUE} and {start_time}"
                    ),
                )
            });
        });

        group.bench_function("guard_at_call_site_0", |b| {
            b.iter(|| {
                if logger.enabled(&debug_metadata()) {
                    debug_unguarded(logger, format_args!("Test message"));
                }
            });
        });
        group.bench_function("guard_at_call_site_3", |b| {
            b.iter(|| {
                if logger.enabled(&debug_metadata()) {
                    debug_unguarded(
                        logger,
                        format_args!(
                            "Test message: int {INT_VALUE}, {STRING_VALUE} and {start_time}"
                        ),
                    );
                }
            });
        });

        group.bench_function("helper_0", |b| {
            b.iter(|| logger.debug(format_args!("Test message")));
        });
        group.bench_function("helper_1", |b| {
            b.iter(|| logger.debug(format_args!("Test message: int {INT_VALUE}")));
        });
        group.bench_function("helper_2", |b| {
            b.iter(|| {
                logger.debug(format_args!(
                    "Test message: int {INT_VALUE} and {STRING_VALUE}"
                ))
            });
        });
        group.bench_function("helper_3", |b| {
            b.iter(|| {
                logger.debug(format_args!(
                    "Test message: int {INT_VALUE}, {STRING_VALUE} and {start_time}"
                ))
            });
        });

        group.finish();
    }
}

fn bench_helper_in_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("log_helper_in_loop");
    let start_time = Utc::now();
    let null_logger = NullLogger;
    let logger: &dyn Log = &null_logger;

    for &count in LOOP_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                for _ in 0..count {
                    logger.debug(format_args!(
                        "Test message: int {INT_VALUE}, {STRING_VALUE} and {start_time}"
                    ));
                }
            });
        });
    }

    group.finish();
}

#[derive(Serialize)]
struct LogPayload {
    id: u32,
    message: String,
    created_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct NestedLogPayload {
    id: u32,
    message: String,
    created_at: DateTime<Utc>,
    items: Vec<LogPayload>,
}

fn simple_payload() -> LogPayload {
    LogPayload {
        id: 42,
        message: STRING_VALUE.to_string(),
        created_at: Utc::now(),
    }
}

fn nested_payload() -> NestedLogPayload {
    NestedLogPayload {
        id: 42,
        message: STRING_VALUE.to_string(),
        created_at: Utc::now(),
        items: (0..42).map(|_| simple_payload()).collect(),
    }
}

fn bench_eager_vs_lazy_arguments(c: &mut Criterion) {
    let mut group = c.benchmark_group("log_argument_serialization");
    // The null sink is never enabled, so only the lazy variant may skip
    // serialization.
    let null_logger = NullLogger;
    let logger: &dyn Log = &null_logger;

    let simple = simple_payload();
    let nested = nested_payload();

    group.bench_function("simple_eager", |b| {
        b.iter(|| {
            logger.debug(format_args!(
                "Test message: string {}",
                serde_json::to_string(&simple).expect("payload serializes")
            ))
        });
    });
    group.bench_function("simple_lazy", |b| {
        b.iter(|| {
            logger.debug_with(|| {
                format!(
                    "Test message: string {}",
                    serde_json::to_string(&simple).expect("payload serializes")
                )
            })
        });
    });
    group.bench_function("nested_eager", |b| {
        b.iter(|| {
            logger.debug(format_args!(
                "Test message: string {}",
                serde_json::to_string(&nested).expect("payload serializes")
            ))
        });
    });
    group.bench_function("nested_lazy", |b| {
        b.iter(|| {
            logger.debug_with(|| {
                format!(
                    "Test message: string {}",
                    serde_json::to_string(&nested).expect("payload serializes")
                )
            })
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_call_paths,
    bench_helper_in_loop,
    bench_eager_vs_lazy_arguments,
);

criterion_main!(benches);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_states_match_labels() {
        // Just verify the setup works
        assert!(!NullLogger.enabled(&debug_metadata()));
        assert!(sink(LevelFilter::Debug).enabled(&debug_metadata()));
        assert!(!sink(LevelFilter::Info).enabled(&debug_metadata()));
    }
}
