// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! CLI tool to run every fixture through the latency harness and generate
//! JSON reports. Criterion remains the statistical path (`cargo bench`);
//! this binary produces comparable, machine-readable snapshots.

use chrono::Utc;
use clap::Parser;
use log::{LevelFilter, Log};
use rust_decimal::Decimal;
use sha2::{Digest, Sha256};
use sha3::Sha3_256;
use std::path::PathBuf;
use std::time::Duration;
use stdlib_microbench::dispatch::{respond_dyn, respond_generic, Respond, Responder};
use stdlib_microbench::generators::{
    self, InitOrder, NeedlePosition, NumericArrays, FIXED_SEED,
};
use stdlib_microbench::logging::{TestLogger, TestLoggerConfig};
use stdlib_microbench::{
    BenchmarkHarness, BenchmarkReport, BenchmarkResult, DebugExt, FixtureCategory, JsonReporter,
    LatencyMetrics,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "run_benchmarks")]
#[command(about = "Run stdlib microbenchmarks and generate JSON reports")]
struct Args {
    /// Output directory for benchmark data
    #[arg(short, long, default_value = "data")]
    output: PathBuf,

    /// Number of iterations for each benchmark
    #[arg(short, long, default_value_t = 100)]
    iterations: u64,

    /// Fixtures to run (all if not specified)
    #[arg(short, long)]
    category: Option<Vec<String>>,

    /// Run in quick mode (fewer iterations)
    #[arg(long)]
    quick: bool,

    /// Additionally split the report into one file per fixture
    #[arg(long)]
    split: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let iterations = if args.quick { 10 } else { args.iterations };

    info!(output = %args.output.display(), iterations, "stdlib microbenchmark suite");

    let reporter = JsonReporter::new(&args.output)?;
    let mut report = BenchmarkReport::new();

    let run_all = args.category.is_none();
    let categories: Vec<String> = args.category.unwrap_or_default();
    let should_run = |category: FixtureCategory| -> bool {
        run_all
            || categories
                .iter()
                .any(|c| c.eq_ignore_ascii_case(&category.to_string()))
    };

    let harness = BenchmarkHarness::new()
        .warmup(iterations / 10)
        .iterations(iterations);

    if should_run(FixtureCategory::StringSearch) {
        info!("running string search fixture");
        run_string_search(&mut report, &harness);
    }
    if should_run(FixtureCategory::Hashing) {
        info!("running hashing fixture");
        run_hashing(&mut report, &harness);
    }
    if should_run(FixtureCategory::Numeric) {
        info!("running numeric fixture");
        run_numeric(&mut report, &harness);
    }
    if should_run(FixtureCategory::Sorting) {
        info!("running sorting fixture");
        run_sorting(&mut report, &harness);
    }
    if should_run(FixtureCategory::Containment) {
        info!("running containment fixture");
        run_containment(&mut report, &harness);
    }
    if should_run(FixtureCategory::Logging) {
        info!("running logging fixture");
        run_logging(&mut report, &harness);
    }
    if should_run(FixtureCategory::Dispatch) {
        info!("running dispatch fixture");
        run_dispatch(&mut report, &harness);
    }

    let path = reporter.save(&report)?;
    info!(path = %path.display(), "benchmark report saved");

    if args.split {
        for path in reporter.save_by_category(&report)? {
            info!(path = %path.display(), "fixture report saved");
        }
    }

    print_summary(&report);

    Ok(())
}

fn run_string_search(report: &mut BenchmarkReport, harness: &BenchmarkHarness) {
    for n in [10usize, 100, 1000] {
        let haystack = generators::random_alnum_string(n);

        let samples = harness.run(|| {
            std::hint::black_box(haystack.contains('_'));
        });
        report.add_result(
            BenchmarkResult::latency(
                format!("contains_char_{n}"),
                FixtureCategory::StringSearch,
                samples,
                true,
            )
            .with_metadata("n", n),
        );

        let samples = harness.run(|| {
            std::hint::black_box(haystack.contains("_"));
        });
        report.add_result(
            BenchmarkResult::latency(
                format!("contains_str_{n}"),
                FixtureCategory::StringSearch,
                samples,
                true,
            )
            .with_metadata("n", n),
        );
    }
}

fn run_hashing(report: &mut BenchmarkReport, harness: &BenchmarkHarness) {
    let window = Duration::from_millis(50);

    for len in [16usize, 64, 256, 1024, 4096, 16384] {
        let data = generators::seeded_bytes(len, FIXED_SEED);

        let variants: [(&str, Box<dyn FnMut() -> u64>); 4] = [
            ("sha256", {
                let data = data.clone();
                Box::new(move || {
                    std::hint::black_box(Sha256::digest(&data));
                    data.len() as u64
                })
            }),
            ("sha3_256", {
                let data = data.clone();
                Box::new(move || {
                    std::hint::black_box(Sha3_256::digest(&data));
                    data.len() as u64
                })
            }),
            ("xxh3_64", {
                let data = data.clone();
                Box::new(move || {
                    std::hint::black_box(xxhash_rust::xxh3::xxh3_64(&data));
                    data.len() as u64
                })
            }),
            ("crc32", {
                let data = data.clone();
                Box::new(move || {
                    std::hint::black_box(crc32fast::hash(&data));
                    data.len() as u64
                })
            }),
        ];

        for (name, mut operation) in variants {
            let (ops, bytes, duration_ns) = harness.run_throughput(window, &mut *operation);
            report.add_result(
                BenchmarkResult::throughput(
                    format!("{name}_{len}"),
                    FixtureCategory::Hashing,
                    ops,
                    bytes,
                    duration_ns,
                )
                .with_metadata("data_length", len)
                .with_metadata("algorithm", name),
            );
        }
    }
}

fn run_numeric(report: &mut BenchmarkReport, harness: &BenchmarkHarness) {
    for n in [10usize, 1000] {
        let arrays = NumericArrays::seeded(n, FIXED_SEED);

        let samples = harness.run(|| {
            for s in &arrays.strings {
                std::hint::black_box(s.parse::<i32>().ok());
            }
        });
        report.add_result(
            BenchmarkResult::latency(
                format!("parse_i32_{n}"),
                FixtureCategory::Numeric,
                samples,
                true,
            )
            .with_metadata("n", n),
        );

        let samples = harness.run(|| {
            for s in &arrays.strings {
                std::hint::black_box(s.parse::<f64>().ok());
            }
        });
        report.add_result(
            BenchmarkResult::latency(
                format!("parse_f64_{n}"),
                FixtureCategory::Numeric,
                samples,
                true,
            )
            .with_metadata("n", n),
        );

        let samples = harness.run(|| {
            for s in &arrays.strings {
                std::hint::black_box(s.parse::<Decimal>().ok());
            }
        });
        report.add_result(
            BenchmarkResult::latency(
                format!("parse_decimal_{n}"),
                FixtureCategory::Numeric,
                samples,
                true,
            )
            .with_metadata("n", n),
        );

        let samples = harness.run(|| {
            std::hint::black_box(arrays.longs.iter().sum::<i64>());
        });
        report.add_result(
            BenchmarkResult::latency(
                format!("sum_i64_{n}"),
                FixtureCategory::Numeric,
                samples,
                true,
            )
            .with_metadata("n", n),
        );
    }
}

fn run_sorting(report: &mut BenchmarkReport, harness: &BenchmarkHarness) {
    for order in InitOrder::ALL {
        for n in [100usize, 1000, 10_000] {
            let data = generators::ordered_ints(n, order);

            let samples = harness.run_with_setup(
                || data.clone(),
                |mut values| {
                    values.sort();
                    std::hint::black_box(values);
                },
            );
            report.add_result(
                BenchmarkResult::latency(
                    format!("sort_stable_{}_{n}", order.label()),
                    FixtureCategory::Sorting,
                    samples,
                    true,
                )
                .with_metadata("n", n)
                .with_metadata("init_order", order.label()),
            );

            let samples = harness.run_with_setup(
                || data.clone(),
                |mut values| {
                    values.sort_unstable();
                    std::hint::black_box(values);
                },
            );
            report.add_result(
                BenchmarkResult::latency(
                    format!("sort_unstable_{}_{n}", order.label()),
                    FixtureCategory::Sorting,
                    samples,
                    true,
                )
                .with_metadata("n", n)
                .with_metadata("init_order", order.label()),
            );
        }
    }
}

fn run_containment(report: &mut BenchmarkReport, harness: &BenchmarkHarness) {
    let n = 1000;
    let data = generators::sequential_ints(n);

    for position in NeedlePosition::ALL {
        let needle = position.needle(n);

        let samples = harness.run(|| {
            std::hint::black_box(data.iter().any(|&x| x == needle));
        });
        report.add_result(
            BenchmarkResult::latency(
                format!("any_{}", position.label()),
                FixtureCategory::Containment,
                samples,
                true,
            )
            .with_metadata("n", n)
            .with_metadata("position", position.label()),
        );

        let samples = harness.run(|| {
            std::hint::black_box(data.contains(&needle));
        });
        report.add_result(
            BenchmarkResult::latency(
                format!("contains_{}", position.label()),
                FixtureCategory::Containment,
                samples,
                true,
            )
            .with_metadata("n", n)
            .with_metadata("position", position.label()),
        );
    }
}

fn run_logging(report: &mut BenchmarkReport, harness: &BenchmarkHarness) {
    let start_time = Utc::now();

    for (label, filter) in [
        ("enabled", LevelFilter::Debug),
        ("disabled", LevelFilter::Info),
    ] {
        let test_logger = TestLogger::new(
            "bench",
            TestLoggerConfig {
                level_filter: filter,
                use_formatter: false,
            },
        );
        let logger: &dyn Log = &test_logger;

        let samples = harness.run(|| {
            for _ in 0..1000 {
                logger.debug(format_args!(
                    "Test message: int {}, {} and {}",
                    42, "Hello, World!", start_time
                ));
            }
        });
        report.add_result(
            BenchmarkResult::latency(
                format!("helper_3_x1000_{label}"),
                FixtureCategory::Logging,
                samples,
                true,
            )
            .with_metadata("level", label)
            .with_metadata("calls_per_iteration", 1000),
        );
    }
}

fn run_dispatch(report: &mut BenchmarkReport, harness: &BenchmarkHarness) {
    let responder = Responder;

    let samples = harness.run(|| {
        for _ in 0..1000 {
            std::hint::black_box(Responder::associated());
        }
    });
    report.add_result(BenchmarkResult::latency(
        "associated_fn_x1000",
        FixtureCategory::Dispatch,
        samples,
        true,
    ));

    let samples = harness.run(|| {
        for _ in 0..1000 {
            std::hint::black_box(respond_generic(std::hint::black_box(&responder)));
        }
    });
    report.add_result(BenchmarkResult::latency(
        "generic_trait_x1000",
        FixtureCategory::Dispatch,
        samples,
        true,
    ));

    let samples = harness.run(|| {
        for _ in 0..1000 {
            let target: &dyn Respond = std::hint::black_box(&responder);
            std::hint::black_box(respond_dyn(target));
        }
    });
    report.add_result(BenchmarkResult::latency(
        "dyn_ref_x1000",
        FixtureCategory::Dispatch,
        samples,
        true,
    ));
}

fn print_summary(report: &BenchmarkReport) {
    println!();
    println!("Summary");
    println!("-------");

    for result in &report.results {
        if let Some(latency) = &result.latency {
            println!(
                "{}: median={}, p99={}",
                result.name,
                LatencyMetrics::format_latency(latency.median_ns),
                LatencyMetrics::format_latency(latency.p99_ns)
            );
        } else if let Some(throughput) = &result.throughput {
            println!(
                "{}: {}",
                result.name,
                stdlib_microbench::metrics::ThroughputMetrics::format_bytes_per_sec(
                    throughput.bytes_per_sec
                )
            );
        }
    }
}
