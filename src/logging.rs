// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! The measured logging micro-abstraction.
//!
//! The logging fixtures exercise the object-safe [`log::Log`] trait through
//! `&dyn Log`, comparing an unguarded call path against an
//! `enabled()`-guarded one and a closure-deferred one. `TestLogger` is a
//! deliberately minimal sink: it filters by level and, when configured,
//! renders the record into a retained string so the formatting cost is
//! observable. `NullLogger` rejects everything.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Target string stamped on every record the fixtures emit.
pub const BENCH_TARGET: &str = "stdlib_microbench";

/// A logger that is never enabled and discards everything.
pub struct NullLogger;

impl Log for NullLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        false
    }

    fn log(&self, _record: &Record) {}

    fn flush(&self) {}
}

/// Configuration for [`TestLogger`], fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct TestLoggerConfig {
    /// Verbosity ceiling: records above this level are rejected.
    pub level_filter: LevelFilter,
    /// Whether enabled records are rendered into the retained string.
    pub use_formatter: bool,
}

impl Default for TestLoggerConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::Info,
            use_formatter: false,
        }
    }
}

/// Minimal level-filtering logger used as the measured sink.
pub struct TestLogger {
    name: String,
    config: TestLoggerConfig,
    formatted: Mutex<Option<String>>,
}

impl TestLogger {
    pub fn new(name: impl Into<String>, config: TestLoggerConfig) -> Self {
        Self {
            name: name.into(),
            config,
            formatted: Mutex::new(None),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The most recently rendered message, if formatting is on.
    pub fn last_formatted(&self) -> Option<String> {
        self.formatted.lock().ok().and_then(|guard| guard.clone())
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.formatted.lock() {
            *guard = None;
        }
    }
}

impl Log for TestLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.config.level_filter
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        if self.config.use_formatter {
            if let Ok(mut guard) = self.formatted.lock() {
                *guard = Some(record.args().to_string());
            }
        }
    }

    fn flush(&self) {}
}

/// Caches one [`TestLogger`] per category name.
pub struct TestLoggerProvider {
    config: TestLoggerConfig,
    loggers: Mutex<HashMap<String, Arc<TestLogger>>>,
}

impl TestLoggerProvider {
    pub fn new(config: TestLoggerConfig) -> Self {
        Self {
            config,
            loggers: Mutex::new(HashMap::new()),
        }
    }

    /// Get or create the logger for `category`.
    pub fn logger(&self, category: &str) -> Arc<TestLogger> {
        let mut loggers = match self.loggers.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        Arc::clone(
            loggers
                .entry(category.to_string())
                .or_insert_with(|| Arc::new(TestLogger::new(category, self.config))),
        )
    }
}

/// Emit a debug record with no `enabled()` pre-check.
///
/// The sink still filters internally; this is the unguarded call path the
/// fixtures compare against.
#[inline]
pub fn debug_unguarded(logger: &dyn Log, args: fmt::Arguments<'_>) {
    logger.log(
        &Record::builder()
            .args(args)
            .level(Level::Debug)
            .target(BENCH_TARGET)
            .build(),
    );
}

/// Guarded debug helpers over any [`Log`] implementation.
pub trait DebugExt {
    /// Emit a debug record only if the sink reports debug enabled.
    ///
    /// `fmt::Arguments` defers rendering, but its interpolated expressions
    /// are evaluated at the call site; use [`DebugExt::debug_with`] when an
    /// argument is expensive to produce.
    fn debug(&self, args: fmt::Arguments<'_>);

    /// Emit a debug record whose message is built only when enabled.
    fn debug_with<F>(&self, make: F)
    where
        F: FnOnce() -> String;
}

impl<L: Log + ?Sized> DebugExt for L {
    #[inline]
    fn debug(&self, args: fmt::Arguments<'_>) {
        if self.enabled(
            &Metadata::builder()
                .level(Level::Debug)
                .target(BENCH_TARGET)
                .build(),
        ) {
            self.log(
                &Record::builder()
                    .args(args)
                    .level(Level::Debug)
                    .target(BENCH_TARGET)
                    .build(),
            );
        }
    }

    #[inline]
    fn debug_with<F>(&self, make: F)
    where
        F: FnOnce() -> String,
    {
        if self.enabled(
            &Metadata::builder()
                .level(Level::Debug)
                .target(BENCH_TARGET)
                .build(),
        ) {
            let message = make();
            self.log(
                &Record::builder()
                    .args(format_args!("{message}"))
                    .level(Level::Debug)
                    .target(BENCH_TARGET)
                    .build(),
            );
        }
    }
}
