// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! JSON report generation for benchmark results.
//!
//! Handles saving benchmark data to timestamped JSON files for later
//! comparison across runs.

use crate::metrics::BenchmarkReport;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReporterError {
    #[error("Failed to access output directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// JSON reporter for benchmark results.
pub struct JsonReporter {
    /// Output directory for benchmark data
    output_dir: PathBuf,
}

impl JsonReporter {
    /// Create a new JSON reporter with the specified output directory.
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self, ReporterError> {
        let output_dir = output_dir.as_ref().to_path_buf();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Create a reporter using the default data directory.
    pub fn default_location() -> Result<Self, ReporterError> {
        let manifest_dir = env!("CARGO_MANIFEST_DIR");
        let data_dir = Path::new(manifest_dir).join("data");
        Self::new(data_dir)
    }

    /// Save a benchmark report to a JSON file.
    ///
    /// Filenames are stamped from the report's own timestamp so repeated
    /// saves of one run overwrite rather than accumulate.
    ///
    /// Returns the path to the created file.
    pub fn save(&self, report: &BenchmarkReport) -> Result<PathBuf, ReporterError> {
        let filename = format!(
            "suite_{}.json",
            report.timestamp.format("%Y-%m-%dT%H-%M-%SZ")
        );
        self.write_json(&filename, report)
    }

    /// Save one file per fixture category present in the report.
    pub fn save_by_category(
        &self,
        report: &BenchmarkReport,
    ) -> Result<Vec<PathBuf>, ReporterError> {
        let mut by_category: HashMap<_, Vec<_>> = HashMap::new();
        for result in &report.results {
            by_category
                .entry(result.category)
                .or_default()
                .push(result.clone());
        }

        let timestamp = report.timestamp.format("%Y-%m-%dT%H-%M-%SZ");
        let mut paths = Vec::new();
        for (category, results) in by_category {
            let category_report = BenchmarkReport {
                results,
                ..report.clone()
            };

            let filename = format!("{}_{}.json", category, timestamp);
            paths.push(self.write_json(&filename, &category_report)?);
        }

        Ok(paths)
    }

    /// List all existing benchmark files in the output directory.
    pub fn list_reports(&self) -> Result<Vec<PathBuf>, ReporterError> {
        let mut reports = Vec::new();
        for entry in fs::read_dir(&self.output_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().map(|e| e == "json").unwrap_or(false) {
                reports.push(path);
            }
        }
        reports.sort();
        Ok(reports)
    }

    /// Load an existing benchmark report from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<BenchmarkReport, ReporterError> {
        let file = File::open(path)?;
        let report = serde_json::from_reader(file)?;
        Ok(report)
    }

    fn write_json(
        &self,
        filename: &str,
        report: &BenchmarkReport,
    ) -> Result<PathBuf, ReporterError> {
        let filepath = self.output_dir.join(filename);
        let file = File::create(&filepath)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, report)?;
        Ok(filepath)
    }
}
