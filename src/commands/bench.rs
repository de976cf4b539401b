// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Benchmark suite command

use std::path::Path;

use super::render::print_benchmark;
use super::{with_spinner, EXIT_OK};
use crate::benchmark::{BenchmarkResult, BenchmarkSuite};
use crate::cli::args::{BenchArgs, OutputFormat};
use crate::config::BenchmarkConfig;
use crate::error::Result;

/// Apply command-line overrides on top of the configured bounds.
pub(super) fn effective_config(args: &BenchArgs, base: &BenchmarkConfig) -> BenchmarkConfig {
    let mut config = base.clone();
    if let Some(limit) = args.cpu_limit {
        config.cpu_limit = limit;
    }
    if let Some(size) = args.memory_size {
        config.memory_size = size;
    }
    if args.no_network {
        config.network.enabled = false;
    }
    config
}

/// Write a result where `rigcheck analyze --results` can read it back.
pub fn save_result(path: &Path, result: &BenchmarkResult) -> Result<()> {
    std::fs::write(path, serde_json::to_string_pretty(result)?)?;
    tracing::info!(target: "rigcheck.benchmark", path = %path.display(), "benchmark result saved");
    Ok(())
}

/// Read a result saved by [`save_result`]; missing fields take worst-case defaults.
pub fn load_result(path: &Path) -> Result<BenchmarkResult> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Execute the bench command
pub async fn execute(args: &BenchArgs, base: &BenchmarkConfig, format: &OutputFormat) -> Result<i32> {
    let config = effective_config(args, base);
    config.validate()?;
    let suite = BenchmarkSuite::new(config);
    let show_progress = matches!(format, OutputFormat::Text);

    let result = with_spinner(show_progress, "Starting benchmark...", move |spinner| {
        suite.run_all_with(|stage| spinner.set_message(format!("Running {} test...", stage)))
    })
    .await?;

    if let Some(path) = &args.save {
        save_result(path, &result)?;
    }

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_benchmark(&result);
        if let Some(path) = &args.save {
            println!("\nSaved to {}", path.display());
        }
        println!();
    }

    Ok(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_effective_config_without_overrides() {
        let base = BenchmarkConfig::default();
        let config = effective_config(&BenchArgs::default(), &base);
        assert_eq!(config.cpu_limit, base.cpu_limit);
        assert_eq!(config.memory_size, base.memory_size);
        assert!(config.network.enabled);
    }

    #[test]
    fn test_effective_config_overrides() {
        let args = BenchArgs {
            cpu_limit: Some(50_000),
            memory_size: Some(2_000),
            no_network: true,
            save: None,
        };
        let config = effective_config(&args, &BenchmarkConfig::default());
        assert_eq!(config.cpu_limit, 50_000);
        assert_eq!(config.memory_size, 2_000);
        assert!(!config.network.enabled);
        assert_eq!(config.thermal_limit, 500_000);
    }

    #[test]
    fn test_save_then_load_result() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bench.json");
        let result = BenchmarkResult {
            cpu_stress_seconds: 0.52,
            battery_percent: Some(64.0),
            is_plugged: false,
            ..BenchmarkResult::default()
        };

        save_result(&path, &result).unwrap();
        assert_eq!(load_result(&path).unwrap(), result);
    }

    #[test]
    fn test_load_partial_result() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bench.json");
        std::fs::write(&path, r#"{"cpu_stress_seconds": 0.3, "is_plugged": false}"#).unwrap();

        let result = load_result(&path).unwrap();
        assert_eq!(result.cpu_stress_seconds, 0.3);
        assert_eq!(result.disk_write_seconds, 99.0);
        assert!(!result.is_plugged);
    }

    #[test]
    fn test_load_missing_result_is_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(load_result(&temp_dir.path().join("nope.json")).is_err());
    }
}
