// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for rigcheck
//!
//! Handles loading settings from ~/.rigcheck/settings.json. Only the
//! benchmark bounds and data sources are configurable; gate and scoring
//! thresholds are fixed in code.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod io;
mod validation;

/// Main settings structure, stored in ~/.rigcheck/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Requirement catalog to use instead of the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    /// Benchmark suite bounds and sources
    #[serde(default)]
    pub benchmark: BenchmarkConfig,
}

/// Tunable bounds for the benchmark suite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Primes are counted below this bound in the CPU stress test
    #[serde(default = "default_cpu_limit")]
    pub cpu_limit: u64,

    /// Number of integers allocated by the memory stress test
    #[serde(default = "default_memory_size")]
    pub memory_size: usize,

    /// Prime bound for the heat-generating load in the thermal test
    #[serde(default = "default_thermal_limit")]
    pub thermal_limit: u64,

    /// Directory for the disk test's scratch file (None = working directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scratch_dir: Option<PathBuf>,

    /// Network probe settings
    #[serde(default)]
    pub network: NetworkConfig,
}

/// Network probe configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Run the network probe at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Candidate `host:port` endpoints; the fastest to connect is used for ping
    #[serde(default = "default_network_servers")]
    pub servers: Vec<String>,

    /// URL downloaded to estimate throughput
    #[serde(default = "default_download_url")]
    pub download_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_network_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            cpu_limit: default_cpu_limit(),
            memory_size: default_memory_size(),
            thermal_limit: default_thermal_limit(),
            scratch_dir: None,
            network: NetworkConfig::default(),
        }
    }
}

impl BenchmarkConfig {
    /// Directory the disk test writes its scratch file into.
    pub fn scratch_dir(&self) -> PathBuf {
        self.scratch_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            servers: default_network_servers(),
            download_url: default_download_url(),
            timeout_secs: default_network_timeout_secs(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_cpu_limit() -> u64 {
    1_000_000
}

fn default_memory_size() -> usize {
    1_000_000
}

fn default_thermal_limit() -> u64 {
    500_000
}

fn default_network_servers() -> Vec<String> {
    vec![
        "1.1.1.1:443".to_string(),
        "8.8.8.8:443".to_string(),
        "9.9.9.9:443".to_string(),
    ]
}

fn default_download_url() -> String {
    "https://speed.cloudflare.com/__down?bytes=10000000".to_string()
}

fn default_network_timeout_secs() -> u64 {
    10
}
