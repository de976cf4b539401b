// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Synthetic benchmark suite
//!
//! Runs CPU, memory, disk, thermal, network and power measurements strictly in
//! sequence and assembles one [`BenchmarkResult`]. Each sub-test saturates a
//! single subsystem, so nothing here runs in parallel.

mod disk;
mod network;
mod stress;
mod thermal;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{BenchmarkConfig, Settings};
use crate::error::Result;
use crate::hardware::{cpu_frequency_chain, power_chain, PowerStatus, Probe};

pub use disk::{disk_write_test, DISK_TEST_BYTES};
pub use network::{HttpNetworkProbe, NetworkSample};
pub use stress::{count_primes, cpu_stress, memory_stress};
pub use thermal::{stability_pct, thermal_stability};

/// Seconds assumed for a timing that is missing from a saved result.
pub const MISSING_SECONDS: f64 = 99.0;

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Output of one suite run.
///
/// Missing fields deserialize to the worst or neutral value, so a partially
/// filled saved result can still be scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    #[serde(default = "missing_seconds")]
    pub cpu_stress_seconds: f64,
    #[serde(default = "missing_seconds")]
    pub ram_stress_seconds: f64,
    #[serde(default = "missing_seconds")]
    pub disk_write_seconds: f64,
    /// `None` when the CPU clock could not be sampled
    #[serde(default)]
    pub thermal_stability_pct: Option<f64>,
    #[serde(default)]
    pub network_ping_ms: f64,
    #[serde(default)]
    pub network_download_mbps: f64,
    /// `None` on machines without a battery
    #[serde(default)]
    pub battery_percent: Option<f64>,
    #[serde(default = "default_plugged")]
    pub is_plugged: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_seconds_left: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measured_at: Option<DateTime<Utc>>,
}

impl Default for BenchmarkResult {
    fn default() -> Self {
        Self {
            cpu_stress_seconds: MISSING_SECONDS,
            ram_stress_seconds: MISSING_SECONDS,
            disk_write_seconds: MISSING_SECONDS,
            thermal_stability_pct: None,
            network_ping_ms: 0.0,
            network_download_mbps: 0.0,
            battery_percent: None,
            is_plugged: true,
            battery_seconds_left: None,
            measured_at: None,
        }
    }
}

impl BenchmarkResult {
    /// Percentage points lost between clock samples; unknown counts as 100.
    pub fn thermal_deviation(&self) -> f64 {
        match self.thermal_stability_pct {
            Some(pct) => 100.0 - pct,
            None => 100.0,
        }
    }
}

fn missing_seconds() -> f64 {
    MISSING_SECONDS
}

fn default_plugged() -> bool {
    true
}

/// Suite stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Cpu,
    Memory,
    Disk,
    Thermal,
    Network,
    Power,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Cpu,
        Stage::Memory,
        Stage::Disk,
        Stage::Thermal,
        Stage::Network,
        Stage::Power,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Cpu => "CPU stress",
            Stage::Memory => "memory stress",
            Stage::Disk => "disk write",
            Stage::Thermal => "thermal stability",
            Stage::Network => "network",
            Stage::Power => "power",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Configured benchmark suite with pluggable measurement sources.
pub struct BenchmarkSuite {
    config: BenchmarkConfig,
    frequency: Box<dyn Probe<f64>>,
    power: Box<dyn Probe<PowerStatus>>,
    network: Option<Box<dyn Probe<NetworkSample>>>,
}

impl BenchmarkSuite {
    /// Suite using this platform's default sources.
    pub fn new(config: BenchmarkConfig) -> Self {
        let network: Option<Box<dyn Probe<NetworkSample>>> = if config.network.enabled {
            Some(Box::new(HttpNetworkProbe::from_config(&config.network)))
        } else {
            None
        };

        Self {
            config,
            frequency: Box::new(cpu_frequency_chain()),
            power: Box::new(power_chain()),
            network,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.benchmark.clone())
    }

    pub fn with_frequency_source(mut self, source: impl Probe<f64> + 'static) -> Self {
        self.frequency = Box::new(source);
        self
    }

    pub fn with_power_source(mut self, source: impl Probe<PowerStatus> + 'static) -> Self {
        self.power = Box::new(source);
        self
    }

    pub fn with_network_probe(mut self, probe: impl Probe<NetworkSample> + 'static) -> Self {
        self.network = Some(Box::new(probe));
        self
    }

    /// Skip the network stage; results report zero ping and throughput.
    pub fn without_network(mut self) -> Self {
        self.network = None;
        self
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    pub fn scratch_dir(&self) -> PathBuf {
        self.config.scratch_dir()
    }

    pub fn cpu_stress_test(&self) -> f64 {
        cpu_stress(self.config.cpu_limit)
    }

    pub fn memory_stress_test(&self) -> f64 {
        memory_stress(self.config.memory_size)
    }

    pub fn disk_test(&self) -> Result<f64> {
        disk_write_test(&self.scratch_dir())
    }

    pub fn thermal_stability_test(&self) -> Option<f64> {
        thermal_stability(self.frequency.as_ref(), self.config.thermal_limit)
    }

    /// Never fails; an unreachable network reads as zeros.
    pub fn network_test(&self) -> NetworkSample {
        let Some(probe) = &self.network else {
            return NetworkSample::unavailable();
        };
        match probe.read() {
            Ok(sample) => sample,
            Err(err) => {
                tracing::info!(target: "rigcheck.benchmark", error = %err, "network test unavailable");
                NetworkSample::unavailable()
            }
        }
    }

    /// `None` when the machine has no readable battery.
    pub fn power_status(&self) -> Option<PowerStatus> {
        match self.power.read() {
            Ok(status) => Some(status),
            Err(err) => {
                tracing::debug!(target: "rigcheck.benchmark", error = %err, "no battery reading");
                None
            }
        }
    }

    pub fn run_all(&self) -> Result<BenchmarkResult> {
        self.run_all_with(|_| {})
    }

    /// Run every stage in order, calling `observer` as each one starts.
    pub fn run_all_with(&self, mut observer: impl FnMut(Stage)) -> Result<BenchmarkResult> {
        let mut result = BenchmarkResult::default();

        for stage in Stage::ALL {
            observer(stage);
            tracing::info!(target: "rigcheck.benchmark", stage = stage.label(), "running");

            match stage {
                Stage::Cpu => result.cpu_stress_seconds = self.cpu_stress_test(),
                Stage::Memory => result.ram_stress_seconds = self.memory_stress_test(),
                Stage::Disk => result.disk_write_seconds = self.disk_test()?,
                Stage::Thermal => result.thermal_stability_pct = self.thermal_stability_test(),
                Stage::Network => {
                    let sample = self.network_test();
                    result.network_ping_ms = sample.ping_ms;
                    result.network_download_mbps = sample.download_mbps;
                }
                Stage::Power => {
                    if let Some(status) = self.power_status() {
                        result.battery_percent = Some(status.percent);
                        result.is_plugged = status.plugged;
                        result.battery_seconds_left = status.seconds_left;
                    }
                }
            }
        }

        result.measured_at = Some(Utc::now());
        tracing::info!(
            target: "rigcheck.benchmark",
            cpu = result.cpu_stress_seconds,
            ram = result.ram_stress_seconds,
            disk = result.disk_write_seconds,
            thermal = ?result.thermal_stability_pct,
            "suite complete"
        );
        Ok(result)
    }
}
