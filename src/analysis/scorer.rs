// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Weighted performance score
//!
//! Additive bands (RAM 30, CPU 40, thermal 20, disk 10) followed by power
//! penalties, clamped to 0..=100.

use super::report::ScoreReport;
use crate::benchmark::BenchmarkResult;
use crate::config::Requirement;
use crate::hardware::Snapshot;

/// Headroom above the RAM minimum that earns full RAM points.
const RAM_HEADROOM_GB: f64 = 2.0;

const RAM_SECONDS_BANDS: [(f64, i32); 3] = [(0.10, 15), (0.25, 10), (0.50, 5)];
const CPU_SECONDS_BANDS: [(f64, i32); 3] = [(0.4, 40), (0.8, 25), (1.5, 10)];
const DISK_SECONDS_BANDS: [(f64, i32); 2] = [(0.3, 10), (0.8, 5)];
/// Strict upper bounds on thermal deviation (percentage points).
const THERMAL_DEVIATION_BANDS: [(f64, i32); 2] = [(5.0, 20), (15.0, 10)];

const UNPLUGGED_PENALTY: i32 = 25;
const LOW_BATTERY_PENALTY: i32 = 15;
const LOW_BATTERY_PCT: f64 = 20.0;
const HIGH_PING_MS: f64 = 150.0;

pub const LOW_RAM_WARNING: &str = "Low available RAM. Please close background applications.";
pub const RAM_LATENCY_WARNING: &str = "High RAM latency detected. Your memory response is slow.";
pub const CPU_WARNING: &str = "CPU performance is below optimal levels for this task.";
pub const THERMAL_WARNING: &str =
    "High thermal deviation! Your system might be overheating (Throttling).";
pub const DISK_WARNING: &str = "Slow storage speed. This may cause long loading times.";
pub const ON_BATTERY_WARNING: &str =
    "System on battery. Power is throttled. Plug in for max performance!";
pub const LOW_BATTERY_WARNING: &str =
    "Battery is critical (<20%). High-performance mode is disabled.";

/// Points for a timing: first band whose bound is >= `seconds`.
fn timed_points(seconds: f64, bands: &[(f64, i32)]) -> Option<i32> {
    bands
        .iter()
        .find(|(bound, _)| seconds <= *bound)
        .map(|(_, points)| *points)
}

/// Score a benchmarked machine for one requirement.
pub fn score(
    requirement: &Requirement,
    snapshot: &Snapshot,
    bench: &BenchmarkResult,
) -> ScoreReport {
    let mut total: i32 = 0;
    let mut warnings = Vec::new();

    if snapshot.available_ram_gb >= requirement.min_ram_gb + RAM_HEADROOM_GB {
        total += 15;
    } else if snapshot.available_ram_gb >= requirement.min_ram_gb {
        total += 10;
    } else {
        total += 5;
        warnings.push(LOW_RAM_WARNING.to_string());
    }

    match timed_points(bench.ram_stress_seconds, &RAM_SECONDS_BANDS) {
        Some(points) => total += points,
        None => warnings.push(RAM_LATENCY_WARNING.to_string()),
    }

    match timed_points(bench.cpu_stress_seconds, &CPU_SECONDS_BANDS) {
        Some(points) => total += points,
        None => warnings.push(CPU_WARNING.to_string()),
    }

    let deviation = bench.thermal_deviation();
    match THERMAL_DEVIATION_BANDS
        .iter()
        .find(|(bound, _)| deviation < *bound)
    {
        Some((_, points)) => total += points,
        None => warnings.push(THERMAL_WARNING.to_string()),
    }

    match timed_points(bench.disk_write_seconds, &DISK_SECONDS_BANDS) {
        Some(points) => total += points,
        None => warnings.push(DISK_WARNING.to_string()),
    }

    if !bench.is_plugged {
        total -= UNPLUGGED_PENALTY;
        warnings.push(ON_BATTERY_WARNING.to_string());
    }

    if bench.battery_percent.unwrap_or(100.0) <= LOW_BATTERY_PCT {
        total -= LOW_BATTERY_PENALTY;
        warnings.push(LOW_BATTERY_WARNING.to_string());
    }

    if bench.network_ping_ms > HIGH_PING_MS {
        warnings.push(format!(
            "High network latency ({}ms). Cloud tools may experience lag.",
            bench.network_ping_ms
        ));
    }

    let score = total.clamp(0, 100) as u8;
    tracing::debug!(target: "rigcheck.scorer", raw = total, score, warnings = warnings.len(), "scored");
    ScoreReport::new(score, warnings)
}
