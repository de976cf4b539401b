// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CPU clock frequency sampling for the thermal stability test.

#[cfg(target_os = "linux")]
use std::fs;

use sysinfo::System;

use super::probe::{probe_fn, FallbackChain};
use crate::error::ProbeError;

/// Default frequency sources for this platform, in priority order.
///
/// Readings are in MHz for the first logical CPU.
pub fn cpu_frequency_chain() -> FallbackChain<f64> {
    let chain = FallbackChain::new("cpu frequency").with(probe_fn("sysinfo", read_sysinfo_mhz));

    #[cfg(target_os = "linux")]
    let chain = chain
        .with(probe_fn("cpufreq", read_linux_cpufreq_mhz))
        .with(probe_fn("cpuinfo", read_linux_cpuinfo_mhz));

    chain
}

fn read_sysinfo_mhz() -> Result<f64, ProbeError> {
    let mut sys = System::new();
    sys.refresh_cpu_frequency();
    let mhz = sys
        .cpus()
        .first()
        .map(|cpu| cpu.frequency())
        .ok_or(ProbeError::Unsupported)?;
    positive_mhz(mhz as f64)
}

#[cfg(target_os = "linux")]
fn read_linux_cpufreq_mhz() -> Result<f64, ProbeError> {
    let raw = fs::read_to_string("/sys/devices/system/cpu/cpu0/cpufreq/scaling_cur_freq")
        .map_err(|_| ProbeError::Unsupported)?;
    parse_cpufreq_khz(&raw)
}

#[cfg(target_os = "linux")]
fn read_linux_cpuinfo_mhz() -> Result<f64, ProbeError> {
    let raw = fs::read_to_string("/proc/cpuinfo").map_err(|_| ProbeError::Unsupported)?;
    parse_cpuinfo_mhz(&raw)
}

fn positive_mhz(mhz: f64) -> Result<f64, ProbeError> {
    if mhz > 0.0 {
        Ok(mhz)
    } else {
        Err(ProbeError::Unavailable("reported 0 MHz".to_string()))
    }
}

#[cfg_attr(not(test), allow(dead_code))]
fn parse_cpufreq_khz(raw: &str) -> Result<f64, ProbeError> {
    let khz: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ProbeError::Unavailable(format!("bad cpufreq value {:?}", raw.trim())))?;
    positive_mhz(khz / 1000.0)
}

#[cfg_attr(not(test), allow(dead_code))]
fn parse_cpuinfo_mhz(raw: &str) -> Result<f64, ProbeError> {
    raw.lines()
        .find_map(|line| {
            let (key, value) = line.split_once(':')?;
            if key.trim() != "cpu MHz" {
                return None;
            }
            value.trim().parse::<f64>().ok()
        })
        .ok_or_else(|| ProbeError::Unavailable("no 'cpu MHz' line".to_string()))
        .and_then(positive_mhz)
}
