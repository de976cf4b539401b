// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Battery and power-source readings.
//!
//! Desktops without a battery make every source fail; the chain then reports
//! unavailable and the benchmark records "no battery, on mains power".

#[cfg(target_os = "linux")]
use std::fs;
#[cfg(target_os = "linux")]
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::probe::FallbackChain;
#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
use super::probe::probe_fn;
#[cfg(any(target_os = "macos", target_os = "windows"))]
use super::probe::run_command;
use crate::error::ProbeError;

/// Windows reports this runtime (minutes) when it cannot estimate one.
const WINDOWS_RUNTIME_UNKNOWN: u64 = 71_582_788;

/// One battery reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerStatus {
    /// Charge level, 0–100
    pub percent: f64,
    /// Whether external power is connected
    pub plugged: bool,
    /// Estimated runtime left on battery, when the platform knows it
    pub seconds_left: Option<u64>,
}

/// Default battery sources for this platform.
pub fn power_chain() -> FallbackChain<PowerStatus> {
    let chain = FallbackChain::new("battery");

    #[cfg(target_os = "linux")]
    let chain = chain.with(probe_fn("power_supply", read_linux_power_supply));

    #[cfg(target_os = "macos")]
    let chain = chain.with(probe_fn("pmset", || {
        parse_pmset_batt(&run_command("pmset", &["-g", "batt"])?)
    }));

    #[cfg(target_os = "windows")]
    let chain = chain.with(probe_fn("Win32_Battery", || {
        let output = run_command(
            "powershell",
            &[
                "-NoProfile",
                "-Command",
                "Get-CimInstance Win32_Battery | Select-Object -First 1 | ForEach-Object { \"$($_.EstimatedChargeRemaining),$($_.BatteryStatus),$($_.EstimatedRunTime)\" }",
            ],
        )?;
        parse_win32_battery(&output)
    }));

    chain
}

#[cfg(target_os = "linux")]
fn read_linux_power_supply() -> Result<PowerStatus, ProbeError> {
    let power_dir = Path::new("/sys/class/power_supply");
    let entries = fs::read_dir(power_dir).map_err(|_| ProbeError::Unsupported)?;

    for entry in entries.flatten() {
        let name = entry.file_name();
        if !name.to_string_lossy().starts_with("BAT") {
            continue;
        }

        let dir = entry.path();
        let read = |file: &str| fs::read_to_string(dir.join(file)).ok();
        let capacity = read("capacity")
            .ok_or_else(|| ProbeError::Unavailable("battery has no capacity file".to_string()))?;
        let status = read("status").unwrap_or_default();
        return parse_power_supply(
            &capacity,
            &status,
            read("energy_now").as_deref(),
            read("power_now").as_deref(),
        );
    }

    Err(ProbeError::Unsupported)
}

#[cfg_attr(not(test), allow(dead_code))]
fn parse_power_supply(
    capacity: &str,
    status: &str,
    energy_now: Option<&str>,
    power_now: Option<&str>,
) -> Result<PowerStatus, ProbeError> {
    let percent: f64 = capacity
        .trim()
        .parse()
        .map_err(|_| ProbeError::Unavailable(format!("bad capacity {:?}", capacity.trim())))?;
    let plugged = !status.trim().eq_ignore_ascii_case("discharging");

    // energy_now is in µWh and power_now in µW; hours = energy / power
    let seconds_left = if plugged {
        None
    } else {
        let energy = energy_now.and_then(|e| e.trim().parse::<f64>().ok());
        let power = power_now.and_then(|p| p.trim().parse::<f64>().ok());
        match (energy, power) {
            (Some(energy), Some(power)) if power > 0.0 => Some((energy / power * 3600.0) as u64),
            _ => None,
        }
    };

    Ok(PowerStatus {
        percent,
        plugged,
        seconds_left,
    })
}

#[cfg_attr(not(test), allow(dead_code))]
fn parse_pmset_batt(output: &str) -> Result<PowerStatus, ProbeError> {
    let plugged = !output.contains("'Battery Power'");
    let line = output
        .lines()
        .find(|line| line.contains("InternalBattery"))
        .ok_or(ProbeError::Unsupported)?;

    let percent = line
        .split_whitespace()
        .find_map(|token| token.strip_suffix("%;"))
        .and_then(|p| p.parse::<f64>().ok())
        .ok_or_else(|| ProbeError::Unavailable(format!("no percentage in {:?}", line)))?;

    // "3:12 remaining"; "(no estimate)" while the estimate warms up
    let seconds_left = line
        .split(';')
        .find(|part| part.contains("remaining"))
        .and_then(|part| part.split_whitespace().next())
        .and_then(|hm| {
            let (h, m) = hm.split_once(':')?;
            Some(h.parse::<u64>().ok()? * 3600 + m.parse::<u64>().ok()? * 60)
        });

    Ok(PowerStatus {
        percent,
        plugged,
        seconds_left: if plugged { None } else { seconds_left },
    })
}

#[cfg_attr(not(test), allow(dead_code))]
fn parse_win32_battery(output: &str) -> Result<PowerStatus, ProbeError> {
    let line = output.lines().next().map(str::trim).unwrap_or_default();
    let mut fields = line.split(',');

    let percent = fields
        .next()
        .and_then(|p| p.trim().parse::<f64>().ok())
        .ok_or(ProbeError::Unsupported)?;
    // BatteryStatus: 1 = discharging, 2 = on AC
    let plugged = fields.next().map(str::trim) != Some("1");
    let seconds_left = fields
        .next()
        .and_then(|m| m.trim().parse::<u64>().ok())
        .filter(|&minutes| !plugged && minutes != WINDOWS_RUNTIME_UNKNOWN)
        .map(|minutes| minutes * 60);

    Ok(PowerStatus {
        percent,
        plugged,
        seconds_left,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_power_supply_discharging() {
        let status =
            parse_power_supply("57\n", "Discharging\n", Some("30000000"), Some("10000000")).unwrap();
        assert!((status.percent - 57.0).abs() < f64::EPSILON);
        assert!(!status.plugged);
        assert_eq!(status.seconds_left, Some(10_800));
    }

    #[test]
    fn test_parse_power_supply_charging() {
        let status = parse_power_supply("80", "Charging", None, None).unwrap();
        assert!(status.plugged);
        assert_eq!(status.seconds_left, None);
    }

    #[test]
    fn test_parse_power_supply_zero_power_draw() {
        let status = parse_power_supply("40", "Discharging", Some("1000"), Some("0")).unwrap();
        assert_eq!(status.seconds_left, None);
    }

    #[test]
    fn test_parse_power_supply_bad_capacity() {
        assert!(parse_power_supply("", "Full", None, None).is_err());
    }

    #[test]
    fn test_parse_pmset_on_battery() {
        let output = "Now drawing from 'Battery Power'\n -InternalBattery-0 (id=4653155)\t85%; discharging; 3:12 remaining present: true\n";
        let status = parse_pmset_batt(output).unwrap();
        assert!((status.percent - 85.0).abs() < f64::EPSILON);
        assert!(!status.plugged);
        assert_eq!(status.seconds_left, Some(3 * 3600 + 12 * 60));
    }

    #[test]
    fn test_parse_pmset_on_ac() {
        let output = "Now drawing from 'AC Power'\n -InternalBattery-0 (id=4653155)\t100%; charged; 0:00 remaining present: true\n";
        let status = parse_pmset_batt(output).unwrap();
        assert!(status.plugged);
        assert_eq!(status.seconds_left, None);
    }

    #[test]
    fn test_parse_pmset_no_estimate() {
        let output = "Now drawing from 'Battery Power'\n -InternalBattery-0 (id=1)\t42%; discharging; (no estimate) present: true\n";
        let status = parse_pmset_batt(output).unwrap();
        assert_eq!(status.seconds_left, None);
    }

    #[test]
    fn test_parse_pmset_desktop_mac() {
        // Mac mini / Mac Pro: no battery line at all
        let output = "Now drawing from 'AC Power'\n";
        assert_eq!(parse_pmset_batt(output), Err(ProbeError::Unsupported));
    }

    #[test]
    fn test_parse_win32_battery() {
        let status = parse_win32_battery("64,1,95").unwrap();
        assert!((status.percent - 64.0).abs() < f64::EPSILON);
        assert!(!status.plugged);
        assert_eq!(status.seconds_left, Some(95 * 60));
    }

    #[test]
    fn test_parse_win32_battery_unknown_runtime() {
        let status = parse_win32_battery("100,2,71582788").unwrap();
        assert!(status.plugged);
        assert_eq!(status.seconds_left, None);
    }

    #[test]
    fn test_parse_win32_battery_no_battery() {
        assert_eq!(parse_win32_battery(""), Err(ProbeError::Unsupported));
    }
}
