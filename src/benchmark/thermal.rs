// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Thermal stability under a short sustained load.

use super::round_to;
use super::stress::cpu_stress;
use crate::hardware::Probe;

/// Sample the CPU clock, burn `limit` worth of prime counting, sample again.
///
/// Returns `(final / initial) × 100`. `None` means the clock could not be read
/// on either side of the load; the load is skipped entirely when the first
/// sample already fails.
pub fn thermal_stability(frequency: &dyn Probe<f64>, limit: u64) -> Option<f64> {
    let initial = match frequency.read() {
        Ok(mhz) => mhz,
        Err(err) => {
            tracing::debug!(target: "rigcheck.benchmark", error = %err, "cpu clock unreadable, thermal test skipped");
            return None;
        }
    };

    cpu_stress(limit);

    let after = match frequency.read() {
        Ok(mhz) => mhz,
        Err(err) => {
            tracing::debug!(target: "rigcheck.benchmark", error = %err, "cpu clock unreadable after load");
            return None;
        }
    };

    tracing::debug!(target: "rigcheck.benchmark", initial_mhz = initial, final_mhz = after, "thermal samples");
    stability_pct(initial, after)
}

/// Ratio of two clock samples as a percentage, rounded to 2 decimals.
pub fn stability_pct(initial_mhz: f64, final_mhz: f64) -> Option<f64> {
    if !initial_mhz.is_finite() || !final_mhz.is_finite() || initial_mhz <= 0.0 {
        return None;
    }
    Some(round_to(final_mhz / initial_mhz * 100.0, 2))
}
