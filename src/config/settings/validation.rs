// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use crate::error::{Result, RigError};

use super::{BenchmarkConfig, Settings};

/// Smallest prime bound that still exercises the CPU at all.
const MIN_PRIME_LIMIT: u64 = 2;

impl Settings {
    pub fn validate(&self) -> Result<()> {
        self.benchmark.validate()
    }
}

impl BenchmarkConfig {
    /// Reject bounds that would make a benchmark meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.cpu_limit < MIN_PRIME_LIMIT {
            return Err(RigError::Config(format!(
                "benchmark.cpu_limit must be at least {}, got {}",
                MIN_PRIME_LIMIT, self.cpu_limit
            )));
        }
        if self.thermal_limit < MIN_PRIME_LIMIT {
            return Err(RigError::Config(format!(
                "benchmark.thermal_limit must be at least {}, got {}",
                MIN_PRIME_LIMIT, self.thermal_limit
            )));
        }
        if self.memory_size == 0 {
            return Err(RigError::Config(
                "benchmark.memory_size must be greater than 0".to_string(),
            ));
        }
        if self.network.enabled && self.network.timeout_secs == 0 {
            return Err(RigError::Config(
                "benchmark.network.timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
