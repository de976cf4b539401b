// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Measurement sources with ordered fallback
//!
//! Every sensor read in rigcheck goes through a [`Probe`]. Platform specific
//! readers are stacked in a [`FallbackChain`]: the structured API is tried
//! first, then shell or sysfs probes, and when all of them fail the chain
//! reports [`ProbeError::Unavailable`] so the caller can apply its neutral
//! default explicitly.

use std::process::Command;

use crate::error::ProbeError;

/// A single source for one kind of measurement.
pub trait Probe<T>: Send + Sync {
    /// Short identifier used in logs (e.g. "sysfs", "nvidia-smi")
    fn name(&self) -> &'static str;

    /// Take one reading.
    fn read(&self) -> Result<T, ProbeError>;
}

/// Probe backed by a plain function or closure.
pub struct FnProbe<F> {
    name: &'static str,
    read: F,
}

/// Wrap a function as a named probe.
pub fn probe_fn<T, F>(name: &'static str, read: F) -> FnProbe<F>
where
    F: Fn() -> Result<T, ProbeError> + Send + Sync,
{
    FnProbe { name, read }
}

impl<T, F> Probe<T> for FnProbe<F>
where
    F: Fn() -> Result<T, ProbeError> + Send + Sync,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn read(&self) -> Result<T, ProbeError> {
        (self.read)()
    }
}

/// Ordered list of probes for the same measurement; first success wins.
pub struct FallbackChain<T> {
    measurement: &'static str,
    probes: Vec<Box<dyn Probe<T>>>,
}

impl<T> FallbackChain<T> {
    /// Create an empty chain. `measurement` names what is being read, for logs.
    pub fn new(measurement: &'static str) -> Self {
        Self {
            measurement,
            probes: Vec::new(),
        }
    }

    /// Append a probe; earlier probes take priority.
    pub fn with(mut self, probe: impl Probe<T> + 'static) -> Self {
        self.probes.push(Box::new(probe));
        self
    }

    /// Number of registered probes
    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }
}

impl<T> Probe<T> for FallbackChain<T> {
    fn name(&self) -> &'static str {
        self.measurement
    }

    fn read(&self) -> Result<T, ProbeError> {
        for probe in &self.probes {
            match probe.read() {
                Ok(value) => {
                    tracing::debug!(
                        target: "rigcheck.probe",
                        measurement = self.measurement,
                        source = probe.name(),
                        "measurement acquired"
                    );
                    return Ok(value);
                }
                Err(err) => {
                    tracing::debug!(
                        target: "rigcheck.probe",
                        measurement = self.measurement,
                        source = probe.name(),
                        error = %err,
                        "source failed, trying next"
                    );
                }
            }
        }

        Err(ProbeError::Unavailable(format!(
            "no source could read {}",
            self.measurement
        )))
    }
}

/// Run an external command and return trimmed stdout on success.
pub fn run_command(cmd: &str, args: &[&str]) -> Result<String, ProbeError> {
    let output = Command::new(cmd)
        .args(args)
        .output()
        .map_err(|err| ProbeError::Unavailable(format!("{cmd}: {err}")))?;

    if !output.status.success() {
        return Err(ProbeError::Unavailable(format!(
            "{cmd} exited with {}",
            output.status
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
