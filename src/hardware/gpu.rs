// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Dedicated GPU memory detection

use super::probe::{probe_fn, run_command, FallbackChain};
use crate::error::ProbeError;

/// What the GPU sources could tell us about the primary adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct GpuMemory {
    /// Adapter name as reported by the source
    pub name: String,
    /// Dedicated video memory in GB
    pub vram_gb: f64,
}

/// Default GPU sources: vendor tool first, then the platform's own query.
pub fn gpu_chain() -> FallbackChain<GpuMemory> {
    let chain = FallbackChain::new("gpu memory").with(probe_fn("nvidia-smi", || {
        let output = run_command(
            "nvidia-smi",
            &["--query-gpu=name,memory.total", "--format=csv,noheader,nounits"],
        )?;
        parse_nvidia_smi(&output)
    }));

    #[cfg(target_os = "windows")]
    let chain = chain.with(probe_fn("Win32_VideoController", || {
        let output = run_command(
            "powershell",
            &[
                "-NoProfile",
                "-Command",
                "Get-CimInstance Win32_VideoController | Select-Object -First 1 | ForEach-Object { \"$($_.Name),$($_.AdapterRAM)\" }",
            ],
        )?;
        parse_adapter_ram(&output)
    }));

    #[cfg(target_os = "macos")]
    let chain = chain.with(probe_fn("system_profiler", || {
        parse_system_profiler(&run_command("system_profiler", &["SPDisplaysDataType"])?)
    }));

    chain
}

/// Parse `name, memory.total` (MiB) rows; the first adapter wins.
fn parse_nvidia_smi(output: &str) -> Result<GpuMemory, ProbeError> {
    let line = output
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .ok_or_else(|| ProbeError::Unavailable("nvidia-smi listed no GPUs".to_string()))?;

    let (name, mib) = line
        .rsplit_once(',')
        .ok_or_else(|| ProbeError::Unavailable(format!("unexpected row {:?}", line)))?;
    let mib: f64 = mib
        .trim()
        .parse()
        .map_err(|_| ProbeError::Unavailable(format!("bad memory.total {:?}", mib.trim())))?;

    Ok(GpuMemory {
        name: name.trim().to_string(),
        vram_gb: round_gb(mib / 1024.0),
    })
}

/// Parse `Name,AdapterRAM` (bytes) as printed by the PowerShell query.
#[cfg_attr(not(test), allow(dead_code))]
fn parse_adapter_ram(output: &str) -> Result<GpuMemory, ProbeError> {
    let line = output
        .lines()
        .map(|l| l.trim().trim_matches('"'))
        .find(|l| !l.is_empty() && !l.contains("DriverDesc"))
        .ok_or(ProbeError::Unsupported)?;

    let (name, bytes) = line
        .rsplit_once(',')
        .ok_or_else(|| ProbeError::Unavailable(format!("unexpected row {:?}", line)))?;
    let bytes: f64 = bytes.trim().parse().unwrap_or(0.0);
    let vram_gb = round_gb(bytes / (1024.0 * 1024.0 * 1024.0));
    if vram_gb <= 0.0 {
        return Err(ProbeError::Unavailable(format!(
            "{} reports no dedicated memory",
            name.trim()
        )));
    }

    Ok(GpuMemory {
        name: name.trim().to_string(),
        vram_gb,
    })
}

/// Parse `system_profiler SPDisplaysDataType`; unified-memory Macs have no VRAM line.
#[cfg_attr(not(test), allow(dead_code))]
fn parse_system_profiler(output: &str) -> Result<GpuMemory, ProbeError> {
    let mut name = None;
    let mut vram_gb = None;

    for line in output.lines().map(str::trim) {
        if let Some(model) = line.strip_prefix("Chipset Model:") {
            name = Some(model.trim().to_string());
        }
        if line.starts_with("VRAM") {
            if let Some((_, value)) = line.split_once(':') {
                let mut parts = value.split_whitespace();
                let amount = parts.next().and_then(|n| n.parse::<f64>().ok());
                let unit = parts.next().unwrap_or("");
                vram_gb = match (amount, unit) {
                    (Some(n), "GB") => Some(n),
                    (Some(n), "MB") => Some(round_gb(n / 1024.0)),
                    _ => vram_gb,
                };
            }
        }
    }

    match (name, vram_gb) {
        (Some(name), Some(vram_gb)) => Ok(GpuMemory { name, vram_gb }),
        (Some(name), None) => Err(ProbeError::Unavailable(format!(
            "{} uses unified memory",
            name
        ))),
        _ => Err(ProbeError::Unsupported),
    }
}

fn round_gb(gb: f64) -> f64 {
    (gb * 10.0).round() / 10.0
}
