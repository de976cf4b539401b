// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Hardware inventory snapshot
//!
//! A [`Snapshot`] is captured once per analysis run and never changes after
//! that. All capacities are normalized to GB here so the gate and scorer can
//! compare them directly against catalog values.

use serde::{Deserialize, Serialize};
use sysinfo::{Disks, System};

use super::gpu::gpu_chain;
use super::probe::Probe;

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Free and total space on one mounted volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskSpace {
    /// Device or mount identifier shown to the user (e.g. `C:\`, `/home`)
    pub device: String,
    pub free_gb: f64,
    pub total_gb: f64,
}

/// Point-in-time view of the machine's capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Platform-qualified OS label, e.g. "Windows 11" or "Linux 24.04"
    pub os_name: String,
    pub processor_name: String,
    pub total_ram_gb: f64,
    pub available_ram_gb: f64,
    pub vram_gb: f64,
    pub is_dedicated_gpu: bool,
    /// Volumes in the order the OS enumerates them
    pub disks: Vec<DiskSpace>,
}

impl Snapshot {
    /// Capture the current machine.
    ///
    /// Never fails: a source that cannot be read leaves its field at a
    /// neutral value (0 GB, "Unknown") instead of aborting the run.
    pub fn capture() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_all();

        let processor_name = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty())
            .unwrap_or_else(|| "Unknown CPU".to_string());

        let (vram_gb, is_dedicated_gpu) = match gpu_chain().read() {
            Ok(gpu) => {
                tracing::debug!(target: "rigcheck.inventory", gpu = %gpu.name, vram_gb = gpu.vram_gb, "GPU detected");
                (gpu.vram_gb, true)
            }
            Err(err) => {
                tracing::debug!(target: "rigcheck.inventory", error = %err, "no dedicated GPU memory found");
                (0.0, false)
            }
        };

        let disks = Disks::new_with_refreshed_list()
            .iter()
            .map(|disk| DiskSpace {
                device: disk.mount_point().to_string_lossy().to_string(),
                free_gb: round_gb(disk.available_space() as f64 / BYTES_PER_GB),
                total_gb: round_gb(disk.total_space() as f64 / BYTES_PER_GB),
            })
            .collect();

        Snapshot {
            os_name: os_label(std::env::consts::OS, System::os_version()),
            processor_name,
            total_ram_gb: round_gb(sys.total_memory() as f64 / BYTES_PER_GB),
            available_ram_gb: round_gb(sys.available_memory() as f64 / BYTES_PER_GB),
            vram_gb,
            is_dedicated_gpu,
            disks,
        }
    }

    /// Largest free space on any volume, in GB.
    pub fn max_free_gb(&self) -> f64 {
        self.disks.iter().map(|d| d.free_gb).fold(0.0, f64::max)
    }
}

/// Build a catalog-comparable OS label from the target family and version.
fn os_label(os: &str, version: Option<String>) -> String {
    let family = match os {
        "windows" => "Windows".to_string(),
        "macos" => "macOS".to_string(),
        "linux" => "Linux".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => "Unknown".to_string(),
            }
        }
    };

    match version.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        Some(version) => format!("{} {}", family, version),
        None => family,
    }
}

fn round_gb(gb: f64) -> f64 {
    (gb * 100.0).round() / 100.0
}
