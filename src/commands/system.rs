// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! System hardware information command

use serde::Serialize;

use super::EXIT_OK;
use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::hardware::{DiskSpace, Snapshot};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HardwareInfo<'a> {
    os_name: &'a str,
    processor_name: &'a str,
    total_ram_gb: f64,
    available_ram_gb: f64,
    vram_gb: f64,
    is_dedicated_gpu: bool,
    max_free_gb: f64,
    disks: &'a [DiskSpace],
}

impl<'a> From<&'a Snapshot> for HardwareInfo<'a> {
    fn from(snapshot: &'a Snapshot) -> Self {
        Self {
            os_name: &snapshot.os_name,
            processor_name: &snapshot.processor_name,
            total_ram_gb: snapshot.total_ram_gb,
            available_ram_gb: snapshot.available_ram_gb,
            vram_gb: snapshot.vram_gb,
            is_dedicated_gpu: snapshot.is_dedicated_gpu,
            max_free_gb: snapshot.max_free_gb(),
            disks: &snapshot.disks,
        }
    }
}

/// Execute the system command
pub fn execute(snapshot: &Snapshot, format: &OutputFormat) -> Result<i32> {
    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&HardwareInfo::from(snapshot))?);
        return Ok(EXIT_OK);
    }

    println!("\n=== rigcheck System Snapshot ===\n");
    println!("OS: {}", snapshot.os_name);
    println!("CPU: {}", snapshot.processor_name);
    println!(
        "RAM: {}GB total, {}GB available",
        snapshot.total_ram_gb, snapshot.available_ram_gb
    );
    if snapshot.is_dedicated_gpu {
        println!("GPU memory: {}GB", snapshot.vram_gb);
    } else {
        println!("GPU memory: no dedicated GPU detected");
    }

    println!("\n=== Storage ===");
    if snapshot.disks.is_empty() {
        println!("  (no volumes reported)");
    }
    for disk in &snapshot.disks {
        println!(
            "  {:<20} {:>8.2}GB free of {:.2}GB",
            disk.device, disk.free_gb, disk.total_gb
        );
    }
    println!();
    Ok(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hardware_info_json() {
        let snapshot = Snapshot {
            os_name: "Windows 11".to_string(),
            processor_name: "Intel Core i7-12700H".to_string(),
            total_ram_gb: 32.0,
            available_ram_gb: 18.4,
            vram_gb: 6.0,
            is_dedicated_gpu: true,
            disks: vec![DiskSpace {
                device: "C:\\".to_string(),
                free_gb: 120.5,
                total_gb: 512.0,
            }],
        };
        let value = serde_json::to_value(HardwareInfo::from(&snapshot)).unwrap();
        assert_eq!(value["osName"], "Windows 11");
        assert_eq!(value["isDedicatedGpu"], true);
        assert_eq!(value["maxFreeGb"], 120.5);
        assert_eq!(value["disks"][0]["device"], "C:\\");
    }
}
