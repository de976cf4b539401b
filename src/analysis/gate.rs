// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Compatibility gate
//!
//! Hard pass/fail filter run before the benchmark suite. Every violated
//! requirement is reported, not only the first.

use super::report::CompatibilityReport;
use crate::config::Requirement;
use crate::hardware::Snapshot;

/// Platform family the requirement catalog is written for.
pub const CATALOG_OS_FAMILY: &str = "windows";

/// Check `snapshot` against `requirement`.
pub fn check(requirement: &Requirement, snapshot: &Snapshot) -> CompatibilityReport {
    let mut problems = Vec::new();
    let mut info = Vec::new();

    if snapshot.total_ram_gb < requirement.min_ram_gb {
        problems.push(format!(
            "Insufficient Total RAM: {}GB required.",
            requirement.min_ram_gb
        ));
    }

    if snapshot.vram_gb < requirement.min_vram_gb {
        problems.push(format!(
            "Insufficient VRAM: {}GB required.",
            requirement.min_vram_gb
        ));
    }

    let qualifying: Vec<&str> = snapshot
        .disks
        .iter()
        .filter(|disk| disk.free_gb >= requirement.min_storage_gb)
        .map(|disk| disk.device.as_str())
        .collect();
    if qualifying.is_empty() {
        problems.push(format!(
            "Insufficient Storage across all drives: {}GB required.",
            requirement.min_storage_gb
        ));
    } else {
        info.push(format!(
            "Sufficient storage ({}GB free) on: {}",
            requirement.min_storage_gb,
            qualifying.join(", ")
        ));
    }

    let verdict = if requirement.accepts_any_os() {
        OsVerdict::Pass
    } else {
        check_os(&requirement.os_version, &snapshot.os_name)
    };
    match verdict {
        OsVerdict::Pass => {}
        OsVerdict::Skipped => {
            tracing::info!(
                target: "rigcheck.gate",
                host = %snapshot.os_name,
                required = %requirement.os_version,
                "host outside catalog platform, OS requirement not enforced"
            );
            info.push(format!(
                "OS requirement ({}) not checked on {}.",
                requirement.os_version, snapshot.os_name
            ));
        }
        OsVerdict::Mismatch => {
            problems.push(format!("OS Mismatch: {} required.", requirement.os_version));
        }
    }

    tracing::debug!(target: "rigcheck.gate", problems = problems.len(), "gate evaluated");
    CompatibilityReport::from_checks(problems, info)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OsVerdict {
    Pass,
    Skipped,
    Mismatch,
}

fn check_os(required: &str, actual: &str) -> OsVerdict {
    if required.trim().eq_ignore_ascii_case(crate::config::ANY_OS) {
        return OsVerdict::Pass;
    }

    let actual_family = os_family(actual);
    if actual_family != CATALOG_OS_FAMILY {
        return OsVerdict::Skipped;
    }
    if os_family(required) != actual_family {
        return OsVerdict::Mismatch;
    }

    match (os_version(required), os_version(actual)) {
        (Some(min), Some(have)) if have >= min => OsVerdict::Pass,
        (Some(_), Some(_)) => OsVerdict::Mismatch,
        _ if required.trim() == actual.trim() => OsVerdict::Pass,
        _ => OsVerdict::Mismatch,
    }
}

/// Lowercased first word, e.g. "Windows 11 Pro" → "windows".
fn os_family(label: &str) -> String {
    label
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// First dotted numeric token with trailing zero components dropped, so
/// "10" and "10.0" compare equal.
fn os_version(label: &str) -> Option<Vec<u32>> {
    let token = label
        .split_whitespace()
        .skip(1)
        .find(|token| token.starts_with(|c: char| c.is_ascii_digit()))?;

    let mut parts = token
        .split('.')
        .map(|part| part.parse::<u32>().ok())
        .collect::<Option<Vec<u32>>>()?;
    while parts.len() > 1 && parts.last() == Some(&0) {
        parts.pop();
    }
    Some(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::DiskSpace;

    fn requirement(ram: f64, vram: f64, storage: f64, os: &str) -> Requirement {
        Requirement {
            min_ram_gb: ram,
            min_vram_gb: vram,
            min_storage_gb: storage,
            os_version: os.to_string(),
        }
    }

    fn snapshot(ram: f64, vram: f64, free: &[f64], os: &str) -> Snapshot {
        Snapshot {
            os_name: os.to_string(),
            processor_name: "Test CPU".to_string(),
            total_ram_gb: ram,
            available_ram_gb: ram / 2.0,
            vram_gb: vram,
            is_dedicated_gpu: vram > 0.0,
            disks: free
                .iter()
                .enumerate()
                .map(|(i, &free_gb)| DiskSpace {
                    device: format!("disk{}", i),
                    free_gb,
                    total_gb: free_gb * 2.0,
                })
                .collect(),
        }
    }

    #[test]
    fn test_newer_windows_passes() {
        let report = check(
            &requirement(16.0, 4.0, 50.0, "Windows 10"),
            &snapshot(32.0, 6.0, &[100.0], "Windows 11"),
        );
        assert!(report.pass);
        assert!(report.blocking_problems.is_empty());
        assert_eq!(report.info_messages.len(), 1);
    }

    #[test]
    fn test_older_windows_fails() {
        let report = check(
            &requirement(8.0, 0.0, 10.0, "Windows 11"),
            &snapshot(16.0, 0.0, &[100.0], "Windows 10 (19045)"),
        );
        assert!(!report.pass);
        assert_eq!(report.blocking_problems, vec!["OS Mismatch: Windows 11 required."]);
    }

    #[test]
    fn test_all_violations_listed() {
        let report = check(
            &requirement(16.0, 4.0, 50.0, "Windows 10"),
            &snapshot(8.0, 2.0, &[10.0, 20.0], "Windows 7"),
        );
        assert!(!report.pass);
        assert_eq!(
            report.blocking_problems,
            vec![
                "Insufficient Total RAM: 16GB required.",
                "Insufficient VRAM: 4GB required.",
                "Insufficient Storage across all drives: 50GB required.",
                "OS Mismatch: Windows 10 required.",
            ]
        );
        assert!(report.info_messages.is_empty());
    }

    #[test]
    fn test_fractional_requirement_message() {
        let report = check(
            &requirement(0.0, 1.5, 0.0, "Any"),
            &snapshot(8.0, 1.0, &[5.0], "Windows 11"),
        );
        assert_eq!(report.blocking_problems, vec!["Insufficient VRAM: 1.5GB required."]);
    }

    #[test]
    fn test_storage_qualifying_drives_named() {
        let report = check(
            &requirement(0.0, 0.0, 50.0, "Any"),
            &snapshot(8.0, 0.0, &[10.0, 60.0, 50.0], "Windows 11"),
        );
        assert!(report.pass);
        assert_eq!(report.info_messages.len(), 1);
        assert!(report.info_messages[0].contains("disk1, disk2"));
        assert!(!report.info_messages[0].contains("disk0"));
    }

    #[test]
    fn test_no_disks_fails_storage() {
        let report = check(&requirement(0.0, 0.0, 0.0, "Any"), &snapshot(8.0, 0.0, &[], "Linux"));
        assert!(!report.pass);
        assert_eq!(
            report.blocking_problems,
            vec!["Insufficient Storage across all drives: 0GB required."]
        );
    }

    #[test]
    fn test_any_os_never_mismatches() {
        for os in ["Windows 11", "Linux 6.8", "macOS 14.5", ""] {
            assert_eq!(check_os("Any", os), OsVerdict::Pass);
        }
    }

    #[test]
    fn test_non_catalog_host_skips_os_check() {
        let report = check(
            &requirement(8.0, 0.0, 10.0, "Windows 10"),
            &snapshot(16.0, 0.0, &[100.0], "Linux 24.04"),
        );
        assert!(report.pass);
        assert!(report
            .info_messages
            .iter()
            .any(|msg| msg.contains("not checked on Linux 24.04")));
    }

    #[test]
    fn test_family_mismatch_on_catalog_host() {
        assert_eq!(check_os("macOS 13", "Windows 11"), OsVerdict::Mismatch);
    }

    #[test]
    fn test_unparseable_versions_fall_back_to_equality() {
        assert_eq!(check_os("Windows XP", "Windows XP"), OsVerdict::Pass);
        assert_eq!(check_os("Windows XP", "Windows Vista"), OsVerdict::Mismatch);
        assert_eq!(check_os("Windows", "Windows 11"), OsVerdict::Mismatch);
    }

    #[test]
    fn test_os_version_parsing() {
        assert_eq!(os_version("Windows 10"), Some(vec![10]));
        assert_eq!(os_version("Windows 10.0.19045"), Some(vec![10, 0, 19045]));
        assert_eq!(os_version("Windows 10.0"), Some(vec![10]));
        assert_eq!(os_version("Windows 11 (22631)"), Some(vec![11]));
        assert_eq!(os_version("Windows"), None);
        assert_eq!(os_version("Windows 10a"), None);
    }

    #[test]
    fn test_os_family() {
        assert_eq!(os_family("Windows 11 Pro"), "windows");
        assert_eq!(os_family("  macOS 14"), "macos");
        assert_eq!(os_family(""), "");
    }
}
