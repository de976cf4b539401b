// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! List the requirement catalog

use serde::Serialize;

use super::EXIT_OK;
use crate::cli::args::OutputFormat;
use crate::config::Catalog;
use crate::error::Result;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AppInfo<'a> {
    name: &'a str,
    min_ram_gb: f64,
    min_vram_gb: f64,
    min_storage_gb: f64,
    os_version: &'a str,
}

fn app_rows(catalog: &Catalog) -> Vec<AppInfo<'_>> {
    catalog
        .iter()
        .map(|(name, req)| AppInfo {
            name,
            min_ram_gb: req.min_ram_gb,
            min_vram_gb: req.min_vram_gb,
            min_storage_gb: req.min_storage_gb,
            os_version: &req.os_version,
        })
        .collect()
}

/// Execute the apps command
pub fn execute(catalog: &Catalog, format: &OutputFormat) -> Result<i32> {
    let rows = app_rows(catalog);

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(EXIT_OK);
    }

    println!("\n=== Supported Applications ({}) ===\n", rows.len());
    for row in &rows {
        println!(
            "  {:<26} RAM {:>4}GB  VRAM {:>4}GB  Disk {:>5}GB  OS {}",
            row.name, row.min_ram_gb, row.min_vram_gb, row.min_storage_gb, row.os_version
        );
    }
    println!();
    Ok(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_rows_sorted_by_name() {
        let catalog = Catalog::from_json(
            r#"{"Zeta": {"min_ram": 2}, "Alpha": {"min_ram": 8, "os_version": "Windows 10"}}"#,
        )
        .unwrap();
        let rows = app_rows(&catalog);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Alpha");
        assert_eq!(rows[0].os_version, "Windows 10");
        assert_eq!(rows[1].os_version, "Any");
    }

    #[test]
    fn test_app_info_json_is_camel_case() {
        let catalog = Catalog::from_json(r#"{"Tool": {"min_vram": 4}}"#).unwrap();
        let json = serde_json::to_string(&app_rows(&catalog)).unwrap();
        assert!(json.contains("\"minVramGb\":4.0"));
        assert!(json.contains("\"osVersion\":\"Any\""));
    }

    #[test]
    fn test_execute_builtin_catalog() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(execute(&catalog, &OutputFormat::Json).unwrap(), EXIT_OK);
    }
}
