// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Application requirement catalog
//!
//! The catalog is loaded once at startup and is read-only afterwards; share it
//! behind an `Arc`. On disk it is a JSON object keyed by application name:
//!
//! ```json
//! { "Blender 4.1": { "min_ram": 8, "min_vram": 2, "min_storage": 1, "os_version": "Any" } }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RigError};

/// Built-in catalog shipped with the binary.
const BUILTIN_CATALOG_JSON: &str = include_str!("../../data/requirements.json");

/// Requirement label that matches every operating system.
pub const ANY_OS: &str = "Any";

/// Minimum hardware needed to run one application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    #[serde(rename = "min_ram", default)]
    pub min_ram_gb: f64,

    #[serde(rename = "min_vram", default)]
    pub min_vram_gb: f64,

    #[serde(rename = "min_storage", default)]
    pub min_storage_gb: f64,

    /// "Any" or a platform-qualified version such as "Windows 10"
    #[serde(default = "default_os_version")]
    pub os_version: String,
}

impl Requirement {
    pub fn accepts_any_os(&self) -> bool {
        self.os_version == ANY_OS
    }
}

fn default_os_version() -> String {
    ANY_OS.to_string()
}

/// Immutable application-name → requirement table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: BTreeMap<String, Requirement>,
}

impl Catalog {
    /// The catalog embedded at build time.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG_JSON)
    }

    /// Parse a catalog from its JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: BTreeMap<String, Requirement> = serde_json::from_str(json)
            .map_err(|err| RigError::Catalog(format!("malformed catalog: {}", err)))?;
        Ok(Self { entries })
    }

    /// Load a catalog file; a missing or unreadable file is a configuration error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|err| {
            RigError::Catalog(format!("cannot read {}: {}", path.display(), err))
        })?;
        let catalog = Self::from_json(&content)?;
        tracing::info!(
            target: "rigcheck.config",
            path = %path.display(),
            apps = catalog.len(),
            "requirement catalog loaded"
        );
        Ok(catalog)
    }

    /// Load from `path` when given, otherwise the built-in catalog.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::builtin(),
        }
    }

    /// Exact-name lookup.
    pub fn get(&self, app_name: &str) -> Option<&Requirement> {
        self.entries.get(app_name)
    }

    /// Application names in sorted order.
    pub fn app_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Requirement)> {
        self.entries.iter().map(|(name, req)| (name.as_str(), req))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Requirement)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, Requirement)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.get("Blender 4.1").is_some());
    }

    #[test]
    fn test_builtin_catalog_uses_known_os_labels() {
        let catalog = Catalog::builtin().unwrap();
        for (name, req) in catalog.iter() {
            assert!(
                req.accepts_any_os() || req.os_version.starts_with("Windows"),
                "{} has unexpected os_version {}",
                name,
                req.os_version
            );
        }
    }

    #[test]
    fn test_field_names_on_disk() {
        let catalog = Catalog::from_json(
            r#"{"CAD": {"min_ram": 16, "min_vram": 4, "min_storage": 50, "os_version": "Windows 10"}}"#,
        )
        .unwrap();
        let req = catalog.get("CAD").unwrap();
        assert_eq!(req.min_ram_gb, 16.0);
        assert_eq!(req.min_vram_gb, 4.0);
        assert_eq!(req.min_storage_gb, 50.0);
        assert_eq!(req.os_version, "Windows 10");
        assert!(!req.accepts_any_os());
    }

    #[test]
    fn test_missing_fields_default() {
        let catalog = Catalog::from_json(r#"{"Notepad": {}}"#).unwrap();
        let req = catalog.get("Notepad").unwrap();
        assert_eq!(req.min_ram_gb, 0.0);
        assert_eq!(req.min_storage_gb, 0.0);
        assert!(req.accepts_any_os());
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.get("blender 4.1").is_none());
        assert!(catalog.get("Blender").is_none());
    }

    #[test]
    fn test_app_names_sorted() {
        let catalog = Catalog::from_json(r#"{"b": {}, "a": {}, "c": {}}"#).unwrap();
        let names: Vec<_> = catalog.app_names().collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_malformed_catalog() {
        let err = Catalog::from_json(r#"{"x": {"min_ram": "lots"}}"#).unwrap_err();
        assert!(matches!(err, RigError::Catalog(_)));
    }

    #[test]
    fn test_load_from_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Catalog::load_from(&temp_dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }

    #[test]
    fn test_load_prefers_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("apps.json");
        std::fs::write(&path, r#"{"Only App": {"min_ram": 2}}"#).unwrap();

        let catalog = Catalog::load(Some(&path)).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("Only App").is_some());

        let builtin = Catalog::load(None).unwrap();
        assert!(builtin.len() > 1);
    }
}
