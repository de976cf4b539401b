// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::sync::Arc;

use super::report::{Analysis, CompatibilityReport, ScoreReport};
use super::{gate, scorer};
use crate::benchmark::{BenchmarkResult, BenchmarkSuite};
use crate::config::Catalog;
use crate::error::Result;
use crate::hardware::Snapshot;

pub const UNKNOWN_APP_PROBLEM: &str = "Application not found in database.";
pub const UNKNOWN_APP_WARNING: &str = "Application data missing.";

/// Entry points for front-ends: gate, benchmark, score.
#[derive(Debug, Clone)]
pub struct Pipeline {
    catalog: Arc<Catalog>,
}

impl Pipeline {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn check_compatibility(&self, app: &str, snapshot: &Snapshot) -> CompatibilityReport {
        match self.catalog.get(app) {
            Some(requirement) => gate::check(requirement, snapshot),
            None => {
                tracing::warn!(target: "rigcheck.gate", app, "unknown application");
                CompatibilityReport::rejected(UNKNOWN_APP_PROBLEM)
            }
        }
    }

    pub fn score_system(
        &self,
        app: &str,
        snapshot: &Snapshot,
        bench: &BenchmarkResult,
    ) -> ScoreReport {
        match self.catalog.get(app) {
            Some(requirement) => scorer::score(requirement, snapshot, bench),
            None => ScoreReport::new(0, vec![UNKNOWN_APP_WARNING.to_string()]),
        }
    }

    pub fn run_benchmark_suite(&self, suite: &BenchmarkSuite) -> Result<BenchmarkResult> {
        suite.run_all()
    }

    /// Gate first; the suite only runs when the machine passes.
    pub fn analyze(
        &self,
        app: &str,
        snapshot: &Snapshot,
        suite: &BenchmarkSuite,
    ) -> Result<Analysis> {
        let compatibility = self.check_compatibility(app, snapshot);
        if !compatibility.pass {
            tracing::info!(target: "rigcheck.gate", app, "gate failed, benchmark skipped");
            return Ok(Analysis {
                app: app.to_string(),
                compatibility,
                benchmark: None,
                score: None,
            });
        }

        let benchmark = self.run_benchmark_suite(suite)?;
        let score = self.score_system(app, snapshot, &benchmark);
        Ok(Analysis {
            app: app.to_string(),
            compatibility,
            benchmark: Some(benchmark),
            score: Some(score),
        })
    }
}
