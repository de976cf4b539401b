// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use serde::{Deserialize, Serialize};

use crate::benchmark::BenchmarkResult;

/// Outcome of the compatibility gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    pub pass: bool,
    /// Every violated requirement, in check order
    pub blocking_problems: Vec<String>,
    /// Non-blocking notes (qualifying drives, skipped OS check)
    pub info_messages: Vec<String>,
}

impl CompatibilityReport {
    pub(crate) fn from_checks(blocking_problems: Vec<String>, info_messages: Vec<String>) -> Self {
        Self {
            pass: blocking_problems.is_empty(),
            blocking_problems,
            info_messages,
        }
    }

    pub(crate) fn rejected(problem: impl Into<String>) -> Self {
        Self {
            pass: false,
            blocking_problems: vec![problem.into()],
            info_messages: Vec::new(),
        }
    }
}

/// Coarse performance band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Excellent,
    Good,
    Weak,
}

impl Rating {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Rating::Excellent,
            50..=79 => Rating::Good,
            _ => Rating::Weak,
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rating::Excellent => write!(f, "EXCELLENT"),
            Rating::Good => write!(f, "GOOD"),
            Rating::Weak => write!(f, "WEAK"),
        }
    }
}

/// Weighted score with the warnings that explain lost points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub score: u8,
    pub warnings: Vec<String>,
    pub rating: Rating,
}

impl ScoreReport {
    pub(crate) fn new(score: u8, warnings: Vec<String>) -> Self {
        Self {
            score,
            warnings,
            rating: Rating::from_score(score),
        }
    }
}

/// Full pipeline run for one application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub app: String,
    pub compatibility: CompatibilityReport,
    /// Absent when the gate failed and the suite was skipped
    pub benchmark: Option<BenchmarkResult>,
    pub score: Option<ScoreReport>,
}
