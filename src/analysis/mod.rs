// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Decision engine: compatibility gate, performance scorer and the pipeline
//! that sequences them around the benchmark suite.

pub mod gate;
pub mod pipeline;
mod report;
pub mod scorer;

pub use pipeline::{Pipeline, UNKNOWN_APP_PROBLEM, UNKNOWN_APP_WARNING};
pub use report::{Analysis, CompatibilityReport, Rating, ScoreReport};
