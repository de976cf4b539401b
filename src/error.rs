// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for rigcheck
//!
//! `RigError` covers failures that stop an operation: unreadable catalog or
//! settings, and resource errors during the benchmark suite. Measurements that
//! are merely unavailable use [`ProbeError`] and are recovered where they occur.

use thiserror::Error;

/// Main error type for rigcheck operations
#[derive(Error, Debug)]
pub enum RigError {
    /// Configuration errors (settings or catalog content)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requirement catalog could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// A benchmark stage failed in a way that invalidates the whole run
    #[error("Benchmark failed: {0}")]
    Benchmark(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A blocking worker panicked or was cancelled
    #[error("Worker error: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Why a single measurement source produced nothing.
///
/// These never escape the benchmark suite or inventory: the caller falls back
/// to the next source or to a neutral default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The platform has no such sensor or interface
    #[error("not supported on this platform")]
    Unsupported,

    /// The source exists but did not produce a usable value
    #[error("unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias for rigcheck operations
pub type Result<T> = std::result::Result<T, RigError>;
