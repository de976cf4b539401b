// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Configuration module for rigcheck
//!
//! User settings (benchmark bounds, data sources) and the read-only
//! application requirement catalog.

pub mod catalog;
pub mod settings;

pub use catalog::{Catalog, Requirement, ANY_OS};
pub use settings::*;
