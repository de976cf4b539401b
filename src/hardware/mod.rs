// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Hardware inventory and sensor access
//!
//! Produces the [`Snapshot`] consumed by the compatibility gate and scorer,
//! and the frequency / battery sources used by the benchmark suite. Every
//! reading goes through a [`Probe`] so unsupported platforms degrade to a
//! neutral value instead of failing the run.

pub mod frequency;
pub mod gpu;
pub mod power;
pub mod probe;
pub mod snapshot;

pub use frequency::cpu_frequency_chain;
pub use gpu::{gpu_chain, GpuMemory};
pub use power::{power_chain, PowerStatus};
pub use probe::{probe_fn, FallbackChain, FnProbe, Probe};
pub use snapshot::{DiskSpace, Snapshot};
