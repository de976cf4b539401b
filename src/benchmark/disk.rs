// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Sequential disk write test

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use rand::RngCore;

use super::round_to;
use crate::error::{Result, RigError};

/// Size of the scratch file written by the disk test.
pub const DISK_TEST_BYTES: usize = 100 * 1024 * 1024;

/// Write 100 MB of random bytes into `dir`, then delete the file.
///
/// Returns seconds spent writing and cleaning up. Any I/O failure (read-only
/// filesystem, out of space, cleanup denied) is returned as an error; the
/// scratch file is removed on every path.
pub fn disk_write_test(dir: &Path) -> Result<f64> {
    disk_write_test_sized(dir, DISK_TEST_BYTES)
}

pub(crate) fn disk_write_test_sized(dir: &Path, bytes: usize) -> Result<f64> {
    // Random payload so compressing filesystems cannot shortcut the write
    let mut payload = vec![0u8; bytes];
    rand::rng().fill_bytes(&mut payload);

    let start = Instant::now();

    let mut file = tempfile::Builder::new()
        .prefix(".rigcheck-disk-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|err| {
            RigError::Benchmark(format!(
                "cannot create scratch file in {}: {}",
                dir.display(),
                err
            ))
        })?;

    file.write_all(&payload)
        .and_then(|_| file.flush())
        .map_err(|err| RigError::Benchmark(format!("disk write failed: {}", err)))?;

    file.close()
        .map_err(|err| RigError::Benchmark(format!("cannot remove scratch file: {}", err)))?;

    Ok(round_to(start.elapsed().as_secs_f64(), 4))
}
