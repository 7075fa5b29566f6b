// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// OS-backed CSPRNG, selected once per process via `getrandom`.
///
/// `getrandom` itself probes the strongest non-blocking source the platform
/// offers (`getrandom(2)` on Linux, `getentropy` on macOS/iOS,
/// `BCryptGenRandom` on Windows, `random_get` on WASI) at first use and then
/// never blocks again for the life of the process, matching the "probe once,
/// never block after initialization" contract.
///
/// Zero-sized: constructing one is free, so callers may create one per call
/// instead of threading a shared reference through their code.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEntropySource {}

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        getrandom::fill(dest).map_err(|_| EntropyError::EntropyNotAvailable)
    }
}
