// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Errors produced by entropy sources and nonce generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EntropyError {
    /// The underlying OS entropy source failed or is unavailable.
    #[error("entropy source is not available")]
    EntropyNotAvailable,
}
