// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # redoubt_rand
//!
//! Cryptographically secure random number generation for the Redoubt framework.
//!
//! Provides a single process-wide entropy source: IVs, padding bytes,
//! blinding bytes, and padding lengths all flow through
//! [`SystemEntropySource`].
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//!
//! ## Traits
//!
//! - [`EntropySource`]: Interface for CSPRNGs
//!
//! ## Example
//!
//! ```rust
//! use redoubt_rand::{SystemEntropySource, EntropySource, fill_with_random_bytes};
//!
//! let entropy = SystemEntropySource {};
//!
//! let mut key = [0u8; 32];
//! entropy.fill_bytes(&mut key).expect("failed to generate entropy");
//!
//! let mut iv = [0u8; 16];
//! fill_with_random_bytes(&mut iv).expect("failed to generate entropy");
//! ```
//!
//! ## Platform Support
//!
//! Supports all platforms via `getrandom`:
//! - Linux/Android: `getrandom()` syscall
//! - macOS/iOS: `getentropy()`
//! - Windows: `BCryptGenRandom`
//! - WASI: `random_get`

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod support;
mod system;
mod traits;

pub use error::EntropyError;
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;

/// Fills `dest` with cryptographically secure random bytes from the
/// process-wide [`SystemEntropySource`].
///
/// Convenience wrapper for callers that don't want to hold onto an
/// `EntropySource` instance themselves; `SystemEntropySource` is a
/// zero-sized handle, so constructing one per call has no overhead.
pub fn fill_with_random_bytes(dest: &mut [u8]) -> Result<(), EntropyError> {
    SystemEntropySource {}.fill_bytes(dest)
}

/// Returns a uniformly random integer in `[0, bound)` using rejection
/// sampling, or `None` if `bound == 0`.
///
/// Rejection sampling discards draws in the top partial range of the
/// `u64` space so that every remaining value in `[0, bound)` stays equally
/// likely; without it, a plain `draw % bound` would bias low values
/// whenever `bound` doesn't evenly divide `u64::MAX + 1`.
pub fn random_below(bound: u64) -> Result<u64, EntropyError> {
    if bound == 0 {
        return Ok(0);
    }

    let limit = u64::MAX - (u64::MAX % bound);
    loop {
        let mut buf = [0u8; 8];
        fill_with_random_bytes(&mut buf)?;
        let draw = u64::from_le_bytes(buf);
        if draw < limit {
            return Ok(draw % bound);
        }
    }
}
