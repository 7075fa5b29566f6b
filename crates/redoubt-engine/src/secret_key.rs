// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Secret key holder (C3): a [`ProtectedByteArray`] specialized to
//! fixed-size symmetric keys.

use alloc::vec::Vec;

use crate::error::EngineError;
use crate::protected::ProtectedByteArray;

/// Wraps an AES/HMAC key, keeping it masked in memory and zeroizing the
/// caller's source buffer on construction.
pub struct SecretKey {
    inner: ProtectedByteArray,
}

impl SecretKey {
    /// Takes ownership of `key_bytes` (16, 24, or 32 bytes), masking it and
    /// zeroizing the source.
    pub fn new(key_bytes: &mut [u8]) -> Result<Self, EngineError> {
        Ok(Self {
            inner: ProtectedByteArray::new(key_bytes)?,
        })
    }

    /// Same as [`new`](Self::new), but masks the key with `mask_seed`
    /// (replicated/truncated to length) instead of fresh randomness.
    pub fn new_with_mask(key_bytes: &mut [u8], mask_seed: &[u8]) -> Result<Self, EngineError> {
        Ok(Self {
            inner: ProtectedByteArray::with_mask(key_bytes, mask_seed)?,
        })
    }

    /// Number of key bytes.
    pub fn len(&self) -> usize {
        self.inner.length()
    }

    /// Whether this holds zero bytes (always false for a validly constructed key).
    pub fn is_empty(&self) -> bool {
        self.inner.length() == 0
    }

    /// Returns a fresh clone of the key bytes. Caller must zeroize after use.
    pub fn expose(&self) -> Result<Vec<u8>, EngineError> {
        self.inner.get_data()
    }

    /// Zeroizes the underlying key material.
    pub fn close(&mut self) {
        self.inner.close();
    }
}
