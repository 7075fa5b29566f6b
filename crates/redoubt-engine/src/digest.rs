// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Key-file digester (C9): derive a 32-byte master fingerprint from 1-N
//! input byte blobs via HMAC over their concatenation.

use alloc::vec::Vec;

use redoubt_util::fast_zeroize_vec;

use crate::error::EngineError;
use crate::hash::hmac_sha256;

/// Floor on total key-file blob length, per `spec.md` §3/§6.
pub const MIN_TOTAL_SOURCE_BYTES: usize = 100_000;
/// Inclusive bounds on the HMAC key length, per `spec.md` §6.
pub const HMAC_KEY_MIN_LEN: usize = 14;
/// See [`HMAC_KEY_MIN_LEN`].
pub const HMAC_KEY_MAX_LEN: usize = 32;

/// Computes `master = HMAC-SHA256(hmac_key, concat(blobs))`.
///
/// Validates `hmac_key` length and that the blobs carry enough total
/// entropy; each blob in `blobs` must be non-empty-checked by the caller
/// (represented here as `Option<&[u8]>` so a "null" blob — `None` — can
/// surface the exact 1-indexed error message `spec.md` requires).
pub fn digest_key_file(
    hmac_key: Option<&[u8]>,
    blobs: &[Option<&[u8]>],
) -> Result<[u8; 32], EngineError> {
    let hmac_key = hmac_key.ok_or(EngineError::HmacKeyIsNull)?;
    if hmac_key.len() < HMAC_KEY_MIN_LEN {
        return Err(EngineError::HmacKeyTooShort);
    }
    if hmac_key.len() > HMAC_KEY_MAX_LEN {
        return Err(EngineError::HmacKeyTooLong);
    }

    let mut concatenated = Vec::new();
    for (i, blob) in blobs.iter().enumerate() {
        match blob {
            Some(b) => concatenated.extend_from_slice(b),
            None => {
                return Err(EngineError::SourceByteArrayIsNull { index: i + 1 });
            }
        }
    }

    if concatenated.len() < MIN_TOTAL_SOURCE_BYTES {
        fast_zeroize_vec(&mut concatenated);
        return Err(EngineError::NotEnoughSourceBytes);
    }

    let mut master = [0u8; 32];
    hmac_sha256(hmac_key, &concatenated, &mut master);
    fast_zeroize_vec(&mut concatenated);
    Ok(master)
}
