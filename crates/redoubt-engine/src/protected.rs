// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Protected byte array: XOR-masked secret storage with a tamper-detecting
//! content hash, zeroized on close.

use alloc::vec;
use alloc::vec::Vec;

use redoubt_rand::fill_with_random_bytes;
use redoubt_util::{constant_time_eq, fast_zeroize_slice, fast_zeroize_vec};

use crate::error::EngineError;
use crate::hash::hmac_sha256;

const HASH_KEY: &[u8] = b"redoubt-engine/protected-byte-array/integrity";

/// A secret byte buffer kept XOR-masked in memory, with a keyed integrity
/// hash over the original plaintext checked on every read.
///
/// `storage[i] ^ mask[i] == plaintext[i]` for `0 <= i < length`. The mask is
/// independent random data of the same length as storage; masked bytes and
/// the mask itself are never both exposed unmasked together in any structure
/// an external debugger could dump as a single contiguous buffer.
pub struct ProtectedByteArray {
    storage: Vec<u8>,
    mask: Vec<u8>,
    length: usize,
    content_hash: [u8; 32],
    closed: bool,
}

impl ProtectedByteArray {
    /// Takes ownership of `bytes`: copies its contents into masked storage,
    /// records an integrity hash of the original content, and zeroizes the
    /// caller's buffer in place. The mask is freshly random, independent of
    /// any other instance.
    pub fn new(bytes: &mut [u8]) -> Result<Self, EngineError> {
        let capacity = core::cmp::max(bytes.len(), 32);
        let mut mask = vec![0u8; capacity];
        fill_with_random_bytes(&mut mask).map_err(|_| EngineError::InvalidEncoding)?;
        Self::with_mask(bytes, &mask)
    }

    /// Same as [`new`](Self::new), but the mask is derived from `mask_seed`
    /// instead of drawn fresh from the system RNG: `mask_seed` is replicated
    /// (or truncated) to the storage length. Used to shape the obfuscation
    /// of a protected array from an externally supplied obfuscation key
    /// (`K_mask`) rather than independent randomness.
    pub fn with_mask(bytes: &mut [u8], mask_seed: &[u8]) -> Result<Self, EngineError> {
        let length = bytes.len();
        let capacity = core::cmp::max(length, 32);

        if mask_seed.is_empty() {
            return Err(EngineError::InvalidEncoding);
        }

        let mut mask = vec![0u8; capacity];
        for (i, slot) in mask.iter_mut().enumerate() {
            *slot = mask_seed[i % mask_seed.len()];
        }

        let mut content_hash = [0u8; 32];
        hmac_sha256(HASH_KEY, bytes, &mut content_hash);

        let mut storage = vec![0u8; capacity];
        for i in 0..length {
            storage[i] = bytes[i] ^ mask[i];
        }

        fast_zeroize_slice(bytes);

        Ok(Self {
            storage,
            mask,
            length,
            content_hash,
            closed: false,
        })
    }

    /// Logical length of the protected content.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns a fresh unmasked copy of the protected content.
    ///
    /// The caller is responsible for zeroizing the returned buffer once
    /// done with it. Recomputes the integrity hash before returning; a
    /// mismatch indicates the masked storage was corrupted and is treated
    /// as a fatal error.
    pub fn get_data(&self) -> Result<Vec<u8>, EngineError> {
        if self.closed {
            return Err(EngineError::Closed);
        }

        let mut out = vec![0u8; self.length];
        for i in 0..self.length {
            out[i] = self.storage[i] ^ self.mask[i];
        }

        let mut recomputed = [0u8; 32];
        hmac_sha256(HASH_KEY, &out, &mut recomputed);
        if !constant_time_eq(&recomputed, &self.content_hash) {
            fast_zeroize_vec(&mut out);
            return Err(EngineError::ChecksumMismatch);
        }

        Ok(out)
    }

    /// Zeroizes storage, mask, and the content hash. Idempotent.
    pub fn close(&mut self) {
        fast_zeroize_vec(&mut self.storage);
        fast_zeroize_vec(&mut self.mask);
        self.content_hash.fill(0);
        self.length = 0;
        self.closed = true;
    }

    /// Whether `close()` has already been called.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Drop for ProtectedByteArray {
    fn drop(&mut self) {
        if !self.closed {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use redoubt_util::is_vec_fully_zeroized;

    #[test]
    fn round_trips_content() {
        let mut source: Vec<u8> = b"hello protected world".to_vec();
        let pba = ProtectedByteArray::new(&mut source).unwrap();
        assert!(is_slice_zeroized(&source));
        assert_eq!(pba.length(), 21);
        assert_eq!(pba.get_data().unwrap(), b"hello protected world");
    }

    #[test]
    fn source_buffer_is_zeroized_after_construction() {
        let mut source: Vec<u8> = vec![0xAB; 16];
        let _pba = ProtectedByteArray::new(&mut source).unwrap();
        assert!(source.iter().all(|&b| b == 0));
    }

    #[test]
    fn close_zeroizes_backing_storage() {
        let mut source: Vec<u8> = b"secret".to_vec();
        let mut pba = ProtectedByteArray::new(&mut source).unwrap();
        pba.close();
        assert!(is_vec_fully_zeroized(&pba.storage));
        assert!(is_vec_fully_zeroized(&pba.mask));
        assert!(pba.get_data().is_err());
    }

    #[test]
    fn tamper_with_storage_is_detected() {
        let mut source: Vec<u8> = b"tamper me please".to_vec();
        let mut pba = ProtectedByteArray::new(&mut source).unwrap();
        pba.storage[0] ^= 0xFF;
        assert_eq!(pba.get_data().unwrap_err(), EngineError::ChecksumMismatch);
    }

    #[test]
    fn with_mask_round_trips_using_the_supplied_seed() {
        let mut source: Vec<u8> = b"seeded mask".to_vec();
        let seed = [0x7Au8; 32];
        let pba = ProtectedByteArray::with_mask(&mut source, &seed).unwrap();
        assert_eq!(pba.get_data().unwrap(), b"seeded mask");
        assert_eq!(pba.mask, seed[..pba.mask.len()]);
    }

    #[test]
    fn with_mask_rejects_an_empty_seed() {
        let mut source: Vec<u8> = b"x".to_vec();
        assert!(ProtectedByteArray::with_mask(&mut source, &[]).is_err());
    }

    fn is_slice_zeroized(data: &[u8]) -> bool {
        data.iter().all(|&b| b == 0)
    }
}
