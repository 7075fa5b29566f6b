// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # redoubt
//!
//! Split-key authenticated encryption for short textual secrets (passwords,
//! API tokens, and other credential-like strings) at rest.
//!
//! [`EncryptionEngine`] turns a clear string plus a caller-supplied subject
//! label into a self-describing versioned token, and inverts that token back
//! to the clear string given the same key material and subject. A mismatched
//! subject, tampered token, or altered key material is detected before any
//! plaintext is returned.
//!
//! ```rust
//! use redoubt::EncryptionEngine;
//!
//! let hmac_key = [0x42u8; 32];
//! let key_file = vec![0x7Eu8; 100_000];
//!
//! let engine = EncryptionEngine::new_with_blobs(Some(&hmac_key), &[Some(&key_file)]).unwrap();
//! let token = engine.encrypt_data("hunter2".to_string(), Some("db_password")).unwrap();
//! let recovered = engine.decrypt_data(&token, Some("db_password")).unwrap();
//! assert_eq!(recovered, "hunter2");
//! ```
//!
//! The core cryptographic engineering — key derivation, blinding, padding,
//! AES-CTR, and HMAC authentication — lives in `redoubt-engine`; this crate
//! is the resource-scoped public entry point.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::string::{String, ToString};

pub use redoubt_engine::EngineError;

/// Public façade over the authenticated encryption engine.
///
/// Holds the 32-byte master fingerprint (itself kept inside a
/// [`redoubt_engine::SecretKey`], XOR-masked in memory) between construction
/// and [`close`](Self::close). Every [`encrypt_data`](Self::encrypt_data) and
/// [`decrypt_data`](Self::decrypt_data) call derives fresh, stack-local
/// sub-keys from that fingerprint and the caller-supplied subject, so a
/// constructed engine is safe to share across threads for concurrent calls.
pub struct EncryptionEngine {
    master: Option<redoubt_engine::SecretKey>,
}

impl EncryptionEngine {
    /// Constructs an engine from an HMAC key and one or more raw key-file
    /// blobs already in memory (the `no_std`-compatible constructor).
    pub fn new_with_blobs(
        hmac_key: Option<&[u8]>,
        blobs: &[Option<&[u8]>],
    ) -> Result<Self, EngineError> {
        let mut master_bytes = redoubt_engine::digest_key_file(hmac_key, blobs)?;
        let master = redoubt_engine::SecretKey::new(&mut master_bytes)?;
        Ok(Self {
            master: Some(master),
        })
    }

    /// Constructs an engine from an HMAC key and the contents of a key file
    /// on disk. Reads the file once, hashes it, and zeroizes the read buffer
    /// before returning.
    #[cfg(feature = "std")]
    pub fn new(hmac_key: Option<&[u8]>, key_file_path: Option<&str>) -> Result<Self, EngineError> {
        let path = key_file_path.ok_or(EngineError::KeyFilePathIsNull)?;
        if path.is_empty() {
            return Err(EngineError::KeyFilePathInvalid("empty path".to_string()));
        }

        let mut contents = std::fs::read(path)
            .map_err(|_| EngineError::KeyFileDoesNotExist(path.to_string()))?;

        let result = Self::new_with_blobs(hmac_key, &[Some(&contents)]);
        redoubt_util::fast_zeroize_vec(&mut contents);
        result
    }

    fn expose_master(&self) -> Result<[u8; 32], EngineError> {
        let master = self.master.as_ref().ok_or(EngineError::Closed)?;
        let bytes = master.expose()?;
        let mut out = [0u8; 32];
        out.copy_from_slice(&bytes);
        let mut bytes = bytes;
        redoubt_util::fast_zeroize_vec(&mut bytes);
        Ok(out)
    }

    /// Encrypts `plain` under `subject` (empty string and `None` are
    /// equivalent), returning a format-6 token.
    pub fn encrypt_data(&self, plain: String, subject: Option<&str>) -> Result<String, EngineError> {
        let master = self.expose_master()?;
        let subject_bytes = subject.unwrap_or("").as_bytes();
        redoubt_engine::encrypt(&master, subject_bytes, plain)
    }

    /// Decrypts `token` under `subject`, failing with a checksum error if
    /// the subject, key material, or token don't match.
    pub fn decrypt_data(&self, token: &str, subject: Option<&str>) -> Result<String, EngineError> {
        let master = self.expose_master()?;
        let subject_bytes = subject.unwrap_or("").as_bytes();
        redoubt_engine::decrypt(&master, subject_bytes, token)
    }

    /// Zeroizes the master fingerprint. Every subsequent operation fails
    /// with [`EngineError::Closed`]. Idempotent.
    pub fn close(&mut self) {
        if let Some(mut master) = self.master.take() {
            master.close();
        }
    }

    /// Whether [`close`](Self::close) has already been called.
    pub fn is_closed(&self) -> bool {
        self.master.is_none()
    }
}

impl Drop for EncryptionEngine {
    fn drop(&mut self) {
        self.close();
    }
}
