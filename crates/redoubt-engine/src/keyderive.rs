// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Split-key derivation (C10): from a master fingerprint and subject,
//! derive four labelled 32-byte sub-keys via HMAC-SHA256.
//!
//! Label strings are `"encryption"`, `"hmac"`, `"obfuscation"`, `"iv"` per
//! `spec.md` §4.10 — that section is explicit that "the exact label strings
//! are part of the format", so they're reproduced verbatim here rather than
//! the looser paraphrase ("key"/"hmac"/"mask"/"iv") in §3's prose.

use redoubt_util::fast_zeroize_slice;

use crate::error::EngineError;
use crate::hash::hmac_sha256;
use crate::secret_key::SecretKey;

const LABEL_ENCRYPTION: &[u8] = b"encryption";
const LABEL_HMAC: &[u8] = b"hmac";
const LABEL_OBFUSCATION: &[u8] = b"obfuscation";
const LABEL_IV: &[u8] = b"iv";

/// The four sub-keys derived for a single (master fingerprint, subject) pair.
pub struct SubKeys {
    /// AES key (`K_enc`).
    pub encryption_key: SecretKey,
    /// HMAC key (`K_mac`).
    pub hmac_key: SecretKey,
    /// Mask for the protected byte array (`K_mask`).
    pub mask: SecretKey,
    /// Material mixed into the per-message IV (`K_iv`).
    pub iv_seed: SecretKey,
}

fn derive_one(master: &[u8; 32], label: &[u8], subject: &[u8]) -> Result<[u8; 32], EngineError> {
    let mut input = alloc::vec::Vec::with_capacity(label.len() + subject.len());
    input.extend_from_slice(label);
    input.extend_from_slice(subject);

    let mut out = [0u8; 32];
    hmac_sha256(master, &input, &mut out);
    fast_zeroize_slice(&mut input);
    Ok(out)
}

/// Derives the four sub-keys for `subject` (possibly empty) from `master`.
///
/// `K_mask` shapes the in-memory obfuscation of the other three: each of
/// `encryption_key`, `hmac_key`, and `iv_seed` is masked with `K_mask`
/// (rather than an independently random mask) when held in its protected
/// byte array, per the "obfuscation" label's role in §4.10. `K_mask` itself,
/// having no further key to be masked with, keeps an independently random
/// mask.
pub fn derive_sub_keys(master: &[u8; 32], subject: &[u8]) -> Result<SubKeys, EngineError> {
    let mut enc = derive_one(master, LABEL_ENCRYPTION, subject)?;
    let mut hmac = derive_one(master, LABEL_HMAC, subject)?;
    let mut mask = derive_one(master, LABEL_OBFUSCATION, subject)?;
    let mut iv = derive_one(master, LABEL_IV, subject)?;

    let mask_key = SecretKey::new(&mut mask)?;
    let mask_seed = mask_key.expose()?;

    let sub_keys = SubKeys {
        encryption_key: SecretKey::new_with_mask(&mut enc, &mask_seed)?,
        hmac_key: SecretKey::new_with_mask(&mut hmac, &mask_seed)?,
        mask: mask_key,
        iv_seed: SecretKey::new_with_mask(&mut iv, &mask_seed)?,
    };

    let mut mask_seed = mask_seed;
    fast_zeroize_slice(&mut mask_seed);

    Ok(sub_keys)
}
