// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-SHA256 per RFC 2104, layered on [`super::sha256::Sha256State`].

use redoubt_util::fast_zeroize_slice;

use super::sha256::Sha256State;

const BLOCK_LEN: usize = 64;
const HASH_LEN: usize = 32;

/// Computes `HMAC-SHA256(key, data)`.
///
/// `key` may be any length: per RFC 2104, keys longer than the block size
/// are first hashed down to 32 bytes.
pub(crate) fn hmac_sha256(key: &[u8], data: &[u8], out: &mut [u8; HASH_LEN]) {
    let mut key_block = [0u8; BLOCK_LEN];

    if key.len() > BLOCK_LEN {
        let mut st = Sha256State::new();
        st.update(key);
        let mut digest = [0u8; HASH_LEN];
        st.finalize(&mut digest);
        key_block[..HASH_LEN].copy_from_slice(&digest);
        fast_zeroize_slice(&mut digest);
    } else {
        key_block[..key.len()].copy_from_slice(key);
    }

    let mut k_ipad = [0x36u8; BLOCK_LEN];
    let mut k_opad = [0x5cu8; BLOCK_LEN];
    for i in 0..BLOCK_LEN {
        k_ipad[i] ^= key_block[i];
        k_opad[i] ^= key_block[i];
    }
    fast_zeroize_slice(&mut key_block);

    let mut inner = Sha256State::new();
    inner.update(&k_ipad);
    inner.update(data);
    let mut inner_hash = [0u8; HASH_LEN];
    inner.finalize(&mut inner_hash);

    let mut outer = Sha256State::new();
    outer.update(&k_opad);
    outer.update(&inner_hash);
    outer.finalize(out);

    fast_zeroize_slice(&mut k_ipad);
    fast_zeroize_slice(&mut k_opad);
    fast_zeroize_slice(&mut inner_hash);
}
