// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-256-CTR keystream application, used by format 6.

use crate::cipher::aes::Aes256;

fn increment_counter(counter: &mut [u8; 16]) {
    for byte in counter.iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            break;
        }
    }
}

/// XORs `data` in place with the AES-CTR keystream seeded by `iv`.
///
/// Encryption and decryption are the same operation in CTR mode.
pub fn apply_keystream(cipher: &Aes256, iv: &[u8; 16], data: &mut [u8]) {
    let mut counter = *iv;
    let mut keystream_block = [0u8; 16];

    for chunk in data.chunks_mut(16) {
        keystream_block = counter;
        cipher.encrypt_block(&mut keystream_block);
        for (b, k) in chunk.iter_mut().zip(keystream_block.iter()) {
            *b ^= k;
        }
        increment_counter(&mut counter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encrypting_twice_recovers_plaintext() {
        let key = [0x2bu8; 32];
        let iv = [0x01u8; 16];
        let cipher = Aes256::new(&key);

        let plaintext = b"a split-key encryption engine test payload!!".to_vec();
        let mut buf = plaintext.clone();
        apply_keystream(&cipher, &iv, &mut buf);
        assert_ne!(buf, plaintext);
        apply_keystream(&cipher, &iv, &mut buf);
        assert_eq!(buf, plaintext);
    }

    #[test]
    fn counter_wraps_across_block_boundary() {
        let key = [0x77u8; 32];
        let iv = [0xFFu8; 16];
        let cipher = Aes256::new(&key);

        let mut buf = alloc::vec![0u8; 40];
        apply_keystream(&cipher, &iv, &mut buf);
        assert!(buf.iter().any(|&b| b != 0));
    }
}
