// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-CFB8 decryption, kept only to read format-3 tokens produced by older
//! implementations. New tokens never use this mode (see format 6).

use alloc::vec::Vec;

use crate::cipher::aes::Aes256;

/// Decrypts `ciphertext` under CFB8 with the given 16-byte IV.
///
/// CFB8 decrypt only ever needs the forward cipher: each keystream byte is
/// the first byte of `AES_encrypt(shift_register)`, and the shift register
/// advances by shifting in the *ciphertext* byte just consumed.
pub fn decrypt(cipher: &Aes256, iv: &[u8; 16], ciphertext: &[u8]) -> Vec<u8> {
    let mut shift_register = *iv;
    let mut out = Vec::with_capacity(ciphertext.len());

    for &ct_byte in ciphertext {
        let mut block = shift_register;
        cipher.encrypt_block(&mut block);
        let pt_byte = block[0] ^ ct_byte;
        out.push(pt_byte);

        for i in 0..15 {
            shift_register[i] = shift_register[i + 1];
        }
        shift_register[15] = ct_byte;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::ctr;

    #[test]
    fn decrypt_inverts_a_hand_rolled_cfb8_encrypt() {
        let key = [0x5Cu8; 32];
        let iv = [0x03u8; 16];
        let cipher = Aes256::new(&key);

        let plaintext = b"legacy token payload".to_vec();

        // Encrypt with the same CFB8 construction (symmetric w.r.t. the
        // shift register update, which always shifts in ciphertext bytes).
        let mut shift_register = iv;
        let mut ciphertext = Vec::with_capacity(plaintext.len());
        for &pt_byte in &plaintext {
            let mut block = shift_register;
            cipher.encrypt_block(&mut block);
            let ct_byte = block[0] ^ pt_byte;
            ciphertext.push(ct_byte);
            for i in 0..15 {
                shift_register[i] = shift_register[i + 1];
            }
            shift_register[15] = ct_byte;
        }

        assert_eq!(decrypt(&cipher, &iv, &ciphertext), plaintext);
    }

    #[test]
    fn differs_from_ctr_mode_output() {
        let key = [0x5Cu8; 32];
        let iv = [0x03u8; 16];
        let cipher = Aes256::new(&key);

        let mut ctr_buf = b"same bytes, different mode".to_vec();
        ctr::apply_keystream(&cipher, &iv, &mut ctr_buf);

        let cfb8_buf = decrypt(&cipher, &iv, &ctr_buf);
        assert_ne!(cfb8_buf, b"same bytes, different mode".to_vec());
    }
}
