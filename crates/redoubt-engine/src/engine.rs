// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Authenticated encryption engine (C11): composes blinding, padding,
//! AES-CTR, and HMAC-SHA256 into the self-describing `format$iv$ct$mac`
//! token, and reverses the process with authentication checked first.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use redoubt_rand::fill_with_random_bytes;
use redoubt_util::{constant_time_eq, fast_zeroize_slice, fast_zeroize_vec};

use crate::base32;
use crate::blinding;
use crate::chars;
use crate::cipher::{aes::Aes256, cfb8, ctr};
use crate::error::EngineError;
use crate::hash::hmac_sha256;
use crate::keyderive::{self, SubKeys};
use crate::padding;
use crate::splitter;

/// Only format new tokens are ever emitted in.
pub const CURRENT_FORMAT_ID: u8 = 6;

const BLOCK_SIZE: usize = 16;
const PAD_MIN: usize = BLOCK_SIZE;
const PAD_MAX: usize = BLOCK_SIZE * 8;
const BLIND_MINIMUM_LENGTH: usize = 256;

const MIN_SUPPORTED_FORMAT: u8 = 3;
const MAX_SUPPORTED_FORMAT: u8 = 6;

fn key_array_32(bytes: &[u8]) -> Result<[u8; 32], EngineError> {
    bytes
        .try_into()
        .map_err(|_| EngineError::InvalidBlindedByteArray)
}

fn iv_array_16(bytes: &[u8]) -> Result<[u8; 16], EngineError> {
    bytes
        .try_into()
        .map_err(|_| EngineError::InvalidBlindedByteArray)
}

/// Encrypts `plain` under `master`/`subject`, emitting a format-6 token.
pub fn encrypt(master: &[u8; 32], subject: &[u8], plain: String) -> Result<String, EngineError> {
    let sub_keys = keyderive::derive_sub_keys(master, subject)?;

    let p = chars::chars_to_utf8(plain);
    let blinded = blinding::blind(&p, BLIND_MINIMUM_LENGTH)?;
    let mut padded = padding::add_padding(&blinded, PAD_MIN, PAD_MAX)?;

    let iv = build_iv(&sub_keys)?;

    let mut enc_key = sub_keys.encryption_key.expose()?;
    let aes = Aes256::new(&key_array_32(&enc_key)?);
    fast_zeroize_vec(&mut enc_key);

    ctr::apply_keystream(&aes, &iv, &mut padded);
    let ciphertext = padded; // now holds CT

    let mac = compute_mac(&sub_keys, CURRENT_FORMAT_ID, &iv, &ciphertext)?;

    let token = alloc::format!(
        "{}${}${}${}",
        CURRENT_FORMAT_ID,
        base32::encode(&iv),
        base32::encode(&ciphertext),
        base32::encode(&mac)
    );

    Ok(token)
}

fn build_iv(sub_keys: &SubKeys) -> Result<[u8; 16], EngineError> {
    let mut r = [0u8; 16];
    fill_with_random_bytes(&mut r).map_err(|_| EngineError::InvalidBlindedByteArray)?;

    let mut seed = sub_keys.iv_seed.expose()?;
    for i in 0..16 {
        r[i] ^= seed[i];
    }
    fast_zeroize_vec(&mut seed);
    Ok(r)
}

fn compute_mac(
    sub_keys: &SubKeys,
    format_id: u8,
    iv: &[u8],
    ct: &[u8],
) -> Result<[u8; 32], EngineError> {
    let mut framed = Vec::with_capacity(1 + iv.len() + ct.len());
    framed.push(format_id);
    framed.extend_from_slice(iv);
    framed.extend_from_slice(ct);

    let mut hmac_key = sub_keys.hmac_key.expose()?;
    let mut mac = [0u8; 32];
    hmac_sha256(&hmac_key, &framed, &mut mac);
    fast_zeroize_vec(&mut hmac_key);
    fast_zeroize_vec(&mut framed);
    Ok(mac)
}

/// Decrypts `token` under `master`/`subject`.
///
/// Authentication (the HMAC check) always runs before any padding/blinding/
/// UTF-8 validation, so a post-MAC failure only ever indicates an internal
/// bug, never adversarial input.
pub fn decrypt(master: &[u8; 32], subject: &[u8], token: &str) -> Result<String, EngineError> {
    let parts = splitter::split(Some(token), "$").expect("Some input always yields Some parts");
    if parts.len() != 4 {
        return Err(EngineError::WrongPartCount);
    }

    let format_id: u8 = parts[0].parse().map_err(|_| EngineError::InvalidFormatId)?;
    if !(MIN_SUPPORTED_FORMAT..=MAX_SUPPORTED_FORMAT).contains(&format_id) {
        return Err(EngineError::UnknownFormatId);
    }

    let (iv, ct, mac) = decode_fields(format_id, &parts[1], &parts[2], &parts[3])?;

    let sub_keys = keyderive::derive_sub_keys(master, subject)?;

    let expected_mac = compute_mac(&sub_keys, format_id, &iv, &ct)?;
    if !constant_time_eq(&expected_mac, &mac) {
        return Err(EngineError::ChecksumMismatch);
    }

    let mut enc_key = sub_keys.encryption_key.expose()?;
    let aes = Aes256::new(&key_array_32(&enc_key)?);
    fast_zeroize_vec(&mut enc_key);

    let iv16 = iv_array_16(&iv)?;
    let mut plain_padded = if format_id == 3 {
        cfb8::decrypt(&aes, &iv16, &ct)
    } else {
        let mut buf = ct;
        ctr::apply_keystream(&aes, &iv16, &mut buf);
        buf
    };

    let unpadded = padding::remove_padding(&plain_padded);
    fast_zeroize_slice(&mut plain_padded);

    let unblinded = blinding::unblind(&unpadded)?;

    chars::utf8_to_chars(unblinded)
}

fn decode_fields(
    format_id: u8,
    iv_field: &str,
    ct_field: &str,
    mac_field: &str,
) -> Result<(Vec<u8>, Vec<u8>, [u8; 32]), EngineError> {
    let (iv, ct, mac_bytes) = if format_id == 6 {
        (
            base32::decode(iv_field)?,
            base32::decode(ct_field)?,
            base32::decode(mac_field)?,
        )
    } else {
        (
            BASE64
                .decode(iv_field)
                .map_err(|_| EngineError::InvalidEncoding)?,
            BASE64
                .decode(ct_field)
                .map_err(|_| EngineError::InvalidEncoding)?,
            BASE64
                .decode(mac_field)
                .map_err(|_| EngineError::InvalidEncoding)?,
        )
    };

    let mac = key_array_32(&mac_bytes).map_err(|_| EngineError::InvalidEncoding)?;
    Ok((iv, ct, mac))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn master() -> [u8; 32] {
        let mut m = [0u8; 32];
        for (i, b) in m.iter_mut().enumerate() {
            *b = i as u8;
        }
        m
    }

    #[test]
    fn round_trips_ascii_with_no_subject() {
        let token = encrypt(&master(), b"", "hello world".to_string()).unwrap();
        assert!(token.starts_with("6$"));
        let recovered = decrypt(&master(), b"", &token).unwrap();
        assert_eq!(recovered, "hello world");
    }

    #[test]
    fn round_trips_multibyte_with_subject() {
        let subject = b"maven_repo_pass";
        let plaintext = "This#\"s?a\u{a7}StR4nGé€PàS!Wörd9".to_string();
        let token = encrypt(&master(), subject, plaintext.clone()).unwrap();
        let recovered = decrypt(&master(), subject, &token).unwrap();
        assert_eq!(recovered, plaintext);
    }

    #[test]
    fn round_trips_empty_string() {
        let token = encrypt(&master(), b"s", String::new()).unwrap();
        let recovered = decrypt(&master(), b"s", &token).unwrap();
        assert_eq!(recovered, "");
    }

    #[test]
    fn wrong_subject_fails_checksum() {
        let token = encrypt(&master(), b"maven_repo_pass", "secret".to_string()).unwrap();
        let err = decrypt(&master(), b"maven_repo_paxx", &token).unwrap_err();
        assert_eq!(err, EngineError::ChecksumMismatch);
    }

    #[test]
    fn tampering_with_ciphertext_fails_checksum() {
        let token = encrypt(&master(), b"", "secret value".to_string()).unwrap();
        let mut parts: Vec<String> = token.split('$').map(|s| s.to_string()).collect();
        let mut ct = parts[2].clone().into_bytes();
        ct[0] = if ct[0] == b'y' { b'b' } else { b'y' };
        parts[2] = String::from_utf8(ct).unwrap();
        let tampered = parts.join("$");

        let err = decrypt(&master(), b"", &tampered).unwrap_err();
        assert_eq!(err, EngineError::ChecksumMismatch);
    }

    #[test]
    fn wrong_part_count_is_rejected() {
        let err = decrypt(&master(), b"", "6$a$b").unwrap_err();
        assert_eq!(err, EngineError::WrongPartCount);
    }

    #[test]
    fn non_numeric_format_id_is_rejected() {
        let err = decrypt(&master(), b"", "Q$a$b$c").unwrap_err();
        assert_eq!(err, EngineError::InvalidFormatId);
    }

    #[test]
    fn unknown_format_id_is_rejected() {
        let err = decrypt(&master(), b"", "99$a$b$c").unwrap_err();
        assert_eq!(err, EngineError::UnknownFormatId);
    }

    #[test]
    fn retired_format_id_is_rejected() {
        let err = decrypt(&master(), b"", "1$a$b$c").unwrap_err();
        assert_eq!(err, EngineError::UnknownFormatId);
    }
}
