// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Custom Base32 codec (C8): bijective byte<->text encoding with a fixed
//! 32-character alphabet, 5-byte input blocks producing 8 output characters.
//!
//! The alphabet is Bruce Wagner's human-oriented "z-base-32" table (no
//! reference token corpus survived retrieval to extract the original
//! alphabet from — see `DESIGN.md` for the open-question decision). `=` pads
//! an incomplete final block and is rejected anywhere but the trailing
//! padding position on decode.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::EngineError;

const ALPHABET: &[u8; 32] = b"ybndrfg8ejkmcpqxot1uwisza345h769";
const PAD: u8 = b'=';

fn decode_table() -> [i8; 256] {
    let mut table = [-1i8; 256];
    for (i, &c) in ALPHABET.iter().enumerate() {
        table[c as usize] = i as i8;
    }
    table
}

/// Number of output characters (including `=` padding) a block of
/// `group_len` input bytes (1-5) produces.
fn chars_for_group_len(group_len: usize) -> usize {
    match group_len {
        1 => 2,
        2 => 4,
        3 => 5,
        4 => 7,
        5 => 8,
        _ => unreachable!("group length is always 1..=5"),
    }
}

/// Encodes `data` to the custom Base32 alphabet.
pub fn encode(data: &[u8]) -> String {
    let mut out = Vec::with_capacity(data.len().div_ceil(5) * 8);

    for chunk in data.chunks(5) {
        let mut buf = [0u8; 5];
        buf[..chunk.len()].copy_from_slice(chunk);

        // 40 bits packed big-endian across the 5-byte group.
        let bits: u64 = (buf[0] as u64) << 32
            | (buf[1] as u64) << 24
            | (buf[2] as u64) << 16
            | (buf[3] as u64) << 8
            | (buf[4] as u64);

        let mut symbols = [0u8; 8];
        for (i, sym) in symbols.iter_mut().enumerate() {
            let shift = 35 - i * 5;
            *sym = ALPHABET[((bits >> shift) & 0x1F) as usize];
        }

        let produced = chars_for_group_len(chunk.len());
        out.extend_from_slice(&symbols[..produced]);
        out.resize(out.len() + (8 - produced), PAD);
    }

    // SAFETY: every byte pushed is either a member of `ALPHABET` (ASCII) or
    // the ASCII `=` pad character.
    String::from_utf8(out).expect("alphabet and pad are ASCII")
}

/// Strictly decodes `text` from the custom Base32 alphabet.
///
/// Rejects characters outside the alphabet, whitespace, case folding, and
/// malformed padding.
pub fn decode(text: &str) -> Result<Vec<u8>, EngineError> {
    let bytes = text.as_bytes();
    if bytes.len() % 8 != 0 {
        return Err(EngineError::InvalidEncoding);
    }

    let table = decode_table();
    let mut out = Vec::with_capacity(bytes.len() / 8 * 5);

    for group in bytes.chunks(8) {
        let pad_start = group.iter().position(|&b| b == PAD).unwrap_or(group.len());
        if group[pad_start..].iter().any(|&b| b != PAD) {
            return Err(EngineError::InvalidEncoding);
        }

        let data_len = match pad_start {
            8 => 5,
            7 => 4,
            5 => 3,
            4 => 2,
            2 => 1,
            _ => return Err(EngineError::InvalidEncoding),
        };

        let mut bits: u64 = 0;
        for &c in &group[..pad_start] {
            let v = table[c as usize];
            if v < 0 {
                return Err(EngineError::InvalidEncoding);
            }
            bits = (bits << 5) | v as u64;
        }
        // Left-align the symbols we did read into a 40-bit field.
        bits <<= 5 * (8 - pad_start);

        let block = [
            ((bits >> 32) & 0xFF) as u8,
            ((bits >> 24) & 0xFF) as u8,
            ((bits >> 16) & 0xFF) as u8,
            ((bits >> 8) & 0xFF) as u8,
            (bits & 0xFF) as u8,
        ];
        out.extend_from_slice(&block[..data_len]);
    }

    Ok(out)
}
