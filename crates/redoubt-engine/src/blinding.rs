// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-array blinding (C7): wrap a payload in a random prefix/postfix of
//! random length, with the inner length encoded via the packed-integer
//! codec (C5).
//!
//! Layout: `[prefixLen(1)][postfixLen(1)][packedSourceLen(1-4)][prefix][source][postfix]`.

use alloc::vec::Vec;

use redoubt_rand::{fill_with_random_bytes, random_below};

use crate::error::EngineError;
use crate::varint;

/// Upper bound `spec.md` places on `minimum_length`.
pub const MAX_MINIMUM_LENGTH: usize = 256;

const INITIAL_AFFIX_BOUND: u64 = 16; // lengths drawn from [0, 15]

/// Wraps `source` in a random prefix/postfix, padding the combined length up
/// to `minimum_length` if needed.
///
/// The odd byte of an uneven deficit split goes to the prefix when
/// `diff & 2 != 0`, otherwise to the postfix — this exact tie-break is part
/// of the format and must match on both sides of a round trip (though in
/// practice `unblind` doesn't need to replicate it: the lengths are encoded,
/// not inferred).
pub fn blind(source: &[u8], minimum_length: usize) -> Result<Vec<u8>, EngineError> {
    if minimum_length > MAX_MINIMUM_LENGTH {
        return Err(EngineError::InvalidBlindedByteArray);
    }

    let packed_len = varint::to_packed(source.len() as u32)?;

    let mut prefix_len = random_below(INITIAL_AFFIX_BOUND)
        .map_err(|_| EngineError::InvalidBlindedByteArray)? as usize;
    let mut postfix_len = random_below(INITIAL_AFFIX_BOUND)
        .map_err(|_| EngineError::InvalidBlindedByteArray)? as usize;

    let total = 2 + packed_len.len() + prefix_len + source.len() + postfix_len;
    if total < minimum_length {
        let diff = minimum_length - total;
        let half = diff / 2;
        let extra = diff % 2;

        if extra == 1 && diff & 2 != 0 {
            prefix_len += half + 1;
            postfix_len += half;
        } else {
            prefix_len += half;
            postfix_len += half + extra;
        }
    }

    if prefix_len > u8::MAX as usize || postfix_len > u8::MAX as usize {
        return Err(EngineError::InvalidBlindedByteArray);
    }

    let mut prefix = alloc::vec![0u8; prefix_len];
    fill_with_random_bytes(&mut prefix).map_err(|_| EngineError::InvalidBlindedByteArray)?;
    let mut postfix = alloc::vec![0u8; postfix_len];
    fill_with_random_bytes(&mut postfix).map_err(|_| EngineError::InvalidBlindedByteArray)?;

    let mut out = Vec::with_capacity(2 + packed_len.len() + prefix.len() + source.len() + postfix.len());
    out.push(prefix_len as u8);
    out.push(postfix_len as u8);
    out.extend_from_slice(&packed_len);
    out.extend_from_slice(&prefix);
    out.extend_from_slice(source);
    out.extend_from_slice(&postfix);
    Ok(out)
}

/// Recovers the original `source` range from a blinded buffer.
pub fn unblind(blinded: &[u8]) -> Result<Vec<u8>, EngineError> {
    if blinded.len() < 3 {
        return Err(EngineError::InvalidBlindedByteArray);
    }

    let prefix_len = blinded[0] as usize;
    let postfix_len = blinded[1] as usize;

    let (source_len, packed_consumed) =
        varint::from_packed(&blinded[2..]).map_err(|_| EngineError::InvalidBlindedByteArray)?;
    let source_len = source_len as usize;

    let header = 2 + packed_consumed;
    let total_needed = header
        .checked_add(prefix_len)
        .and_then(|v| v.checked_add(source_len))
        .and_then(|v| v.checked_add(postfix_len))
        .ok_or(EngineError::InvalidBlindedByteArray)?;

    if total_needed > blinded.len() {
        return Err(EngineError::InvalidBlindedByteArray);
    }

    let start = header + prefix_len;
    Ok(blinded[start..start + source_len].to_vec())
}
