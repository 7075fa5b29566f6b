// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Arbitrary tail padding (C6): append a random count of a single random
//! byte distinct from the last data byte, removable by a longest-maximal-run
//! scan from the end.

use alloc::vec::Vec;

use redoubt_rand::{fill_with_random_bytes, random_below};

use crate::error::EngineError;

/// Hard ceiling on `max` (and therefore on `min`).
pub const MAX_PADDING_CEILING: usize = 10_000;

/// Appends between `min` and `max` (inclusive, uniformly chosen) copies of a
/// single byte drawn uniformly at random from the 255 values different from
/// `data`'s last byte.
///
/// Empty `data` is returned unchanged: picking a pad byte "distinct from the
/// last data byte" requires at least one data byte, so empty inputs must be
/// blinded (C7) before padding.
pub fn add_padding(data: &[u8], min: usize, max: usize) -> Result<Vec<u8>, EngineError> {
    if min > max || max > MAX_PADDING_CEILING {
        return Err(EngineError::InvalidBlindedByteArray);
    }

    if data.is_empty() {
        return Ok(Vec::new());
    }

    let last = data[data.len() - 1];
    let pad_byte = random_pad_byte(last)?;

    let span = (max - min) as u64 + 1;
    let count = min + random_below(span).map_err(|_| EngineError::InvalidBlindedByteArray)? as usize;

    let mut out = Vec::with_capacity(data.len() + count);
    out.extend_from_slice(data);
    out.resize(data.len() + count, pad_byte);
    Ok(out)
}

fn random_pad_byte(exclude: u8) -> Result<u8, EngineError> {
    loop {
        let mut b = [0u8; 1];
        fill_with_random_bytes(&mut b).map_err(|_| EngineError::InvalidBlindedByteArray)?;
        if b[0] != exclude {
            return Ok(b[0]);
        }
    }
}

/// Removes the trailing run of the final byte, identified by scanning from
/// the end for the longest maximal run equal to `padded`'s last byte.
///
/// If the entire buffer is one repeated byte, the result is empty.
pub fn remove_padding(padded: &[u8]) -> Vec<u8> {
    if padded.is_empty() {
        return Vec::new();
    }

    let last = padded[padded.len() - 1];
    let mut cut = padded.len();
    while cut > 0 && padded[cut - 1] == last {
        cut -= 1;
    }

    padded[..cut].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_byte_differs_from_last_data_byte() {
        let data = [0xAAu8; 8];
        for _ in 0..50 {
            let padded = add_padding(&data, 4, 4).unwrap();
            assert_eq!(padded.len(), 12);
            assert_ne!(padded[8], 0xAA);
            assert!(padded[8..].iter().all(|&b| b == padded[8]));
        }
    }

    #[test]
    fn round_trip() {
        let data = b"some arbitrary plaintext block!";
        for _ in 0..20 {
            let padded = add_padding(data, 1, 32).unwrap();
            assert!(padded.len() >= data.len() + 1);
            assert!(padded.len() <= data.len() + 32);
            assert_eq!(remove_padding(&padded), data);
        }
    }

    #[test]
    fn all_repeated_byte_removes_to_empty() {
        let buf = [0x7Fu8; 10];
        assert!(remove_padding(&buf).is_empty());
    }

    #[test]
    fn empty_input_returned_unchanged() {
        assert!(add_padding(&[], 1, 4).unwrap().is_empty());
        assert!(remove_padding(&[]).is_empty());
    }

    #[test]
    fn rejects_bad_bounds() {
        assert!(add_padding(b"x", 5, 1).is_err());
        assert!(add_padding(b"x", 0, MAX_PADDING_CEILING + 1).is_err());
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn roundtrips_any_nonempty_data(
            data in prop::collection::vec(any::<u8>(), 1..256),
            min in 0..64usize,
            extra in 0..64usize,
        ) {
            let max = min + extra;
            let padded = add_padding(&data, min, max).unwrap();
            prop_assert!(padded.len() >= data.len() + min);
            prop_assert!(padded.len() <= data.len() + max);
            prop_assert_eq!(remove_padding(&padded), data);
        }
    }
}
