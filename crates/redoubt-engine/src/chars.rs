// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Character/byte conversion (C4): strict UTF-8 encode/decode with
//! zeroized intermediates. No lossy replacement of ill-formed input.

use alloc::string::String;
use alloc::vec::Vec;

use redoubt_util::fast_zeroize_vec;

use crate::error::EngineError;

/// Encodes a string into UTF-8 bytes, consuming and zeroizing the source.
pub fn chars_to_utf8(mut chars: String) -> Vec<u8> {
    let bytes = core::mem::take(&mut chars).into_bytes();
    // `chars` itself is now empty; there is nothing left to wipe in its
    // former backing storage since `into_bytes` moved the allocation into
    // `bytes` rather than copying it.
    bytes
}

/// Strictly decodes UTF-8 bytes into a string, zeroizing the source buffer
/// regardless of outcome.
///
/// Unlike `String::from_utf8_lossy`, malformed sequences are never replaced
/// with U+FFFD: any invalid byte sequence is a hard decoding error.
pub fn utf8_to_chars(mut bytes: Vec<u8>) -> Result<String, EngineError> {
    let result = core::str::from_utf8(&bytes)
        .map(String::from)
        .map_err(|_| EngineError::InvalidUtf8);
    fast_zeroize_vec(&mut bytes);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_ascii() {
        let bytes = chars_to_utf8(String::from("hello"));
        assert_eq!(bytes, b"hello");
        assert_eq!(utf8_to_chars(bytes).unwrap(), "hello");
    }

    #[test]
    fn round_trips_multibyte() {
        let s = String::from("This#\"s?a§StR4nGé€PàS!Wörd9");
        let bytes = chars_to_utf8(s.clone());
        assert_eq!(utf8_to_chars(bytes).unwrap(), s);
    }

    #[test]
    fn rejects_malformed_utf8() {
        let bytes = alloc::vec![0xFF, 0xFE, 0xFD];
        assert_eq!(utf8_to_chars(bytes).unwrap_err(), EngineError::InvalidUtf8);
    }

    #[test]
    fn empty_string_round_trips() {
        let bytes = chars_to_utf8(String::new());
        assert!(bytes.is_empty());
        assert_eq!(utf8_to_chars(bytes).unwrap(), "");
    }
}
