// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error type for the encryption engine.
//!
//! Every variant's `Display` message is part of the external contract: a
//! caller that surfaces these as text must see exactly these strings, not an
//! approximation of them.

/// Everything that can go wrong constructing, operating, or decoding through
/// the engine.
///
/// Grouped informally into configuration, format, authentication, structural,
/// and lifecycle failures; kept as one flat enum (rather than nested error
/// types per group) so call sites can propagate with a single `?`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    // --- configuration ---
    /// HMAC key argument was absent.
    #[error("HMAC key is null")]
    HmacKeyIsNull,
    /// HMAC key shorter than the 14-byte floor.
    #[error("HMAC key length is less than 14")]
    HmacKeyTooShort,
    /// HMAC key longer than the 32-byte ceiling.
    #[error("HMAC key length is larger than 32")]
    HmacKeyTooLong,
    /// Key-file path argument was absent.
    #[error("Key file path is null")]
    KeyFilePathIsNull,
    /// Key-file path could not be interpreted.
    #[error("Key file path is invalid: {0}")]
    KeyFilePathInvalid(alloc::string::String),
    /// Key-file path does not refer to an existing file.
    #[error("{0} does not exist")]
    KeyFileDoesNotExist(alloc::string::String),
    /// The `i`-th (1-indexed) key-file source blob was absent.
    #[error("{index}. source byte array is null")]
    SourceByteArrayIsNull {
        /// 1-indexed position of the null blob.
        index: usize,
    },
    /// Concatenated key-file blobs fall short of the 100 000-byte floor.
    #[error("not enough information provided in source bytes")]
    NotEnoughSourceBytes,

    // --- format ---
    /// Token did not split into exactly four `$`-separated parts.
    #[error("Number of '$' separated parts in encrypted text is not 4")]
    WrongPartCount,
    /// Format identifier field was not a decimal integer.
    #[error("Invalid format id")]
    InvalidFormatId,
    /// Format identifier was numeric but not one this engine accepts.
    #[error("Unknown format id")]
    UnknownFormatId,

    // --- authentication ---
    /// Recomputed MAC did not match the token's MAC field.
    #[error("Checksum does not match data")]
    ChecksumMismatch,

    // --- structural ---
    /// Decoded payload failed a blinding/padding structural invariant.
    #[error("Invalid blinded byte array")]
    InvalidBlindedByteArray,
    /// A text field failed strict UTF-8 decoding.
    #[error("Invalid UTF-8 sequence")]
    InvalidUtf8,
    /// A Base32/Base64 field contained a character outside its alphabet.
    #[error("Invalid encoded field")]
    InvalidEncoding,

    // --- lifecycle ---
    /// Operation attempted after `close()`.
    #[error("Engine has been closed")]
    Closed,
}
