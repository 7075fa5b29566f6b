// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Split-key authenticated encryption engine.
//!
//! Turns a clear UTF-8 string plus a caller-supplied subject label into a
//! self-describing versioned token, and inverts that token back to the clear
//! string given the same key material and subject. A mismatched subject,
//! tampered token, or altered key material is detected before any plaintext
//! is returned.
//!
//! This crate holds the core engine (key-file digestion, split-key
//! derivation, blinding/padding, AES-CTR, HMAC authentication, and token
//! encode/decode). The public, resource-scoped façade lives one layer up in
//! `redoubt`.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod base32;
mod blinding;
mod chars;
mod cipher;
mod digest;
mod engine;
mod error;
mod hash;
mod keyderive;
mod padding;
mod protected;
mod prng;
mod secret_key;
mod splitter;
mod varint;

pub use digest::{digest_key_file, HMAC_KEY_MAX_LEN, HMAC_KEY_MIN_LEN, MIN_TOTAL_SOURCE_BYTES};
pub use engine::{decrypt, encrypt, CURRENT_FORMAT_ID};
pub use error::EngineError;
pub use protected::ProtectedByteArray;
pub use secret_key::SecretKey;
pub use splitter::split;

pub use prng::{RawGenerator, SplitMix64, Xoroshiro128PlusPlus};

pub use varint::{from_packed, to_packed, MAX_VALUE as MAX_PACKED_VALUE};

pub use blinding::{blind, unblind, MAX_MINIMUM_LENGTH as MAX_BLINDING_MINIMUM_LENGTH};
pub use chars::{chars_to_utf8, utf8_to_chars};
pub use padding::{add_padding, remove_padding, MAX_PADDING_CEILING};

pub use base32::{decode as base32_decode, encode as base32_encode};
