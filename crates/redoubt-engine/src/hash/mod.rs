// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-SHA256, the single cryptographic hash primitive this crate needs:
//! the key-file digester (C9), split-key derivation (C10), and the token MAC
//! (C11) are all single HMAC-SHA256 calls.

mod hmac;
mod sha256;

pub(crate) use hmac::hmac_sha256;
