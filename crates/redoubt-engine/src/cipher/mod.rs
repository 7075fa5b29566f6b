// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Block cipher primitives backing C11: a from-scratch AES-256 forward
//! cipher, its CTR-mode application (format 6), and CFB8 decryption kept for
//! legacy format-3 tokens.

pub(crate) mod aes;
pub(crate) mod cfb8;
pub(crate) mod ctr;

pub(crate) use aes::Aes256;
