// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! String splitter (C13): split at a literal separator, used to parse the
//! `format$iv$ct$mac` token grammar.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Splits `s` at every non-overlapping occurrence of `sep`.
///
/// `None` input yields `None`. An empty `s` yields an empty vector. An empty
/// `sep` (with non-empty `s`) yields a single-element vector containing `s`
/// unchanged (there is nothing to split on). Empty segments between adjacent
/// separators, and at the string boundaries, are preserved.
pub fn split(s: Option<&str>, sep: &str) -> Option<Vec<String>> {
    let s = s?;

    if s.is_empty() {
        return Some(Vec::new());
    }

    if sep.is_empty() {
        return Some(alloc::vec![s.to_string()]);
    }

    Some(s.split(sep).map(|part| part.to_string()).collect())
}
