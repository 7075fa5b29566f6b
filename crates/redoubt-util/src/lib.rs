// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Low-level memory and encoding helpers shared across the Redoubt crates.
//!
//! Nothing here is cryptographically interesting by itself: it is the set of
//! small, easy-to-get-wrong primitives (constant-time compare, bulk
//! zeroization, slice splitting) that the higher-level crates build on.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use core::sync::atomic::{Ordering, compiler_fence};

/// Compares two byte slices in constant time.
///
/// Returns `false` immediately on length mismatch (length is not secret in
/// this crate's use cases); otherwise every byte is compared and XORed into
/// an accumulator so early bytes never short-circuit the comparison.
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    compiler_fence(Ordering::SeqCst);
    diff == 0
}

/// Decodes a hex string into bytes.
///
/// Accepts upper- or lower-case hex digits. Panics on an odd-length input
/// or a non-hex character; this is a test/debug helper, not a parser for
/// untrusted input.
pub fn hex_to_bytes(s: &str) -> Vec<u8> {
    assert!(s.len() % 2 == 0, "hex string must have even length");

    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len() / 2);
    let mut i = 0;
    while i < bytes.len() {
        let hi = hex_digit(bytes[i]);
        let lo = hex_digit(bytes[i + 1]);
        out.push((hi << 4) | lo);
        i += 2;
    }
    out
}

fn hex_digit(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => panic!("invalid hex character: {}", b as char),
    }
}

/// Splits a mutable slice into `(&mut [..mid], &mut [mid..])`, returning
/// `None` instead of panicking when `mid > slice.len()`.
pub fn try_split_at_mut<T>(slice: &mut [T], mid: usize) -> Option<(&mut [T], &mut [T])> {
    if mid > slice.len() {
        return None;
    }
    Some(slice.split_at_mut(mid))
}

/// Zeroizes every element of a slice via a raw bulk write.
///
/// # Safety contract
///
/// Only sound to call on slices of types whose all-zero bit pattern is
/// valid (primitives). Callers in this crate family gate this behind
/// `T::CAN_BE_BULK_ZEROIZED`.
#[inline]
pub fn fast_zeroize_slice<T>(slice: &mut [T]) {
    unsafe {
        core::ptr::write_bytes(slice.as_mut_ptr(), 0, slice.len());
    }
    compiler_fence(Ordering::SeqCst);
}

/// Zeroizes a `Vec`'s entire backing allocation, including spare capacity.
///
/// Unlike [`fast_zeroize_slice`], this also wipes bytes beyond `len()` up to
/// `capacity()`, since a `Vec` that shrank via `truncate` still carries old
/// bytes there.
#[inline]
pub fn fast_zeroize_vec<T>(vec: &mut Vec<T>) {
    let cap = vec.capacity();
    if cap > 0 {
        unsafe {
            core::ptr::write_bytes(vec.as_mut_ptr(), 0, cap);
        }
        compiler_fence(Ordering::SeqCst);
    }
}

/// Returns whether a byte slice is all zero.
pub fn is_slice_zeroized(data: &[u8]) -> bool {
    data.iter().all(|&b| b == 0)
}

/// Returns whether a `Vec`'s full backing allocation (elements and spare
/// capacity) is all zero.
pub fn is_vec_fully_zeroized<T>(vec: &Vec<T>) -> bool {
    let cap = vec.capacity();
    if cap == 0 {
        return true;
    }
    let byte_len = cap * core::mem::size_of::<T>();
    let ptr = vec.as_ptr() as *const u8;
    let bytes = unsafe { core::slice::from_raw_parts(ptr, byte_len) };
    bytes.iter().all(|&b| b == 0)
}
