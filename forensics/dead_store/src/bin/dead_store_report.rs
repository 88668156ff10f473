// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Scrubs C heap buffers right before `free()` and checks, through a
//! separate volatile scan, that the zeroing really happened.
//!
//! Build with `--release` to give the optimizer every chance to drop the
//! stores: `cargo run --release -p memzero-forensics --bin dead_store_report`.

use std::hint::black_box;
use std::process::ExitCode;

use libc::{c_char, c_void};
use memzero::{is_region_zeroed, memzero, strzero};

const PATTERN: u8 = 0xAA;
const SIZES: [usize; 5] = [1, 7, 64, 4_096, 1 << 20];
const PASSWORD: &std::ffi::CStr = c"correct horse battery staple";

/// Outcome of one scrub-then-free cycle.
struct Check {
    name: String,
    len: usize,
    residue: usize,
}

/// Number of non-zero bytes left in `len` bytes at `ptr`.
///
/// The clean case is a single [`is_region_zeroed`] pass; bytes are only
/// counted when it fails.
///
/// # Safety
///
/// `ptr` must be valid for reads of `len` initialized bytes.
#[inline(never)]
unsafe fn residue(ptr: *const u8, len: usize) -> usize {
    if unsafe { is_region_zeroed(ptr, len) } {
        return 0;
    }

    (0..len)
        .filter(|&i| !unsafe { is_region_zeroed(ptr.add(i), 1) })
        .count()
}

/// Fills a fresh malloc block, zeroes it, inspects it, frees it.
#[inline(never)]
fn scrub_malloc_block(len: usize) -> Option<Check> {
    unsafe {
        let ptr = libc::malloc(len);
        if ptr.is_null() {
            return None;
        }

        libc::memset(ptr, PATTERN as i32, len);
        let ptr = black_box(ptr);

        memzero(ptr, len);

        // The program never reads the block again; this scan is the only
        // observer, run just before the block is released.
        let left = residue(ptr.cast::<u8>(), len);

        libc::free(ptr);

        Some(Check {
            name: format!("memzero(malloc({len}))"),
            len,
            residue: left,
        })
    }
}

/// Duplicates a password with `strdup`, zeroes it, inspects it, frees it.
#[inline(never)]
fn scrub_strdup_password() -> Option<Check> {
    unsafe {
        let s: *mut c_char = libc::strdup(PASSWORD.as_ptr());
        if s.is_null() {
            return None;
        }
        let len = libc::strlen(s);
        let s = black_box(s);

        strzero(s);

        // Content plus terminator.
        let left = residue(s.cast::<u8>(), len + 1);

        libc::free(s.cast::<c_void>());

        Some(Check {
            name: format!("strzero(strdup(<{len} byte password>))"),
            len: len + 1,
            residue: left,
        })
    }
}

fn main() -> ExitCode {
    println!("[*] memzero dead-store forensics");
    println!("[*] Pattern: 0x{PATTERN:02X}, checks run right before free()");
    println!();

    let mut checks = Vec::new();

    for len in SIZES {
        match scrub_malloc_block(len) {
            Some(check) => checks.push(check),
            None => println!("[!] malloc({len}) failed, skipping"),
        }
    }

    match scrub_strdup_password() {
        Some(check) => checks.push(check),
        None => println!("[!] strdup failed, skipping"),
    }

    let mut failures = 0;
    for check in &checks {
        if check.residue == 0 {
            println!("[+] {}: {} bytes clean", check.name, check.len);
        } else {
            failures += 1;
            println!(
                "[!] {}: {} of {} bytes survived",
                check.name, check.residue, check.len
            );
        }
    }

    println!();
    if failures == 0 {
        println!("[+] All {} checks clean", checks.len());
        ExitCode::SUCCESS
    } else {
        println!("[!] {failures} of {} checks left residue", checks.len());
        ExitCode::FAILURE
    }
}
