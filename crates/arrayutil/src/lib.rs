// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Generic helpers for caller-owned buffers: broadcast a value into a
//! buffer, and print a buffer as a bracketed line.
//!
//! Buffers are passed as `Option<&[T]>` / `Option<&mut [T]>` together with an
//! element count. `None` stands for an absent buffer and turns every
//! operation into a silent no-op.
//!
//! # Example
//!
//! ```
//! use arrayutil::{initialize, render_string};
//!
//! let mut buf = [0i32; 3];
//! initialize(Some(&mut buf[..]), 7, 3);
//! assert_eq!(render_string(Some(&buf[..]), 3), "[ 7 7 7 ]\n");
//! ```
//!
//! # Features
//!
//! - `std` (default): stdout and `io::Write` rendering (`render`,
//!   `try_render`, `write_rendered`). Without it the crate is `no_std`.
//!
//! ## License
//!
//! GPL-3.0-only

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod init;
mod render;

pub use error::ArrayError;
pub use init::{fill, initialize, try_initialize};
pub use render::{Bracketed, bracketed, render_string, render_to};

#[cfg(feature = "std")]
pub use render::{render, try_render, write_rendered};
