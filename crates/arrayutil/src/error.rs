// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for arrayutil.

use thiserror::Error;

/// Errors returned by the checked buffer operations.
///
/// The unchecked operations ([`initialize`](crate::initialize),
/// [`render`](crate::render)) never return these; they panic on an
/// out-of-range count and ignore sink failures.
#[derive(Debug, Error)]
pub enum ArrayError {
    /// The requested count exceeds the number of elements in the buffer.
    #[error("count {count} exceeds buffer length {len}")]
    CountOutOfBounds {
        /// Number of elements the caller asked for.
        count: usize,
        /// Number of elements actually reachable through the buffer.
        len: usize,
    },

    /// A `core::fmt::Write` sink rejected the output.
    #[error("formatter error")]
    Fmt(#[from] core::fmt::Error),

    /// An `std::io::Write` sink rejected the output.
    #[cfg(feature = "std")]
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ArrayError {
    pub(crate) fn out_of_bounds(count: usize, len: usize) -> Self {
        Self::CountOutOfBounds { count, len }
    }
}
