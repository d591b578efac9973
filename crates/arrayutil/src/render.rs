// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Bracketed text rendering of buffers.
//!
//! Every element is followed by a single space, so the rendered form of
//! `[1, 2, 3]` is `[ 1 2 3 ]` and an empty buffer renders as `[ ]`.

use alloc::string::String;
use core::fmt;

use crate::error::ArrayError;

/// `Display` adapter rendering a slice as `[ e0 e1 ... ]` (no newline).
#[derive(Debug, Clone, Copy)]
pub struct Bracketed<'a, T>(&'a [T]);

impl<'a, T> Bracketed<'a, T> {
    /// Returns the wrapped slice.
    pub fn as_slice(&self) -> &'a [T] {
        self.0
    }
}

impl<T: fmt::Display> fmt::Display for Bracketed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        for element in self.0 {
            write!(f, "{element} ")?;
        }
        f.write_str("]")
    }
}

/// Wraps `slice` in a [`Bracketed`] adapter.
///
/// # Example
///
/// ```
/// use arrayutil::bracketed;
///
/// assert_eq!(bracketed(&[1, 2, 3]).to_string(), "[ 1 2 3 ]");
/// assert_eq!(bracketed::<u8>(&[]).to_string(), "[ ]");
/// ```
#[inline]
pub fn bracketed<T>(slice: &[T]) -> Bracketed<'_, T> {
    Bracketed(slice)
}

fn checked_head<T>(buffer: &[T], count: usize) -> Result<&[T], ArrayError> {
    buffer
        .get(..count)
        .ok_or_else(|| ArrayError::out_of_bounds(count, buffer.len()))
}

fn line<T: fmt::Display>(head: &[T]) -> String {
    use fmt::Write;

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", Bracketed(head));
    out
}

/// Writes the rendered line for the first `count` elements, newline included,
/// into a `fmt::Write` sink.
///
/// An absent buffer writes nothing. If `count > buffer.len()` nothing is
/// written and [`ArrayError::CountOutOfBounds`] is returned.
///
/// # Example
///
/// ```
/// use arrayutil::render_to;
///
/// let mut out = String::new();
/// render_to(&mut out, Some(&[1, 2, 3][..]), 3).unwrap();
/// assert_eq!(out, "[ 1 2 3 ]\n");
/// ```
pub fn render_to<W, T>(out: &mut W, buffer: Option<&[T]>, count: usize) -> Result<(), ArrayError>
where
    W: fmt::Write + ?Sized,
    T: fmt::Display,
{
    let Some(buffer) = buffer else {
        return Ok(());
    };

    let head = checked_head(buffer, count)?;
    writeln!(out, "{}", Bracketed(head))?;

    Ok(())
}

/// Returns the rendered line for the first `count` elements, newline
/// included. An absent buffer yields an empty string.
///
/// # Panics
///
/// Panics if `count > buffer.len()`.
///
/// # Example
///
/// ```
/// use arrayutil::render_string;
///
/// assert_eq!(render_string(Some(&[1.5f32, 2.0][..]), 2), "[ 1.5 2 ]\n");
/// assert_eq!(render_string::<u8>(None, 4), "");
/// ```
pub fn render_string<T: fmt::Display>(buffer: Option<&[T]>, count: usize) -> String {
    match buffer {
        Some(buffer) => line(&buffer[..count]),
        None => String::new(),
    }
}

/// Writes the rendered line for the first `count` elements into an
/// `io::Write` sink with a single `write_all`.
///
/// An absent buffer writes nothing. If `count > buffer.len()` nothing is
/// written and [`ArrayError::CountOutOfBounds`] is returned.
#[cfg(feature = "std")]
pub fn write_rendered<W, T>(
    out: &mut W,
    buffer: Option<&[T]>,
    count: usize,
) -> Result<(), ArrayError>
where
    W: std::io::Write + ?Sized,
    T: fmt::Display,
{
    let Some(buffer) = buffer else {
        return Ok(());
    };

    let head = checked_head(buffer, count)?;
    out.write_all(line(head).as_bytes())?;

    Ok(())
}

/// Prints the first `count` elements of `buffer` to standard output as one
/// line of the form `[ e0 e1 ... ]`.
///
/// An absent buffer prints nothing. The line is written through a single
/// locked `write_all`, so lines from concurrent callers never interleave.
/// Failures to write to standard output are ignored; use [`try_render`] to
/// observe them.
///
/// # Panics
///
/// Panics if `count > buffer.len()`, before anything is printed.
///
/// # Example
///
/// ```
/// use arrayutil::{initialize, render};
///
/// let mut buf = [0i32; 3];
/// initialize(Some(&mut buf[..]), 7, 3);
/// render(Some(&buf[..]), 3); // prints "[ 7 7 7 ]"
/// ```
#[cfg(feature = "std")]
pub fn render<T: fmt::Display>(buffer: Option<&[T]>, count: usize) {
    use std::io::Write;

    let Some(buffer) = buffer else {
        return;
    };

    let rendered = line(&buffer[..count]);
    let _ = std::io::stdout().lock().write_all(rendered.as_bytes());
}

/// Fallible version of [`render`].
#[cfg(feature = "std")]
pub fn try_render<T: fmt::Display>(buffer: Option<&[T]>, count: usize) -> Result<(), ArrayError> {
    write_rendered(&mut std::io::stdout().lock(), buffer, count)
}
