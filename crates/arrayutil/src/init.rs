// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::ArrayError;

/// Writes `value` into each of the first `count` elements of `buffer`.
///
/// An absent buffer (`None`) is a silent no-op, whatever `count` is.
/// Elements past `count` are left untouched. No allocation is performed and
/// repeated calls with the same arguments leave the buffer in the same state.
///
/// # Panics
///
/// Panics if `count > buffer.len()`. The range is checked before any element
/// is written. Use [`try_initialize`] to get an error instead.
///
/// # Example
///
/// ```
/// use arrayutil::initialize;
///
/// let mut buf = [0i32; 5];
/// initialize(Some(&mut buf[..]), 7, 3);
/// assert_eq!(buf, [7, 7, 7, 0, 0]);
///
/// // Absent buffer: nothing happens
/// initialize::<i32>(None, 7, 3);
/// ```
#[inline]
pub fn initialize<T: Clone>(buffer: Option<&mut [T]>, value: T, count: usize) {
    let Some(buffer) = buffer else {
        return;
    };

    buffer[..count].fill(value);
}

/// Fallible version of [`initialize`].
///
/// Returns [`ArrayError::CountOutOfBounds`] if `count > buffer.len()`, in
/// which case the buffer is left unchanged. An absent buffer is `Ok(())`.
///
/// # Example
///
/// ```
/// use arrayutil::{try_initialize, ArrayError};
///
/// let mut buf = [1u8, 2, 3];
/// try_initialize(Some(&mut buf[..]), 0xAB, 2).unwrap();
/// assert_eq!(buf, [0xAB, 0xAB, 3]);
///
/// let err = try_initialize(Some(&mut buf[..]), 0, 4).unwrap_err();
/// assert!(matches!(err, ArrayError::CountOutOfBounds { count: 4, len: 3 }));
/// assert_eq!(buf, [0xAB, 0xAB, 3]);
/// ```
#[inline]
pub fn try_initialize<T: Clone>(
    buffer: Option<&mut [T]>,
    value: T,
    count: usize,
) -> Result<(), ArrayError> {
    let Some(buffer) = buffer else {
        return Ok(());
    };

    let len = buffer.len();
    buffer
        .get_mut(..count)
        .ok_or_else(|| ArrayError::out_of_bounds(count, len))?
        .fill(value);

    Ok(())
}

/// Writes `value` into every element of `slice`.
///
/// # Example
///
/// ```
/// use arrayutil::fill;
///
/// let mut words = vec![String::new(); 3];
/// fill(&mut words, String::from("x"));
/// assert!(words.iter().all(|w| w == "x"));
/// ```
#[inline]
pub fn fill<T: Clone>(slice: &mut [T], value: T) {
    let count = slice.len();
    initialize(Some(slice), value, count);
}
