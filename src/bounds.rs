//! Positional argument checks.

use crate::error::CollectionError;

/// Checks that `index` addresses an existing element (`0 <= index < length`).
///
/// # Errors
///
/// Returns [`CollectionError::IndexOutOfBounds`] otherwise.
#[inline]
pub const fn check_index(index: usize, length: usize) -> Result<(), CollectionError> {
    if index < length {
        Ok(())
    } else {
        Err(CollectionError::IndexOutOfBounds { index, length })
    }
}

/// Checks that `index` is a valid insertion point (`0 <= index <= length`).
///
/// # Errors
///
/// Returns [`CollectionError::IndexOutOfBounds`] otherwise.
#[inline]
pub const fn check_position(index: usize, length: usize) -> Result<(), CollectionError> {
    if index <= length {
        Ok(())
    } else {
        Err(CollectionError::IndexOutOfBounds { index, length })
    }
}
