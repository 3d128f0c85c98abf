//! Capacity growth policy for array-backed storage.
//!
//! Growth is geometric: each reallocation grows the store by half of its
//! current capacity, which keeps appends amortized O(1). The result is
//! raised to the caller's minimum when half-growth is not enough and clamped
//! to the largest capacity the element type can address.
//!
//! # Examples
//!
//! ```rust
//! use strata::growth::next_capacity;
//!
//! assert_eq!(next_capacity(10, 11), Ok(15));
//! assert_eq!(next_capacity(10, 40), Ok(40));
//! ```

use crate::error::CapacityOverflow;

/// Largest capacity any container will request.
pub const MAX_CAPACITY: usize = isize::MAX as usize;

/// Computes the next capacity for a store of `current` slots that must hold
/// at least `minimum` elements, never exceeding `maximum`.
///
/// # Errors
///
/// Returns [`CapacityOverflow`] when `minimum` is larger than `maximum`.
///
/// # Examples
///
/// ```rust
/// use strata::growth::grow_capacity;
///
/// assert_eq!(grow_capacity(100, 101, 1000), Ok(150));
/// assert_eq!(grow_capacity(900, 901, 1000), Ok(1000));
/// assert!(grow_capacity(900, 1001, 1000).is_err());
/// ```
pub const fn grow_capacity(
    current: usize,
    minimum: usize,
    maximum: usize,
) -> Result<usize, CapacityOverflow> {
    if minimum > maximum {
        return Err(CapacityOverflow {
            required: minimum,
            maximum,
        });
    }
    let grown = current.saturating_add(current >> 1);
    let grown = if grown < minimum { minimum } else { grown };
    Ok(if grown > maximum { maximum } else { grown })
}

/// [`grow_capacity`] bounded by [`MAX_CAPACITY`].
///
/// # Errors
///
/// Returns [`CapacityOverflow`] when `minimum` exceeds [`MAX_CAPACITY`].
#[inline]
pub const fn next_capacity(current: usize, minimum: usize) -> Result<usize, CapacityOverflow> {
    grow_capacity(current, minimum, MAX_CAPACITY)
}

/// Largest element count a contiguous store of `T` can address.
#[must_use]
pub const fn max_capacity_for<T>() -> usize {
    let size = std::mem::size_of::<T>();
    if size == 0 {
        usize::MAX
    } else {
        MAX_CAPACITY / size
    }
}

/// Adds `additional` to `length`, reporting arithmetic overflow as a
/// [`CapacityOverflow`].
///
/// # Errors
///
/// Returns [`CapacityOverflow`] when the sum does not fit in `usize`.
#[inline]
pub const fn required_capacity(
    length: usize,
    additional: usize,
) -> Result<usize, CapacityOverflow> {
    match length.checked_add(additional) {
        Some(required) => Ok(required),
        None => Err(CapacityOverflow {
            required: usize::MAX,
            maximum: MAX_CAPACITY,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1, 1)]
    #[case(10, 11, 15)]
    #[case(15, 16, 22)]
    #[case(1, 2, 2)]
    #[case(4, 100, 100)]
    fn test_grow_capacity_is_geometric(
        #[case] current: usize,
        #[case] minimum: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(next_capacity(current, minimum), Ok(expected));
    }

    #[rstest]
    fn test_grow_capacity_clamps_to_maximum() {
        assert_eq!(grow_capacity(80, 81, 100), Ok(100));
    }

    #[rstest]
    fn test_grow_capacity_rejects_minimum_above_maximum() {
        assert_eq!(
            grow_capacity(80, 101, 100),
            Err(CapacityOverflow {
                required: 101,
                maximum: 100
            })
        );
    }

    #[rstest]
    fn test_grow_capacity_saturates_instead_of_wrapping() {
        assert_eq!(grow_capacity(usize::MAX - 1, usize::MAX, usize::MAX), Ok(usize::MAX));
    }

    #[rstest]
    fn test_required_capacity_overflow() {
        assert!(required_capacity(usize::MAX, 1).is_err());
        assert_eq!(required_capacity(3, 4), Ok(7));
    }

    #[rstest]
    fn test_max_capacity_for_sizes() {
        assert_eq!(max_capacity_for::<()>(), usize::MAX);
        assert_eq!(max_capacity_for::<u64>(), MAX_CAPACITY / 8);
    }
}
