//! Error types shared by every container.
//!
//! All failures surface directly to the caller; nothing is retried or
//! swallowed inside the library. Operations with a "probe" flavour
//! (`poll_first`, `peek_last`, `offer_first`, map `get`) report absence with
//! `Option`/`bool` instead of an error.

use thiserror::Error;

/// Returned when a capacity computation cannot be satisfied.
///
/// # Examples
///
/// ```rust
/// use strata::growth::grow_capacity;
///
/// let error = grow_capacity(8, 100, 64).unwrap_err();
/// assert_eq!(error.required, 100);
/// assert_eq!(error.maximum, 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("required capacity {required} exceeds the maximum of {maximum}")]
pub struct CapacityOverflow {
    /// The capacity that was requested.
    pub required: usize,
    /// The largest capacity the container can address.
    pub maximum: usize,
}

/// Errors raised by collection operations and cursors.
///
/// # Examples
///
/// ```rust
/// use strata::CollectionError;
///
/// let error = CollectionError::IndexOutOfBounds { index: 3, length: 2 };
/// assert_eq!(error.to_string(), "index 3 out of bounds for length 2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// The container does not supply the primitive this operation needs.
    #[error("unsupported operation: {operation}")]
    Unsupported {
        /// Name of the operation that was attempted.
        operation: &'static str,
    },

    /// A positional argument fell outside the valid range.
    #[error("index {index} out of bounds for length {length}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The container length at the time of the call.
        length: usize,
    },

    /// An asserting accessor found nothing to return.
    #[error("no such element")]
    NoSuchElement,

    /// A cursor mutator was called without a preceding `next`/`previous`.
    #[error("illegal state: {reason}")]
    IllegalState {
        /// Why the call was rejected.
        reason: &'static str,
    },

    /// The container changed structurally outside an active cursor.
    ///
    /// This is a best-effort diagnostic, not a concurrency guarantee.
    #[error("concurrent modification detected")]
    ConcurrentModification,

    /// A container could not grow any further.
    #[error(transparent)]
    CapacityOverflow(#[from] CapacityOverflow),

    /// A construction parameter was rejected.
    #[error("illegal argument: {reason}")]
    IllegalArgument {
        /// Why the argument was rejected.
        reason: &'static str,
    },
}

impl CollectionError {
    /// Shorthand for [`CollectionError::Unsupported`].
    #[inline]
    #[must_use]
    pub const fn unsupported(operation: &'static str) -> Self {
        Self::Unsupported { operation }
    }

    /// Shorthand for [`CollectionError::IllegalState`].
    #[inline]
    #[must_use]
    pub const fn illegal_state(reason: &'static str) -> Self {
        Self::IllegalState { reason }
    }
}
