//! Construction parameters for hash containers.
//!
//! # Examples
//!
//! ```rust
//! use strata::config::{HashMapConfig, ResizePolicy};
//!
//! let config = HashMapConfig::new().initial_capacity(100).load_factor(0.5);
//! assert_eq!(config.bucket_count(), 128);
//! assert_eq!(config.resize_policy(), ResizePolicy::LoadFactor(0.5));
//! assert!(config.validate().is_ok());
//!
//! let fixed = HashMapConfig::new().initial_capacity(8).fixed_buckets();
//! assert_eq!(fixed.threshold(fixed.bucket_count()), usize::MAX);
//! ```

use crate::error::CollectionError;

/// Bucket count used when no capacity is requested.
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Load factor used when none is requested.
pub const DEFAULT_LOAD_FACTOR: f32 = 0.75;

/// Largest bucket count a table will grow to.
pub const MAXIMUM_BUCKETS: usize = 1 << 30;

/// When a hash table grows its bucket array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizePolicy {
    /// Double the buckets once `len > buckets * factor`.
    LoadFactor(f32),
    /// Keep the bucket count chosen at construction; chains grow instead.
    Fixed,
}

/// Builder for hash map construction parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HashMapConfig {
    initial_capacity: usize,
    resize: ResizePolicy,
}

impl HashMapConfig {
    /// Default configuration: 16 buckets, load factor 0.75.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            resize: ResizePolicy::LoadFactor(DEFAULT_LOAD_FACTOR),
        }
    }

    /// Requests room for `capacity` buckets, rounded up to a power of two.
    #[must_use]
    pub const fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Resizes once the entry count exceeds `factor` times the bucket count.
    #[must_use]
    pub const fn load_factor(mut self, factor: f32) -> Self {
        self.resize = ResizePolicy::LoadFactor(factor);
        self
    }

    /// Never resizes; the bucket count stays at its initial value.
    #[must_use]
    pub const fn fixed_buckets(mut self) -> Self {
        self.resize = ResizePolicy::Fixed;
        self
    }

    /// The configured resize policy.
    #[must_use]
    pub const fn resize_policy(&self) -> ResizePolicy {
        self.resize
    }

    /// Checks the load factor is finite and positive.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IllegalArgument`] otherwise.
    pub fn validate(&self) -> Result<(), CollectionError> {
        match self.resize {
            ResizePolicy::LoadFactor(factor) if !(factor.is_finite() && factor > 0.0) => {
                Err(CollectionError::IllegalArgument {
                    reason: "load factor must be finite and positive",
                })
            }
            _ => Ok(()),
        }
    }

    /// Initial bucket count: the requested capacity rounded up to a power of
    /// two, at least 1 and at most [`MAXIMUM_BUCKETS`].
    #[must_use]
    pub const fn bucket_count(&self) -> usize {
        bucket_count_for(self.initial_capacity)
    }

    /// Entry count above which a table of `buckets` buckets must grow.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn threshold(&self, buckets: usize) -> usize {
        match self.resize {
            ResizePolicy::Fixed => usize::MAX,
            ResizePolicy::LoadFactor(_) if buckets >= MAXIMUM_BUCKETS => usize::MAX,
            ResizePolicy::LoadFactor(factor) => (buckets as f32 * factor) as usize,
        }
    }
}

impl Default for HashMapConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Smallest power of two `>= capacity`, clamped to `[1, MAXIMUM_BUCKETS]`.
pub(crate) const fn bucket_count_for(capacity: usize) -> usize {
    if capacity >= MAXIMUM_BUCKETS {
        MAXIMUM_BUCKETS
    } else if capacity <= 1 {
        1
    } else {
        capacity.next_power_of_two()
    }
}
