//! The set contract.

use crate::error::CollectionError;

use super::Collection;

/// A collection without duplicate elements.
pub trait Set: Collection {
    /// Returns `true` if every element of `self` is in `other`.
    fn is_subset<O>(&self, other: &O) -> bool
    where
        Self: Sized,
        O: Collection<Item = Self::Item>,
        Self::Item: PartialEq,
    {
        self.len() <= other.len() && other.contains_all(self)
    }

    /// Set equality: same size and mutual containment.
    fn set_eq<O>(&self, other: &O) -> bool
    where
        Self: Sized,
        O: Set<Item = Self::Item>,
        Self::Item: PartialEq,
    {
        self.len() == other.len() && self.contains_all(other)
    }
}

/// Removes from `set` every element contained in `other`, iterating
/// whichever side is smaller.
///
/// When `set` is larger, each element of `other` is removed from `set` by
/// lookup; otherwise `set` is traversed once and each element is checked
/// against `other`. Either way the work is bounded by the smaller side's
/// size in lookups.
///
/// # Errors
///
/// Propagates removal failures.
pub fn remove_all<S, O>(set: &mut S, other: &O) -> Result<bool, CollectionError>
where
    S: Set,
    O: Collection<Item = S::Item>,
    S::Item: PartialEq,
{
    if set.len() > other.len() {
        let mut modified = false;
        for element in other.elements() {
            modified |= set.remove_element(element)?;
        }
        Ok(modified)
    } else {
        super::collection::remove_where(set, |element| other.contains(element))
    }
}
