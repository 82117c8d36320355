//! # Intervalmap
//!
//! An [`IntervalMap`] is a compressed representation of a total,
//! piecewise-constant function from an ordered key domain to a value
//! domain. Every key maps to a value at all times: the map starts out
//! with a single *baseline* value covering the whole domain, and
//! [`assign`] overwrites the function on a half-open interval
//! `[key_begin, key_end)`.
//!
//! Instead of storing one entry per key, the map stores only the
//! *boundaries* where the function's value changes. This keeps the
//! representation minimal no matter how large the assigned intervals
//! are, and makes lookups a single ordered search.
//!
//! [`assign`]: IntervalMap::assign
//!
//! # Example usage
//!
//! ```rust
//! use intervalmap::IntervalMap;
//!
//! // Price tiers by quantity, starting at the base rate everywhere.
//! let mut tiers = IntervalMap::new("base");
//! tiers.assign(10, 100, "bulk");
//! tiers.assign(100, 1000, "wholesale");
//!
//! assert_eq!(&"base", tiers.value_at(&9));
//! assert_eq!(&"bulk", tiers.value_at(&10));
//! assert_eq!(&"wholesale", tiers.value_at(&999));
//! assert_eq!(&"base", tiers.value_at(&1000));
//! ```

// The whole public surface lives in the crate root; the internal
// module structure stays private. This keeps things simple for our
// users and gives us more flexibility in restructuring the crate.
mod boundary;
mod debug;
mod ordering;

use std::borrow::Borrow;

use crate::boundary::BoundaryMap;
use crate::ordering::eq_by_ordering;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

/// A map from half-open key intervals to values.
///
/// # Representation
///
/// The map owns a baseline value and an ordered set of boundaries. A
/// boundary `(k, v)` means the function's value is `v` from `k` up to
/// (but not including) the next boundary's key, or indefinitely if no
/// boundary follows. Keys below the first boundary take the baseline
/// value.
///
/// After every operation the representation is canonical: no boundary
/// carries the same value as the one in effect just before it, and the
/// first boundary's value differs from the baseline. A consequence is
/// that structural equality (`==`, where available) coincides with
/// equality of the represented functions.
///
/// # Ordering requirements
///
/// Keys are compared through [`Ord`]. Values only need `<` to form a
/// strict weak ordering: two values are treated as equal iff neither
/// is less than the other, even where `PartialEq` would distinguish
/// them. A `PartialOrd` implementation that is not a strict weak
/// ordering (floating point `NaN`s, for instance) breaks this
/// contract, and the resulting representation is unspecified.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntervalMap<K: Ord, V> {
    baseline: V,
    boundaries: BoundaryMap<K, V>,
}

impl<K: Ord, V> IntervalMap<K, V> {
    /// Constructs a map associating the whole key domain with
    /// `baseline`.
    pub fn new(baseline: V) -> Self {
        Self {
            baseline,
            boundaries: BoundaryMap::new(),
        }
    }

    /// Returns a reference to the value in effect at `key`.
    ///
    /// This is the value of the greatest boundary at or below `key`,
    /// or the baseline value if there is none.
    pub fn value_at<Q>(&self, key: &Q) -> &V
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.boundaries.value_at(key).unwrap_or(&self.baseline)
    }

    /// Returns a reference to the value in effect below the first
    /// boundary.
    ///
    /// The baseline is fixed at construction. Assigning over the
    /// leading range adds boundaries instead of replacing it, so after
    /// `assign(a, b, v)` the baseline still applies to keys below `a`.
    pub fn baseline(&self) -> &V {
        &self.baseline
    }

    /// Returns `true` if every key maps to the baseline value.
    pub fn is_uniform(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Returns the number of stored boundaries.
    ///
    /// As the representation is kept canonical, this is the number of
    /// points where the function's value actually changes.
    pub fn boundary_count(&self) -> usize {
        self.boundaries.len()
    }
}

impl<K: Ord, V: PartialOrd + Clone> IntervalMap<K, V> {
    /// Assigns `val` to the interval `[key_begin, key_end)`,
    /// overwriting all previous values in it.
    ///
    /// If `!(key_begin < key_end)`, this designates an empty interval
    /// and the map is left unchanged. That is part of the contract,
    /// not an error.
    pub fn assign(&mut self, key_begin: K, key_end: K, val: V) {
        if !(key_begin < key_end) {
            return;
        }

        // Capture what the function reads just below `key_begin` and
        // from `key_end` onward, before any mutation.
        let val_left = self
            .boundaries
            .value_below(&key_begin)
            .unwrap_or(&self.baseline)
            .clone();
        let val_right = self.value_at(&key_end).clone();

        // All boundaries inside the assigned interval are superseded.
        self.boundaries.remove_range(&key_begin, &key_end);

        if eq_by_ordering(&val_right, &val) {
            // A boundary exactly at `key_end` would duplicate `val`.
            self.boundaries.remove(&key_end);
        } else {
            self.boundaries.insert(key_end, val_right);
        }
        if !eq_by_ordering(&val_left, &val) {
            self.boundaries.insert(key_begin, val);
        }
    }
}
