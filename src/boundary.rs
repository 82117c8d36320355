use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::ops::Bound;

/// The ordered set of points where the represented function changes
/// its value, keyed by the first key of each run.
///
/// This is a thin layer over `BTreeMap` providing the predecessor
/// lookups and the range erase that `IntervalMap::assign` is built
/// from. It knows nothing about canonical form; keeping the entries
/// minimal is the caller's job.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub(crate) struct BoundaryMap<K: Ord, V> {
    map: BTreeMap<K, V>,
}

impl<K: Ord, V> BoundaryMap<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// Returns the value of the greatest boundary at or below `key`.
    pub(crate) fn value_at<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map
            .range((Bound::Unbounded, Bound::Included(key)))
            .next_back()
            .map(|(_, v)| v)
    }

    /// Returns the value of the greatest boundary strictly below
    /// `key`.
    pub(crate) fn value_below<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map
            .range((Bound::Unbounded, Bound::Excluded(key)))
            .next_back()
            .map(|(_, v)| v)
    }

    /// Removes all boundaries with keys in `[begin, end)`.
    pub(crate) fn remove_range<Q>(&mut self, begin: &Q, end: &Q)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut tail = self.map.split_off(begin);
        let mut after = tail.split_off(end);
        self.map.append(&mut after);
    }

    pub(crate) fn insert(&mut self, key: K, value: V) {
        self.map.insert(key, value);
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.remove(key);
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.map.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K: Ord, V> Default for BoundaryMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
