// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A persistent map keyed by caller supplied hashes.
//!
//! A [`GenericTrie`] owns the root [`Branch`] of a hash array mapped
//! trie, which sits at shift 0, and keeps count of its entries. Every
//! update returns a new trie and leaves the old one as it was; the two
//! share every node the update didn't have to touch, so an update costs
//! O(log<sub>32</sub> n) in both time and space.
//!
//! The trie doesn't hash keys itself. Each operation takes the key's
//! hash alongside the key, and the caller must hand over the same hash
//! for equal keys every time.
//!
//! Nodes are immutable once built, so any number of threads can read
//! the same trie at once.

use std::borrow::Borrow;
use std::fmt::{Debug, Error, Formatter};
use std::iter::{FromIterator, FusedIterator};

use archery::{SharedPointer, SharedPointerKind};
use log::{debug, log_enabled, Level};

use crate::nodes::hamt::{Branch, HashBits, Iter as NodeIter, Leaf};
use crate::shared_ptr::DefaultSharedPtr;
use crate::summary::StructureSummary;

/// Type alias for [`GenericTrie`] that uses [`DefaultSharedPtr`] as the pointer type.
///
/// [GenericTrie]: ./struct.GenericTrie.html
/// [DefaultSharedPtr]: ../shared_ptr/type.DefaultSharedPtr.html
pub type Trie<K, V> = GenericTrie<K, V, DefaultSharedPtr>;

/// A persistent hash array mapped trie.
///
/// `P` picks the pointer nodes are shared through; see
/// [`shared_ptr`][crate::shared_ptr].
pub struct GenericTrie<K, V, P: SharedPointerKind> {
    size: usize,
    root: Option<SharedPointer<Branch<K, V, P>, P>>,
}

impl<K, V, P: SharedPointerKind> GenericTrie<K, V, P> {
    /// The empty trie.
    ///
    /// It holds no nodes at all, so every empty trie is this one.
    pub const EMPTY: Self = GenericTrie { size: 0, root: None };

    /// Construct an empty trie.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Test whether a trie is empty.
    ///
    /// Time: O(1)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the number of entries in a trie.
    ///
    /// Time: O(1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Test whether two tries refer to the same content in memory.
    ///
    /// This is true if the two sides are references to the same trie,
    /// or if the two tries refer to the same root node.
    ///
    /// This would return true if you're comparing a trie to itself, or
    /// if you're comparing a trie to a fresh clone of itself.
    ///
    /// Time: O(1)
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.root, &other.root) {
            (Some(a), Some(b)) => SharedPointer::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    /// The root branch, or `None` for the empty trie.
    #[inline]
    pub fn root(&self) -> Option<&Branch<K, V, P>> {
        self.root.as_deref()
    }

    /// Get an iterator over the key/value pairs of a trie.
    ///
    /// Entries come out in the same order [`kvreduce`][Self::kvreduce]
    /// visits them: by hash fragment, level by level, and not in any
    /// order a caller should rely on.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V, P> {
        Iter {
            it: self.leaves(),
        }
    }

    fn leaves(&self) -> NodeIter<'_, K, V, P> {
        match &self.root {
            Some(root) => NodeIter::new(root, self.size),
            None => NodeIter::empty(),
        }
    }

    /// Fold every value into an accumulator.
    ///
    /// Time: O(n)
    pub fn reduce<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, &V) -> A,
    {
        match &self.root {
            Some(root) => root.reduce(init, f),
            None => init,
        }
    }

    /// Fold every key/value pair into an accumulator.
    ///
    /// Time: O(n)
    pub fn kvreduce<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, &K, &V) -> A,
    {
        match &self.root {
            Some(root) => root.kvreduce(init, f),
            None => init,
        }
    }

    /// Count the branches, leaves and collision nodes on every level.
    ///
    /// Time: O(n)
    #[must_use]
    pub fn structure_summary(&self) -> StructureSummary {
        StructureSummary::of(self.root(), self.size)
    }

    /// Log a [`structure_summary`][Self::structure_summary] at debug level.
    pub fn log_structure_summary(&self) {
        if log_enabled!(Level::Debug) {
            debug!("{}", self.structure_summary());
        }
    }
}

impl<K, V, P> GenericTrie<K, V, P>
where
    K: Eq,
    P: SharedPointerKind,
{
    /// Get the value for a key.
    ///
    /// Time: O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// # use phamt::Trie;
    /// let trie = Trie::new().assoc(123, "123", 1);
    /// assert_eq!(Some(&1), trie.lookup(123, "123"));
    /// assert_eq!(None, trie.lookup(123, "456"));
    /// ```
    #[must_use]
    pub fn lookup<BK>(&self, hash: HashBits, key: &BK) -> Option<&V>
    where
        BK: Eq + ?Sized,
        K: Borrow<BK>,
    {
        self.lookup_key_value(hash, key).map(|(_, value)| value)
    }

    /// Get the stored key and the value for a key.
    ///
    /// Time: O(log n)
    #[must_use]
    pub fn lookup_key_value<BK>(&self, hash: HashBits, key: &BK) -> Option<(&K, &V)>
    where
        BK: Eq + ?Sized,
        K: Borrow<BK>,
    {
        self.root
            .as_ref()?
            .lookup(0, hash, key)
            .map(|leaf| (leaf.key(), leaf.value()))
    }

    /// Test for the presence of a key.
    ///
    /// Time: O(log n)
    #[inline]
    #[must_use]
    pub fn contains_key<BK>(&self, hash: HashBits, key: &BK) -> bool
    where
        BK: Eq + ?Sized,
        K: Borrow<BK>,
    {
        self.lookup_key_value(hash, key).is_some()
    }

    /// Construct a new trie with a key/value pair added, replacing any
    /// previous value for the key.
    ///
    /// Time: O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// # use phamt::Trie;
    /// let first = Trie::new().assoc(1, 'a', "old");
    /// let second = first.assoc(1, 'a', "new");
    /// assert_eq!(Some(&"old"), first.lookup(1, &'a'));
    /// assert_eq!(Some(&"new"), second.lookup(1, &'a'));
    /// assert_eq!(1, second.len());
    /// ```
    #[must_use]
    pub fn assoc(&self, hash: HashBits, key: K, value: V) -> Self {
        let leaf = SharedPointer::new(Leaf::new(hash, key, value));
        let (root, replaced) = match &self.root {
            Some(root) => root.assoc(0, leaf),
            None => Branch::new().assoc(0, leaf),
        };
        GenericTrie {
            size: if replaced.is_some() {
                self.size
            } else {
                self.size + 1
            },
            root: Some(SharedPointer::new(root)),
        }
    }

    /// Construct a new trie without the given key.
    ///
    /// If the key isn't there, you get back a clone of this trie,
    /// sharing its root.
    ///
    /// Time: O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// # use phamt::Trie;
    /// let trie = Trie::new().assoc(1, 1, "one").assoc(2, 2, "two");
    /// let smaller = trie.without(1, &1);
    /// assert_eq!(None, smaller.lookup(1, &1));
    /// assert_eq!(Some(&"two"), smaller.lookup(2, &2));
    /// assert!(trie.without(3, &3).ptr_eq(&trie));
    /// ```
    #[must_use]
    pub fn without<BK>(&self, hash: HashBits, key: &BK) -> Self
    where
        BK: Eq + ?Sized,
        K: Borrow<BK>,
    {
        let removed = self
            .root
            .as_ref()
            .and_then(|root| root.without(0, hash, key));
        match removed {
            None => self.clone(),
            Some((root, _)) if root.is_empty() => Self::EMPTY,
            Some((root, _)) => GenericTrie {
                size: self.size - 1,
                root: Some(SharedPointer::new(root)),
            },
        }
    }

    /// Check every structural invariant of the trie, panicking if one
    /// doesn't hold.
    #[cfg(any(test, feature = "debug"))]
    pub fn assert_invariants(&self) {
        let count = match &self.root {
            Some(root) => root.check_invariants(0, 0, true),
            None => 0,
        };
        assert_eq!(self.size, count, "trie size doesn't match its entries");
        if let Some(root) = &self.root {
            assert!(!root.is_empty(), "empty trie with a root node");
        }
    }
}

// Core traits

// We impl Clone instead of deriving it, because we want Clone even if K and V aren't.
impl<K, V, P: SharedPointerKind> Clone for GenericTrie<K, V, P> {
    /// Clone a trie.
    ///
    /// Time: O(1)
    #[inline]
    fn clone(&self) -> Self {
        GenericTrie {
            size: self.size,
            root: self.root.clone(),
        }
    }
}

impl<K, V, P: SharedPointerKind> Default for GenericTrie<K, V, P> {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<K, V, P> PartialEq for GenericTrie<K, V, P>
where
    K: Eq,
    V: PartialEq,
    P: SharedPointerKind,
{
    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size {
            return false;
        }
        if self.ptr_eq(other) {
            return true;
        }
        self.leaves()
            .all(|leaf| other.lookup(leaf.hash(), leaf.key()) == Some(leaf.value()))
    }
}

impl<K: Eq, V: Eq, P: SharedPointerKind> Eq for GenericTrie<K, V, P> {}

impl<K, V, P> Debug for GenericTrie<K, V, P>
where
    K: Debug,
    V: Debug,
    P: SharedPointerKind,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Eq, V, P: SharedPointerKind> Extend<(HashBits, K, V)> for GenericTrie<K, V, P> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (HashBits, K, V)>,
    {
        for (hash, key, value) in iter {
            *self = self.assoc(hash, key, value);
        }
    }
}

impl<K: Eq, V, P: SharedPointerKind> FromIterator<(HashBits, K, V)> for GenericTrie<K, V, P> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (HashBits, K, V)>,
    {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

// Iterators

/// An iterator over the entries of a trie.
pub struct Iter<'a, K, V, P: SharedPointerKind> {
    it: NodeIter<'a, K, V, P>,
}

// We impl Clone instead of deriving it, because we want Clone even if K and V aren't.
impl<'a, K, V, P: SharedPointerKind> Clone for Iter<'a, K, V, P> {
    fn clone(&self) -> Self {
        Iter {
            it: self.it.clone(),
        }
    }
}

impl<'a, K, V, P: SharedPointerKind> Iterator for Iter<'a, K, V, P> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|leaf| (leaf.key(), leaf.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<'a, K, V, P: SharedPointerKind> ExactSizeIterator for Iter<'a, K, V, P> {}

impl<'a, K, V, P: SharedPointerKind> FusedIterator for Iter<'a, K, V, P> {}

impl<'a, K, V, P: SharedPointerKind> IntoIterator for &'a GenericTrie<K, V, P> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, P>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Tests

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared_ptr::RcK;
    use crate::test::{colliding_hash, deep_hash, metro_hash};
    use ::proptest::{collection, prelude::any, proptest};
    use pretty_assertions::assert_eq;
    use proptest_derive::Arbitrary;
    use static_assertions::{assert_impl_all, assert_not_impl_any};
    use std::collections::HashMap;

    assert_impl_all!(Trie<i32, i32>: Send, Sync);
    assert_not_impl_any!(Trie<i32, *const i32>: Send, Sync);
    assert_not_impl_any!(Trie<*const i32, i32>: Send, Sync);
    assert_not_impl_any!(GenericTrie<i32, i32, RcK>: Send, Sync);
    assert_covariant!(Trie<T, i32> in T);
    assert_covariant!(Trie<i32, T> in T);

    fn identity(key: u32) -> HashBits {
        key
    }

    fn trie_of(keys: impl IntoIterator<Item = u32>) -> Trie<u32, u32> {
        keys.into_iter()
            .map(|key| (identity(key), key, key))
            .collect()
    }

    #[derive(Arbitrary, Debug, Clone)]
    enum Action {
        Assoc(u16, i16),
        Without(u16),
    }

    fn check_against_model(actions: &[Action], hash: fn(u16) -> HashBits) {
        let mut model = HashMap::new();
        let mut trie: Trie<u16, i16> = Trie::new();
        for action in actions {
            match *action {
                Action::Assoc(key, value) => {
                    model.insert(key, value);
                    trie = trie.assoc(hash(key), key, value);
                }
                Action::Without(key) => {
                    model.remove(&key);
                    trie = trie.without(hash(key), &key);
                }
            }
            assert_eq!(model.len(), trie.len());
        }
        trie.assert_invariants();
        for (key, value) in &model {
            assert_eq!(Some(value), trie.lookup(hash(*key), key));
        }
        let mut entries: Vec<_> = trie.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_unstable();
        let mut expected: Vec<_> = model.into_iter().collect();
        expected.sort_unstable();
        assert_eq!(expected, entries);
    }

    #[test]
    fn empty_is_canonical() {
        let empty: Trie<u32, u32> = Trie::new();
        assert!(empty.is_empty());
        assert!(empty.root().is_none());
        assert!(empty.ptr_eq(&Trie::EMPTY));
        assert!(empty.ptr_eq(&Trie::default()));
        assert_eq!(None, empty.lookup(0, &0));
        assert_eq!(0, empty.iter().count());
        empty.assert_invariants();
    }

    #[test]
    fn emptied_trie_is_canonical() {
        let trie = trie_of([1, 2]).without(1, &1).without(2, &2);
        assert!(trie.is_empty());
        assert!(trie.ptr_eq(&Trie::EMPTY));
        trie.assert_invariants();
    }

    #[test]
    fn thirty_three_sequential_keys() {
        let first: Trie<u32, u32> = trie_of(0..32);
        let trie = first.assoc(32, 32, 32);
        assert_eq!(33, trie.len());
        trie.assert_invariants();

        let root = trie.root().unwrap();
        assert_eq!(32, root.children().len());
        let nested = root.children()[0].as_branch().expect("expected a branch");
        assert_eq!(2, nested.len());
        assert!(nested.children()[0].ptr_eq(&first.root().unwrap().children()[0]));

        for removed in 0..32 {
            let smaller = trie.without(identity(removed), &removed);
            assert_eq!(32, smaller.len());
            assert_eq!(None, smaller.lookup(identity(removed), &removed));
            for key in (0..33).filter(|key| *key != removed) {
                assert_eq!(Some(&key), smaller.lookup(identity(key), &key));
            }
            smaller.assert_invariants();
        }
    }

    #[test]
    fn updates_share_untouched_subtrees() {
        let trie = trie_of(0..1000);
        let updated = trie.assoc(5, 5, 500);
        let old_root = trie.root().unwrap();
        let new_root = updated.root().unwrap();
        assert_eq!(old_root.bitmap(), new_root.bitmap());
        for (index, (old, new)) in old_root
            .children()
            .iter()
            .zip(new_root.children())
            .enumerate()
        {
            assert_eq!(index != 5, old.ptr_eq(new), "child {}", index);
        }
        assert_eq!(Some(&5), trie.lookup(5, &5));
        assert_eq!(Some(&500), updated.lookup(5, &5));
    }

    #[test]
    fn assoc_then_without_shares_the_rest() {
        let trie = trie_of(0..1000);
        let key = 5000;
        let round_trip = trie.assoc(identity(key), key, key).without(identity(key), &key);
        assert_eq!(trie, round_trip);
        let old_root = trie.root().unwrap();
        let new_root = round_trip.root().unwrap();
        let touched = (key & 0x1f) as usize;
        for (index, (old, new)) in old_root
            .children()
            .iter()
            .zip(new_root.children())
            .enumerate()
        {
            if index != touched {
                assert!(old.ptr_eq(new), "child {}", index);
            }
        }
    }

    #[test]
    fn update_replaces_value() {
        let once = trie_of(0..10).assoc(3, 3, 30);
        let twice = trie_of(0..10).assoc(3, 3, 1).assoc(3, 3, 30);
        assert_eq!(10, twice.len());
        assert_eq!(once, twice);
        assert_eq!(once.structure_summary(), twice.structure_summary());
        assert_eq!(Some(&30), twice.lookup(3, &3));
    }

    #[test]
    fn without_missing_key_is_a_no_op() {
        let trie = trie_of(0..100);
        assert!(trie.without(1000, &1000).ptr_eq(&trie));
        // Right hash, wrong key.
        assert!(trie.without(7, &1000).ptr_eq(&trie));
        assert_eq!(100, trie.without(1000, &1000).len());
    }

    #[test]
    fn colliding_keys() {
        let trie: Trie<&str, i32> = Trie::new().assoc(42, "AaAa", 1).assoc(42, "BBBB", 2);
        assert_eq!(Some(&1), trie.lookup(42, "AaAa"));
        assert_eq!(Some(&2), trie.lookup(42, "BBBB"));
        assert_eq!(None, trie.lookup(42, "AaBB"));
        trie.assert_invariants();

        let updated = trie.assoc(42, "BBBB", 3);
        assert_eq!(2, updated.len());
        assert_eq!(Some(&3), updated.lookup(42, "BBBB"));
        updated.assert_invariants();

        let removed = trie.without(42, "AaAa");
        assert_eq!(1, removed.len());
        assert_eq!(None, removed.lookup(42, "AaAa"));
        assert_eq!(Some(&2), removed.lookup(42, "BBBB"));
        let root = removed.root().unwrap();
        assert!(root.children()[0].is_leaf());
        removed.assert_invariants();
    }

    #[test]
    fn string_keys_with_str_lookups() {
        let trie: Trie<String, usize> = ["foo", "bar", "baz"]
            .iter()
            .enumerate()
            .map(|(index, key)| (metro_hash(*key), key.to_string(), index))
            .collect();
        assert_eq!(Some(&0), trie.lookup(metro_hash("foo"), "foo"));
        assert_eq!(Some(&2), trie.lookup(metro_hash("baz"), "baz"));
        assert!(!trie.contains_key(metro_hash("qux"), "qux"));
        let (key, value) = trie.lookup_key_value(metro_hash("bar"), "bar").unwrap();
        assert_eq!(("bar", 1), (key.as_str(), *value));
    }

    #[test]
    fn reduce_and_kvreduce() {
        let trie = trie_of(1..=100);
        assert_eq!(5050, trie.reduce(0, |acc, value| acc + value));
        let keys = trie.kvreduce(Vec::new(), |mut acc, key, _| {
            acc.push(*key);
            acc
        });
        let iterated: Vec<_> = trie.iter().map(|(key, _)| *key).collect();
        assert_eq!(iterated, keys);
        assert_eq!(0, Trie::<u32, u32>::new().reduce(0, |acc, value| acc + value));
    }

    #[test]
    fn proper_formatting() {
        let trie: Trie<u32, u32> = trie_of([1]);
        assert_eq!("{1: 1}", format!("{:?}", trie));
        assert_eq!("{}", format!("{:?}", Trie::<u32, u32>::new()));
    }

    #[test]
    fn structure_summary_counts_levels() {
        let summary = trie_of(0..33).structure_summary();
        assert_eq!(33, summary.entries);
        assert_eq!(2, summary.depth());
        assert_eq!(1, summary.levels[0].branches);
        assert_eq!(31, summary.levels[0].leaves);
        assert_eq!(2, summary.levels[1].leaves);

        let collisions: Trie<u16, u16> = Trie::new().assoc(9, 1, 1).assoc(9, 2, 2);
        let summary = collisions.structure_summary();
        assert_eq!(7, summary.depth());
        assert_eq!(1, summary.levels[6].collisions);
        assert_eq!(2, summary.levels[6].collision_leaves);
        assert!(summary.to_string().contains("Total entries: 2"));
        collisions.log_structure_summary();
    }

    #[test]
    fn concurrent_readers() {
        let trie = trie_of(0..10_000);
        std::thread::scope(|scope| {
            for offset in 0..4 {
                let trie = &trie;
                scope.spawn(move || {
                    for key in (offset..10_000).step_by(4) {
                        assert_eq!(Some(&key), trie.lookup(identity(key), &key));
                    }
                });
            }
        });
    }

    #[test]
    fn large_trie() {
        let size = 32769;
        let trie = (0..size)
            .map(|key: u32| (metro_hash(&key), key, key))
            .collect::<Trie<_, _>>();
        assert_eq!(size as usize, trie.len());
        for key in 0..size {
            assert_eq!(Some(&key), trie.lookup(metro_hash(&key), &key));
        }
        trie.assert_invariants();
    }

    #[test]
    fn rc_pointers() {
        let trie: GenericTrie<u32, u32, RcK> = (0..100).map(|key| (key, key, key)).collect();
        assert_eq!(100, trie.len());
        assert_eq!(Some(&50), trie.lookup(50, &50));
        trie.assert_invariants();
    }

    proptest! {
        #[test]
        fn assoc_and_lookup(ref m in collection::hash_map(any::<u16>(), any::<i16>(), 0..1000)) {
            let mut trie: Trie<u16, i16> = Trie::new();
            for (index, (k, v)) in m.iter().enumerate() {
                trie = trie.assoc(metro_hash(k), *k, *v);
                assert_eq!(Some(v), trie.lookup(metro_hash(k), k));
                assert_eq!(index + 1, trie.len());
            }
            trie.assert_invariants();
        }

        #[test]
        fn without_removes_only_that_key(ref m in collection::hash_map(any::<u16>(), any::<i16>(), 1..200)) {
            let trie: Trie<u16, i16> = m.iter().map(|(k, v)| (deep_hash(*k), *k, *v)).collect();
            for k in m.keys() {
                let smaller = trie.without(deep_hash(*k), k);
                assert_eq!(None, smaller.lookup(deep_hash(*k), k));
                assert_eq!(trie.len() - 1, smaller.len());
                for (other, v) in m.iter().filter(|(other, _)| *other != k) {
                    assert_eq!(Some(v), smaller.lookup(deep_hash(*other), other));
                }
                smaller.assert_invariants();
            }
        }

        #[test]
        fn equality(ref m in collection::hash_map(any::<u16>(), any::<i16>(), 0..500)) {
            let trie1: Trie<u16, i16> = m.iter().map(|(k, v)| (colliding_hash(*k), *k, *v)).collect();
            let mut pairs: Vec<_> = m.iter().collect();
            pairs.reverse();
            let trie2: Trie<u16, i16> = pairs.into_iter().map(|(k, v)| (colliding_hash(*k), *k, *v)).collect();
            assert_eq!(trie1, trie2);
        }

        #[test]
        fn exact_size_iterator(ref m in collection::hash_map(any::<u16>(), any::<i16>(), 0..100)) {
            let trie: Trie<u16, i16> = m.iter().map(|(k, v)| (colliding_hash(*k), *k, *v)).collect();
            let mut should_be = m.len();
            let mut it = trie.iter();
            loop {
                assert_eq!(should_be, it.len());
                match it.next() {
                    None => break,
                    Some(_) => should_be -= 1,
                }
            }
            assert_eq!(0, it.len());
        }

        #[test]
        fn model_with_spread_hashes(ref actions in collection::vec(any::<Action>(), 0..300)) {
            check_against_model(actions, |key| metro_hash(&key));
        }

        #[test]
        fn model_with_deep_hashes(ref actions in collection::vec(any::<Action>(), 0..300)) {
            check_against_model(actions, deep_hash);
        }

        #[test]
        fn model_with_colliding_hashes(ref actions in collection::vec(any::<Action>(), 0..300)) {
            check_against_model(actions, colliding_hash);
        }
    }
}
