// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Hash array mapped trie nodes.
//!
//! A trie is a tree of [`Branch`]es, each consuming [`HASH_SHIFT`] bits
//! of a key's hash to pick one of [`HASH_WIDTH`] slots. A branch only
//! stores the slots it uses: a bitmap records which ones are present,
//! and the children sit in a dense array in bit order, so the child for
//! a slot lives at the number of set bits below that slot's bit.
//!
//! Nodes are never changed once built. Every update copies the branches
//! on the path from the root to the affected slot and shares everything
//! else with the version it started from.

use std::borrow::Borrow;
use std::fmt;
use std::iter::FusedIterator;
use std::slice::Iter as SliceIter;

use archery::{SharedPointer, SharedPointerKind};
use bitmaps::{Bitmap, Bits, BitsImpl};
use log::trace;

use crate::nodes::chunk::Chunk;
use crate::util::{bit_position_of, insert_at, popcount, remove_at, replace_at};

pub use crate::config::HASH_LEVEL_SIZE as HASH_SHIFT;
/// The number of slots in a branch, which is also the number of bits in
/// a hash.
pub const HASH_WIDTH: usize = 2_usize.pow(HASH_SHIFT as u32);
/// A caller supplied hash code: a uint of `HASH_WIDTH` bits.
pub type HashBits = <BitsImpl<HASH_WIDTH> as Bits>::Store;
pub(crate) const HASH_MASK: HashBits = (HASH_WIDTH - 1) as HashBits;

/// The hash fragment selecting a slot at level `shift`.
#[inline]
pub(crate) fn mask(hash: HashBits, shift: usize) -> HashBits {
    hash >> shift & HASH_MASK
}

/// A key, its value and the hash the key was stored under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leaf<K, V> {
    hash: HashBits,
    key: K,
    value: V,
}

impl<K, V> Leaf<K, V> {
    pub fn new(hash: HashBits, key: K, value: V) -> Self {
        Leaf { hash, key, value }
    }

    #[inline]
    pub fn hash(&self) -> HashBits {
        self.hash
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    fn matches<BK>(&self, key: &BK) -> bool
    where
        BK: Eq + ?Sized,
        K: Borrow<BK>,
    {
        key == self.key.borrow()
    }
}

/// Leaves whose keys differ but whose hashes are identical.
///
/// These only appear once a path has used up every bit of the hash, so
/// every leaf in here has the node's hash, and there are always at least
/// two of them.
pub struct Collision<K, V, P: SharedPointerKind> {
    hash: HashBits,
    children: Vec<SharedPointer<Leaf<K, V>, P>>,
}

/// A bitmap indexed interior node.
pub struct Branch<K, V, P: SharedPointerKind> {
    bitmap: Bitmap<HASH_WIDTH>,
    children: Chunk<Node<K, V, P>>,
}

/// Anything a branch slot can hold.
pub enum Node<K, V, P: SharedPointerKind> {
    Leaf(SharedPointer<Leaf<K, V>, P>),
    Branch(SharedPointer<Branch<K, V, P>, P>),
    Collision(SharedPointer<Collision<K, V, P>, P>),
}

// We impl Clone instead of deriving it, because we want Clone even if K and V aren't.
impl<K, V, P: SharedPointerKind> Clone for Node<K, V, P> {
    fn clone(&self) -> Self {
        match self {
            Node::Leaf(leaf) => Node::Leaf(leaf.clone()),
            Node::Branch(branch) => Node::Branch(branch.clone()),
            Node::Collision(coll) => Node::Collision(coll.clone()),
        }
    }
}

impl<K, V, P: SharedPointerKind> Clone for Branch<K, V, P> {
    fn clone(&self) -> Self {
        Branch {
            bitmap: self.bitmap,
            children: self.children.clone(),
        }
    }
}

impl<K, V, P: SharedPointerKind> Clone for Collision<K, V, P> {
    fn clone(&self) -> Self {
        Collision {
            hash: self.hash,
            children: self.children.clone(),
        }
    }
}

impl<K, V, P: SharedPointerKind> From<Leaf<K, V>> for Node<K, V, P> {
    fn from(leaf: Leaf<K, V>) -> Self {
        Node::Leaf(SharedPointer::new(leaf))
    }
}

impl<K, V, P: SharedPointerKind> From<Branch<K, V, P>> for Node<K, V, P> {
    fn from(branch: Branch<K, V, P>) -> Self {
        Node::Branch(SharedPointer::new(branch))
    }
}

impl<K, V, P: SharedPointerKind> From<Collision<K, V, P>> for Node<K, V, P> {
    fn from(coll: Collision<K, V, P>) -> Self {
        Node::Collision(SharedPointer::new(coll))
    }
}

impl<K, V, P: SharedPointerKind> Node<K, V, P> {
    /// Test whether this is a terminal leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&SharedPointer<Leaf<K, V>, P>> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }

    pub fn as_branch(&self) -> Option<&SharedPointer<Branch<K, V, P>, P>> {
        match self {
            Node::Branch(branch) => Some(branch),
            _ => None,
        }
    }

    pub fn as_collision(&self) -> Option<&SharedPointer<Collision<K, V, P>, P>> {
        match self {
            Node::Collision(coll) => Some(coll),
            _ => None,
        }
    }

    /// Test whether two nodes are the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Leaf(a), Node::Leaf(b)) => SharedPointer::ptr_eq(a, b),
            (Node::Branch(a), Node::Branch(b)) => SharedPointer::ptr_eq(a, b),
            (Node::Collision(a), Node::Collision(b)) => SharedPointer::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Find the leaf for `key` below this node, where `shift` is the
    /// level this node sits at.
    pub fn lookup<BK>(
        &self,
        shift: usize,
        hash: HashBits,
        key: &BK,
    ) -> Option<&SharedPointer<Leaf<K, V>, P>>
    where
        BK: Eq + ?Sized,
        K: Borrow<BK>,
    {
        match self {
            Node::Leaf(leaf) => leaf.matches(key).then_some(leaf),
            Node::Branch(branch) => branch.lookup(shift, hash, key),
            Node::Collision(coll) => coll.lookup(key),
        }
    }

    pub fn reduce<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &V) -> A,
    {
        self.kvreduce(init, |acc, _, value| f(acc, value))
    }

    pub fn kvreduce<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &K, &V) -> A,
    {
        self.fold(init, &mut f)
    }

    fn fold<A, F>(&self, acc: A, f: &mut F) -> A
    where
        F: FnMut(A, &K, &V) -> A,
    {
        match self {
            Node::Leaf(leaf) => f(acc, &leaf.key, &leaf.value),
            Node::Branch(branch) => branch.fold(acc, f),
            Node::Collision(coll) => coll.fold(acc, f),
        }
    }
}

impl<K, V, P: SharedPointerKind> Default for Branch<K, V, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, P: SharedPointerKind> Branch<K, V, P> {
    /// The empty branch: no bits set, no children.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Branch {
            bitmap: Bitmap::new(),
            children: Chunk::new(),
        }
    }

    #[inline]
    fn unit(fragment: usize, node: Node<K, V, P>) -> Self {
        let mut bitmap = Bitmap::new();
        bitmap.set(fragment, true);
        Branch {
            bitmap,
            children: Chunk::unit(node),
        }
    }

    #[inline]
    fn pair(fragment1: usize, node1: Node<K, V, P>, fragment2: usize, node2: Node<K, V, P>) -> Self {
        debug_assert_ne!(fragment1, fragment2);
        let mut bitmap = Bitmap::new();
        bitmap.set(fragment1, true);
        bitmap.set(fragment2, true);
        let children = if fragment1 < fragment2 {
            Chunk::pair(node1, node2)
        } else {
            Chunk::pair(node2, node1)
        };
        Branch { bitmap, children }
    }

    /// The presence bitmap: bit `n` is set when slot `n` holds a child.
    #[inline]
    pub fn bitmap(&self) -> HashBits {
        self.bitmap.into_value()
    }

    /// The children, in ascending slot order.
    #[inline]
    pub fn children(&self) -> &[Node<K, V, P>] {
        &self.children
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Where the child for `fragment` lives (or would live) in `children`.
    #[inline]
    fn dense_index(&self, fragment: usize) -> usize {
        popcount(self.bitmap() & (bit_position_of(fragment) - 1)) as usize
    }

    #[inline]
    fn with_child(&self, index: usize, child: Node<K, V, P>) -> Self {
        Branch {
            bitmap: self.bitmap,
            children: replace_at(&self.children, child, index),
        }
    }

    fn without_child(&self, fragment: usize, index: usize) -> Self {
        let mut bitmap = self.bitmap;
        bitmap.set(fragment, false);
        Branch {
            bitmap,
            children: remove_at(&self.children, index),
        }
    }

    /// Put a branch that just lost an entry back in its slot.
    ///
    /// An empty branch gives up its slot, and a branch holding nothing
    /// but a single leaf is replaced by that leaf.
    fn with_shrunk_child(&self, fragment: usize, index: usize, child: Self) -> Self {
        if child.is_empty() {
            self.without_child(fragment, index)
        } else if child.len() == 1 && child.children[0].is_leaf() {
            self.with_child(index, child.children[0].clone())
        } else {
            self.with_child(index, Node::from(child))
        }
    }

    pub fn lookup<BK>(
        &self,
        shift: usize,
        hash: HashBits,
        key: &BK,
    ) -> Option<&SharedPointer<Leaf<K, V>, P>>
    where
        BK: Eq + ?Sized,
        K: Borrow<BK>,
    {
        let fragment = mask(hash, shift) as usize;
        if !self.bitmap.get(fragment) {
            return None;
        }
        match &self.children[self.dense_index(fragment)] {
            Node::Leaf(leaf) => leaf.matches(key).then_some(leaf),
            Node::Branch(child) => child.lookup(shift + HASH_SHIFT, hash, key),
            Node::Collision(coll) => coll.lookup(key),
        }
    }

    pub fn reduce<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &V) -> A,
    {
        self.kvreduce(init, |acc, _, value| f(acc, value))
    }

    pub fn kvreduce<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &K, &V) -> A,
    {
        self.fold(init, &mut f)
    }

    fn fold<A, F>(&self, init: A, f: &mut F) -> A
    where
        F: FnMut(A, &K, &V) -> A,
    {
        let mut acc = init;
        for child in self.children.iter() {
            acc = child.fold(acc, f);
        }
        acc
    }

    /// Build the smallest subtree at level `shift` holding two leaves
    /// with different keys.
    fn merge_leaves(
        leaf1: SharedPointer<Leaf<K, V>, P>,
        leaf2: SharedPointer<Leaf<K, V>, P>,
        shift: usize,
    ) -> Node<K, V, P> {
        if shift >= HASH_WIDTH {
            // Out of hash bits, so the hashes are identical.
            trace!("hash collision on {:#010x}", leaf1.hash);
            return Node::from(Collision::new(leaf1, leaf2));
        }
        let fragment1 = mask(leaf1.hash, shift) as usize;
        let fragment2 = mask(leaf2.hash, shift) as usize;
        if fragment1 != fragment2 {
            // Both leaves fit on the same level.
            Node::from(Branch::pair(
                fragment1,
                Node::Leaf(leaf1),
                fragment2,
                Node::Leaf(leaf2),
            ))
        } else {
            // Pass the leaves down a level.
            let child = Self::merge_leaves(leaf1, leaf2, shift + HASH_SHIFT);
            Node::from(Branch::unit(fragment1, child))
        }
    }
}

impl<K: Eq, V, P: SharedPointerKind> Branch<K, V, P> {
    /// Make a new branch holding `leaf`, where `shift` is the level this
    /// branch sits at.
    ///
    /// Also returns the leaf `leaf` replaced, if there was one with the
    /// same key.
    #[must_use]
    pub fn assoc(
        &self,
        shift: usize,
        leaf: SharedPointer<Leaf<K, V>, P>,
    ) -> (Self, Option<SharedPointer<Leaf<K, V>, P>>) {
        let fragment = mask(leaf.hash, shift) as usize;
        let index = self.dense_index(fragment);
        if !self.bitmap.get(fragment) {
            let mut bitmap = self.bitmap;
            bitmap.set(fragment, true);
            let branch = Branch {
                bitmap,
                children: insert_at(&self.children, Node::Leaf(leaf), index),
            };
            return (branch, None);
        }
        let (child, replaced) = match &self.children[index] {
            Node::Leaf(current) if current.key == leaf.key => {
                (Node::Leaf(leaf), Some(current.clone()))
            }
            Node::Leaf(current) => (
                Self::merge_leaves(current.clone(), leaf, shift + HASH_SHIFT),
                None,
            ),
            Node::Branch(branch) => {
                let (branch, replaced) = branch.assoc(shift + HASH_SHIFT, leaf);
                (Node::from(branch), replaced)
            }
            Node::Collision(coll) => {
                let (coll, replaced) = coll.assoc(leaf);
                (Node::from(coll), replaced)
            }
        };
        (self.with_child(index, child), replaced)
    }

    /// Make a new branch without the entry for `key`, where `shift` is the
    /// level this branch sits at.
    ///
    /// Returns `None` when `key` isn't present, in which case `self` is
    /// already the answer.
    #[must_use]
    pub fn without<BK>(
        &self,
        shift: usize,
        hash: HashBits,
        key: &BK,
    ) -> Option<(Self, SharedPointer<Leaf<K, V>, P>)>
    where
        BK: Eq + ?Sized,
        K: Borrow<BK>,
    {
        let fragment = mask(hash, shift) as usize;
        if !self.bitmap.get(fragment) {
            return None;
        }
        let index = self.dense_index(fragment);
        match &self.children[index] {
            Node::Leaf(current) => {
                if !current.matches(key) {
                    return None;
                }
                Some((self.without_child(fragment, index), current.clone()))
            }
            Node::Branch(branch) => {
                let (child, removed) = branch.without(shift + HASH_SHIFT, hash, key)?;
                Some((self.with_shrunk_child(fragment, index, child), removed))
            }
            Node::Collision(coll) => {
                let (child, removed) = coll.without(key)?;
                Some((self.with_child(index, child), removed))
            }
        }
    }
}

impl<K, V, P: SharedPointerKind> Collision<K, V, P> {
    fn new(leaf1: SharedPointer<Leaf<K, V>, P>, leaf2: SharedPointer<Leaf<K, V>, P>) -> Self {
        debug_assert_eq!(leaf1.hash, leaf2.hash);
        Collision {
            hash: leaf1.hash,
            children: vec![leaf1, leaf2],
        }
    }

    /// The hash every leaf in this node shares.
    #[inline]
    pub fn hash(&self) -> HashBits {
        self.hash
    }

    /// The leaves, in the order they were added.
    #[inline]
    pub fn children(&self) -> &[SharedPointer<Leaf<K, V>, P>] {
        &self.children
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn lookup<BK>(&self, key: &BK) -> Option<&SharedPointer<Leaf<K, V>, P>>
    where
        BK: Eq + ?Sized,
        K: Borrow<BK>,
    {
        self.children.iter().find(|leaf| leaf.matches(key))
    }

    /// Make a new node without the leaf for `key`.
    ///
    /// If only one leaf would be left, that leaf is returned in place of
    /// a collision node. Returns `None` if `key` isn't here.
    #[must_use]
    pub fn without<BK>(&self, key: &BK) -> Option<(Node<K, V, P>, SharedPointer<Leaf<K, V>, P>)>
    where
        BK: Eq + ?Sized,
        K: Borrow<BK>,
    {
        let index = self.children.iter().position(|leaf| leaf.matches(key))?;
        let removed = self.children[index].clone();
        if self.children.len() == 2 {
            trace!("collision on {:#010x} reduced to a single leaf", self.hash);
            return Some((Node::Leaf(self.children[1 - index].clone()), removed));
        }
        let coll = Collision {
            hash: self.hash,
            children: remove_at(&self.children, index),
        };
        Some((Node::from(coll), removed))
    }

    pub fn reduce<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &V) -> A,
    {
        self.kvreduce(init, |acc, _, value| f(acc, value))
    }

    pub fn kvreduce<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &K, &V) -> A,
    {
        self.fold(init, &mut f)
    }

    fn fold<A, F>(&self, init: A, f: &mut F) -> A
    where
        F: FnMut(A, &K, &V) -> A,
    {
        self.children
            .iter()
            .fold(init, |acc, leaf| f(acc, &leaf.key, &leaf.value))
    }
}

impl<K: Eq, V, P: SharedPointerKind> Collision<K, V, P> {
    /// Make a new node holding `leaf`.
    ///
    /// A leaf with a key that's already here takes the old one's place,
    /// which is also returned. Anything else goes on the end.
    #[must_use]
    pub fn assoc(
        &self,
        leaf: SharedPointer<Leaf<K, V>, P>,
    ) -> (Self, Option<SharedPointer<Leaf<K, V>, P>>) {
        debug_assert_eq!(
            self.hash, leaf.hash,
            "nodes::hamt::Collision::assoc: hash mismatch"
        );
        let existing = self
            .children
            .iter()
            .position(|current| current.key == leaf.key);
        match existing {
            Some(index) => {
                let replaced = self.children[index].clone();
                let coll = Collision {
                    hash: self.hash,
                    children: replace_at(&self.children, leaf, index),
                };
                (coll, Some(replaced))
            }
            None => {
                let coll = Collision {
                    hash: self.hash,
                    children: insert_at(&self.children, leaf, self.children.len()),
                };
                (coll, None)
            }
        }
    }
}

// Invariant checks

#[cfg(any(test, feature = "debug"))]
impl<K: Eq, V, P: SharedPointerKind> Branch<K, V, P> {
    /// Walk the subtree at level `shift`, whose path from the root spells
    /// out the low `shift` bits `prefix`, panicking on any broken
    /// invariant. Returns the number of entries found.
    pub(crate) fn check_invariants(&self, shift: usize, prefix: HashBits, is_root: bool) -> usize {
        assert_eq!(
            self.bitmap.len(),
            self.children.len(),
            "bitmap {:#034b} doesn't match {} children at shift {}",
            self.bitmap(),
            self.children.len(),
            shift
        );
        if !is_root {
            assert!(!self.is_empty(), "empty branch at shift {}", shift);
            assert!(
                self.len() > 1 || !self.children[0].is_leaf(),
                "branch at shift {} holds a lone leaf",
                shift
            );
        }
        let low_bits = bit_position_of(shift) - 1;
        let mut count = 0;
        for (fragment, child) in (&self.bitmap).into_iter().zip(self.children.iter()) {
            let path = prefix | (fragment as HashBits) << shift;
            match child {
                Node::Leaf(leaf) => {
                    assert_eq!(prefix, leaf.hash & low_bits, "leaf off its path");
                    assert_eq!(fragment, mask(leaf.hash, shift) as usize, "leaf in wrong slot");
                    count += 1;
                }
                Node::Branch(branch) => {
                    assert!(
                        shift + HASH_SHIFT < HASH_WIDTH,
                        "branch below the last level"
                    );
                    count += branch.check_invariants(shift + HASH_SHIFT, path, false);
                }
                Node::Collision(coll) => {
                    assert!(
                        shift + HASH_SHIFT >= HASH_WIDTH,
                        "collision node at shift {} with hash bits to spare",
                        shift
                    );
                    assert_eq!(prefix, coll.hash & low_bits, "collision off its path");
                    assert_eq!(fragment, mask(coll.hash, shift) as usize, "collision in wrong slot");
                    coll.check_invariants();
                    count += coll.len();
                }
            }
        }
        count
    }
}

#[cfg(any(test, feature = "debug"))]
impl<K: Eq, V, P: SharedPointerKind> Collision<K, V, P> {
    fn check_invariants(&self) {
        assert!(self.len() >= 2, "collision node with {} leaves", self.len());
        for (index, leaf) in self.children.iter().enumerate() {
            assert_eq!(self.hash, leaf.hash, "collision node with mixed hashes");
            assert!(
                self.children[index + 1..]
                    .iter()
                    .all(|other| other.key != leaf.key),
                "collision node with a duplicate key"
            );
        }
    }
}

// Ref iterator

/// A depth first iterator over the leaves of a branch, in the same order
/// `kvreduce` visits them.
pub struct Iter<'a, K, V, P: SharedPointerKind> {
    count: usize,
    stack: Vec<SliceIter<'a, Node<K, V, P>>>,
    collision: Option<SliceIter<'a, SharedPointer<Leaf<K, V>, P>>>,
}

// We impl Clone instead of deriving it, because we want Clone even if K and V aren't.
impl<'a, K, V, P: SharedPointerKind> Clone for Iter<'a, K, V, P> {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            stack: self.stack.clone(),
            collision: self.collision.clone(),
        }
    }
}

impl<'a, K, V, P: SharedPointerKind> Iter<'a, K, V, P> {
    pub(crate) fn new(root: &'a Branch<K, V, P>, size: usize) -> Self {
        let mut result = Iter {
            count: size,
            stack: Vec::with_capacity((HASH_WIDTH / HASH_SHIFT) + 1),
            collision: None,
        };
        result.stack.push(root.children.iter());
        result
    }

    pub(crate) fn empty() -> Self {
        Iter {
            count: 0,
            stack: Vec::new(),
            collision: None,
        }
    }
}

impl<'a, K, V, P: SharedPointerKind> Iterator for Iter<'a, K, V, P> {
    type Item = &'a Leaf<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        'outer: loop {
            if let Some(coll) = &mut self.collision {
                match coll.next() {
                    None => self.collision = None,
                    Some(leaf) => {
                        self.count -= 1;
                        return Some(&**leaf);
                    }
                };
            }

            while let Some(current) = self.stack.last_mut() {
                match current.next() {
                    Some(Node::Leaf(leaf)) => {
                        self.count -= 1;
                        return Some(&**leaf);
                    }
                    Some(Node::Branch(child)) => {
                        self.stack.push(child.children.iter());
                    }
                    Some(Node::Collision(coll)) => {
                        self.collision = Some(coll.children.iter());
                        continue 'outer;
                    }
                    None => {
                        self.stack.pop();
                    }
                }
            }
            return None;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.count, Some(self.count))
    }
}

impl<'a, K, V, P: SharedPointerKind> ExactSizeIterator for Iter<'a, K, V, P> {}

impl<'a, K, V, P: SharedPointerKind> FusedIterator for Iter<'a, K, V, P> {}

impl<K: fmt::Debug, V: fmt::Debug, P: SharedPointerKind> fmt::Debug for Node<K, V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Node::Leaf(leaf) => write!(f, "{:?}: {:?} :: {:#010x}", leaf.key, leaf.value, leaf.hash),
            Node::Branch(branch) => fmt::Debug::fmt(&**branch, f),
            Node::Collision(coll) => fmt::Debug::fmt(&**coll, f),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, P: SharedPointerKind> fmt::Debug for Branch<K, V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Branch[ ")?;
        for (fragment, child) in (&self.bitmap).into_iter().zip(self.children.iter()) {
            write!(f, "{}: {:?}, ", fragment, child)?;
        }
        write!(f, "]")
    }
}

impl<K: fmt::Debug, V: fmt::Debug, P: SharedPointerKind> fmt::Debug for Collision<K, V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Coll[ ")?;
        for leaf in &self.children {
            write!(f, "{:?}: {:?}, ", leaf.key, leaf.value)?;
        }
        write!(f, "] :: {:#010x}", self.hash)
    }
}
