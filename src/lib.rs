// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! # Persistent Hash Array Mapped Tries
//!
//! This crate provides a persistent [hash array mapped trie][hamt], the
//! structure underneath Clojure's and Scala's immutable hash maps.
//!
//! A [`Trie`] maps keys to values. It never changes once built: every
//! update hands you back a new trie, and the old one is still there, as
//! good as ever. The two versions share all the nodes the update didn't
//! have to touch, so keeping old versions around is cheap, and cloning a
//! trie is O(1).
//!
//! ## Hashes come from the caller
//!
//! The trie doesn't hash anything. Every operation takes a 32 bit hash
//! ([`HashBits`]) alongside the key, and it's up to the caller to supply
//! the same hash for equal keys. The trie consumes the hash five bits at
//! a time, lowest bits first, one level of 32 way branching per five
//! bits. Keys whose hashes agree on all 32 bits end up side by side in a
//! [`Collision`] node and are told apart by key equality.
//!
//! ```
//! use std::collections::hash_map::DefaultHasher;
//! use std::hash::{Hash, Hasher};
//!
//! use phamt::{HashBits, Trie};
//!
//! fn hash<K: Hash + ?Sized>(key: &K) -> HashBits {
//!     let mut hasher = DefaultHasher::new();
//!     key.hash(&mut hasher);
//!     hasher.finish() as HashBits
//! }
//!
//! let empty = Trie::new();
//! let one = empty.assoc(hash("one"), "one", 1);
//! let two = one.assoc(hash("two"), "two", 2);
//!
//! assert_eq!(Some(&1), two.lookup(hash("one"), "one"));
//! assert_eq!(None, one.lookup(hash("two"), "two"));
//! assert_eq!(3, two.reduce(0, |sum, value| sum + value));
//!
//! let back = two.without(hash("two"), "two");
//! assert_eq!(one, back);
//! assert!(empty.is_empty());
//! ```
//!
//! ## Pointers
//!
//! Nodes are shared through [`archery`]'s pointers, [`ArcK`][shared_ptr::ArcK]
//! by default, so tries can be read from many threads at once. Use
//! [`GenericTrie`] with [`RcK`][shared_ptr::RcK] for a single threaded trie
//! with cheaper reference counting, or enable the `triomphe` feature to make
//! the default [`triomphe`](https://docs.rs/triomphe)'s `Arc`.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! | ------- | ----------- |
//! | `debug` | Expose [`GenericTrie::assert_invariants`], which walks a whole trie checking its shape |
//! | `triomphe` | Use [`triomphe::Arc`](https://docs.rs/triomphe) as the default shared pointer |
//!
//! [hamt]: https://en.wikipedia.org/wiki/Hash_array_mapped_trie
//! [`archery`]: https://docs.rs/archery

#![forbid(rust_2018_idioms)]
#![deny(nonstandard_style)]

#[macro_use]
mod util;

mod config;

pub mod nodes;
pub mod shared_ptr;
pub mod summary;
pub mod trie;

pub use crate::nodes::hamt::{Branch, Collision, HashBits, Leaf, Node};
pub use crate::summary::StructureSummary;
pub use crate::trie::{GenericTrie, Trie};
