// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The nodes a trie is built from.
//!
//! These are exposed for callers that want to walk a trie's shape or
//! drive it a level at a time; [`GenericTrie`][crate::GenericTrie] is the
//! way in for everyone else.

pub mod hamt;

pub(crate) mod chunk {
    use super::hamt::HASH_WIDTH;
    use imbl_sized_chunks as sc;

    /// Dense child storage for one branch: never more than one child per
    /// hash fragment.
    pub(crate) type Chunk<A> = sc::sized_chunk::Chunk<A, HASH_WIDTH>;
}
