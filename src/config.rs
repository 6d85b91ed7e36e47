// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// The level size of the trie, in bits.
/// Branching factor is 2 ^ HashLevelSize, and must match the
/// width of the hash so that one bitmap covers one level.
pub const HASH_LEVEL_SIZE: usize = 5;
