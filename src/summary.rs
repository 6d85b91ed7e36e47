// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Per-level statistics about the shape of a trie.

use std::collections::VecDeque;
use std::fmt::{Display, Error, Formatter};

use archery::SharedPointerKind;

use crate::config::HASH_LEVEL_SIZE;
use crate::nodes::hamt::{Branch, Node, HASH_WIDTH};

/// What one level of a trie holds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelStats {
    pub branches: usize,
    pub leaves: usize,
    pub collisions: usize,
    pub collision_leaves: usize,
}

/// A breadth first census of a trie, one [`LevelStats`] per level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StructureSummary {
    pub levels: Vec<LevelStats>,
    pub entries: usize,
}

impl StructureSummary {
    pub(crate) fn of<K, V, P>(root: Option<&Branch<K, V, P>>, entries: usize) -> Self
    where
        P: SharedPointerKind,
    {
        let mut levels: Vec<LevelStats> = Vec::new();
        let mut queue: VecDeque<(usize, &Branch<K, V, P>)> = VecDeque::new();
        if let Some(root) = root {
            queue.push_back((0, root));
        }

        while let Some((level, branch)) = queue.pop_front() {
            if levels.len() <= level {
                levels.resize_with(level + 1, LevelStats::default);
            }
            let stats = &mut levels[level];
            stats.branches += 1;
            for child in branch.children() {
                match child {
                    Node::Leaf(_) => stats.leaves += 1,
                    Node::Collision(coll) => {
                        stats.collisions += 1;
                        stats.collision_leaves += coll.len();
                    }
                    Node::Branch(child) => queue.push_back((level + 1, &**child)),
                }
            }
        }

        StructureSummary { levels, entries }
    }

    /// The number of branch levels.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }
}

impl Display for StructureSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        writeln!(f, "Trie structure summary:")?;
        writeln!(f, "  Hash level size (bits): {}", HASH_LEVEL_SIZE)?;
        writeln!(f, "  Branching factor: {}", HASH_WIDTH)?;
        writeln!(f, "  Total entries: {}", self.entries)?;
        write!(f, "  Tree depth: {} levels", self.depth())?;
        for (level, stats) in self.levels.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "  Level {}:", level)?;
            writeln!(f, "    Branches: {}", stats.branches)?;
            writeln!(f, "    Leaves: {}", stats.leaves)?;
            write!(
                f,
                "    Collisions: {} ({} leaves)",
                stats.collisions, stats.collision_leaves
            )?;
        }
        Ok(())
    }
}
