// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

// Every codebase needs a `util` module.

use std::iter::{once, FromIterator};

use crate::nodes::hamt::{HashBits, HASH_WIDTH};

/// Count the set bits in a bitmap.
///
/// This compiles down to a single `popcnt` where the target has one,
/// and to the usual SWAR sequence where it doesn't.
#[inline]
pub(crate) fn popcount(bitmap: HashBits) -> u32 {
    bitmap.count_ones()
}

/// The bitmap with only the bit for `fragment` set.
#[inline]
pub(crate) fn bit_position_of(fragment: usize) -> HashBits {
    debug_assert!(
        fragment < HASH_WIDTH,
        "util::bit_position_of: fragment {} out of range",
        fragment
    );
    1 << fragment
}

/// Copy `items` with `item` inserted before `index`.
pub(crate) fn insert_at<A, C>(items: &[A], item: A, index: usize) -> C
where
    A: Clone,
    C: FromIterator<A>,
{
    assert!(
        index <= items.len(),
        "util::insert_at: index {} out of bounds for length {}",
        index,
        items.len()
    );
    items[..index]
        .iter()
        .cloned()
        .chain(once(item))
        .chain(items[index..].iter().cloned())
        .collect()
}

/// Copy `items` with the element at `index` swapped for `item`.
pub(crate) fn replace_at<A, C>(items: &[A], item: A, index: usize) -> C
where
    A: Clone,
    C: FromIterator<A>,
{
    assert!(
        index < items.len(),
        "util::replace_at: index {} out of bounds for length {}",
        index,
        items.len()
    );
    items[..index]
        .iter()
        .cloned()
        .chain(once(item))
        .chain(items[index + 1..].iter().cloned())
        .collect()
}

/// Copy `items` without the element at `index`.
pub(crate) fn remove_at<A, C>(items: &[A], index: usize) -> C
where
    A: Clone,
    C: FromIterator<A>,
{
    assert!(
        index < items.len(),
        "util::remove_at: index {} out of bounds for length {}",
        index,
        items.len()
    );
    items[..index]
        .iter()
        .cloned()
        .chain(items[index + 1..].iter().cloned())
        .collect()
}

#[cfg(test)]
macro_rules! assert_covariant {
    ($name:ident<$($gen:tt),*> in $param:ident) => {
        #[allow(dead_code, unused_assignments, unused_variables)]
        const _: () = {
            type Tmp<$param> = $name<$($gen),*>;
            fn assign<'a, 'b: 'a>(src: Tmp<&'b i32>, mut dst: Tmp<&'a i32>) {
                dst = src;
            }
        };
    }
}
