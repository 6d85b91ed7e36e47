#![no_main]

use std::collections::HashMap as NatMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use phamt::{HashBits, Trie};

// A narrow hash, so that the fuzzer finds deep paths and collisions
// without having to guess 32 matching bits.
fn hash(key: u16) -> HashBits {
    HashBits::from(key & 0x0fff).rotate_left(20)
}

#[derive(Arbitrary, Debug)]
enum Action {
    Assoc(u16, u32),
    Without(u16),
    Lookup(u16),
}

fuzz_target!(|actions: Vec<Action>| {
    let mut trie = Trie::new();
    let mut nat = NatMap::new();
    for action in actions {
        match action {
            Action::Assoc(key, value) => {
                let before = trie.clone();
                nat.insert(key, value);
                trie = trie.assoc(hash(key), key, value);
                assert_eq!(Some(&value), trie.lookup(hash(key), &key));
                assert_eq!(before.len() + usize::from(!before.contains_key(hash(key), &key)), trie.len());
            }
            Action::Without(key) => {
                let before = trie.clone();
                nat.remove(&key);
                trie = trie.without(hash(key), &key);
                assert_eq!(None, trie.lookup(hash(key), &key));
                if !before.contains_key(hash(key), &key) {
                    assert!(before.ptr_eq(&trie));
                }
            }
            Action::Lookup(key) => {
                assert_eq!(nat.get(&key), trie.lookup(hash(key), &key));
            }
        }
        assert_eq!(nat.len(), trie.len());
    }
    trie.assert_invariants();
    let rebuilt: Trie<u16, u32> = nat.iter().map(|(k, v)| (hash(*k), *k, *v)).collect();
    assert_eq!(rebuilt, trie);
    assert_eq!(trie.iter().count(), nat.len());
    assert_eq!(NatMap::from_iter(trie.iter().map(|(k, v)| (*k, *v))), nat);
});
