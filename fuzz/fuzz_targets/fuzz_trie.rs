#![no_main]

use dix::index::{Payload, TrieIndex};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<String>, String)| {
    let (words, probe) = input;

    let mut trie = TrieIndex::new();
    for word in &words {
        trie.insert(word, Payload::default());
    }

    // every inserted word must round-trip
    for word in &words {
        assert!(trie.get(word).is_some());
    }

    // prefix enumeration over arbitrary probes must not panic, and every
    // reported word must actually start with the probe
    for found in trie.words_with_prefix(&probe) {
        assert!(found.starts_with(&probe));
    }
});
