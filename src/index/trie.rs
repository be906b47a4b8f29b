//! Prefix trie mapping headwords to their payloads.
//!
//! Built once from the dictionary records, then queried read-only. Children
//! are kept in a `BTreeMap` so prefix enumeration is deterministic and
//! ascending by `char` order.

use crate::index::types::Payload;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    /// `Some` iff a word ends at this node
    payload: Option<Payload>,
}

/// A prefix trie over one direction's headword set.
///
/// Case-sensitive by construction; callers normalize before querying.
#[derive(Debug, Default)]
pub struct TrieIndex {
    root: TrieNode,
    len: usize,
}

impl TrieIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, walking or creating one edge per character.
    ///
    /// Re-inserting an existing word silently overwrites its payload
    /// (last write wins).
    pub fn insert(&mut self, word: &str, payload: Payload) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.payload.is_none() {
            self.len += 1;
        }
        node.payload = Some(payload);
    }

    /// Exact lookup. Returns `None` the instant an edge is missing, or when
    /// the final node is only a prefix of something longer.
    pub fn get(&self, word: &str) -> Option<&Payload> {
        let mut node = &self.root;
        for ch in word.chars() {
            node = node.children.get(&ch)?;
        }
        node.payload.as_ref()
    }

    /// Collect every stored word starting with `prefix`, in ascending
    /// `char` order. Returns an empty vec as soon as any prefix edge is
    /// missing.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut node = &self.root;
        for ch in prefix.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }

        let mut words = Vec::new();
        let mut buf = prefix.to_string();
        collect_words(node, &mut buf, &mut words);
        words
    }

    /// Number of distinct words stored
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total node count including the root (for stats)
    pub fn node_count(&self) -> usize {
        fn count(node: &TrieNode) -> usize {
            1 + node.children.values().map(count).sum::<usize>()
        }
        count(&self.root)
    }
}

/// Depth-first traversal appending every terminal word under `node`
fn collect_words(node: &TrieNode, buf: &mut String, words: &mut Vec<String>) {
    if node.payload.is_some() {
        words.push(buf.clone());
    }
    for (&ch, child) in &node.children {
        buf.push(ch);
        collect_words(child, buf, words);
        buf.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(def: &str) -> Payload {
        Payload {
            pronunciation: String::new(),
            definition: def.to_string(),
        }
    }

    #[test]
    fn test_insert_and_get() {
        let mut trie = TrieIndex::new();
        trie.insert("cat", payload("con mèo"));
        trie.insert("car", payload("xe hơi"));

        assert_eq!(trie.get("cat").unwrap().definition, "con mèo");
        assert_eq!(trie.get("car").unwrap().definition, "xe hơi");
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_prefix_is_not_a_word() {
        let mut trie = TrieIndex::new();
        trie.insert("carpet", payload("thảm"));

        // "car" exists only as a path, not a terminal node
        assert!(trie.get("car").is_none());
        assert!(trie.get("carpet").is_some());
    }

    #[test]
    fn test_missing_edge_returns_none() {
        let mut trie = TrieIndex::new();
        trie.insert("cat", payload("con mèo"));

        assert!(trie.get("dog").is_none());
        assert!(trie.get("cats").is_none());
        assert!(trie.get("").is_none());
    }

    #[test]
    fn test_duplicate_insert_overwrites() {
        let mut trie = TrieIndex::new();
        trie.insert("cat", payload("first"));
        trie.insert("cat", payload("second"));

        assert_eq!(trie.get("cat").unwrap().definition, "second");
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_words_with_prefix_sorted() {
        let mut trie = TrieIndex::new();
        for word in ["car", "cart", "carpet", "cat", "dog"] {
            trie.insert(word, payload(word));
        }

        assert_eq!(
            trie.words_with_prefix("car"),
            vec!["car", "carpet", "cart"]
        );
        assert_eq!(trie.words_with_prefix("ca"), vec!["car", "carpet", "cart", "cat"]);
        assert_eq!(trie.words_with_prefix("z"), Vec::<String>::new());
    }

    #[test]
    fn test_empty_prefix_enumerates_everything() {
        let mut trie = TrieIndex::new();
        for word in ["b", "a", "c"] {
            trie.insert(word, payload(word));
        }
        assert_eq!(trie.words_with_prefix(""), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_multibyte_words() {
        let mut trie = TrieIndex::new();
        trie.insert("mèo", payload("cat"));
        trie.insert("mè", payload("sesame"));

        assert_eq!(trie.get("mèo").unwrap().definition, "cat");
        assert_eq!(trie.words_with_prefix("mè"), vec!["mè", "mèo"]);
    }

    #[test]
    fn test_empty_trie() {
        let trie = TrieIndex::new();
        assert!(trie.is_empty());
        assert!(trie.get("anything").is_none());
        assert!(trie.words_with_prefix("a").is_empty());
        assert_eq!(trie.node_count(), 1); // root only
    }
}
