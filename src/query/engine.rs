//! Lookup engine composing the per-direction tries and automata into the
//! three query operations: exact lookup, did-you-mean suggestions, and
//! prefix autocomplete.

use crate::index::automaton::PatternAutomaton;
use crate::index::trie::TrieIndex;
use crate::index::types::{Direction, EngineConfig, Entry, Payload};
use rustc_hash::FxHashSet;

/// The trie/automaton pair built from one direction's record set.
/// Both structures cover the same headwords.
#[derive(Debug)]
pub struct DirectionIndex {
    trie: TrieIndex,
    automaton: PatternAutomaton,
}

impl DirectionIndex {
    /// Bulk-build both structures from one direction's records.
    ///
    /// A word appearing twice keeps its last payload (last write wins);
    /// the automaton registers it once.
    pub fn from_entries(entries: &[Entry]) -> Self {
        let mut trie = TrieIndex::new();
        for entry in entries {
            trie.insert(&entry.word, entry.payload());
        }
        let automaton = PatternAutomaton::new(entries.iter().map(|e| e.word.as_str()));
        Self { trie, automaton }
    }

    pub fn trie(&self) -> &TrieIndex {
        &self.trie
    }

    pub fn automaton(&self) -> &PatternAutomaton {
        &self.automaton
    }
}

/// Read-only query front end over both translation directions.
///
/// Construction happens once, before any query is served; afterwards every
/// operation takes `&self` and the engine can be shared across threads.
#[derive(Debug)]
pub struct LookupEngine {
    forward: DirectionIndex,
    reverse: DirectionIndex,
    config: EngineConfig,
}

impl LookupEngine {
    pub fn new(forward: DirectionIndex, reverse: DirectionIndex, config: EngineConfig) -> Self {
        Self {
            forward,
            reverse,
            config,
        }
    }

    /// Convenience constructor used by tests and small callers
    pub fn from_entries(forward: &[Entry], reverse: &[Entry], config: EngineConfig) -> Self {
        Self::new(
            DirectionIndex::from_entries(forward),
            DirectionIndex::from_entries(reverse),
            config,
        )
    }

    pub fn direction(&self, direction: Direction) -> &DirectionIndex {
        match direction {
            Direction::Forward => &self.forward,
            Direction::Reverse => &self.reverse,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Exact headword lookup. Case-sensitive; the caller normalizes if the
    /// surrounding service wants case-insensitive behavior.
    pub fn lookup(&self, word: &str, direction: Direction) -> Option<&Payload> {
        self.direction(direction).trie.get(word)
    }

    /// Did-you-mean fallback for a failed lookup: scan the query text for
    /// dictionary words occurring as literal substrings.
    ///
    /// Matches shorter than `min_suggest_len` chars are dropped as noise.
    /// Results are deduplicated preserving first-discovery order and are
    /// not capped here. This is substring detection, not fuzzy matching:
    /// a query shorter than every qualifying headword can never produce
    /// suggestions.
    pub fn suggest_on_miss(&self, query: &str, direction: Direction) -> Vec<&str> {
        let index = self.direction(direction);
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut suggestions = Vec::new();

        for m in index.automaton.scan(query) {
            if m.pattern.chars().count() < self.config.min_suggest_len {
                continue;
            }
            if seen.insert(m.pattern) {
                suggestions.push(m.pattern);
            }
        }

        suggestions
    }

    /// Prefix autocomplete, truncated to `autocomplete_limit` entries in
    /// the trie's ascending enumeration order.
    ///
    /// An empty prefix yields an empty sequence rather than the whole
    /// dictionary (or an error).
    pub fn autocomplete(&self, prefix: &str, direction: Direction) -> Vec<String> {
        if prefix.is_empty() {
            return Vec::new();
        }
        let mut words = self.direction(direction).trie.words_with_prefix(prefix);
        words.truncate(self.config.autocomplete_limit);
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, definition: &str) -> Entry {
        Entry {
            word: word.to_string(),
            pronunciation: String::new(),
            definition: definition.to_string(),
        }
    }

    fn engine(forward: &[(&str, &str)]) -> LookupEngine {
        let entries: Vec<Entry> = forward.iter().map(|(w, d)| entry(w, d)).collect();
        LookupEngine::from_entries(&entries, &[], EngineConfig::default())
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let engine = engine(&[("cat", "con mèo"), ("dog", "con chó")]);
        assert_eq!(
            engine.lookup("cat", Direction::Forward).unwrap().definition,
            "con mèo"
        );
        assert!(engine.lookup("bird", Direction::Forward).is_none());
        // the reverse direction is a separate index
        assert!(engine.lookup("cat", Direction::Reverse).is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let engine = engine(&[("cat", "con mèo")]);
        assert!(engine.lookup("Cat", Direction::Forward).is_none());
    }

    #[test]
    fn test_suggest_filters_short_matches() {
        let engine = engine(&[("he", "1"), ("she", "2")]);
        // "he" matches twice inside "ushe" but is below the length floor
        assert_eq!(engine.suggest_on_miss("ushe", Direction::Forward), vec!["she"]);
    }

    #[test]
    fn test_suggest_dedups_in_first_discovery_order() {
        let engine = engine(&[("cat", "1"), ("cart", "2"), ("art", "3")]);
        // cartcat: "cart" ends at 3, inheriting "art"; "cat" ends at 6;
        // a second "art"-free pass confirms each word appears once
        assert_eq!(
            engine.suggest_on_miss("cartcat", Direction::Forward),
            vec!["cart", "art", "cat"]
        );
        assert_eq!(engine.suggest_on_miss("artart", Direction::Forward), vec!["art"]);
    }

    #[test]
    fn test_suggest_on_short_query_never_fires() {
        let engine = engine(&[("cat", "1")]);
        assert!(engine.suggest_on_miss("ca", Direction::Forward).is_empty());
        assert!(engine.suggest_on_miss("", Direction::Forward).is_empty());
    }

    #[test]
    fn test_autocomplete_caps_at_limit() {
        let words: Vec<(String, String)> = (0..15)
            .map(|i| (format!("word{i:02}"), format!("def {i}")))
            .collect();
        let pairs: Vec<(&str, &str)> = words
            .iter()
            .map(|(w, d)| (w.as_str(), d.as_str()))
            .collect();
        let engine = engine(&pairs);

        let completions = engine.autocomplete("word", Direction::Forward);
        assert_eq!(completions.len(), 10);
        // deterministic ascending order means the first ten numerically
        assert_eq!(completions[0], "word00");
        assert_eq!(completions[9], "word09");
    }

    #[test]
    fn test_autocomplete_empty_prefix_is_empty() {
        let engine = engine(&[("cat", "1")]);
        assert!(engine.autocomplete("", Direction::Forward).is_empty());
    }

    #[test]
    fn test_empty_record_set_is_valid() {
        let engine = LookupEngine::from_entries(&[], &[], EngineConfig::default());
        assert!(engine.lookup("cat", Direction::Forward).is_none());
        assert!(engine.suggest_on_miss("concatenate", Direction::Forward).is_empty());
        assert!(engine.autocomplete("c", Direction::Forward).is_empty());
    }

    #[test]
    fn test_duplicate_word_keeps_last_payload() {
        let entries = vec![entry("cat", "first"), entry("cat", "second")];
        let engine = LookupEngine::from_entries(&entries, &[], EngineConfig::default());
        assert_eq!(
            engine.lookup("cat", Direction::Forward).unwrap().definition,
            "second"
        );
        // and the automaton reports it once
        assert_eq!(engine.suggest_on_miss("xcatx", Direction::Forward), vec!["cat"]);
    }
}
