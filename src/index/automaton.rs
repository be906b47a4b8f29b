//! Multi-pattern matching automaton (Aho-Corasick) over one direction's
//! headword set.
//!
//! States live in a contiguous arena and refer to each other by index, so
//! failure links are plain back-references rather than a second ownership
//! path. Construction is two-phase: a trie insertion pass, then a
//! breadth-first failure-link pass that also closes every state's output
//! set under its failure chain. After construction the automaton is
//! read-only and can be shared freely across readers.

use crate::index::types::{PatternId, StateId};
use rustc_hash::FxHashSet;
use std::collections::{BTreeMap, VecDeque};

const ROOT: StateId = 0;

#[derive(Debug, Default)]
struct State {
    edges: BTreeMap<char, StateId>,
    /// Scan-reset target; the root's failure link is the root itself
    fail: StateId,
    /// Pattern ids recognized as ending at this state, closed under the
    /// failure chain once construction finishes. The state's own pattern
    /// comes first, then the inherited ones in failure-chain order, so
    /// patterns are stored longest first.
    outputs: Vec<PatternId>,
}

#[derive(Debug)]
struct Pattern {
    text: String,
    /// Length in chars, precomputed for offset arithmetic during scans
    char_len: usize,
}

/// A single occurrence of a pattern inside scanned text.
///
/// `start` is a character offset, not a byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pub start: usize,
    pub pattern: &'a str,
}

/// Aho-Corasick automaton built once over a fixed pattern set.
#[derive(Debug)]
pub struct PatternAutomaton {
    states: Vec<State>,
    patterns: Vec<Pattern>,
}

impl PatternAutomaton {
    /// Build the automaton over `patterns` in two phases: trie insertion,
    /// then the breadth-first failure-link pass.
    ///
    /// Empty patterns are skipped. A pattern supplied twice is registered
    /// once, under its first-occurrence id.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut automaton = Self {
            states: vec![State::default()],
            patterns: Vec::new(),
        };

        let mut seen: FxHashSet<String> = FxHashSet::default();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            if pattern.is_empty() || !seen.insert(pattern.to_string()) {
                continue;
            }
            automaton.insert_pattern(pattern);
        }

        automaton.build_failure_links();
        automaton
    }

    /// Trie phase: walk or create one edge per character, then record the
    /// pattern id at the terminal state.
    fn insert_pattern(&mut self, pattern: &str) {
        let mut state = ROOT;
        for ch in pattern.chars() {
            state = match self.states[state as usize].edges.get(&ch) {
                Some(&next) => next,
                None => {
                    let next = self.states.len() as StateId;
                    self.states.push(State::default());
                    self.states[state as usize].edges.insert(ch, next);
                    next
                }
            };
        }

        let id = self.patterns.len() as PatternId;
        self.patterns.push(Pattern {
            char_len: pattern.chars().count(),
            text: pattern.to_string(),
        });
        self.states[state as usize].outputs.push(id);
    }

    /// Failure-link phase, breadth-first from the root.
    ///
    /// Every direct child of the root fails to the root. For each deeper
    /// state the link is found by walking the parent's failure chain until
    /// a state with a matching edge appears (or the root is reached).
    /// Immediately afterwards the child's outputs are unioned with its
    /// failure target's, so output sets never need the chain re-walked at
    /// scan time.
    fn build_failure_links(&mut self) {
        let mut queue = VecDeque::new();

        let root_children: Vec<StateId> =
            self.states[ROOT as usize].edges.values().copied().collect();
        for child in root_children {
            self.states[child as usize].fail = ROOT;
            queue.push_back(child);
        }

        while let Some(state) = queue.pop_front() {
            let edges: Vec<(char, StateId)> = self.states[state as usize]
                .edges
                .iter()
                .map(|(&ch, &child)| (ch, child))
                .collect();

            for (ch, child) in edges {
                queue.push_back(child);

                let mut fail = self.states[state as usize].fail;
                while fail != ROOT && !self.states[fail as usize].edges.contains_key(&ch) {
                    fail = self.states[fail as usize].fail;
                }
                let target = self.states[fail as usize]
                    .edges
                    .get(&ch)
                    .copied()
                    .unwrap_or(ROOT);
                self.states[child as usize].fail = target;

                // BFS order guarantees the target's outputs are already
                // closed, so a single union suffices. Appending keeps the
                // child's own pattern ahead of the inherited ones; the
                // inherited patterns are proper suffixes, so no id can
                // appear twice.
                let inherited = self.states[target as usize].outputs.clone();
                self.states[child as usize].outputs.extend(inherited);
            }
        }
    }

    /// Scan `text` in a single left-to-right pass and report every
    /// occurrence of every pattern, including overlapping and nested ones.
    ///
    /// Matches come out in ascending end-position order; at a shared end
    /// position, longest pattern first (the state's own pattern precedes
    /// those inherited through its failure chain), which is ascending
    /// start-offset order. One transition per input character, amortized
    /// O(1) via failure links.
    pub fn scan<'a>(&'a self, text: &str) -> Vec<Match<'a>> {
        let mut matches = Vec::new();
        let mut state = ROOT;

        for (i, ch) in text.chars().enumerate() {
            state = self.next_state(state, ch);
            for &id in &self.states[state as usize].outputs {
                let pattern = &self.patterns[id as usize];
                matches.push(Match {
                    start: i + 1 - pattern.char_len,
                    pattern: &pattern.text,
                });
            }
        }

        matches
    }

    /// Follow failure links until a state with an edge for `ch` is found;
    /// the root absorbs characters it has no edge for.
    fn next_state(&self, mut state: StateId, ch: char) -> StateId {
        loop {
            if let Some(&next) = self.states[state as usize].edges.get(&ch) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.states[state as usize].fail;
        }
    }

    /// Number of distinct patterns registered
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Number of states in the arena, root included (for stats)
    pub fn state_count(&self) -> usize {
        self.states.len()
    }
}
