use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Identifier of a state in the automaton arena
pub type StateId = u32;

/// Identifier of a pattern registered with the automaton (insertion order)
pub type PatternId = u32;

/// Which of the two translation pairs a query or index applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Language A to language B
    #[default]
    Forward,
    /// Language B to language A
    Reverse,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Reverse => "reverse",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single dictionary record as it appears in the JSON dictionary files.
/// Supplied externally at startup and never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub word: String,
    /// May be empty; some headwords have no recorded pronunciation
    #[serde(default)]
    pub pronunciation: String,
    pub definition: String,
}

/// What the trie stores for each terminal word. Serializes for the CLI's
/// `--json` output; only `Entry` is ever deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Payload {
    pub pronunciation: String,
    pub definition: String,
}

impl Entry {
    pub fn payload(&self) -> Payload {
        Payload {
            pronunciation: self.pronunciation.clone(),
            definition: self.definition.clone(),
        }
    }
}

/// Configuration for the lookup engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Shortest pattern length (in chars) that suggest_on_miss will report.
    /// Shorter automaton matches are considered noise.
    pub min_suggest_len: usize,
    /// Maximum number of autocomplete results returned per query
    pub autocomplete_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_suggest_len: 3,
            autocomplete_limit: 10,
        }
    }
}
