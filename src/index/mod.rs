pub mod automaton;
pub mod build;
pub mod stats;
pub mod trie;
pub mod types;

pub use automaton::{Match, PatternAutomaton};
pub use trie::TrieIndex;
pub use types::*;
