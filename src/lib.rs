//! # DIX - Bilingual Dictionary Lookup Engine
//!
//! DIX is a terminal-first bilingual dictionary lookup engine. Its core is a
//! pair of string-indexing structures built once per translation direction
//! and then queried read-only:
//!
//! - a **prefix trie** mapping headwords to pronunciation/definition
//!   payloads, answering exact lookup and prefix autocomplete;
//! - an **Aho-Corasick automaton** over the same headword set, detecting
//!   every dictionary word occurring anywhere inside a query string in a
//!   single pass, which powers the did-you-mean fallback.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - The trie, the pattern automaton, and dictionary loading
//! - [`query`] - The lookup engine composing both structures per direction
//! - [`output`] - Terminal result rendering
//!
//! ## Quick Start
//!
//! ```
//! use dix::index::{Direction, EngineConfig, Entry};
//! use dix::query::LookupEngine;
//!
//! let forward = vec![Entry {
//!     word: "cat".to_string(),
//!     pronunciation: "kæt".to_string(),
//!     definition: "con mèo".to_string(),
//! }];
//!
//! let engine = LookupEngine::from_entries(&forward, &[], EngineConfig::default());
//!
//! assert!(engine.lookup("cat", Direction::Forward).is_some());
//! assert_eq!(engine.autocomplete("ca", Direction::Forward), vec!["cat"]);
//! assert_eq!(engine.suggest_on_miss("concatenate", Direction::Forward), vec!["cat"]);
//! ```
//!
//! ## Query model
//!
//! All three operations are total: a miss is the value `None` or an empty
//! vec, never an error. Both structures are immutable after the one-time
//! construction pass, so the engine is safe to share across arbitrarily
//! many concurrent readers without locking.

pub mod index;
pub mod output;
pub mod query;
