//! Index statistics command.

use crate::index::build::load_engine;
use crate::index::types::{Direction, EngineConfig};
use crate::query::engine::LookupEngine;
use anyhow::Result;
use std::path::Path;

/// Display statistics for both direction indexes
pub fn show_stats(dict_dir: &Path) -> Result<()> {
    let engine = load_engine(dict_dir, EngineConfig::default(), true)?;

    println!("Dictionary Statistics");
    println!("=====================");
    println!();
    println!("Dictionary dir:   {}", dict_dir.display());
    println!(
        "Suggest floor:    {} chars",
        engine.config().min_suggest_len
    );
    println!(
        "Autocomplete cap: {} entries",
        engine.config().autocomplete_limit
    );

    for direction in [Direction::Forward, Direction::Reverse] {
        print_direction(&engine, direction);
    }

    Ok(())
}

fn print_direction(engine: &LookupEngine, direction: Direction) {
    let index = engine.direction(direction);
    println!();
    println!("Direction: {}", direction);
    println!("  Headwords:        {}", index.trie().len());
    println!("  Trie nodes:       {}", index.trie().node_count());
    println!("  Automaton states: {}", index.automaton().state_count());
    println!("  Patterns:         {}", index.automaton().pattern_count());
}
