//! Dictionary loading and index construction.
//!
//! Loads one JSON array of records per translation direction and bulk-builds
//! the trie/automaton pair for each. Construction runs once, synchronously,
//! before any query is served; the returned engine is read-only.

use crate::index::types::{Direction, EngineConfig, Entry};
use crate::query::engine::{DirectionIndex, LookupEngine};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Dictionary file name for each direction, under the dictionary directory
pub fn dictionary_file(direction: Direction) -> &'static str {
    match direction {
        Direction::Forward => "forward.json",
        Direction::Reverse => "reverse.json",
    }
}

/// Load one direction's records from a JSON array of
/// `{word, pronunciation, definition}` objects.
pub fn load_entries(path: &Path) -> Result<Vec<Entry>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open dictionary file: {}", path.display()))?;
    let entries: Vec<Entry> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid dictionary JSON: {}", path.display()))?;
    Ok(entries)
}

/// Load both dictionaries from `dict_dir` and build the lookup engine.
pub fn load_engine(dict_dir: &Path, config: EngineConfig, silent: bool) -> Result<LookupEngine> {
    let forward = load_direction(dict_dir, Direction::Forward, silent)?;
    let reverse = load_direction(dict_dir, Direction::Reverse, silent)?;
    Ok(LookupEngine::new(forward, reverse, config))
}

/// Load and index a single direction, with a spinner unless silenced
fn load_direction(dict_dir: &Path, direction: Direction, silent: bool) -> Result<DirectionIndex> {
    let path = dict_dir.join(dictionary_file(direction));

    let spinner = if !silent {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message(format!("Loading {} dictionary...", direction));
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Some(spinner)
    } else {
        None
    };

    let entries = load_entries(&path)?;
    let index = DirectionIndex::from_entries(&entries);

    if let Some(spinner) = spinner {
        spinner.finish_with_message(format!(
            "Indexed {} {} headwords",
            index.trie().len(),
            direction
        ));
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_entries_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("forward.json");
        fs::write(
            &path,
            r#"[
                {"word": "cat", "pronunciation": "kæt", "definition": "con mèo"},
                {"word": "dog", "definition": "con chó"}
            ]"#,
        )
        .unwrap();

        let entries = load_entries(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].word, "cat");
        assert_eq!(entries[0].pronunciation, "kæt");
        assert_eq!(entries[1].pronunciation, "");
    }

    #[test]
    fn test_load_entries_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_entries(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to open dictionary file"));
    }

    #[test]
    fn test_load_entries_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("forward.json");
        fs::write(&path, "{not json").unwrap();
        let err = load_entries(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid dictionary JSON"));
    }

    #[test]
    fn test_load_engine_from_fixture_dir() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("forward.json"),
            r#"[{"word": "cat", "definition": "con mèo"}]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("reverse.json"),
            r#"[{"word": "mèo", "definition": "cat"}]"#,
        )
        .unwrap();

        let engine = load_engine(dir.path(), EngineConfig::default(), true).unwrap();
        assert!(engine.lookup("cat", Direction::Forward).is_some());
        assert!(engine.lookup("mèo", Direction::Reverse).is_some());
    }
}
