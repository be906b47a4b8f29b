mod index;
mod output;
mod query;

use anyhow::Result;
use clap::{Parser, Subcommand};
use index::build::load_engine;
use index::types::{Direction, EngineConfig};
use serde_json::json;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dix")]
#[command(about = "Terminal-first bilingual dictionary lookup engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding forward.json and reverse.json
    #[arg(long, default_value = "database", global = true)]
    dict_dir: PathBuf,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a word; on a miss, show did-you-mean candidates
    Lookup {
        /// Word to look up (case-sensitive)
        word: String,

        /// Translation direction
        #[arg(short, long, value_enum, default_value_t = Direction::Forward)]
        direction: Direction,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Scan a query for dictionary words (the did-you-mean fallback)
    Suggest {
        /// Query text to scan
        query: String,

        /// Translation direction
        #[arg(short, long, value_enum, default_value_t = Direction::Forward)]
        direction: Direction,
    },
    /// List headwords starting with a prefix
    Complete {
        /// Prefix to complete
        prefix: String,

        /// Translation direction
        #[arg(short, long, value_enum, default_value_t = Direction::Forward)]
        direction: Direction,
    },
    /// Show dictionary statistics
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let color = !cli.no_color;

    match cli.command {
        Commands::Lookup {
            word,
            direction,
            json,
        } => {
            let engine = load_engine(&cli.dict_dir, EngineConfig::default(), json)?;

            // Exact lookup stays case-sensitive; only the suggestion path
            // lowercases, matching the original service behavior.
            match engine.lookup(&word, direction) {
                Some(payload) => {
                    if json {
                        let mut value = serde_json::to_value(payload)?;
                        value["word"] = json!(word);
                        println!("{value}");
                    } else {
                        output::print_entry(&word, payload, color)?;
                    }
                }
                None => {
                    let suggestions = engine.suggest_on_miss(&word.to_lowercase(), direction);
                    if json {
                        println!("{}", json!({ "word": word, "suggestions": suggestions }));
                    } else {
                        output::print_not_found(&word, &suggestions, color)?;
                    }
                }
            }
        }
        Commands::Suggest { query, direction } => {
            let engine = load_engine(&cli.dict_dir, EngineConfig::default(), false)?;
            let suggestions = engine.suggest_on_miss(&query.to_lowercase(), direction);
            output::print_word_list(&suggestions, color)?;
        }
        Commands::Complete { prefix, direction } => {
            let engine = load_engine(&cli.dict_dir, EngineConfig::default(), false)?;
            let completions = engine.autocomplete(&prefix.to_lowercase(), direction);
            output::print_word_list(&completions, color)?;
        }
        Commands::Stats => {
            index::stats::show_stats(&cli.dict_dir)?;
        }
    }

    Ok(())
}
