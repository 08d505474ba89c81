use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Arabic-Uzbek dictionary lookups and synonym graph tooling
#[derive(Parser, Debug)]
#[command(name = "qomus")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// JSON config file; defaults plus environment overrides when omitted
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Pretty-print command output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Ranked dictionary search
    Search {
        query: String,
        /// Comma-separated source tags (main, classic, modern, custom)
        #[arg(short, long)]
        sources: Option<String>,
    },

    /// Words sharing the root of an entry
    Related { id: i64 },

    /// Root skeleton of a word
    Root { word: String },

    /// Entries linked to an entry by synonym edges
    Synonyms { id: i64 },

    /// Search imported synsets by lemma or gloss
    Wordnet {
        query: String,
        /// Comma-separated POS tags (n, v, a, r)
        #[arg(short, long)]
        pos: Option<String>,
    },

    /// Build synonym edges from the configured corpus
    #[command(name = "build-synonyms")]
    BuildSynonyms,

    /// Write a config file with the current defaults
    #[command(name = "init-config")]
    InitConfig {
        #[arg(default_value = "config.json")]
        path: PathBuf,
    },
}
