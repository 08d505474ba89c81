use serde::{Deserialize, Serialize};

fn default_edges_path() -> String {
    "data/synonym_edges.json".to_string()
}

fn default_delimiter() -> char {
    ','
}

fn default_min_query_len() -> usize {
    2
}

fn default_max_results() -> usize {
    50
}

fn default_channel_capacity() -> usize {
    1024
}

/// One synset file of the external corpus
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CorpusFile {
    pub path: String,
    /// Part-of-speech tag used when the synset id carries none ("n", "v", "a", "r")
    #[serde(default)]
    pub pos: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct WordnetConfig {
    #[serde(default)]
    pub corpus: Vec<CorpusFile>,
    /// Where built synonym edges are persisted
    #[serde(default = "default_edges_path")]
    pub edges_path: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Take every entry sharing a lemma's normalized form, or only the first
    #[serde(default)]
    pub merge_homographs_first_only: bool,
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Records buffered between corpus readers and the edge builder
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl WordnetConfig {
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_overrides(&crate::env_lookup);
        config
    }

    pub fn apply_overrides(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        if let Some(edges_path) = lookup("QOMUS_EDGES_PATH") {
            self.edges_path = edges_path;
        }
    }
}

impl Default for WordnetConfig {
    fn default() -> Self {
        Self {
            corpus: vec![],
            edges_path: default_edges_path(),
            delimiter: default_delimiter(),
            merge_homographs_first_only: false,
            min_query_len: default_min_query_len(),
            max_results: default_max_results(),
            channel_capacity: default_channel_capacity(),
        }
    }
}
