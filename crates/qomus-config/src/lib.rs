use std::env;

use serde::{Deserialize, Serialize};

use self::cache::CacheConfig;
use self::dictionary::DictionaryConfig;
use self::search::SearchConfig;
use self::wordnet::WordnetConfig;

pub mod cache;
pub mod dictionary;
pub mod search;
pub mod wordnet;

fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok()
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub search: SearchConfig,
    pub cache: CacheConfig,
    pub wordnet: WordnetConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Config {
            dictionary: DictionaryConfig::new(),
            search: SearchConfig::new(),
            cache: CacheConfig::new(),
            wordnet: WordnetConfig::new(),
        }
    }

    /// Overlay `QOMUS_*` environment variables on values read from a file
    pub fn apply_env(&mut self) {
        self.apply_overrides(&env_lookup);
    }

    pub fn apply_overrides(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        self.dictionary.apply_overrides(lookup);
        self.search.apply_overrides(lookup);
        self.cache.apply_overrides(lookup);
        self.wordnet.apply_overrides(lookup);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn empty_json_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.search.max_results, 100);
        assert_eq!(config.search.related_scan_limit, 30);
        assert_eq!(config.search.related_limit, 15);
        assert_eq!(config.wordnet.min_query_len, 2);
        assert_eq!(config.wordnet.delimiter, ',');
        assert!(config.cache.enabled);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "cache": { "max_size": 8 }, "wordnet": { "delimiter": "\t" } }"#)
                .unwrap();
        assert_eq!(config.cache.max_size, 8);
        assert_eq!(config.cache.ttl_seconds, 300);
        assert_eq!(config.wordnet.delimiter, '\t');
        assert_eq!(config.wordnet.max_results, 50);
    }

    #[test]
    fn corpus_files_parse_with_optional_pos() {
        let config: Config = serde_json::from_str(
            r#"{ "wordnet": { "corpus": [ { "path": "nouns.csv", "pos": "n" }, { "path": "mixed.csv" } ] } }"#,
        )
        .unwrap();
        assert_eq!(config.wordnet.corpus.len(), 2);
        assert_eq!(config.wordnet.corpus[0].pos.as_deref(), Some("n"));
        assert!(config.wordnet.corpus[1].pos.is_none());
    }

    #[test]
    fn environment_overrides_file_values() {
        let mut config: Config = serde_json::from_str(
            r#"{ "search": { "max_results": 40 }, "cache": { "max_size": 8, "ttl_seconds": 60 } }"#,
        )
        .unwrap();
        let vars = HashMap::from([
            ("QOMUS_SEARCH_LIMIT", "25"),
            ("QOMUS_CACHE_TTL_SECONDS", "not-a-number"),
            ("QOMUS_EDGES_PATH", "/tmp/edges.json"),
        ]);
        config.apply_overrides(&|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.search.max_results, 25);
        assert_eq!(config.cache.max_size, 8);
        // Unparseable values leave the file value in place
        assert_eq!(config.cache.ttl_seconds, 60);
        assert_eq!(config.wordnet.edges_path, "/tmp/edges.json");
        assert_eq!(config.dictionary.data_path, "data/entries.json");
    }
}
