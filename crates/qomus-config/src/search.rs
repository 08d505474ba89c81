use serde::{Deserialize, Serialize};

fn default_max_results() -> usize {
    100
}

fn default_related_scan_limit() -> usize {
    30
}

fn default_related_limit() -> usize {
    15
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    /// Hard cap on ranked search results
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Candidates pulled from the store for a root lookup
    #[serde(default = "default_related_scan_limit")]
    pub related_scan_limit: usize,
    /// Related words returned to the caller
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,
}

impl SearchConfig {
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_overrides(&crate::env_lookup);
        config
    }

    pub fn apply_overrides(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        if let Some(max_results) = lookup("QOMUS_SEARCH_LIMIT").and_then(|v| v.parse().ok()) {
            self.max_results = max_results;
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            related_scan_limit: default_related_scan_limit(),
            related_limit: default_related_limit(),
        }
    }
}
