use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_max_size() -> usize {
    500
}

fn default_ttl_seconds() -> u64 {
    300
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CacheConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Live entries kept before the oldest insertion is evicted
    #[serde(default = "default_max_size")]
    pub max_size: usize,
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,
}

impl CacheConfig {
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_overrides(&crate::env_lookup);
        config
    }

    pub fn apply_overrides(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        if let Some(max_size) = lookup("QOMUS_CACHE_SIZE").and_then(|v| v.parse().ok()) {
            self.max_size = max_size;
        }
        if let Some(ttl_seconds) = lookup("QOMUS_CACHE_TTL_SECONDS").and_then(|v| v.parse().ok()) {
            self.ttl_seconds = ttl_seconds;
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_size: default_max_size(),
            ttl_seconds: default_ttl_seconds(),
        }
    }
}
