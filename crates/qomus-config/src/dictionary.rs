use serde::{Deserialize, Serialize};

fn default_data_path() -> String {
    "data/entries.json".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Main entry file (JSON, `{ "entries": [...] }`)
    #[serde(default = "default_data_path")]
    pub data_path: String,
    /// Extra entry files merged over the main one, later ids win
    #[serde(default)]
    pub additional_paths: Vec<String>,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_overrides(&crate::env_lookup);
        config
    }

    pub fn apply_overrides(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        if let Some(data_path) = lookup("QOMUS_DATA_PATH") {
            self.data_path = data_path;
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            additional_paths: vec![],
        }
    }
}
