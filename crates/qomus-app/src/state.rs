use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use qomus_config::Config;
use qomus_core::cache::ResultCache;
use qomus_core::dictionary::Entry;
use qomus_lang_arabic::ArabicProcessor;
use qomus_wordnet::{MemoryEdgeStore, SynsetIndex};
use tokio::sync::{Mutex, OnceCell, RwLock};

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub processor: ArabicProcessor,
    pub cache: ResultCache<Vec<Entry>>,
    pub edges: Mutex<MemoryEdgeStore>,
    /// Imported on the first synset search
    pub synsets: OnceCell<SynsetIndex>,
}

impl AppState {
    pub fn new(config: Config, processor: ArabicProcessor, edges: MemoryEdgeStore) -> Self {
        let cache = if config.cache.enabled {
            ResultCache::from_config(&config.cache)
        } else {
            tracing::info!("Search cache disabled");
            ResultCache::new(0, std::time::Duration::ZERO)
        };

        Self {
            config: Arc::new(RwLock::new(config)),
            processor,
            cache,
            edges: Mutex::new(edges),
            synsets: OnceCell::new(),
        }
    }

    /// Load the dictionary and stored edges named by `config`
    pub fn load(config: Config) -> anyhow::Result<Self> {
        let processor = ArabicProcessor::from_config(&config.dictionary, config.search.clone())
            .with_context(|| format!("loading dictionary {}", config.dictionary.data_path))?;
        let edges = MemoryEdgeStore::load(Path::new(&config.wordnet.edges_path))
            .context("loading synonym edges")?;
        Ok(Self::new(config, processor, edges))
    }
}
