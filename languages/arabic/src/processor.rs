use std::path::Path;

use qomus_config::dictionary::DictionaryConfig;
use qomus_config::search::SearchConfig;
use qomus_core::dictionary::{Entry, EntryId, EntryStore, LoadError, SourceSet, StoreError};
use qomus_core::language::{LanguageProcessor, Root, RootExtractor, Token};

use crate::dictionary::ArabicDictionary;
use crate::loader::ArabicDictionaryLoader;
use crate::normalizer::{normalize, split_words};
use crate::related::find_related;
use crate::root::ArabicRootExtractor;
use crate::search::{MAX_RESULTS, search};

/// Arabic language processor over an entry store
pub struct ArabicProcessor<S = ArabicDictionary> {
    store: S,
    root_extractor: ArabicRootExtractor,
    search: SearchConfig,
}

impl ArabicProcessor<ArabicDictionary> {
    /// Load the configured dictionary files
    pub fn from_config(
        dictionary: &DictionaryConfig,
        search: SearchConfig,
    ) -> Result<Self, LoadError> {
        let dict = ArabicDictionaryLoader::load_with_additional(
            Path::new(&dictionary.data_path),
            &dictionary.additional_paths,
        )?;
        Ok(Self::new(dict, search))
    }
}

impl<S: EntryStore> ArabicProcessor<S> {
    pub fn new(store: S, search: SearchConfig) -> Self {
        Self {
            store,
            root_extractor: ArabicRootExtractor::new(),
            search,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn root(&self, word: &str) -> Root {
        self.root_extractor.extract_root(word)
    }

    /// Ranked search, capped at the configured maximum
    pub fn search(
        &self,
        query: &str,
        sources: Option<&SourceSet>,
    ) -> Result<Vec<Entry>, StoreError> {
        search(&self.store, query, sources, self.search.max_results.min(MAX_RESULTS))
    }

    /// Words sharing `word`'s root, excluding `exclude_id`
    pub fn find_related(
        &self,
        word: &str,
        exclude_id: Option<EntryId>,
    ) -> Result<Vec<Entry>, StoreError> {
        find_related(
            &self.store,
            &self.root_extractor,
            word,
            exclude_id,
            self.search.related_scan_limit,
            self.search.related_limit,
        )
    }

    /// Related words for a stored entry, empty if the id is unknown
    pub fn related_to(&self, id: EntryId) -> Result<Vec<Entry>, StoreError> {
        match self.store.get_by_id(id)? {
            Some(entry) => self.find_related(&entry.arabic, Some(id)),
            None => {
                tracing::debug!("Entry {} not found for related lookup", id);
                Ok(vec![])
            }
        }
    }
}

impl<S: EntryStore> LanguageProcessor for ArabicProcessor<S> {
    fn language_code(&self) -> &str {
        "ar"
    }

    fn normalize(&self, text: &str) -> String {
        normalize(text)
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        split_words(text)
            .enumerate()
            .map(|(position, surface)| Token {
                surface: surface.to_string(),
                normalized: normalize(surface),
                position,
            })
            .collect()
    }
}
