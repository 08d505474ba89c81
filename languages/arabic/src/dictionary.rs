use std::collections::{HashMap, HashSet};

use qomus_core::dictionary::{
    DictionaryMetadata, Entry, EntryId, EntryStore, LoadError, SourceSet, StoreError,
};
use serde::Deserialize;

use crate::normalizer::normalize;

#[derive(Debug, Deserialize)]
struct EntriesJson {
    entries: Vec<Entry>,
}

/// In-memory Arabic–Uzbek dictionary
///
/// Entry order is insertion order and is what every query returns.
pub struct ArabicDictionary {
    entries: Vec<Entry>,
    // Parallel to `entries`
    normalized: Vec<String>,
    id_index: HashMap<EntryId, usize>,
    form_index: HashMap<String, Vec<usize>>,
}

impl ArabicDictionary {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            normalized: Vec::new(),
            id_index: HashMap::new(),
            form_index: HashMap::new(),
        }
    }

    /// Build from entries, rejecting empty headwords and duplicate ids
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self, LoadError> {
        let mut dict = Self::new();
        for entry in entries {
            if entry.arabic.trim().is_empty() {
                return Err(LoadError::InvalidFormat(format!(
                    "entry {} has an empty arabic field",
                    entry.id
                )));
            }
            if dict.id_index.contains_key(&entry.id) {
                return Err(LoadError::InvalidFormat(format!(
                    "duplicate entry id {}",
                    entry.id
                )));
            }
            dict.push(entry);
        }
        Ok(dict)
    }

    /// Load from JSON string (`{ "entries": [...] }`)
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let data: EntriesJson = serde_json::from_str(json_str)?;
        Self::from_entries(data.entries)
    }

    fn push(&mut self, entry: Entry) {
        let idx = self.entries.len();
        let form = normalize(&entry.arabic);

        self.id_index.insert(entry.id, idx);
        self.form_index.entry(form.clone()).or_default().push(idx);
        self.normalized.push(form);
        self.entries.push(entry);
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entries whose diacritic-free form equals that of `word`
    pub fn lookup_exact(&self, word: &str) -> Vec<&Entry> {
        self.form_index
            .get(&normalize(word))
            .map(|indices| indices.iter().map(|&i| &self.entries[i]).collect())
            .unwrap_or_default()
    }

    /// Merge another dictionary into this one
    /// Entries from the other dictionary with the same ID replace existing ones in place
    pub fn merge(self, other: ArabicDictionary) -> Self {
        let overrides: HashMap<EntryId, Entry> =
            other.entries.iter().map(|e| (e.id, e.clone())).collect();
        let existing: HashSet<EntryId> = self.entries.iter().map(|e| e.id).collect();

        let mut merged = Self::new();
        for entry in self.entries {
            let entry = overrides.get(&entry.id).cloned().unwrap_or(entry);
            merged.push(entry);
        }
        for entry in other.entries {
            if !existing.contains(&entry.id) {
                merged.push(entry);
            }
        }

        merged
    }
}

impl Default for ArabicDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryStore for ArabicDictionary {
    fn get_by_id(&self, id: EntryId) -> Result<Option<Entry>, StoreError> {
        Ok(self.id_index.get(&id).map(|&i| self.entries[i].clone()))
    }

    fn scan(&self, sources: Option<&SourceSet>) -> Result<Vec<Entry>, StoreError> {
        Ok(self
            .entries
            .iter()
            .filter(|e| sources.is_none_or(|set| set.contains(&e.source)))
            .cloned()
            .collect())
    }

    fn find_containing(&self, fragment: &str, limit: usize) -> Result<Vec<Entry>, StoreError> {
        Ok(self
            .entries
            .iter()
            .zip(&self.normalized)
            .filter(|(_, form)| form.contains(fragment))
            .map(|(e, _)| e.clone())
            .take(limit)
            .collect())
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "Qomus".to_string(),
            version: "1.0".to_string(),
            language: "ar-uz".to_string(),
            entry_count: self.entries.len(),
        }
    }
}
