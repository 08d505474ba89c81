use std::collections::HashMap;

use qomus_core::dictionary::EntryId;
use qomus_lang_arabic::normalize;
use serde::Serialize;

use crate::error::CorpusError;
use crate::graph::EntryIndex;
use crate::record::{PartOfSpeech, SynsetRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Synset {
    pub id: String,
    pub pos: PartOfSpeech,
    pub arabic_gloss: String,
    pub arabic_examples: String,
    pub english_lemmas: Vec<String>,
    pub english_gloss: String,
    pub english_examples: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lemma {
    pub word: String,
    pub normalized: String,
    /// First entry with the same normalized form
    pub entry_id: Option<EntryId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynsetGroup {
    pub synset: Synset,
    pub lemmas: Vec<Lemma>,
}

impl SynsetGroup {
    fn matches(&self, normalized: &str, lowered: &str) -> bool {
        if !normalized.is_empty()
            && (self.lemmas.iter().any(|l| l.normalized.contains(normalized))
                || normalize(&self.synset.arabic_gloss).contains(normalized))
        {
            return true;
        }

        self.synset
            .english_lemmas
            .iter()
            .any(|l| l.to_lowercase().contains(lowered))
            || self.synset.english_gloss.to_lowercase().contains(lowered)
    }
}

/// Imported synsets with their resolved lemmas
#[derive(Debug, Default)]
pub struct SynsetIndex {
    groups: Vec<SynsetGroup>,
    by_id: HashMap<String, usize>,
}

impl SynsetIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a synset; `false` if its id is already present
    pub fn insert(&mut self, record: &SynsetRecord, entries: &EntryIndex) -> bool {
        if self.by_id.contains_key(&record.synset_id) {
            return false;
        }

        let mut lemmas: Vec<Lemma> = Vec::new();
        for word in record.arabic_tokens().kept {
            let normalized = normalize(word);
            if lemmas.iter().any(|l| l.normalized == normalized) {
                continue;
            }
            lemmas.push(Lemma {
                word: word.to_string(),
                entry_id: entries.lookup(&normalized).first().copied(),
                normalized,
            });
        }

        let synset = Synset {
            id: record.synset_id.clone(),
            pos: record.pos,
            arabic_gloss: record.arabic_gloss.clone(),
            arabic_examples: record.arabic_examples.clone(),
            english_lemmas: record.english_lemmas.clone(),
            english_gloss: record.english_gloss.clone(),
            english_examples: record.english_examples.clone(),
        };

        self.by_id.insert(synset.id.clone(), self.groups.len());
        self.groups.push(SynsetGroup { synset, lemmas });
        true
    }

    /// Insert every record of a stream, returning how many rows were skipped
    pub fn extend<I>(&mut self, records: I, entries: &EntryIndex) -> Result<usize, CorpusError>
    where
        I: IntoIterator<Item = Result<SynsetRecord, CorpusError>>,
    {
        let mut skipped = 0;
        for item in records {
            match item {
                Ok(record) => {
                    if !self.insert(&record, entries) {
                        tracing::debug!("Synset {} already imported", record.synset_id);
                    }
                }
                Err(e) if e.is_malformed_row() => {
                    tracing::warn!("Skipping corpus row: {}", e);
                    skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(skipped)
    }

    pub fn get(&self, id: &str) -> Option<&SynsetGroup> {
        self.by_id.get(id).map(|&i| &self.groups[i])
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Synsets whose lemmas or glosses contain `query`
    ///
    /// Queries shorter than `min_len` characters after trimming match nothing.
    /// An empty `pos` filter allows every part of speech.
    pub fn search(
        &self,
        query: &str,
        pos: &[PartOfSpeech],
        min_len: usize,
        max_results: usize,
    ) -> Vec<SynsetGroup> {
        let query = query.trim();
        if query.chars().count() < min_len {
            return vec![];
        }

        let normalized = normalize(query);
        let lowered = query.to_lowercase();

        self.groups
            .iter()
            .filter(|g| pos.is_empty() || pos.contains(&g.synset.pos))
            .filter(|g| g.matches(&normalized, &lowered))
            .take(max_results)
            .cloned()
            .collect()
    }
}
