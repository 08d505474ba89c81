use std::fmt;

use csv::StringRecord;
use qomus_lang_arabic::normalizer::{contains_arabic, split_words};
use serde::{Deserialize, Serialize};

use crate::error::CorpusError;

// Column order of a corpus row
const COL_SYNSET_ID: usize = 0;
const COL_EN_LEMMAS: usize = 1;
const COL_EN_GLOSS: usize = 2;
const COL_EN_EXAMPLES: usize = 3;
const COL_AR_LEMMAS: usize = 4;
const COL_AR_GLOSS: usize = 5;
const COL_AR_EXAMPLES: usize = 6;

const MIN_COLUMNS: usize = COL_AR_LEMMAS + 1;

const HEADER_IDS: &[&str] = &["synset_id", "synset", "synsetid", "id"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Other,
}

impl PartOfSpeech {
    /// Parse a WordNet tag ("n", "v", "a", "s", "r") or its long name
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "n" | "noun" => Some(PartOfSpeech::Noun),
            "v" | "verb" => Some(PartOfSpeech::Verb),
            "a" | "s" | "adj" | "adjective" => Some(PartOfSpeech::Adjective),
            "r" | "adv" | "adverb" => Some(PartOfSpeech::Adverb),
            _ => None,
        }
    }

    /// Tag carried by the synset id itself: "00001740-n" or "00001740n"
    pub fn from_synset_id(id: &str) -> Option<Self> {
        if let Some((_, tag)) = id.rsplit_once('-') {
            return Self::from_tag(tag);
        }

        let last = id.chars().last()?;
        let rest = &id[..id.len() - last.len_utf8()];
        if last.is_ascii_alphabetic() && !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()) {
            return Self::from_tag(&last.to_string());
        }

        None
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Other => "other",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a comma-separated POS filter; unknown tags are dropped
pub fn parse_pos_filter(param: Option<&str>) -> Vec<PartOfSpeech> {
    let mut tags = Vec::new();
    for pos in param.unwrap_or_default().split(',').filter_map(PartOfSpeech::from_tag) {
        if !tags.contains(&pos) {
            tags.push(pos);
        }
    }
    tags
}

/// One row of the external synset corpus
#[derive(Debug, Clone, PartialEq)]
pub struct SynsetRecord {
    pub synset_id: String,
    pub pos: PartOfSpeech,
    pub english_lemmas: Vec<String>,
    pub english_gloss: String,
    pub english_examples: String,
    /// Raw Arabic lemma list, split by [`SynsetRecord::arabic_tokens`]
    pub arabic_lemmas: String,
    pub arabic_gloss: String,
    pub arabic_examples: String,
}

/// Arabic lemma tokens of a record
#[derive(Debug, Default, PartialEq)]
pub struct LemmaTokens<'a> {
    pub kept: Vec<&'a str>,
    /// Tokens without a single Arabic letter
    pub discarded: usize,
}

impl SynsetRecord {
    pub fn arabic_tokens(&self) -> LemmaTokens<'_> {
        let mut tokens = LemmaTokens::default();
        for token in split_words(&self.arabic_lemmas) {
            if contains_arabic(token) {
                tokens.kept.push(token);
            } else {
                tokens.discarded += 1;
            }
        }
        tokens
    }

    /// Build a record from one corpus row
    ///
    /// `Ok(None)` for blank rows and the header row.
    pub fn from_record(
        line: usize,
        record: &StringRecord,
        default_pos: Option<PartOfSpeech>,
    ) -> Result<Option<Self>, CorpusError> {
        if record.iter().all(|field| field.trim().is_empty()) {
            return Ok(None);
        }

        // Rows are single lines, a line break means a quote was never closed
        if record.iter().any(|field| field.contains(['\n', '\r'])) {
            return Err(CorpusError::UnbalancedQuote { line });
        }

        let synset_id = record
            .get(COL_SYNSET_ID)
            .unwrap_or_default()
            .trim_start_matches('\u{FEFF}')
            .trim();
        if HEADER_IDS.contains(&synset_id.to_lowercase().as_str()) {
            return Ok(None);
        }

        if record.len() < MIN_COLUMNS {
            return Err(CorpusError::TooFewColumns {
                line,
                expected: MIN_COLUMNS,
                found: record.len(),
            });
        }

        if synset_id.is_empty() {
            return Err(CorpusError::MissingSynsetId { line });
        }

        let field = |idx: usize| record.get(idx).unwrap_or_default().trim().to_string();

        let arabic_lemmas = field(COL_AR_LEMMAS);
        if arabic_lemmas.is_empty() {
            return Err(CorpusError::EmptyLemmas { line });
        }

        let pos = PartOfSpeech::from_synset_id(synset_id)
            .or(default_pos)
            .unwrap_or(PartOfSpeech::Other);

        Ok(Some(SynsetRecord {
            synset_id: synset_id.to_string(),
            pos,
            english_lemmas: split_english_lemmas(&field(COL_EN_LEMMAS)),
            english_gloss: field(COL_EN_GLOSS),
            english_examples: field(COL_EN_EXAMPLES),
            arabic_lemmas,
            arabic_gloss: field(COL_AR_GLOSS),
            arabic_examples: field(COL_AR_EXAMPLES),
        }))
    }
}

fn split_english_lemmas(field: &str) -> Vec<String> {
    field
        .split([',', ';'])
        .map(|lemma| lemma.trim().replace('_', " "))
        .filter(|lemma| !lemma.is_empty())
        .collect()
}
