use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub type EntryId = i64;

/// Dictionary sources an entry can come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Main,
    Classic,
    Modern,
    Custom,
}

pub type SourceSet = BTreeSet<Source>;

impl Source {
    pub const ALL: [Source; 4] = [Source::Main, Source::Classic, Source::Modern, Source::Custom];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Main => "main",
            Source::Classic => "classic",
            Source::Modern => "modern",
            Source::Custom => "custom",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = UnknownSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "main" => Ok(Source::Main),
            "classic" => Ok(Source::Classic),
            "modern" => Ok(Source::Modern),
            "custom" => Ok(Source::Custom),
            other => Err(UnknownSource(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown dictionary source: {0}")]
pub struct UnknownSource(pub String);

/// Coarse grammatical tag of an entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordType {
    #[default]
    Word,
    Phrase,
    Expression,
    Other,
}

/// A dictionary entry as the surrounding application stores it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    /// Arabic surface form, diacritics allowed
    pub arabic: String,
    /// Vocalized spellings of the same word
    #[serde(default)]
    pub variants: Vec<String>,
    #[serde(default)]
    pub uzbek: Option<String>,
    #[serde(default)]
    pub transliteration: String,
    #[serde(default)]
    pub word_type: WordType,
    #[serde(default)]
    pub root: Option<String>,
    pub source: Source,
    // Opaque payloads, never inspected here
    #[serde(default)]
    pub examples: serde_json::Value,
    #[serde(default)]
    pub meanings: serde_json::Value,
}

impl Entry {
    pub fn new(id: EntryId, arabic: impl Into<String>, source: Source) -> Self {
        Self {
            id,
            arabic: arabic.into(),
            variants: vec![],
            uzbek: None,
            transliteration: String::new(),
            word_type: WordType::Word,
            root: None,
            source,
            examples: serde_json::Value::Null,
            meanings: serde_json::Value::Null,
        }
    }

    pub fn with_uzbek(mut self, uzbek: impl Into<String>) -> Self {
        self.uzbek = Some(uzbek.into());
        self
    }

    pub fn with_transliteration(mut self, transliteration: impl Into<String>) -> Self {
        self.transliteration = transliteration.into();
        self
    }
}

/// Read access to the entry store
///
/// Every method returns entries in the store's default order.
pub trait EntryStore: Send + Sync {
    /// Get entry by id
    fn get_by_id(&self, id: EntryId) -> Result<Option<Entry>, StoreError>;

    /// All entries whose source is in `sources`, or every entry when `None`
    fn scan(&self, sources: Option<&SourceSet>) -> Result<Vec<Entry>, StoreError>;

    /// Entries whose diacritic-free Arabic form contains `fragment`, at most `limit`
    fn find_containing(&self, fragment: &str, limit: usize) -> Result<Vec<Entry>, StoreError>;

    /// Store metadata
    fn metadata(&self) -> DictionaryMetadata;
}

#[derive(Debug, Clone, Serialize)]
pub struct DictionaryMetadata {
    pub name: String,
    pub version: String,
    pub language: String,
    pub entry_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_tags_parse_case_insensitively() {
        assert_eq!("Main".parse::<Source>().unwrap(), Source::Main);
        assert_eq!(" classic ".parse::<Source>().unwrap(), Source::Classic);
        assert!("wiktionary".parse::<Source>().is_err());
    }

    #[test]
    fn entry_payloads_pass_through_untouched() {
        let json = r#"{
            "id": 7,
            "arabic": "كِتَاب",
            "source": "modern",
            "examples": [{"ar": "هذا كتاب", "uz": "Bu kitob"}],
            "meanings": {"anything": [1, 2, 3]}
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 7);
        assert_eq!(entry.word_type, WordType::Word);
        assert_eq!(entry.meanings["anything"][2], 3);

        let back = serde_json::to_value(&entry).unwrap();
        assert_eq!(back["examples"][0]["uz"], "Bu kitob");
    }
}
