/// Text processing interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "ar", "uz", etc.)
    fn language_code(&self) -> &str;

    /// Normalize text for matching
    fn normalize(&self, text: &str) -> String;

    /// Break text into processable tokens
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// Optional trait for languages with root-and-pattern morphology
pub trait RootExtractor: Send + Sync {
    /// Retrieval key approximating the word's root, 0 to 3 letters
    fn extract_root(&self, word: &str) -> Root;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    pub normalized: String,
    pub position: usize,
}

/// Heuristic root skeleton
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Root(Vec<char>);

impl Root {
    pub fn new(letters: Vec<char>) -> Self {
        Self(letters)
    }

    pub fn letters(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_string(&self) -> String {
        self.0.iter().collect()
    }
}
