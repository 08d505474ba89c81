#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("Line {line}: missing synset id")]
    MissingSynsetId { line: usize },

    #[error("Line {line}: empty arabic lemma field")]
    EmptyLemmas { line: usize },

    #[error("Line {line}: expected at least {expected} columns, found {found}")]
    TooFewColumns {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: unterminated quoted field")]
    UnbalancedQuote { line: usize },

    #[error("Line {line}: {message}")]
    InvalidRow { line: usize, message: String },

    #[error("Delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(char),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CorpusError {
    /// Row-level problems the batch skips; anything else is fatal to the file
    pub fn is_malformed_row(&self) -> bool {
        !matches!(self, CorpusError::Io(_) | CorpusError::InvalidDelimiter(_))
    }
}

impl From<csv::Error> for CorpusError {
    fn from(e: csv::Error) -> Self {
        let line = e.position().map_or(0, |p| p.line() as usize);
        let message = e.to_string();
        match e.into_kind() {
            csv::ErrorKind::Io(io) => CorpusError::Io(io),
            _ => CorpusError::InvalidRow { line, message },
        }
    }
}
