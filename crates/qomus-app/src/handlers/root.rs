use qomus_core::language::LanguageProcessor;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RootReport {
    pub word: String,
    pub normalized: String,
    pub root: String,
}

pub fn handle_root(state: &AppState, word: &str) -> RootReport {
    RootReport {
        word: word.to_string(),
        normalized: state.processor.normalize(word),
        root: state.processor.root(word).as_string(),
    }
}
