use qomus_core::cache::search_key;
use qomus_core::dictionary::Entry;
use qomus_core::preprocess::{DefaultPreprocessor, Preprocessor, parse_sources};

use crate::state::AppState;

/// Ranked search through the result cache
pub async fn handle_search(
    state: &AppState,
    query: &str,
    sources: Option<&str>,
) -> anyhow::Result<Vec<Entry>> {
    let query = DefaultPreprocessor.process(query);
    let sources = parse_sources(sources);

    // Shares its key with the unfiltered search, so it must bypass the cache
    if sources.as_ref().is_some_and(|set| set.is_empty()) {
        tracing::debug!("No dictionary selected for '{}'", query);
        return Ok(vec![]);
    }

    let key = search_key(&query, sources.as_ref());

    if let Some(hit) = state.cache.get(&key).await {
        tracing::debug!("Cache hit: {}", key);
        return Ok(hit);
    }

    let results = state.processor.search(&query, sources.as_ref())?;
    tracing::debug!("Search '{}': {} results", query, results.len());

    state.cache.insert(key, results.clone()).await;
    Ok(results)
}
