use qomus_core::dictionary::{Entry, EntryStore, SourceSet, StoreError};

use crate::normalizer::normalize;

/// Result cap for ranked search
pub const MAX_RESULTS: usize = 100;

/// Relevance class, lower sorts first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    /// Diacritic-free Arabic starts with the query
    Prefix = 0,
    /// Diacritic-free Arabic contains the query elsewhere
    Contains = 1,
    /// Only the Uzbek gloss or transliteration matched
    Gloss = 2,
}

/// Query prepared once for matching against many entries
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    normalized: String,
    lowered: String,
}

impl PreparedQuery {
    pub fn new(query: &str) -> Self {
        Self {
            normalized: normalize(query),
            lowered: query.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lowered.is_empty()
    }

    /// Tier this entry matches at, `None` if it does not match
    pub fn tier(&self, entry: &Entry) -> Option<MatchTier> {
        // A query made only of diacritics must not match every headword
        if !self.normalized.is_empty() {
            let form = normalize(&entry.arabic);
            if form.starts_with(&self.normalized) {
                return Some(MatchTier::Prefix);
            }
            if form.contains(&self.normalized) {
                return Some(MatchTier::Contains);
            }
        }

        let gloss_hit = entry
            .uzbek
            .as_deref()
            .is_some_and(|uz| uz.to_lowercase().contains(&self.lowered));
        if gloss_hit || entry.transliteration.to_lowercase().contains(&self.lowered) {
            return Some(MatchTier::Gloss);
        }

        None
    }
}

/// Match and order `candidates` for `query`, keeping at most `max_results`
///
/// An empty query applies no filter and keeps candidate order.
pub fn rank(query: &str, candidates: Vec<Entry>, max_results: usize) -> Vec<Entry> {
    let query = PreparedQuery::new(query);

    if query.is_empty() {
        return candidates.into_iter().take(max_results).collect();
    }

    let mut scored: Vec<(MatchTier, usize, Entry)> = candidates
        .into_iter()
        .filter_map(|entry| {
            let tier = query.tier(&entry)?;
            Some((tier, entry.arabic.chars().count(), entry))
        })
        .collect();

    // Stable: equal keys keep store order
    scored.sort_by_key(|(tier, len, _)| (*tier, *len));

    scored
        .into_iter()
        .take(max_results)
        .map(|(_, _, entry)| entry)
        .collect()
}

/// Ranked search over a store
///
/// `sources`: `None` searches every source, an empty set returns nothing.
pub fn search<S: EntryStore + ?Sized>(
    store: &S,
    query: &str,
    sources: Option<&SourceSet>,
    max_results: usize,
) -> Result<Vec<Entry>, StoreError> {
    if sources.is_some_and(|set| set.is_empty()) {
        tracing::debug!("No dictionary selected, skipping search");
        return Ok(vec![]);
    }

    let candidates = store.scan(sources)?;
    let results = rank(query, candidates, max_results);
    tracing::debug!("Search '{}': {} results", query, results.len());

    Ok(results)
}
