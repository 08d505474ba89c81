use qomus_core::dictionary::{Entry, EntryId, EntryStore};
use qomus_core::synonyms::SynonymStore;

use crate::state::AppState;

/// Entries joined to `id` by stored synonym edges
pub async fn handle_synonyms(state: &AppState, id: EntryId) -> anyhow::Result<Vec<Entry>> {
    let ids = state.edges.lock().await.synonyms_of(id)?;

    let mut entries = Vec::with_capacity(ids.len());
    for other in ids {
        match state.processor.store().get_by_id(other)? {
            Some(entry) => entries.push(entry),
            None => tracing::warn!("Synonym edge {}-{} points at a missing entry", id, other),
        }
    }
    Ok(entries)
}
