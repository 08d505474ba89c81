use qomus_core::dictionary::{Entry, EntryId};

use crate::state::AppState;

pub async fn handle_related(state: &AppState, id: EntryId) -> anyhow::Result<Vec<Entry>> {
    let related = state.processor.related_to(id)?;
    tracing::debug!("Entry {}: {} related words", id, related.len());
    Ok(related)
}
