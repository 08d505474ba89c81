use std::path::Path;

use anyhow::Context;
use qomus_config::wordnet::WordnetConfig;
use qomus_wordnet::{CorpusReader, EntryIndex, PartOfSpeech, SynsetGroup, SynsetIndex, parse_pos_filter};

use crate::state::AppState;

/// Import every configured corpus file into a synset index
pub fn load_synset_index(config: &WordnetConfig, entries: &EntryIndex) -> anyhow::Result<SynsetIndex> {
    let mut index = SynsetIndex::new();

    for file in &config.corpus {
        let default_pos = file.pos.as_deref().and_then(PartOfSpeech::from_tag);
        let reader = CorpusReader::open(Path::new(&file.path), config.delimiter, default_pos)
            .with_context(|| format!("opening corpus {}", file.path))?;
        let skipped = index
            .extend(reader, entries)
            .with_context(|| format!("reading corpus {}", file.path))?;
        if skipped > 0 {
            tracing::warn!("Skipped {} malformed rows in {}", skipped, file.path);
        }
    }

    tracing::info!("Imported {} synsets", index.len());
    Ok(index)
}

/// Synset search by lemma or gloss
pub async fn handle_wordnet_search(
    state: &AppState,
    query: &str,
    pos: Option<&str>,
) -> anyhow::Result<Vec<SynsetGroup>> {
    let config = state.config.read().await.wordnet.clone();

    // Short queries are rejected before the corpus is touched
    if query.trim().chars().count() < config.min_query_len {
        return Ok(vec![]);
    }

    let index = state
        .synsets
        .get_or_try_init(|| async {
            let entries = EntryIndex::build(state.processor.store().entries());
            load_synset_index(&config, &entries)
        })
        .await?;

    let pos = parse_pos_filter(pos);
    Ok(index.search(query, &pos, config.min_query_len, config.max_results))
}
