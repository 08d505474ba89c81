use std::path::Path;

use anyhow::Context;
use qomus_config::wordnet::CorpusFile;
use qomus_wordnet::{
    BuildSummary, CorpusError, CorpusReader, HomographPolicy, PartOfSpeech, PersistSummary,
    SynonymGraphBuilder, SynsetRecord, persist,
};
use serde::Serialize;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BuildReport {
    pub summary: BuildSummary,
    pub persisted: PersistSummary,
    pub edges_path: String,
    /// Stopped early; the edges built so far were still saved
    pub cancelled: bool,
}

type RecordSender = kanal::AsyncSender<Result<SynsetRecord, CorpusError>>;

/// Stream one corpus file into the channel from a blocking thread
fn spawn_reader(
    file: CorpusFile,
    delimiter: char,
    tx: RecordSender,
    cancel: CancellationToken,
) -> JoinHandle<Result<usize, CorpusError>> {
    tokio::task::spawn_blocking(move || {
        let default_pos = file.pos.as_deref().and_then(PartOfSpeech::from_tag);
        let reader = CorpusReader::open(Path::new(&file.path), delimiter, default_pos)?;

        let mut sent = 0;
        for item in reader {
            if cancel.is_cancelled() {
                break;
            }
            // Receiver gone: the build has stopped
            if tx.as_sync().send(item).is_err() {
                break;
            }
            sent += 1;
        }

        tracing::debug!("{}: {} rows sent", file.path, sent);
        Ok(sent)
    })
}

/// Build synonym edges from every configured corpus file and save them
pub async fn handle_build_synonyms(
    state: &AppState,
    cancel: CancellationToken,
) -> anyhow::Result<BuildReport> {
    let config = state.config.read().await.wordnet.clone();
    let policy = HomographPolicy::from_first_only(config.merge_homographs_first_only);

    // Index every entry before the first record arrives
    let mut builder = SynonymGraphBuilder::new(state.processor.store().entries()).with_policy(policy);

    if config.corpus.is_empty() {
        tracing::warn!("No corpus files configured");
    }

    let (tx, rx) = kanal::bounded_async(config.channel_capacity.max(1));
    let readers: Vec<_> = config
        .corpus
        .iter()
        .map(|file| spawn_reader(file.clone(), config.delimiter, tx.clone(), cancel.clone()))
        .collect();
    drop(tx);

    let mut cancelled = false;
    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::info!("Synonym build cancelled");
                cancelled = true;
                break;
            }
            item = rx.recv() => match item {
                Ok(item) => builder.feed(item).context("reading synset corpus")?,
                Err(_) => break,
            }
        }
    }
    drop(rx);

    for (file, reader) in config.corpus.iter().zip(readers) {
        reader
            .await?
            .with_context(|| format!("reading corpus {}", file.path))?;
    }

    let outcome = builder.finish();

    let mut store = state.edges.lock().await;
    let persisted = persist(&outcome.edges, &mut *store)?;
    store
        .save(Path::new(&config.edges_path))
        .with_context(|| format!("saving edges to {}", config.edges_path))?;

    Ok(BuildReport {
        summary: outcome.summary,
        persisted,
        edges_path: config.edges_path,
        cancelled,
    })
}
