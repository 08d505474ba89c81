use std::collections::{BTreeSet, HashMap};

use qomus_core::dictionary::{Entry, EntryId, StoreError};
use qomus_core::synonyms::{SynonymEdge, SynonymStore};
use qomus_lang_arabic::normalize;
use serde::{Deserialize, Serialize};

use crate::error::CorpusError;
use crate::record::SynsetRecord;

/// Normalized Arabic form to every entry id carrying it
pub struct EntryIndex {
    forms: HashMap<String, Vec<EntryId>>,
}

impl EntryIndex {
    pub fn build(entries: &[Entry]) -> Self {
        let mut forms: HashMap<String, Vec<EntryId>> = HashMap::new();
        for entry in entries {
            let ids = forms.entry(normalize(&entry.arabic)).or_default();
            if !ids.contains(&entry.id) {
                ids.push(entry.id);
            }
        }
        tracing::info!("Indexed {} entries under {} forms", entries.len(), forms.len());
        Self { forms }
    }

    /// Ids for an already normalized form, in entry order
    pub fn lookup(&self, normalized: &str) -> &[EntryId] {
        self.forms.get(normalized).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

/// How a lemma shared by several entries joins a synset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomographPolicy {
    /// Every entry with the form joins
    #[default]
    MergeAll,
    /// Only the first entry with the form joins
    FirstMatch,
}

impl HomographPolicy {
    pub fn from_first_only(first_only: bool) -> Self {
        if first_only {
            HomographPolicy::FirstMatch
        } else {
            HomographPolicy::MergeAll
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildSummary {
    pub records_read: usize,
    pub records_skipped: usize,
    pub candidate_sets: usize,
    pub edges_emitted: usize,
    pub tokens_discarded: usize,
    pub lemmas_unresolved: usize,
}

#[derive(Debug, Default)]
pub struct BuildOutcome {
    pub edges: BTreeSet<SynonymEdge>,
    pub summary: BuildSummary,
}

/// Turns synset records into deduplicated synonym edges
///
/// The entry index is complete before the first record is matched.
pub struct SynonymGraphBuilder {
    index: EntryIndex,
    policy: HomographPolicy,
    seen: BTreeSet<SynonymEdge>,
    summary: BuildSummary,
}

impl SynonymGraphBuilder {
    pub fn new(entries: &[Entry]) -> Self {
        Self {
            index: EntryIndex::build(entries),
            policy: HomographPolicy::default(),
            seen: BTreeSet::new(),
            summary: BuildSummary::default(),
        }
    }

    pub fn with_policy(mut self, policy: HomographPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Match one record and emit the edges it adds
    pub fn process(&mut self, record: &SynsetRecord) {
        self.summary.records_read += 1;

        let tokens = record.arabic_tokens();
        self.summary.tokens_discarded += tokens.discarded;

        let mut candidates = BTreeSet::new();
        for token in tokens.kept {
            let ids = self.index.lookup(&normalize(token));
            if ids.is_empty() {
                self.summary.lemmas_unresolved += 1;
                continue;
            }
            match self.policy {
                HomographPolicy::MergeAll => candidates.extend(ids.iter().copied()),
                HomographPolicy::FirstMatch => {
                    candidates.insert(ids[0]);
                }
            }
        }

        if candidates.len() < 2 {
            return;
        }
        self.summary.candidate_sets += 1;

        let ids: Vec<EntryId> = candidates.into_iter().collect();
        for (i, &x) in ids.iter().enumerate() {
            for &y in &ids[i + 1..] {
                if let Some(edge) = SynonymEdge::new(x, y)
                    && self.seen.insert(edge)
                {
                    self.summary.edges_emitted += 1;
                }
            }
        }
    }

    /// Record a row the reader rejected
    pub fn skip(&mut self, error: &CorpusError) {
        self.summary.records_read += 1;
        self.summary.records_skipped += 1;
        tracing::warn!("Skipping corpus row: {}", error);
    }

    /// Process a reader item; IO errors are returned, malformed rows are counted
    pub fn feed(&mut self, item: Result<SynsetRecord, CorpusError>) -> Result<(), CorpusError> {
        match item {
            Ok(record) => self.process(&record),
            Err(e) if e.is_malformed_row() => self.skip(&e),
            Err(e) => return Err(e),
        }
        Ok(())
    }

    pub fn summary(&self) -> &BuildSummary {
        &self.summary
    }

    pub fn edges(&self) -> &BTreeSet<SynonymEdge> {
        &self.seen
    }

    pub fn finish(self) -> BuildOutcome {
        tracing::info!(
            "Synonym build: {} records read, {} skipped, {} candidate sets, {} edges",
            self.summary.records_read,
            self.summary.records_skipped,
            self.summary.candidate_sets,
            self.summary.edges_emitted
        );
        BuildOutcome {
            edges: self.seen,
            summary: self.summary,
        }
    }
}

/// Build the graph for `entries` from one stream of records
pub fn build<I>(
    entries: &[Entry],
    records: I,
    policy: HomographPolicy,
) -> Result<BuildOutcome, CorpusError>
where
    I: IntoIterator<Item = Result<SynsetRecord, CorpusError>>,
{
    let mut builder = SynonymGraphBuilder::new(entries).with_policy(policy);
    for item in records {
        builder.feed(item)?;
    }
    Ok(builder.finish())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersistSummary {
    pub inserted: usize,
    pub duplicates: usize,
}

/// Write edges into a store, ignoring ones it already holds
pub fn persist<'a, I, S>(edges: I, store: &mut S) -> Result<PersistSummary, StoreError>
where
    I: IntoIterator<Item = &'a SynonymEdge>,
    S: SynonymStore + ?Sized,
{
    let mut summary = PersistSummary::default();
    for edge in edges {
        if store.insert_edge(*edge)? {
            summary.inserted += 1;
        } else {
            summary.duplicates += 1;
        }
    }
    tracing::info!(
        "Persisted {} new synonym edges, {} already stored",
        summary.inserted,
        summary.duplicates
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use qomus_core::dictionary::Source;

    use super::*;
    use crate::reader::CorpusReader;
    use crate::store::MemoryEdgeStore;

    fn entries() -> Vec<Entry> {
        vec![
            Entry::new(1, "كِتَاب", Source::Main),
            Entry::new(2, "سِفْر", Source::Main),
            Entry::new(3, "مُجَلَّد", Source::Classic),
            Entry::new(4, "سَفَر", Source::Modern),
            Entry::new(5, "قَلَم", Source::Main),
        ]
    }

    fn records(corpus: &str) -> CorpusReader<&[u8]> {
        CorpusReader::new(corpus.as_bytes(), ',', None).unwrap()
    }

    fn pairs(edges: &BTreeSet<SynonymEdge>) -> Vec<(EntryId, EntryId)> {
        edges.iter().map(|e| (*e).into()).collect()
    }

    #[test]
    fn emits_every_pair_once() {
        let corpus = "\
s1-n,book,,,\"مجلد، كتاب، سفر\"
s2-n,volume,,,\"كتاب سفر\"
";
        let outcome = build(&entries(), records(corpus), HomographPolicy::MergeAll).unwrap();

        // سفر and سَفَر share the normalized form, both join
        assert_eq!(
            pairs(&outcome.edges),
            vec![(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)]
        );
        assert_eq!(outcome.summary.candidate_sets, 2);
        assert_eq!(outcome.summary.edges_emitted, 6);
        assert!(outcome.edges.iter().all(|e| e.a() < e.b()));
    }

    #[test]
    fn first_match_policy_takes_one_homograph() {
        let corpus = "s1-n,book,,,\"كتاب، سفر\"\n";
        let outcome = build(&entries(), records(corpus), HomographPolicy::FirstMatch).unwrap();
        assert_eq!(pairs(&outcome.edges), vec![(1, 2)]);
    }

    #[test]
    fn single_resolved_lemma_is_not_a_set() {
        let corpus = "\
s1-n,pen,,,\"قلم، يراع\"
s2-n,pen,,,\"قلم، قلم\"
";
        let outcome = build(&entries(), records(corpus), HomographPolicy::MergeAll).unwrap();
        assert!(outcome.edges.is_empty());
        assert_eq!(outcome.summary.candidate_sets, 0);
        assert_eq!(outcome.summary.lemmas_unresolved, 1);
    }

    #[test]
    fn malformed_rows_are_counted_not_raised() {
        let corpus = "\
synset_id,en,en_gloss,en_ex,ar
s1-n,book,,,\"كتاب، مجلد pen\"
,book,,,كتاب
s3-n,too few
s5-n,book,,,
s4-n,book,,,\"كتاب
";
        let outcome = build(&entries(), records(corpus), HomographPolicy::MergeAll).unwrap();
        assert_eq!(pairs(&outcome.edges), vec![(1, 3)]);
        assert_eq!(
            outcome.summary,
            BuildSummary {
                records_read: 5,
                records_skipped: 4,
                candidate_sets: 1,
                edges_emitted: 1,
                tokens_discarded: 1,
                lemmas_unresolved: 0,
            }
        );
    }

    #[test]
    fn rebuild_is_idempotent_against_the_store() {
        let corpus = "s1-n,book,,,\"كتاب، سفر، مجلد\"\n";
        let mut store = MemoryEdgeStore::new();

        let first = build(&entries(), records(corpus), HomographPolicy::MergeAll).unwrap();
        let persisted = persist(&first.edges, &mut store).unwrap();
        assert_eq!(persisted.inserted, 6);
        assert_eq!(store.edge_count(), 6);

        let second = build(&entries(), records(corpus), HomographPolicy::MergeAll).unwrap();
        let persisted = persist(&second.edges, &mut store).unwrap();
        assert_eq!(persisted, PersistSummary { inserted: 0, duplicates: 6 });
        assert_eq!(store.edge_count(), 6);
    }

    #[test]
    fn duplicate_entry_ids_do_not_make_self_loops() {
        let entries = vec![
            Entry::new(1, "كتاب", Source::Main),
            Entry::new(2, "كِتاب", Source::Main),
        ];
        let index = EntryIndex::build(&entries);
        assert_eq!(index.lookup("كتاب"), &[1, 2]);
        assert!(index.lookup("قلم").is_empty());

        let outcome = build(&entries, records("s1-n,x,,,\"كتاب كتاب\"\n"), HomographPolicy::MergeAll).unwrap();
        assert_eq!(pairs(&outcome.edges), vec![(1, 2)]);
    }
}
