pub mod error;
pub mod graph;
pub mod index;
pub mod reader;
pub mod record;
pub mod store;

pub use error::CorpusError;
pub use graph::{
    BuildOutcome, BuildSummary, EntryIndex, HomographPolicy, PersistSummary, SynonymGraphBuilder,
    build, persist,
};
pub use index::{Lemma, Synset, SynsetGroup, SynsetIndex};
pub use reader::CorpusReader;
pub use record::{PartOfSpeech, SynsetRecord, parse_pos_filter};
pub use store::MemoryEdgeStore;
