use serde::{Deserialize, Serialize};

use crate::dictionary::{EntryId, StoreError};

/// Unordered pair of synonymous entries, stored as `(min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "(EntryId, EntryId)", into = "(EntryId, EntryId)")]
pub struct SynonymEdge {
    a: EntryId,
    b: EntryId,
}

impl SynonymEdge {
    /// Canonical edge for two ids, `None` for a self-loop
    pub fn new(x: EntryId, y: EntryId) -> Option<Self> {
        match x.cmp(&y) {
            std::cmp::Ordering::Less => Some(Self { a: x, b: y }),
            std::cmp::Ordering::Greater => Some(Self { a: y, b: x }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn a(&self) -> EntryId {
        self.a
    }

    pub fn b(&self) -> EntryId {
        self.b
    }

    /// The other endpoint, if `id` is on this edge
    pub fn other(&self, id: EntryId) -> Option<EntryId> {
        if id == self.a {
            Some(self.b)
        } else if id == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

impl TryFrom<(EntryId, EntryId)> for SynonymEdge {
    type Error = String;

    fn try_from((x, y): (EntryId, EntryId)) -> Result<Self, Self::Error> {
        Self::new(x, y).ok_or_else(|| format!("self-loop on entry {}", x))
    }
}

impl From<SynonymEdge> for (EntryId, EntryId) {
    fn from(edge: SynonymEdge) -> Self {
        (edge.a, edge.b)
    }
}

/// Persistent synonym relation with unique-edge enforcement
pub trait SynonymStore: Send + Sync {
    /// Insert an edge; `Ok(false)` when it already exists
    fn insert_edge(&mut self, edge: SynonymEdge) -> Result<bool, StoreError>;

    /// Ids sharing an edge with `id`
    fn synonyms_of(&self, id: EntryId) -> Result<Vec<EntryId>, StoreError>;

    fn edge_count(&self) -> usize;
}
