use std::collections::BTreeSet;
use std::path::Path;

use qomus_core::dictionary::{EntryId, StoreError};
use qomus_core::synonyms::{SynonymEdge, SynonymStore};
use serde::{Deserialize, Serialize};

/// Edge store kept in memory and saved as a JSON list of `[a, b]` pairs
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MemoryEdgeStore {
    edges: BTreeSet<SynonymEdge>,
}

impl MemoryEdgeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a saved store; a missing file is an empty store
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            tracing::info!("No edge file at {}, starting empty", path.display());
            return Ok(Self::new());
        }

        let json = std::fs::read_to_string(path)?;
        let store: Self = serde_json::from_str(&json)
            .map_err(|e| StoreError::Unavailable(format!("{}: {}", path.display(), e)))?;
        tracing::info!("Loaded {} synonym edges from {}", store.edges.len(), path.display());
        Ok(store)
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| StoreError::Query(e.to_string()))?;
        std::fs::write(path, json)?;
        tracing::info!("Saved {} synonym edges to {}", self.edges.len(), path.display());
        Ok(())
    }

    pub fn edges(&self) -> impl Iterator<Item = &SynonymEdge> {
        self.edges.iter()
    }
}

impl SynonymStore for MemoryEdgeStore {
    fn insert_edge(&mut self, edge: SynonymEdge) -> Result<bool, StoreError> {
        Ok(self.edges.insert(edge))
    }

    fn synonyms_of(&self, id: EntryId) -> Result<Vec<EntryId>, StoreError> {
        Ok(self.edges.iter().filter_map(|e| e.other(id)).collect())
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
