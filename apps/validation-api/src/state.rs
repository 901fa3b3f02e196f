//! Application state for the validation API
//!
//! The engine reads from a store snapshot loaded at startup: two JSON
//! files exported by the ingestion pipeline, held in a `MemoryStore`.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use annexure_engine::{AnnexureValidator, MemoryStore};
use laq_types::{AnnexureDocument, LaqDocument};

/// Shared application state
pub struct AppState {
    /// The validation engine over the loaded store snapshot
    pub validator: AnnexureValidator,
    /// Counts captured at load time, reported by /health
    pub laq_document_count: usize,
    pub annexure_document_count: usize,
}

impl AppState {
    /// Initialize application state from environment configuration.
    ///
    /// Reads `laq_documents.json` and `annexure_documents.json` from
    /// `LAQ_DATA_DIR` (default `./data`). A missing file yields an empty
    /// collection with a warning; a malformed file is a startup error.
    pub fn new() -> Result<Self> {
        let data_dir = std::env::var("LAQ_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        info!("Loading store snapshot from {:?}", data_dir);

        let laq_documents: Vec<LaqDocument> =
            load_collection(&data_dir.join("laq_documents.json"))?;
        let annexure_documents: Vec<AnnexureDocument> =
            load_collection(&data_dir.join("annexure_documents.json"))?;

        Ok(Self::from_documents(laq_documents, annexure_documents))
    }

    pub fn from_documents(
        laq_documents: Vec<LaqDocument>,
        annexure_documents: Vec<AnnexureDocument>,
    ) -> Self {
        let laq_document_count = laq_documents.len();
        let annexure_document_count = annexure_documents.len();
        info!(
            laq_document_count,
            annexure_document_count, "store snapshot loaded"
        );

        let store = Arc::new(MemoryStore::seed(laq_documents, annexure_documents));
        Self {
            validator: AnnexureValidator::new(store),
            laq_document_count,
            annexure_document_count,
        }
    }
}

fn load_collection<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        warn!("{:?} not found, starting with an empty collection", path);
        return Ok(Vec::new());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}
