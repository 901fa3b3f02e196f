//! Document store seam for the validation engine
//!
//! The real corpus lives in an external vector store owned by the
//! ingestion pipeline; the engine only ever needs three read queries, so
//! that surface is captured here as a trait. `MemoryStore` backs the
//! trait for tests and for serving pre-loaded snapshots.

use async_trait::async_trait;
use thiserror::Error;

use laq_types::{AnnexureDocument, LaqDocument};

/// Errors surfaced by a document store adapter
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store cannot be reached or timed out. Distinct from an empty
    /// query result, which is a normal outcome.
    #[error("document store unavailable: {0}")]
    Unavailable(String),

    /// The store rejected or failed the query
    #[error("store query failed: {0}")]
    Query(String),
}

/// Read-only access to LAQ and annexure documents.
///
/// Implementations must be safe for concurrent reads and reflect the
/// latest committed state at call time.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All Q&A documents filed under `laq_number`, optionally restricted
    /// to one source PDF. An empty result is not an error.
    async fn laq_documents(
        &self,
        laq_number: &str,
        pdf_name: Option<&str>,
    ) -> Result<Vec<LaqDocument>, StoreError>;

    /// Every Q&A document in the store, for bulk operations.
    async fn all_laq_documents(&self) -> Result<Vec<LaqDocument>, StoreError>;

    /// Annexure documents, optionally restricted to one LAQ number.
    async fn annexure_documents(
        &self,
        laq_number: Option<&str>,
    ) -> Result<Vec<AnnexureDocument>, StoreError>;
}

/// In-memory document store adapter.
///
/// LAQ number matching is case-insensitive; PDF name matching is exact.
#[derive(Debug, Default)]
pub struct MemoryStore {
    laq_documents: Vec<LaqDocument>,
    annexure_documents: Vec<AnnexureDocument>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(
        laq_documents: Vec<LaqDocument>,
        annexure_documents: Vec<AnnexureDocument>,
    ) -> Self {
        Self {
            laq_documents,
            annexure_documents,
        }
    }

    pub fn push_laq(&mut self, document: LaqDocument) {
        self.laq_documents.push(document);
    }

    pub fn push_annexure(&mut self, document: AnnexureDocument) {
        self.annexure_documents.push(document);
    }

    pub fn laq_document_count(&self) -> usize {
        self.laq_documents.len()
    }

    pub fn annexure_document_count(&self) -> usize {
        self.annexure_documents.len()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn laq_documents(
        &self,
        laq_number: &str,
        pdf_name: Option<&str>,
    ) -> Result<Vec<LaqDocument>, StoreError> {
        Ok(self
            .laq_documents
            .iter()
            .filter(|doc| doc.laq_number.eq_ignore_ascii_case(laq_number))
            .filter(|doc| pdf_name.map_or(true, |pdf| doc.pdf_name == pdf))
            .cloned()
            .collect())
    }

    async fn all_laq_documents(&self) -> Result<Vec<LaqDocument>, StoreError> {
        Ok(self.laq_documents.clone())
    }

    async fn annexure_documents(
        &self,
        laq_number: Option<&str>,
    ) -> Result<Vec<AnnexureDocument>, StoreError> {
        Ok(self
            .annexure_documents
            .iter()
            .filter(|doc| laq_number.map_or(true, |laq| doc.laq_number.eq_ignore_ascii_case(laq)))
            .cloned()
            .collect())
    }
}
