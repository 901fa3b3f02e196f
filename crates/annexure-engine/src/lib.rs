//! Annexure Engine - cross-reference validation for LAQ answer texts
//!
//! This crate provides:
//! - Annexure reference extraction from free text
//! - Label normalization so equivalent textual forms compare equal
//! - The document store seam (trait + in-memory adapter)
//! - Single-LAQ validation, bulk validation, and corpus-wide usage stats

pub mod bulk;
pub mod engine;
pub mod extract;
pub mod normalize;
pub mod stats;
pub mod store;

// Re-export commonly used items
pub use engine::{AnnexureValidator, ValidationError};
pub use extract::extract_references;
pub use normalize::{normalize_label, normalize_laq_number};
pub use store::{DocumentStore, MemoryStore, StoreError};
