//! Single-LAQ annexure cross-reference validation

use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;

use laq_types::{AnnexureDocument, LaqDocument, ValidationReport, ValidationStatus};

use crate::extract::extract_references;
use crate::normalize::{normalize_label, normalize_laq_number};
use crate::store::{DocumentStore, StoreError};

/// Errors surfaced by validation operations
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The store became unavailable mid-way through a bulk run. The
    /// count of LAQs validated before the failure is preserved so
    /// partial progress is never silently lost.
    #[error("bulk validation aborted after {completed} LAQ(s): {source}")]
    BulkAborted {
        completed: usize,
        #[source]
        source: StoreError,
    },
}

/// Reconciles annexure references in LAQ answer texts against the
/// annexure documents actually on file.
///
/// Stateless apart from the store handle: every call re-reads the store
/// and computes an ephemeral report, so concurrent invocations need no
/// coordination.
pub struct AnnexureValidator {
    store: Arc<dyn DocumentStore>,
}

impl AnnexureValidator {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub(crate) fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }

    /// Validates annexure references for a single LAQ.
    ///
    /// A LAQ number with no matching documents yields an `Invalid`
    /// report with an explanatory issue, not an error; only store
    /// failures propagate as `Err`.
    pub async fn validate_laq(
        &self,
        laq_number: &str,
        pdf_name: Option<&str>,
    ) -> Result<ValidationReport, ValidationError> {
        let laq_number = normalize_laq_number(laq_number);
        tracing::debug!(laq_number, ?pdf_name, "validating LAQ annexure references");

        let documents = self.store.laq_documents(&laq_number, pdf_name).await?;
        if documents.is_empty() {
            // Absent LAQ: a fully-zeroed invalid report, not an error.
            return Ok(not_found_report(&laq_number, pdf_name));
        }
        let annexures = self.store.annexure_documents(Some(&laq_number)).await?;

        Ok(build_report(&laq_number, pdf_name, &documents, &annexures))
    }
}

/// Pure report assembly over already-fetched documents.
fn build_report(
    laq_number: &str,
    pdf_name: Option<&str>,
    documents: &[LaqDocument],
    annexures: &[AnnexureDocument],
) -> ValidationReport {
    let mut issues = Vec::new();
    let mut advisories = Vec::new();

    // References are re-derived from answer text rather than trusting
    // extraction-time metadata. A missing answer reads as empty text.
    let mut referenced: BTreeSet<String> = BTreeSet::new();
    for document in documents {
        if let Some(answer) = document.answer.as_deref() {
            referenced.extend(extract_references(answer));
        }
    }

    let mut available: BTreeSet<String> = BTreeSet::new();
    for annexure in annexures {
        match annexure.label.as_deref().map(normalize_label) {
            Some(label) if !label.is_empty() => {
                available.insert(label);
            }
            _ => issues.push(format!(
                "Annexure file {} has no label and was excluded from validation.",
                annexure.annexure_file
            )),
        }
    }

    let missing: Vec<String> = referenced.difference(&available).cloned().collect();
    let unreferenced: Vec<String> = available.difference(&referenced).cloned().collect();

    for label in &missing {
        issues.push(format!(
            "Annexure {} is referenced in the answer but not uploaded.",
            label
        ));
    }
    // Uploaded-but-unmentioned annexures stay searchable and valid, so
    // the reverse check only ever produces advisories.
    for label in &unreferenced {
        advisories.push(format!(
            "Annexure {} is uploaded but not referenced in the answer.",
            label
        ));
    }

    let validation_status = if issues.is_empty() {
        ValidationStatus::Valid
    } else {
        ValidationStatus::Invalid
    };

    ValidationReport {
        laq_number: laq_number.to_string(),
        pdf_name: pdf_name.map(str::to_string),
        total_laq_documents: documents.len(),
        total_annexures: referenced.len(),
        total_uploaded_annexures: available.len(),
        referenced_annexures: referenced.into_iter().collect(),
        available_annexures: available.into_iter().collect(),
        missing_annexures: missing,
        unreferenced_annexures: unreferenced,
        issues,
        advisories,
        validation_status,
        checked_at: chrono::Utc::now().timestamp(),
    }
}

fn not_found_report(laq_number: &str, pdf_name: Option<&str>) -> ValidationReport {
    ValidationReport {
        laq_number: laq_number.to_string(),
        pdf_name: pdf_name.map(str::to_string),
        total_laq_documents: 0,
        total_annexures: 0,
        total_uploaded_annexures: 0,
        referenced_annexures: vec![],
        available_annexures: vec![],
        missing_annexures: vec![],
        unreferenced_annexures: vec![],
        issues: vec!["No LAQ documents found for this LAQ number.".to_string()],
        advisories: vec![],
        validation_status: ValidationStatus::Invalid,
        checked_at: chrono::Utc::now().timestamp(),
    }
}

/// Stand-in report for a LAQ whose validation failed outright, used by
/// the bulk validator to keep one bad unit from aborting the whole run.
pub(crate) fn failure_report(
    laq_number: &str,
    pdf_name: &str,
    error: &ValidationError,
) -> ValidationReport {
    ValidationReport {
        laq_number: laq_number.to_string(),
        pdf_name: Some(pdf_name.to_string()),
        total_laq_documents: 0,
        total_annexures: 0,
        total_uploaded_annexures: 0,
        referenced_annexures: vec![],
        available_annexures: vec![],
        missing_annexures: vec![],
        unreferenced_annexures: vec![],
        issues: vec![format!("Validation failed: {}", error)],
        advisories: vec![],
        validation_status: ValidationStatus::Invalid,
        checked_at: chrono::Utc::now().timestamp(),
    }
}
