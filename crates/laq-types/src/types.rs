use std::collections::BTreeMap;

/// One question/answer pair extracted from a source LAQ PDF.
///
/// Created by the PDF ingestion pipeline and immutable afterwards; the
/// validation engine only ever reads these.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LaqDocument {
    pub laq_number: String,
    pub pdf_name: String,
    pub question: String,
    /// Answer body scanned for annexure references. `None` means the
    /// record was stored without answer text; the validator treats that
    /// as an empty answer rather than a hard failure.
    #[serde(default)]
    pub answer: Option<String>,
    /// Annexure labels recorded at extraction time. Advisory only: the
    /// validator re-derives references from `answer` and never trusts
    /// this field on its own.
    #[serde(default)]
    pub attachments: Vec<String>,
}

/// One uploaded annexure (spreadsheet/attachment) filed under a LAQ.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnnexureDocument {
    /// Canonical annexure identifier, e.g. "A", "I", "II". `None` when
    /// the upload carried no recognizable label.
    #[serde(default)]
    pub label: Option<String>,
    pub laq_number: String,
    pub annexure_file: String,
    /// Parsed tabular/text content. Opaque to the validator.
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    Valid,
    Invalid,
}

impl std::fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationStatus::Valid => write!(f, "valid"),
            ValidationStatus::Invalid => write!(f, "invalid"),
        }
    }
}

/// Validation outcome for a single LAQ. Ephemeral: computed per request,
/// never persisted.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ValidationReport {
    pub laq_number: String,
    pub pdf_name: Option<String>,
    pub total_laq_documents: usize,
    /// Cardinality of `referenced_annexures`.
    pub total_annexures: usize,
    /// Cardinality of `available_annexures`.
    pub total_uploaded_annexures: usize,
    /// Labels found in the answer texts, normalized and sorted.
    pub referenced_annexures: Vec<String>,
    /// Labels of annexure documents on file, normalized and sorted.
    pub available_annexures: Vec<String>,
    /// Forward mismatches: referenced but not uploaded.
    pub missing_annexures: Vec<String>,
    /// Reverse mismatches: uploaded but never referenced.
    pub unreferenced_annexures: Vec<String>,
    /// Status-affecting problems. Invariant: `validation_status` is
    /// `Invalid` iff this list is non-empty.
    pub issues: Vec<String>,
    /// Advisory notes (reverse mismatches). Never affect status.
    pub advisories: Vec<String>,
    pub validation_status: ValidationStatus,
    /// Unix timestamp of the validation run.
    pub checked_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SummaryCounts {
    pub valid_laqs: usize,
    pub invalid_laqs: usize,
    pub overall_status: ValidationStatus,
}

/// Aggregate outcome of validating every LAQ in the store.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ValidationSummary {
    pub total_laqs_validated: usize,
    pub total_with_issues: usize,
    pub validation_reports: Vec<ValidationReport>,
    pub summary: SummaryCounts,
}

/// Corpus-wide annexure usage analytics.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnnexureUsageStats {
    pub total_annexure_documents: usize,
    pub unique_annexure_labels: usize,
    pub total_references_in_laqs: usize,
    pub unique_referenced_annexures: usize,
    /// Normalized label -> number of LAQ answers referencing it.
    pub annexure_usage_breakdown: BTreeMap<String, usize>,
    /// Stored but never referenced by any answer text.
    pub unreferenced_annexures: Vec<String>,
    /// Referenced by some answer text but absent from the store.
    pub referenced_but_missing: Vec<String>,
}
