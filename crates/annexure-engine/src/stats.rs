//! Corpus-wide annexure usage analytics

use std::collections::{BTreeMap, BTreeSet};

use laq_types::AnnexureUsageStats;

use crate::engine::{AnnexureValidator, ValidationError};
use crate::extract::extract_references;
use crate::normalize::normalize_label;

impl AnnexureValidator {
    /// Computes usage counts and anomaly sets across the whole corpus.
    ///
    /// Each LAQ answer contributes its deduplicated reference set, so a
    /// label cited in three different answers counts 3 in
    /// `total_references_in_laqs` and 1 in `unique_referenced_annexures`.
    /// `unreferenced_annexures` and `referenced_but_missing` are the
    /// corpus-wide analogues of the per-LAQ reverse/forward checks.
    pub async fn annexure_usage_stats(&self) -> Result<AnnexureUsageStats, ValidationError> {
        let annexures = self.store().annexure_documents(None).await?;
        let laq_documents = self.store().all_laq_documents().await?;

        let mut stored_labels: BTreeSet<String> = BTreeSet::new();
        for annexure in &annexures {
            if let Some(label) = annexure.label.as_deref() {
                let label = normalize_label(label);
                if !label.is_empty() {
                    stored_labels.insert(label);
                }
            }
        }

        let mut usage_breakdown: BTreeMap<String, usize> = BTreeMap::new();
        let mut total_references = 0;
        for document in &laq_documents {
            let Some(answer) = document.answer.as_deref() else {
                continue;
            };
            for label in extract_references(answer) {
                *usage_breakdown.entry(label).or_insert(0) += 1;
                total_references += 1;
            }
        }

        let referenced_labels: BTreeSet<String> = usage_breakdown.keys().cloned().collect();

        tracing::debug!(
            stored = stored_labels.len(),
            referenced = referenced_labels.len(),
            total_references,
            "computed annexure usage stats"
        );

        Ok(AnnexureUsageStats {
            total_annexure_documents: annexures.len(),
            unique_annexure_labels: stored_labels.len(),
            total_references_in_laqs: total_references,
            unique_referenced_annexures: referenced_labels.len(),
            unreferenced_annexures: stored_labels
                .difference(&referenced_labels)
                .cloned()
                .collect(),
            referenced_but_missing: referenced_labels
                .difference(&stored_labels)
                .cloned()
                .collect(),
            annexure_usage_breakdown: usage_breakdown,
        })
    }
}
