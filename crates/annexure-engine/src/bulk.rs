//! Corpus-wide validation across every LAQ in the store

use std::collections::BTreeSet;

use laq_types::{SummaryCounts, ValidationStatus, ValidationSummary};

use crate::engine::{failure_report, AnnexureValidator, ValidationError};
use crate::normalize::normalize_laq_number;
use crate::store::StoreError;

impl AnnexureValidator {
    /// Validates every distinct `(laq_number, pdf_name)` unit in the
    /// store and aggregates the outcomes.
    ///
    /// Units are processed in sorted order so a given store snapshot
    /// always produces the same summary. A unit whose validation fails
    /// for a non-connectivity reason is recorded as an invalid report
    /// and the run continues; store unavailability aborts the run with
    /// the completed count preserved in the error.
    pub async fn validate_all(&self) -> Result<ValidationSummary, ValidationError> {
        let all_documents = self.store().all_laq_documents().await?;

        let units: BTreeSet<(String, String)> = all_documents
            .iter()
            .map(|doc| (normalize_laq_number(&doc.laq_number), doc.pdf_name.clone()))
            .collect();

        tracing::info!(units = units.len(), "running bulk annexure validation");

        let mut validation_reports = Vec::with_capacity(units.len());
        let mut invalid_laqs = 0;

        for (laq_number, pdf_name) in units {
            let report = match self.validate_laq(&laq_number, Some(&pdf_name)).await {
                Ok(report) => report,
                Err(ValidationError::Store(source @ StoreError::Unavailable(_))) => {
                    tracing::error!(
                        laq_number,
                        completed = validation_reports.len(),
                        "store became unavailable during bulk validation"
                    );
                    return Err(ValidationError::BulkAborted {
                        completed: validation_reports.len(),
                        source,
                    });
                }
                Err(error) => {
                    tracing::warn!(laq_number, %error, "LAQ validation failed; recording and continuing");
                    failure_report(&laq_number, &pdf_name, &error)
                }
            };

            if report.validation_status == ValidationStatus::Invalid {
                invalid_laqs += 1;
            }
            validation_reports.push(report);
        }

        let valid_laqs = validation_reports.len() - invalid_laqs;
        Ok(ValidationSummary {
            total_laqs_validated: validation_reports.len(),
            total_with_issues: invalid_laqs,
            validation_reports,
            summary: SummaryCounts {
                valid_laqs,
                invalid_laqs,
                overall_status: if invalid_laqs == 0 {
                    ValidationStatus::Valid
                } else {
                    ValidationStatus::Invalid
                },
            },
        })
    }
}
