//! HTTP handlers for the validation API
//!
//! All endpoints are read-only queries: validation results are computed
//! per request and never persisted.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use laq_types::{AnnexureUsageStats, ValidationReport, ValidationSummary};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ValidateLaqParams {
    /// Restricts validation to Q&A documents from one source PDF.
    pub pdf_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub laq_documents: usize,
    pub annexure_documents: usize,
}

/// Health check endpoint
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        laq_documents: state.laq_document_count,
        annexure_documents: state.annexure_document_count,
    })
}

/// Validate annexure references for a single LAQ.
///
/// An unknown LAQ number is a 200 with an invalid report, never a 404.
pub async fn validate_laq(
    State(state): State<Arc<AppState>>,
    Path(laq_number): Path<String>,
    Query(params): Query<ValidateLaqParams>,
) -> Result<Json<ValidationReport>, ApiError> {
    info!(laq_number, pdf_name = ?params.pdf_name, "validate LAQ request");

    let report = state
        .validator
        .validate_laq(&laq_number, params.pdf_name.as_deref())
        .await?;

    Ok(Json(report))
}

/// Validate annexure references for every LAQ in the store
pub async fn validate_all(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ValidationSummary>, ApiError> {
    info!("bulk validation request");

    let summary = state.validator.validate_all().await?;
    info!(
        total = summary.total_laqs_validated,
        invalid = summary.summary.invalid_laqs,
        "bulk validation finished"
    );

    Ok(Json(summary))
}

/// Corpus-wide annexure usage statistics
pub async fn annexure_usage_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AnnexureUsageStats>, ApiError> {
    info!("annexure usage stats request");

    let stats = state.validator.annexure_usage_stats().await?;
    Ok(Json(stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use laq_types::{AnnexureDocument, LaqDocument, ValidationStatus};
    use pretty_assertions::assert_eq;

    fn seeded_state() -> Arc<AppState> {
        let laq_documents = vec![LaqDocument {
            laq_number: "010C".to_string(),
            pdf_name: "reply010c.pdf".to_string(),
            question: "Will the Government publish the expenditure details?".to_string(),
            answer: Some("Details in Annexure - I and Annexure-II".to_string()),
            attachments: vec![],
        }];
        let annexure_documents = vec![
            AnnexureDocument {
                label: Some("I".to_string()),
                laq_number: "010C".to_string(),
                annexure_file: "010c_annexure_i.xlsx".to_string(),
                content: String::new(),
            },
            AnnexureDocument {
                label: Some("III".to_string()),
                laq_number: "010C".to_string(),
                annexure_file: "010c_annexure_iii.xlsx".to_string(),
                content: String::new(),
            },
        ];
        Arc::new(AppState::from_documents(laq_documents, annexure_documents))
    }

    #[tokio::test]
    async fn test_health_reports_snapshot_counts() {
        let Json(response) = health(State(seeded_state())).await;
        assert_eq!(response.status, "ok");
        assert_eq!(response.laq_documents, 1);
        assert_eq!(response.annexure_documents, 2);
    }

    #[tokio::test]
    async fn test_validate_laq_returns_report() {
        let Json(report) = validate_laq(
            State(seeded_state()),
            Path("010c".to_string()),
            Query(ValidateLaqParams {
                pdf_name: Some("reply010c.pdf".to_string()),
            }),
        )
        .await
        .unwrap();

        assert_eq!(report.laq_number, "010C");
        assert_eq!(report.referenced_annexures, vec!["I", "II"]);
        assert_eq!(report.available_annexures, vec!["I", "III"]);
        assert_eq!(report.validation_status, ValidationStatus::Invalid);
        assert_eq!(
            report.issues,
            vec!["Annexure II is referenced in the answer but not uploaded.".to_string()]
        );
    }

    #[tokio::test]
    async fn test_unknown_laq_is_a_report_not_an_error() {
        let Json(report) = validate_laq(
            State(seeded_state()),
            Path("999Z".to_string()),
            Query(ValidateLaqParams { pdf_name: None }),
        )
        .await
        .unwrap();

        assert_eq!(report.total_laq_documents, 0);
        assert_eq!(report.validation_status, ValidationStatus::Invalid);
    }

    #[tokio::test]
    async fn test_validate_all_and_stats_agree_on_missing_labels() {
        let state = seeded_state();

        let Json(summary) = validate_all(State(state.clone())).await.unwrap();
        let Json(stats) = annexure_usage_stats(State(state)).await.unwrap();

        assert_eq!(summary.total_laqs_validated, 1);
        assert_eq!(summary.summary.invalid_laqs, 1);
        assert_eq!(stats.referenced_but_missing, vec!["II".to_string()]);
        assert_eq!(stats.unreferenced_annexures, vec!["III".to_string()]);
        assert_eq!(
            summary.validation_reports[0].missing_annexures,
            stats.referenced_but_missing
        );
    }
}
