pub mod types;

pub use types::{
    AnnexureDocument, AnnexureUsageStats, LaqDocument, SummaryCounts, ValidationReport,
    ValidationStatus, ValidationSummary,
};
