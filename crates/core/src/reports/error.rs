//! Report error types.

use finpulse_shared::AppError;
use finpulse_shared::types::ReportId;
use thiserror::Error;

/// Errors that can occur during report operations.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The user has no income and no expense records to report on.
    #[error("No financial data found. Add income or expense records first")]
    MissingFinancialData,

    /// The requested report does not exist for this user.
    #[error("Report not found: {0}")]
    ReportNotFound(ReportId),

    /// The record provider failed to load the user's records.
    #[error("Failed to load financial records: {0}")]
    RecordAccess(String),

    /// The report store failed.
    #[error("Report storage failed: {0}")]
    StorageFailure(String),
}

impl ReportError {
    /// Creates a `ReportNotFound` error.
    #[must_use]
    pub const fn not_found(id: ReportId) -> Self {
        Self::ReportNotFound(id)
    }

    /// Creates a `RecordAccess` error.
    #[must_use]
    pub fn record_access(message: impl Into<String>) -> Self {
        Self::RecordAccess(message.into())
    }

    /// Creates a `StorageFailure` error.
    #[must_use]
    pub fn storage_failure(message: impl Into<String>) -> Self {
        Self::StorageFailure(message.into())
    }
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::MissingFinancialData => {
                Self::MissingData("no income or expense records found".to_string())
            }
            ReportError::ReportNotFound(id) => Self::NotFound(format!("report {id}")),
            ReportError::RecordAccess(message) | ReportError::StorageFailure(message) => {
                Self::Storage(message)
            }
        }
    }
}
