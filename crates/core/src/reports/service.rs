//! Report generation service.
//!
//! [`ReportService`] is the pure entry point: records in, snapshot out.
//! [`ReportOrchestrator`] wraps it with the collaborator seams for
//! loading records, storing reports, and delivering notifications.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use finpulse_shared::types::{ReportId, UserId};

use super::advice;
use super::aggregate;
use super::error::ReportError;
use super::health;
use super::types::{Report, ReportEvent, ReportPeriod, ReportSnapshot, ReportType};
use crate::records::FinancialProfile;

/// Service for computing report snapshots.
pub struct ReportService;

impl ReportService {
    /// Computes a complete snapshot from raw records.
    ///
    /// Runs aggregation, health scoring, and the recommendation rules in
    /// order. Pure and deterministic for a given `now`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MissingFinancialData`] when the profile
    /// has neither income nor expense records.
    pub fn generate_snapshot(
        profile: &FinancialProfile,
        now: DateTime<Utc>,
    ) -> Result<ReportSnapshot, ReportError> {
        let aggregates = aggregate::aggregate_profile(profile, now)?;
        let health = health::assess(&aggregates.summary);
        let recommendations = advice::recommend(
            &aggregates.summary,
            &aggregates.asset_allocation,
            &aggregates.goal_progress,
            &health,
        );

        Ok(ReportSnapshot {
            summary: aggregates.summary,
            income_breakdown: aggregates.income_breakdown,
            expense_breakdown: aggregates.expense_breakdown,
            asset_allocation: aggregates.asset_allocation,
            loan_summary: aggregates.loan_summary,
            goal_progress: aggregates.goal_progress,
            health,
            recommendations,
        })
    }
}

/// Provides a user's raw financial records.
///
/// This trait is implemented by the persistence layer outside this crate.
pub trait RecordProvider: Send + Sync {
    /// Load every financial record for the user.
    fn load_profile(
        &self,
        user_id: UserId,
    ) -> impl std::future::Future<Output = Result<FinancialProfile, ReportError>> + Send;
}

/// Stores generated reports.
///
/// Reads and deletes are scoped by owner so one user can never touch
/// another user's reports.
pub trait ReportStore: Send + Sync {
    /// Persist a report.
    fn save(
        &self,
        report: Report,
    ) -> impl std::future::Future<Output = Result<(), ReportError>> + Send;

    /// Find a report by ID for the given owner.
    fn find_by_id(
        &self,
        id: ReportId,
        user_id: UserId,
    ) -> impl std::future::Future<Output = Result<Option<Report>, ReportError>> + Send;

    /// List all reports for a user, newest first.
    fn list_for_user(
        &self,
        user_id: UserId,
    ) -> impl std::future::Future<Output = Result<Vec<Report>, ReportError>> + Send;

    /// List a user's reports of one type, newest first.
    fn list_by_type(
        &self,
        user_id: UserId,
        report_type: ReportType,
    ) -> impl std::future::Future<Output = Result<Vec<Report>, ReportError>> + Send;

    /// Delete a report by ID for the given owner.
    fn delete(
        &self,
        id: ReportId,
        user_id: UserId,
    ) -> impl std::future::Future<Output = Result<bool, ReportError>> + Send;
}

/// Delivers user-facing notifications about report activity.
pub trait NotificationSink: Send + Sync {
    /// Deliver one event.
    fn notify(
        &self,
        event: ReportEvent,
    ) -> impl std::future::Future<Output = Result<(), ReportError>> + Send;
}

/// Report operations over injected collaborators.
pub struct ReportOrchestrator<P, S, N>
where
    P: RecordProvider,
    S: ReportStore,
    N: NotificationSink,
{
    provider: Arc<P>,
    store: Arc<S>,
    notifier: Arc<N>,
}

impl<P, S, N> ReportOrchestrator<P, S, N>
where
    P: RecordProvider,
    S: ReportStore,
    N: NotificationSink,
{
    /// Create a new orchestrator.
    #[must_use]
    pub fn new(provider: Arc<P>, store: Arc<S>, notifier: Arc<N>) -> Self {
        Self {
            provider,
            store,
            notifier,
        }
    }

    /// Generates and stores a report for the user.
    ///
    /// The period defaults to the trailing year ending at `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be loaded, the profile has
    /// no cash-flow records, or the store fails. Notification failures
    /// never fail the operation.
    pub async fn generate(
        &self,
        user_id: UserId,
        report_type: ReportType,
        period: Option<ReportPeriod>,
        now: DateTime<Utc>,
    ) -> Result<Report, ReportError> {
        let profile = self.provider.load_profile(user_id).await?;
        let snapshot = ReportService::generate_snapshot(&profile, now)?;

        let report = Report {
            id: ReportId::new(),
            user_id,
            report_type,
            period: period.unwrap_or_else(|| ReportPeriod::trailing_year(now)),
            generated_at: now,
            data: snapshot,
        };
        self.store.save(report.clone()).await?;

        // Notify best-effort (report already saved)
        let _ = self
            .notifier
            .notify(ReportEvent::Generated {
                user_id,
                report_id: report.id,
                report_type,
            })
            .await;

        Ok(report)
    }

    /// Gets one report, scoped to its owner.
    ///
    /// # Errors
    ///
    /// Returns an error if the report does not exist for this user or
    /// the store fails.
    pub async fn get(&self, id: ReportId, user_id: UserId) -> Result<Report, ReportError> {
        self.store
            .find_by_id(id, user_id)
            .await?
            .ok_or_else(|| ReportError::not_found(id))
    }

    /// Lists the user's reports.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub async fn list(&self, user_id: UserId) -> Result<Vec<Report>, ReportError> {
        self.store.list_for_user(user_id).await
    }

    /// Lists the user's reports of one type.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub async fn list_by_type(
        &self,
        user_id: UserId,
        report_type: ReportType,
    ) -> Result<Vec<Report>, ReportError> {
        self.store.list_by_type(user_id, report_type).await
    }

    /// Deletes a report, scoped to its owner.
    ///
    /// # Errors
    ///
    /// Returns an error if the report does not exist for this user or
    /// the store fails. Notification failures never fail the operation.
    pub async fn delete(&self, id: ReportId, user_id: UserId) -> Result<(), ReportError> {
        let report = self.get(id, user_id).await?;

        self.store.delete(id, user_id).await?;

        // Notify best-effort (report already deleted)
        let _ = self
            .notifier
            .notify(ReportEvent::Deleted {
                user_id,
                report_type: report.report_type,
            })
            .await;

        Ok(())
    }
}
