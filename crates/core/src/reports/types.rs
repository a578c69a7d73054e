//! Report data types.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use finpulse_shared::types::{GoalId, ReportId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of report requested by the user.
///
/// The engine computes the same snapshot for every kind; the type is
/// carried as metadata and drives presentation in downstream renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportType {
    /// Every section.
    Comprehensive,
    /// Income-focused presentation.
    #[serde(rename = "Income Analysis")]
    IncomeAnalysis,
    /// Asset-focused presentation.
    #[serde(rename = "Asset Overview")]
    AssetOverview,
    /// Goal-focused presentation.
    #[serde(rename = "Goal Progress")]
    GoalProgress,
    /// Expense-focused presentation.
    #[serde(rename = "Expense Analysis")]
    ExpenseAnalysis,
    /// Net-worth-focused presentation.
    #[serde(rename = "Net Worth Summary")]
    NetWorthSummary,
}

impl ReportType {
    /// Returns the string representation of the report type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Comprehensive => "Comprehensive",
            Self::IncomeAnalysis => "Income Analysis",
            Self::AssetOverview => "Asset Overview",
            Self::GoalProgress => "Goal Progress",
            Self::ExpenseAnalysis => "Expense Analysis",
            Self::NetWorthSummary => "Net Worth Summary",
        }
    }

    /// Parses a report type from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "comprehensive" => Some(Self::Comprehensive),
            "income analysis" => Some(Self::IncomeAnalysis),
            "asset overview" => Some(Self::AssetOverview),
            "goal progress" => Some(Self::GoalProgress),
            "expense analysis" => Some(Self::ExpenseAnalysis),
            "net worth summary" => Some(Self::NetWorthSummary),
            _ => None,
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Date window a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// First day covered.
    pub start_date: NaiveDate,
    /// Last day covered.
    pub end_date: NaiveDate,
}

impl ReportPeriod {
    /// Default window length in days.
    pub const DEFAULT_DAYS: i64 = 365;

    /// Builds a window of `days` days ending on `now`'s date.
    #[must_use]
    pub fn trailing_days(now: DateTime<Utc>, days: i64) -> Self {
        let end_date = now.date_naive();
        Self {
            start_date: end_date - Duration::days(days),
            end_date,
        }
    }

    /// Builds the default window: one year ending on `now`'s date.
    #[must_use]
    pub fn trailing_year(now: DateTime<Utc>) -> Self {
        Self::trailing_days(now, Self::DEFAULT_DAYS)
    }

    /// Returns the length of the window in days.
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

/// Headline cash-flow and balance totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Total monthly income across sources.
    pub total_income: Decimal,
    /// Total monthly expenses after frequency normalization.
    pub total_expenses: Decimal,
    /// Total value of asset holdings.
    pub total_assets: Decimal,
    /// Total outstanding loan principal.
    pub total_liabilities: Decimal,
    /// Total monthly loan installments.
    pub total_emi: Decimal,
    /// Assets minus liabilities. May be negative.
    pub net_worth: Decimal,
    /// Income minus expenses and installments. May be negative.
    pub monthly_savings: Decimal,
    /// Monthly savings as a percentage of income.
    pub savings_rate: Decimal,
}

/// One income source's monthly contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeShare {
    /// Source name.
    pub source: String,
    /// Monthly amount from this source.
    pub amount: Decimal,
}

/// One expense category's monthly total and share of spending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryExpense {
    /// Category name.
    pub category: String,
    /// Monthly amount spent in this category.
    pub amount: Decimal,
    /// Share of total monthly expenses, 0-100.
    pub percent: Decimal,
}

/// Asset value by allocation class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetAllocation {
    /// Mutual fund holdings.
    pub mutual_funds: Decimal,
    /// Direct equity holdings.
    pub equity: Decimal,
    /// Insurance at current or surrender value.
    pub insurance: Decimal,
    /// Everything else.
    pub other: Decimal,
}

impl AssetAllocation {
    /// Returns the combined value across classes.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.mutual_funds + self.equity + self.insurance + self.other
    }
}

/// Loans grouped by type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTypeSummary {
    /// Loan type name.
    pub loan_type: String,
    /// Number of loans of this type.
    pub count: usize,
    /// Outstanding principal across them.
    pub total_outstanding: Decimal,
}

/// Overview of the loan position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    /// Number of loans.
    pub total_loans: usize,
    /// Outstanding principal across all loans.
    pub total_outstanding: Decimal,
    /// Monthly installments across all loans.
    pub total_emi: Decimal,
    /// Per-type grouping, in first-recorded order.
    pub by_type: Vec<LoanTypeSummary>,
}

/// Progress category for a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalStatus {
    /// Marked done by the user, regardless of the amounts.
    Completed,
    /// Less than a quarter of the target saved.
    Behind,
    /// Between a quarter and three quarters saved.
    #[serde(rename = "On Track")]
    OnTrack,
    /// Three quarters or more saved.
    #[serde(rename = "Near Completion")]
    NearCompletion,
}

impl GoalStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Behind => "Behind",
            Self::OnTrack => "On Track",
            Self::NearCompletion => "Near Completion",
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Progress toward one goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Goal identifier.
    pub goal_id: GoalId,
    /// Goal name.
    pub name: String,
    /// Amount to reach.
    pub target_amount: Decimal,
    /// Amount saved so far.
    pub current_amount: Decimal,
    /// Share of the target reached, capped at 100.
    pub progress_percent: Decimal,
    /// Whole months left until the target date, zero when past due.
    pub months_remaining: u32,
    /// Progress category.
    pub status: GoalStatus,
}

/// Derived ratios and the overall financial health score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthIndicators {
    /// Monthly installments as a percentage of income.
    pub debt_to_income_ratio: Decimal,
    /// Monthly savings as a percentage of income.
    pub savings_to_income_ratio: Decimal,
    /// Months of expenses covered by total assets.
    pub emergency_fund_months: Decimal,
    /// Overall score from 0 to 100.
    pub financial_health_score: u8,
}

/// Advice category, in the order categories appear in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationCategory {
    /// Debt load and repayment.
    #[serde(rename = "Debt Management")]
    DebtManagement,
    /// Savings rate.
    Savings,
    /// Emergency fund coverage.
    #[serde(rename = "Emergency Fund")]
    EmergencyFund,
    /// Asset mix.
    #[serde(rename = "Asset Diversification")]
    AssetDiversification,
    /// Goals behind schedule.
    #[serde(rename = "Goal Achievement")]
    GoalAchievement,
    /// Net worth position.
    #[serde(rename = "Net Worth")]
    NetWorth,
    /// Overall score.
    #[serde(rename = "Overall Financial Health")]
    OverallFinancialHealth,
}

impl RecommendationCategory {
    /// Returns the string representation of the category.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DebtManagement => "Debt Management",
            Self::Savings => "Savings",
            Self::EmergencyFund => "Emergency Fund",
            Self::AssetDiversification => "Asset Diversification",
            Self::GoalAchievement => "Goal Achievement",
            Self::NetWorth => "Net Worth",
            Self::OverallFinancialHealth => "Overall Financial Health",
        }
    }
}

impl fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Urgency of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    /// Needs action now.
    High,
    /// Worth addressing soon.
    Medium,
    /// Nice to improve.
    Low,
}

impl Priority {
    /// Returns the string representation of the priority.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One piece of advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Advice category.
    pub category: RecommendationCategory,
    /// Urgency.
    pub priority: Priority,
    /// Human-readable advice, stating the figure that triggered it.
    pub message: String,
}

/// Complete computed report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSnapshot {
    /// Headline totals.
    pub summary: FinancialSummary,
    /// Income by source, in first-recorded order.
    pub income_breakdown: Vec<IncomeShare>,
    /// Monthly spending by category, in first-recorded order.
    pub expense_breakdown: Vec<CategoryExpense>,
    /// Asset value by class.
    pub asset_allocation: AssetAllocation,
    /// Loan position.
    pub loan_summary: LoanSummary,
    /// Per-goal progress, in recorded order.
    pub goal_progress: Vec<GoalProgress>,
    /// Health ratios and score.
    pub health: HealthIndicators,
    /// Prioritized advice, in category order.
    pub recommendations: Vec<Recommendation>,
}

/// A stored report, keyed by owner, type, and generation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Report identifier.
    pub id: ReportId,
    /// Owner.
    pub user_id: UserId,
    /// Requested kind.
    pub report_type: ReportType,
    /// Date window covered.
    pub period: ReportPeriod,
    /// When the snapshot was computed.
    pub generated_at: DateTime<Utc>,
    /// The computed snapshot.
    pub data: ReportSnapshot,
}

/// Event emitted after report operations, consumed by the notification
/// collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportEvent {
    /// A report was generated and saved.
    Generated {
        /// Owner of the report.
        user_id: UserId,
        /// The new report.
        report_id: ReportId,
        /// Kind generated.
        report_type: ReportType,
    },
    /// A report was deleted.
    Deleted {
        /// Owner of the report.
        user_id: UserId,
        /// Kind deleted.
        report_type: ReportType,
    },
}
