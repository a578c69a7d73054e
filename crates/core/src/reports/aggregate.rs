//! Aggregation of raw records into report figures.
//!
//! This is the first stage of report computation. All division is
//! guarded: any ratio with a zero denominator is zero, never an error.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::ReportError;
use super::types::{
    AssetAllocation, CategoryExpense, FinancialSummary, GoalProgress, GoalStatus, IncomeShare,
    LoanSummary, LoanTypeSummary,
};
use crate::records::{AssetClass, FinancialProfile, Goal};

/// Average month length in hundredths of a day (30.44 days).
const CENTIDAYS_PER_MONTH: u64 = 3044;

/// Goal progress below this percentage is behind schedule.
pub(super) const GOAL_BEHIND_PERCENT: Decimal = dec!(25);

/// Goal progress at or above this percentage is near completion.
pub(super) const GOAL_NEAR_COMPLETION_PERCENT: Decimal = dec!(75);

/// Output of the aggregation stage.
#[derive(Debug, Clone)]
pub struct Aggregates {
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
}

/// Aggregates a profile's records into report figures.
///
/// # Errors
///
/// Returns [`ReportError::MissingFinancialData`] when the profile has
/// neither income nor expense records. Records that exist with zero
/// amounts are fine and produce a zero-filled report.
pub fn aggregate_profile(
    profile: &FinancialProfile,
    now: DateTime<Utc>,
) -> Result<Aggregates, ReportError> {
    if !profile.has_cash_flow_records() {
        return Err(ReportError::MissingFinancialData);
    }

    let income_breakdown = build_income_breakdown(profile);
    let total_income: Decimal = income_breakdown.iter().map(|share| share.amount).sum();

    let expense_breakdown = build_expense_breakdown(profile);
    let total_expenses: Decimal = expense_breakdown.iter().map(|row| row.amount).sum();

    // Insurance cover never counts toward holdings.
    let asset_allocation = build_asset_allocation(profile);
    let total_assets = asset_allocation.total();

    let loan_summary = build_loan_summary(profile);
    let total_liabilities = loan_summary.total_outstanding;
    let total_emi = loan_summary.total_emi;

    let net_worth = total_assets - total_liabilities;
    let monthly_savings = total_income - total_expenses - total_emi;
    let savings_rate = percent_of(monthly_savings, total_income);

    let goal_progress = profile
        .goals
        .iter()
        .map(|goal| assess_goal(goal, now))
        .collect();

    Ok(Aggregates {
        summary: FinancialSummary {
            total_income,
            total_expenses,
            total_assets,
            total_liabilities,
            total_emi,
            net_worth,
            monthly_savings,
            savings_rate,
        },
        income_breakdown,
        expense_breakdown,
        asset_allocation,
        loan_summary,
        goal_progress,
    })
}

/// Returns `part` as a percentage of `whole`, zero when `whole` is zero.
pub(super) fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        Decimal::ZERO
    } else {
        part / whole * Decimal::ONE_HUNDRED
    }
}

fn build_income_breakdown(profile: &FinancialProfile) -> Vec<IncomeShare> {
    let mut breakdown: Vec<IncomeShare> = Vec::new();
    for source in &profile.income {
        match breakdown.iter_mut().find(|share| share.source == source.name) {
            Some(share) => share.amount += source.monthly_amount,
            None => breakdown.push(IncomeShare {
                source: source.name.clone(),
                amount: source.monthly_amount,
            }),
        }
    }
    breakdown
}

fn build_expense_breakdown(profile: &FinancialProfile) -> Vec<CategoryExpense> {
    let mut breakdown: Vec<CategoryExpense> = Vec::new();
    for expense in &profile.expenses {
        let monthly = expense.monthly_amount();
        match breakdown.iter_mut().find(|row| row.category == expense.category) {
            Some(row) => row.amount += monthly,
            None => breakdown.push(CategoryExpense {
                category: expense.category.clone(),
                amount: monthly,
                percent: Decimal::ZERO,
            }),
        }
    }

    let total: Decimal = breakdown.iter().map(|row| row.amount).sum();
    for row in &mut breakdown {
        row.percent = percent_of(row.amount, total);
    }
    breakdown
}

fn build_asset_allocation(profile: &FinancialProfile) -> AssetAllocation {
    let mut allocation = AssetAllocation::default();
    for asset in &profile.assets {
        match asset.class {
            AssetClass::MutualFund => allocation.mutual_funds += asset.current_value,
            AssetClass::Equity => allocation.equity += asset.current_value,
            AssetClass::Insurance => allocation.insurance += asset.current_value,
            AssetClass::Other => allocation.other += asset.current_value,
        }
    }
    allocation
}

fn build_loan_summary(profile: &FinancialProfile) -> LoanSummary {
    let mut by_type: Vec<LoanTypeSummary> = Vec::new();
    let mut total_outstanding = Decimal::ZERO;
    let mut total_emi = Decimal::ZERO;

    for loan in &profile.loans {
        total_outstanding += loan.outstanding_amount;
        total_emi += loan.emi_amount;

        match by_type.iter_mut().find(|row| row.loan_type == loan.loan_type) {
            Some(row) => {
                row.count += 1;
                row.total_outstanding += loan.outstanding_amount;
            }
            None => by_type.push(LoanTypeSummary {
                loan_type: loan.loan_type.clone(),
                count: 1,
                total_outstanding: loan.outstanding_amount,
            }),
        }
    }

    LoanSummary {
        total_loans: profile.loans.len(),
        total_outstanding,
        total_emi,
        by_type,
    }
}

fn assess_goal(goal: &Goal, now: DateTime<Utc>) -> GoalProgress {
    let progress_percent =
        percent_of(goal.current_amount, goal.target_amount).min(Decimal::ONE_HUNDRED);

    // A completed flag wins even when the saved amount says otherwise.
    let status = if goal.is_completed {
        GoalStatus::Completed
    } else if progress_percent < GOAL_BEHIND_PERCENT {
        GoalStatus::Behind
    } else if progress_percent >= GOAL_NEAR_COMPLETION_PERCENT {
        GoalStatus::NearCompletion
    } else {
        GoalStatus::OnTrack
    };

    GoalProgress {
        goal_id: goal.id,
        name: goal.name.clone(),
        target_amount: goal.target_amount,
        current_amount: goal.current_amount,
        progress_percent,
        months_remaining: months_until(goal.target_date, now),
        status,
    }
}

/// Whole months from `now` to the target date, rounding up and never
/// negative.
fn months_until(target_date: NaiveDate, now: DateTime<Utc>) -> u32 {
    let days = (target_date - now.date_naive()).num_days();
    if days <= 0 {
        return 0;
    }
    let months = (days.unsigned_abs() * 100).div_ceil(CENTIDAYS_PER_MONTH);
    u32::try_from(months).unwrap_or(u32::MAX)
}
