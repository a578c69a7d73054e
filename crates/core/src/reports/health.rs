//! Financial health scoring.
//!
//! The second stage of report computation: derives debt, savings, and
//! emergency-fund ratios from the aggregated totals and turns them into
//! a 0-100 score. A value exactly on a bracket boundary takes the
//! milder bracket.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::aggregate::percent_of;
use super::types::{FinancialSummary, HealthIndicators};

/// Debt-to-income percentage above which debt load is severe.
pub(super) const DEBT_RATIO_HIGH: Decimal = dec!(40);

/// Debt-to-income percentage above which debt load is elevated.
pub(super) const DEBT_RATIO_ELEVATED: Decimal = dec!(30);

/// Debt-to-income percentage above which debt load is noticeable.
pub(super) const DEBT_RATIO_MODERATE: Decimal = dec!(20);

/// Savings rate below which saving is critically low.
pub(super) const SAVINGS_RATE_LOW: Decimal = dec!(10);

/// Savings rate below which saving is modest.
pub(super) const SAVINGS_RATE_MODEST: Decimal = dec!(20);

/// Savings rate below which saving is merely adequate.
pub(super) const SAVINGS_RATE_COMFORTABLE: Decimal = dec!(30);

/// Emergency fund months below which coverage is critical.
pub(super) const EMERGENCY_FUND_CRITICAL: Decimal = dec!(3);

/// Emergency fund months below which coverage is thin.
pub(super) const EMERGENCY_FUND_THIN: Decimal = dec!(6);

/// Score before any deductions.
const BASE_SCORE: u8 = 100;

/// Derives health ratios and the overall score from the summary totals.
#[must_use]
pub fn assess(summary: &FinancialSummary) -> HealthIndicators {
    let debt_to_income_ratio = percent_of(summary.total_emi, summary.total_income);
    let savings_to_income_ratio = summary.savings_rate;
    let emergency_fund_months = if summary.total_expenses.is_zero() {
        Decimal::ZERO
    } else {
        summary.total_assets / summary.total_expenses
    };

    let financial_health_score = BASE_SCORE
        .saturating_sub(debt_deduction(debt_to_income_ratio))
        .saturating_sub(savings_deduction(savings_to_income_ratio))
        .saturating_sub(emergency_deduction(emergency_fund_months));

    HealthIndicators {
        debt_to_income_ratio,
        savings_to_income_ratio,
        emergency_fund_months,
        financial_health_score,
    }
}

fn debt_deduction(ratio: Decimal) -> u8 {
    if ratio > DEBT_RATIO_HIGH {
        30
    } else if ratio > DEBT_RATIO_ELEVATED {
        20
    } else if ratio > DEBT_RATIO_MODERATE {
        10
    } else {
        0
    }
}

fn savings_deduction(rate: Decimal) -> u8 {
    if rate < SAVINGS_RATE_LOW {
        25
    } else if rate < SAVINGS_RATE_MODEST {
        15
    } else if rate < SAVINGS_RATE_COMFORTABLE {
        5
    } else {
        0
    }
}

fn emergency_deduction(months: Decimal) -> u8 {
    if months < EMERGENCY_FUND_CRITICAL {
        20
    } else if months < EMERGENCY_FUND_THIN {
        10
    } else {
        0
    }
}
