//! Recommendation rules.
//!
//! The third stage of report computation. Rules run in a fixed category
//! order; tiered rules keep only their most urgent hit, while the two
//! diversification checks are independent and may both fire. Messages
//! carry the figure that triggered them.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::aggregate::percent_of;
use super::health::{
    DEBT_RATIO_ELEVATED, DEBT_RATIO_HIGH, EMERGENCY_FUND_CRITICAL, EMERGENCY_FUND_THIN,
    SAVINGS_RATE_LOW, SAVINGS_RATE_MODEST,
};
use super::types::{
    AssetAllocation, FinancialSummary, GoalProgress, GoalStatus, HealthIndicators, Priority,
    Recommendation, RecommendationCategory,
};

/// Mutual fund share of assets above this percentage is concentrated.
const MUTUAL_FUND_CONCENTRATION_PERCENT: Decimal = dec!(70);

/// Other-asset share of assets below this percentage is narrow.
const OTHER_ASSET_FLOOR_PERCENT: Decimal = dec!(10);

/// Scores below this are poor.
const SCORE_POOR: u8 = 50;

/// Scores below this are fair.
const SCORE_FAIR: u8 = 70;

/// Builds the prioritized recommendation list.
#[must_use]
pub fn recommend(
    summary: &FinancialSummary,
    allocation: &AssetAllocation,
    goals: &[GoalProgress],
    health: &HealthIndicators,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    debt_management(health, &mut recommendations);
    savings(health, &mut recommendations);
    emergency_fund(health, &mut recommendations);
    asset_diversification(allocation, &mut recommendations);
    goal_achievement(goals, &mut recommendations);
    net_worth(summary, &mut recommendations);
    overall_health(health, &mut recommendations);

    recommendations
}

fn debt_management(health: &HealthIndicators, out: &mut Vec<Recommendation>) {
    let ratio = health.debt_to_income_ratio;
    if ratio > DEBT_RATIO_HIGH {
        out.push(Recommendation {
            category: RecommendationCategory::DebtManagement,
            priority: Priority::High,
            message: format!(
                "Your debt-to-income ratio is {ratio:.1}%. Consider consolidating loans or \
                 increasing income to bring it below {DEBT_RATIO_HIGH}%."
            ),
        });
    } else if ratio > DEBT_RATIO_ELEVATED {
        out.push(Recommendation {
            category: RecommendationCategory::DebtManagement,
            priority: Priority::Medium,
            message: format!(
                "Your debt-to-income ratio is {ratio:.1}%. Avoid taking on additional debt."
            ),
        });
    }
}

fn savings(health: &HealthIndicators, out: &mut Vec<Recommendation>) {
    let rate = health.savings_to_income_ratio;
    if rate < SAVINGS_RATE_LOW {
        out.push(Recommendation {
            category: RecommendationCategory::Savings,
            priority: Priority::High,
            message: format!(
                "Your savings rate is {rate:.1}%. Cut expenses or grow income to save at \
                 least {SAVINGS_RATE_LOW}% of what you earn."
            ),
        });
    } else if rate < SAVINGS_RATE_MODEST {
        out.push(Recommendation {
            category: RecommendationCategory::Savings,
            priority: Priority::Medium,
            message: format!(
                "Your savings rate is {rate:.1}%. Aim to save at least {SAVINGS_RATE_MODEST}% \
                 of your income."
            ),
        });
    }
}

fn emergency_fund(health: &HealthIndicators, out: &mut Vec<Recommendation>) {
    let months = health.emergency_fund_months;
    if months < EMERGENCY_FUND_CRITICAL {
        out.push(Recommendation {
            category: RecommendationCategory::EmergencyFund,
            priority: Priority::High,
            message: format!(
                "Your emergency fund covers {months:.1} months of expenses. Build it up to \
                 at least {EMERGENCY_FUND_CRITICAL} months."
            ),
        });
    } else if months < EMERGENCY_FUND_THIN {
        out.push(Recommendation {
            category: RecommendationCategory::EmergencyFund,
            priority: Priority::Medium,
            message: format!(
                "Your emergency fund covers {months:.1} months of expenses. Grow it to cover \
                 {EMERGENCY_FUND_THIN} months."
            ),
        });
    }
}

fn asset_diversification(allocation: &AssetAllocation, out: &mut Vec<Recommendation>) {
    let total = allocation.total();
    if total <= Decimal::ZERO {
        return;
    }

    let mutual_fund_share = percent_of(allocation.mutual_funds, total);
    if mutual_fund_share > MUTUAL_FUND_CONCENTRATION_PERCENT {
        out.push(Recommendation {
            category: RecommendationCategory::AssetDiversification,
            priority: Priority::Medium,
            message: format!(
                "Mutual funds make up {mutual_fund_share:.1}% of your assets. Consider \
                 spreading new investments across other classes."
            ),
        });
    }

    let other_share = percent_of(allocation.other, total);
    if other_share < OTHER_ASSET_FLOOR_PERCENT {
        out.push(Recommendation {
            category: RecommendationCategory::AssetDiversification,
            priority: Priority::Low,
            message: format!(
                "Only {other_share:.1}% of your assets sit outside mutual funds, equity, and \
                 insurance. A broader mix can reduce risk."
            ),
        });
    }
}

fn goal_achievement(goals: &[GoalProgress], out: &mut Vec<Recommendation>) {
    let behind = goals
        .iter()
        .filter(|goal| goal.status == GoalStatus::Behind)
        .count();
    if behind > 0 {
        out.push(Recommendation {
            category: RecommendationCategory::GoalAchievement,
            priority: Priority::Medium,
            message: format!(
                "You have {behind} goal(s) behind schedule. Review your contributions to get \
                 back on track."
            ),
        });
    }
}

fn net_worth(summary: &FinancialSummary, out: &mut Vec<Recommendation>) {
    if summary.net_worth < Decimal::ZERO {
        out.push(Recommendation {
            category: RecommendationCategory::NetWorth,
            priority: Priority::High,
            message: format!(
                "Your net worth is {}. Prioritize paying down debt while building assets.",
                summary.net_worth
            ),
        });
    }
}

fn overall_health(health: &HealthIndicators, out: &mut Vec<Recommendation>) {
    let score = health.financial_health_score;
    if score < SCORE_POOR {
        out.push(Recommendation {
            category: RecommendationCategory::OverallFinancialHealth,
            priority: Priority::High,
            message: format!(
                "Your financial health score is {score} out of 100. Start with the high \
                 priority items above."
            ),
        });
    } else if score < SCORE_FAIR {
        out.push(Recommendation {
            category: RecommendationCategory::OverallFinancialHealth,
            priority: Priority::Medium,
            message: format!(
                "Your financial health score is {score} out of 100. Addressing the items \
                 above will lift it."
            ),
        });
    }
}
