//! Financial record types.
//!
//! This module defines the raw records a user maintains: income sources,
//! recurring expenses, asset holdings, loans, and savings goals. Report
//! computation consumes these through [`FinancialProfile`].

use chrono::NaiveDate;
use finpulse_shared::types::GoalId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How often an expense amount is billed.
///
/// Expense amounts are recorded per billing period and normalized to a
/// monthly figure during aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseFrequency {
    /// Billed every month.
    Monthly,
    /// Billed every three months.
    Quarterly,
    /// Billed twice a year.
    #[serde(rename = "Half-yearly")]
    HalfYearly,
    /// Billed once a year.
    Yearly,
}

impl ExpenseFrequency {
    /// Returns the number of months one billed amount covers.
    #[must_use]
    pub const fn months(&self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Quarterly => 3,
            Self::HalfYearly => 6,
            Self::Yearly => 12,
        }
    }

    /// Returns the string representation of the frequency.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::HalfYearly => "Half-yearly",
            Self::Yearly => "Yearly",
        }
    }

    /// Parses a frequency from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "monthly" => Some(Self::Monthly),
            "quarterly" => Some(Self::Quarterly),
            "half-yearly" => Some(Self::HalfYearly),
            "yearly" => Some(Self::Yearly),
            _ => None,
        }
    }
}

impl fmt::Display for ExpenseFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Allocation class of an asset holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetClass {
    /// Mutual fund units.
    #[serde(rename = "Mutual Fund")]
    MutualFund,
    /// Directly held equity.
    Equity,
    /// Insurance policies with a surrender or fund value.
    Insurance,
    /// Anything else (gold, deposits, real estate).
    Other,
}

impl AssetClass {
    /// Returns the string representation of the class.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MutualFund => "Mutual Fund",
            Self::Equity => "Equity",
            Self::Insurance => "Insurance",
            Self::Other => "Other",
        }
    }

    /// Parses a class from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mutual fund" => Some(Self::MutualFund),
            "equity" => Some(Self::Equity),
            "insurance" => Some(Self::Insurance),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recurring income source, already stated per month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeSource {
    /// Display name of the source, also the breakdown key.
    pub name: String,
    /// Amount received each month.
    pub monthly_amount: Decimal,
}

/// A recorded expense with its billing frequency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Spending category, also the breakdown key.
    pub category: String,
    /// Amount billed per period.
    pub amount: Decimal,
    /// Billing frequency of `amount`.
    pub frequency: ExpenseFrequency,
}

impl Expense {
    /// Returns the expense normalized to one month.
    #[must_use]
    pub fn monthly_amount(&self) -> Decimal {
        self.amount / Decimal::from(self.frequency.months())
    }
}

/// An asset holding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    /// Allocation class of the holding.
    pub class: AssetClass,
    /// Current market or surrender value.
    pub current_value: Decimal,
    /// Notional cover on insurance entries. A payout promise, not a
    /// holding: never counted toward asset totals or net worth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage_amount: Option<Decimal>,
}

/// An outstanding loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    /// Kind of loan (home, car, personal), also the grouping key.
    pub loan_type: String,
    /// Principal still owed.
    pub outstanding_amount: Decimal,
    /// Monthly installment.
    pub emi_amount: Decimal,
}

/// A savings goal with a target date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Goal identifier.
    pub id: GoalId,
    /// Display name.
    pub name: String,
    /// Amount to reach.
    pub target_amount: Decimal,
    /// Amount saved so far.
    pub current_amount: Decimal,
    /// Date the goal should be reached by.
    pub target_date: NaiveDate,
    /// Marked done by the user. Takes precedence over the amounts.
    pub is_completed: bool,
}

/// Everything recorded for one user, bundled for report computation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinancialProfile {
    /// Income sources.
    #[serde(default)]
    pub income: Vec<IncomeSource>,
    /// Recurring expenses.
    #[serde(default)]
    pub expenses: Vec<Expense>,
    /// Asset holdings.
    #[serde(default)]
    pub assets: Vec<Asset>,
    /// Outstanding loans.
    #[serde(default)]
    pub loans: Vec<Loan>,
    /// Savings goals.
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl FinancialProfile {
    /// Returns true when at least one income or expense record exists.
    ///
    /// Reports need some cash-flow data; assets, loans, and goals alone
    /// are not enough to compute one.
    #[must_use]
    pub fn has_cash_flow_records(&self) -> bool {
        !self.income.is_empty() || !self.expenses.is_empty()
    }
}
