//! Tests for financial record types.

use rust_decimal_macros::dec;

use super::types::{Asset, AssetClass, Expense, ExpenseFrequency, FinancialProfile};

#[test]
fn test_frequency_months() {
    assert_eq!(ExpenseFrequency::Monthly.months(), 1);
    assert_eq!(ExpenseFrequency::Quarterly.months(), 3);
    assert_eq!(ExpenseFrequency::HalfYearly.months(), 6);
    assert_eq!(ExpenseFrequency::Yearly.months(), 12);
}

#[test]
fn test_frequency_string_round_trip() {
    for frequency in [
        ExpenseFrequency::Monthly,
        ExpenseFrequency::Quarterly,
        ExpenseFrequency::HalfYearly,
        ExpenseFrequency::Yearly,
    ] {
        assert_eq!(ExpenseFrequency::parse(frequency.as_str()), Some(frequency));
    }
    assert_eq!(ExpenseFrequency::parse("weekly"), None);
}

#[test]
fn test_frequency_wire_format() {
    let json = serde_json::to_string(&ExpenseFrequency::HalfYearly).unwrap();
    assert_eq!(json, "\"Half-yearly\"");

    let parsed: ExpenseFrequency = serde_json::from_str("\"Half-yearly\"").unwrap();
    assert_eq!(parsed, ExpenseFrequency::HalfYearly);
}

#[test]
fn test_expense_monthly_normalization() {
    let yearly = Expense {
        category: "Insurance".to_string(),
        amount: dec!(1200),
        frequency: ExpenseFrequency::Yearly,
    };
    assert_eq!(yearly.monthly_amount(), dec!(100));

    let quarterly = Expense {
        category: "Water".to_string(),
        amount: dec!(300),
        frequency: ExpenseFrequency::Quarterly,
    };
    assert_eq!(quarterly.monthly_amount(), dec!(100));

    let half_yearly = Expense {
        category: "Maintenance".to_string(),
        amount: dec!(600),
        frequency: ExpenseFrequency::HalfYearly,
    };
    assert_eq!(half_yearly.monthly_amount(), dec!(100));

    let monthly = Expense {
        category: "Rent".to_string(),
        amount: dec!(1500),
        frequency: ExpenseFrequency::Monthly,
    };
    assert_eq!(monthly.monthly_amount(), dec!(1500));
}

#[test]
fn test_asset_class_string_round_trip() {
    for class in [
        AssetClass::MutualFund,
        AssetClass::Equity,
        AssetClass::Insurance,
        AssetClass::Other,
    ] {
        assert_eq!(AssetClass::parse(class.as_str()), Some(class));
    }
    assert_eq!(AssetClass::parse("crypto"), None);
}

#[test]
fn test_asset_coverage_defaults_to_none() {
    let asset: Asset = serde_json::from_str(
        r#"{"class": "Mutual Fund", "current_value": "5000"}"#,
    )
    .unwrap();
    assert_eq!(asset.class, AssetClass::MutualFund);
    assert_eq!(asset.current_value, dec!(5000));
    assert!(asset.coverage_amount.is_none());
}

#[test]
fn test_profile_cash_flow_detection() {
    let empty = FinancialProfile::default();
    assert!(!empty.has_cash_flow_records());

    let expenses_only = FinancialProfile {
        expenses: vec![Expense {
            category: "Rent".to_string(),
            amount: dec!(1500),
            frequency: ExpenseFrequency::Monthly,
        }],
        ..FinancialProfile::default()
    };
    assert!(expenses_only.has_cash_flow_records());

    let assets_only = FinancialProfile {
        assets: vec![Asset {
            class: AssetClass::Equity,
            current_value: dec!(10000),
            coverage_amount: None,
        }],
        ..FinancialProfile::default()
    };
    assert!(!assets_only.has_cash_flow_records());
}
