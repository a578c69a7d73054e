//! Core business logic for Finpulse.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, calculations, and report rules live here.
//!
//! # Modules
//!
//! - `records` - Raw financial record types (income, expenses, assets, loans, goals)
//! - `reports` - Report computation: aggregation, health scoring, recommendations

pub mod records;
pub mod reports;
