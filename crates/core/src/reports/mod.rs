//! Financial report computation.
//!
//! This module turns a user's raw financial records into a report in
//! three stages:
//! - `aggregate` - totals, breakdowns, allocation, and goal progress
//! - `health` - derived ratios and the 0-100 financial health score
//! - `advice` - prioritized recommendations from the health picture
//!
//! Computation is deterministic: the caller supplies the clock, and the
//! same records with the same timestamp always produce the same
//! snapshot. Persistence and notification delivery sit behind the
//! traits in `service`.

pub mod advice;
pub mod aggregate;
pub mod error;
pub mod health;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use service::{
    NotificationSink, RecordProvider, ReportOrchestrator, ReportService, ReportStore,
};
pub use types::*;
