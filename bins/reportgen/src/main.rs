//! Offline report generator for Finpulse.
//!
//! Reads a `FinancialProfile` from a JSON file, computes the report
//! snapshot against the current clock, and writes the snapshot JSON to
//! stdout or to a file.
//!
//! Usage: cargo run --bin reportgen -- <profile.json> [output.json]

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finpulse_core::records::FinancialProfile;
use finpulse_core::reports::ReportService;
use finpulse_shared::AppConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reportgen=info,finpulse=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    let mut args = std::env::args().skip(1);
    let input: PathBuf = args
        .next()
        .context("usage: reportgen <profile.json> [output.json]")?
        .into();
    let output = args.next().map(PathBuf::from);

    let raw = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let profile: FinancialProfile = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid financial profile in {}", input.display()))?;

    info!(
        income = profile.income.len(),
        expenses = profile.expenses.len(),
        assets = profile.assets.len(),
        loans = profile.loans.len(),
        goals = profile.goals.len(),
        "Loaded financial profile"
    );

    let snapshot = ReportService::generate_snapshot(&profile, Utc::now())
        .context("Report computation failed")?;

    info!(
        score = snapshot.health.financial_health_score,
        recommendations = snapshot.recommendations.len(),
        "Report computed"
    );

    let json = if config.output.pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };

    match output {
        Some(path) => {
            fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Snapshot written to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
