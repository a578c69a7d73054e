//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Report generation defaults.
    #[serde(default)]
    pub report: ReportConfig,
    /// Output formatting.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Report generation defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Report type produced when the caller does not request one.
    #[serde(default = "default_report_type")]
    pub default_type: String,
    /// Length of the default reporting window in days.
    #[serde(default = "default_period_days")]
    pub period_days: i64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            default_type: default_report_type(),
            period_days: default_period_days(),
        }
    }
}

fn default_report_type() -> String {
    "Comprehensive".to_string()
}

fn default_period_days() -> i64 {
    365
}

/// Output formatting.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print generated JSON.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

fn default_pretty() -> bool {
    true
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FINPULSE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        temp_env::with_vars_unset(["FINPULSE_REPORT__PERIOD_DAYS", "RUN_MODE"], || {
            let config = AppConfig::load().unwrap();
            assert_eq!(config.report.default_type, "Comprehensive");
            assert_eq!(config.report.period_days, 365);
            assert!(config.output.pretty);
        });
    }

    #[test]
    fn test_environment_override() {
        temp_env::with_var("FINPULSE_REPORT__PERIOD_DAYS", Some("90"), || {
            let config = AppConfig::load().unwrap();
            assert_eq!(config.report.period_days, 90);
        });
    }
}
