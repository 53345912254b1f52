// ⚙️ Configuration - File paths and seed parameters for the demo programs
//
// Loaded from an optional TOML file. Every key has a default, so a partial
// file (or no file at all) is valid.

use anyhow::{Context, Result};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub inventory: InventoryConfig,
    pub grading: GradingConfig,
    pub healthcare: HealthcareConfig,
    pub finance: FinanceConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub snapshot_path: PathBuf,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        InventoryConfig {
            snapshot_path: PathBuf::from("inventory.json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradingConfig {
    pub input_path: PathBuf,
    pub report_path: PathBuf,
}

impl Default for GradingConfig {
    fn default() -> Self {
        GradingConfig {
            input_path: PathBuf::from("students.txt"),
            report_path: PathBuf::from("report.txt"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthcareConfig {
    /// Patient whose prescriptions are printed at the end of the run
    pub selected_patient_id: i64,
}

impl Default for HealthcareConfig {
    fn default() -> Self {
        HealthcareConfig {
            selected_patient_id: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinanceConfig {
    pub account_number: String,

    /// Exact decimal; write it as a string (`"1000.00"`) to avoid float rounding
    pub initial_balance: BigDecimal,
}

impl Default for FinanceConfig {
    fn default() -> Self {
        FinanceConfig {
            account_number: "ACC1001".to_string(),
            initial_balance: BigDecimal::from(1000),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "repo_patterns=warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// `None` or a path that does not exist gives the defaults; an existing
    /// file must parse.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(AppConfig::default());
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(AppConfig::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&raw)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.inventory.snapshot_path, PathBuf::from("inventory.json"));
        assert_eq!(config.grading.input_path, PathBuf::from("students.txt"));
        assert_eq!(config.grading.report_path, PathBuf::from("report.txt"));
        assert_eq!(config.healthcare.selected_patient_id, 2);
        assert_eq!(config.finance.account_number, "ACC1001");
        assert_eq!(config.finance.initial_balance, BigDecimal::from(1000));
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [grading]
            input_path = "data/scores.csv"

            [healthcare]
            selected_patient_id = 1
            "#,
        )
        .unwrap();

        assert_eq!(config.grading.input_path, PathBuf::from("data/scores.csv"));
        assert_eq!(config.grading.report_path, PathBuf::from("report.txt"));
        assert_eq!(config.healthcare.selected_patient_id, 1);
        assert_eq!(config.finance, FinanceConfig::default());
    }

    #[test]
    fn test_initial_balance_as_decimal_string() {
        let config = AppConfig::from_toml(
            r#"
            [finance]
            initial_balance = "250.10"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.finance.initial_balance,
            "250.1".parse::<BigDecimal>().unwrap()
        );
        assert_eq!(config.finance.account_number, "ACC1001");
    }

    #[test]
    fn test_load_none_and_missing_file_are_defaults() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
        assert_eq!(
            AppConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap(),
            AppConfig::default()
        );
    }

    #[test]
    fn test_load_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[finance\ninitial_balance = ").unwrap();

        assert!(AppConfig::load(Some(path.as_path())).is_err());
    }
}
