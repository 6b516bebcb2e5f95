//! Configuration file and environment overrides
//!
//! Settings come from, in increasing priority:
//!
//! 1. built-in defaults (no salary filter, today as reference date)
//! 2. `roster.toml` in the working directory, or the file passed with `--config`
//! 3. `ROSTER_MIN_SALARY` / `ROSTER_REFERENCE_DATE`
//! 4. command-line flags (applied by the binary)
//!
//! ```toml
//! [salary]
//! min_salary = 1500.0
//!
//! [report]
//! reference_date = "2024-03-10"
//! ```

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};

/// Name of the settings file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "roster.toml";

pub const ENV_MIN_SALARY: &str = "ROSTER_MIN_SALARY";
pub const ENV_REFERENCE_DATE: &str = "ROSTER_REFERENCE_DATE";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub salary: SalarySettings,
    #[serde(default)]
    pub report: ReportSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SalarySettings {
    pub min_salary: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportSettings {
    pub reference_date: Option<String>,
}

impl Settings {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from `explicit`, or from `roster.toml` under `working_dir`
    /// when it exists. An explicit path that does not exist is an error.
    pub fn load(explicit: Option<&Path>, working_dir: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => {
                let default = working_dir.join(CONFIG_FILE_NAME);
                if !default.exists() {
                    debug!(
                        "No {} in {}, using defaults",
                        CONFIG_FILE_NAME,
                        working_dir.display()
                    );
                    return Ok(Self::default());
                }
                default
            }
        };

        debug!("Loading settings from {}", path.display());
        let content = fs::read_to_string(&path)?;
        Self::from_toml(&content)
    }

    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.merge_env_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, which stands in for the process environment.
    pub fn merge_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_MIN_SALARY) {
            let value = raw.trim().parse::<f64>().map_err(|_| {
                Error::Config(format!("{ENV_MIN_SALARY} must be a number, got '{raw}'"))
            })?;
            self.salary.min_salary = Some(value);
        }

        if let Some(date) = lookup(ENV_REFERENCE_DATE) {
            self.report.reference_date = Some(date);
        }

        Ok(())
    }
}
