use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

use crate::api_connection::endpoints::{DEFAULT_TIMEOUT_SECS, SHEET_CSV_URL, SUBMIT_URL};

pub const CSV_URL_ENV_VAR: &str = "DISH_CALC_CSV_URL";
pub const SUBMIT_URL_ENV_VAR: &str = "DISH_CALC_SUBMIT_URL";
pub const CSV_FILE_ENV_VAR: &str = "DISH_CALC_CSV_FILE";
pub const TIMEOUT_ENV_VAR: &str = "DISH_CALC_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorConfig {
    pub csv_url: String,
    pub submit_url: String,
    /// Read ingredients from this file instead of the published sheet.
    pub csv_file: Option<PathBuf>,
    pub timeout: Duration,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            csv_url: SHEET_CSV_URL.to_string(),
            submit_url: SUBMIT_URL.to_string(),
            csv_file: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl CalculatorConfig {
    /// Loads `.env` if present, then reads overrides from the process environment.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout = match non_empty(TIMEOUT_ENV_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!("Ignoring invalid {}={:?}", TIMEOUT_ENV_VAR, raw);
                    defaults.timeout
                }
            },
            None => defaults.timeout,
        };

        Self {
            csv_url: non_empty(CSV_URL_ENV_VAR).unwrap_or(defaults.csv_url),
            submit_url: non_empty(SUBMIT_URL_ENV_VAR).unwrap_or(defaults.submit_url),
            csv_file: non_empty(CSV_FILE_ENV_VAR).map(PathBuf::from),
            timeout,
        }
    }
}
