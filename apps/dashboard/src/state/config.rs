//! # Configuration State
//!
//! Display settings for the dashboard, loaded once at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     BIZDESK_CURRENCY_SYMBOL=€                                          │
//! │     BIZDESK_TOP_COMPANIES=10                                           │
//! │     BIZDESK_SEED_MOCK_DATA=false                                       │
//! │     BIZDESK_RECENT_EXPENSES=8                                          │
//! │                                                                         │
//! │  2. TOML Config File (path in BIZDESK_CONFIG)                          │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # bizdesk.toml
//! currency_symbol = "$"
//! top_companies_limit = 5
//! seed_mock_data = true
//! recent_expenses_limit = 5
//! ```
//!
//! ## Thread Safety
//! Read-only after loading, so no mutex.

use std::path::{Path, PathBuf};

use bizdesk_core::{Money, DEFAULT_TOP_COMPANIES};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Environment variable naming the config file.
pub const CONFIG_PATH_VAR: &str = "BIZDESK_CONFIG";

// =============================================================================
// Config Error
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Config State
// =============================================================================

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Prefix for formatted amounts.
    pub currency_symbol: String,

    /// Bars in the top companies chart. Must be greater than 0.
    pub top_companies_limit: usize,

    /// Start with the demo books instead of an empty store.
    pub seed_mock_data: bool,

    /// Rows in the dashboard's recent expenses list.
    pub recent_expenses_limit: usize,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            currency_symbol: "$".to_string(),
            top_companies_limit: DEFAULT_TOP_COMPANIES,
            seed_mock_data: true,
            recent_expenses_limit: 5,
        }
    }
}

impl ConfigState {
    /// Loads configuration from `config_path` (or the file named by
    /// `BIZDESK_CONFIG`), then the process environment.
    ///
    /// A path that does not exist is not an error; defaults are used.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let path = config_path.or_else(|| std::env::var_os(CONFIG_PATH_VAR).map(PathBuf::from));
        Self::load_with(path.as_deref(), |key| std::env::var(key).ok())
    }

    /// Like [`ConfigState::load`], reading overrides through `var` instead
    /// of the process environment.
    pub fn load_with<F>(config_path: Option<&Path>, var: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = config_path {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(var);
        config.validate()?;

        Ok(config)
    }

    fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(symbol) = var("BIZDESK_CURRENCY_SYMBOL") {
            debug!(symbol = %symbol, "Overriding currency symbol from environment");
            self.currency_symbol = symbol;
        }

        if let Some(limit) = var("BIZDESK_TOP_COMPANIES") {
            match limit.parse() {
                Ok(n) => self.top_companies_limit = n,
                Err(_) => warn!(value = %limit, "Ignoring non-numeric BIZDESK_TOP_COMPANIES"),
            }
        }

        if let Some(seed) = var("BIZDESK_SEED_MOCK_DATA") {
            match seed.to_lowercase().as_str() {
                "1" | "true" | "yes" => self.seed_mock_data = true,
                "0" | "false" | "no" => self.seed_mock_data = false,
                _ => warn!(value = %seed, "Ignoring unrecognized BIZDESK_SEED_MOCK_DATA"),
            }
        }

        if let Some(limit) = var("BIZDESK_RECENT_EXPENSES") {
            match limit.parse() {
                Ok(n) => self.recent_expenses_limit = n,
                Err(_) => warn!(value = %limit, "Ignoring non-numeric BIZDESK_RECENT_EXPENSES"),
            }
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.top_companies_limit == 0 {
            return Err(ConfigError::Invalid(
                "top_companies_limit must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// `1234.5` with symbol `$` → `$1,234.50`
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
