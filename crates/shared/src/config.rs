//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Invoice validation tunables.
    #[serde(default)]
    pub validation: ValidationConfig,
    /// Monthly balance aggregation tunables.
    #[serde(default)]
    pub balance: BalanceConfig,
}

/// Invoice validation tunables.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    /// Maximum VAT as a fraction of net price.
    #[serde(default = "default_vat_cap")]
    pub vat_cap: Decimal,
}

fn default_vat_cap() -> Decimal {
    // 23% — the standard VAT rate.
    Decimal::new(23, 2)
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            vat_cap: default_vat_cap(),
        }
    }
}

/// Monthly balance aggregation tunables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BalanceConfig {
    /// Whether CORRECTING invoices not assigned to any order contribute to
    /// monthly totals. An explicit policy decision; off by default.
    #[serde(default)]
    pub include_unassigned_correcting: bool,
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
            .add_source(config::Environment::with_prefix("FAKTURA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
