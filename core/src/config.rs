use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_PER_PAGE: u32 = 50;
pub const TRANSACTIONS_PER_CLIENT: usize = 300;
pub const TRANSACTION_WINDOW_DAYS: i64 = 90;

/// Runtime settings for the loader and the HTTP service.
///
/// Every field has a default, so a config file only needs to name
/// the values it overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    pub db_path: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub cors_origins: Vec<String>,
    pub default_per_page: u32,
    pub max_per_page: u32,
    pub transaction_count: usize,
    pub transaction_window_days: i64,
    /// Master seed for generated data. None draws one at startup.
    pub seed: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            db_path: "database.db".into(),
            host: "0.0.0.0".into(),
            port: 8000,
            log_level: "info".into(),
            cors_origins: vec![
                "http://localhost:3000".into(),
                "http://localhost:5173".into(),
            ],
            default_per_page: DEFAULT_PER_PAGE,
            max_per_page: 500,
            transaction_count: TRANSACTIONS_PER_CLIENT,
            transaction_window_days: TRANSACTION_WINDOW_DAYS,
            seed: None,
        }
    }
}

impl ServiceConfig {
    /// Load from a JSON file.
    /// In tests, use ServiceConfig::default_test().
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
        let config: ServiceConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {}: {e}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with a pinned seed, pointing at `db_path`.
    pub fn default_test(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
            seed: Some(0x5EED_C11E_4736_0001),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.default_per_page == 0 || self.max_per_page == 0 {
            anyhow::bail!("page sizes must be at least 1");
        }
        if self.default_per_page > self.max_per_page {
            anyhow::bail!(
                "default_per_page ({}) exceeds max_per_page ({})",
                self.default_per_page,
                self.max_per_page
            );
        }
        if self.transaction_window_days < 0 {
            anyhow::bail!("transaction_window_days must not be negative");
        }
        Ok(())
    }
}
