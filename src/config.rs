use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::seed_products;
use crate::domain::{price_in_range, Product, MAX_PRICE_UNITS};
use crate::storefront::StockPolicy;

pub const DEFAULT_MAILBOX_SIZE: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("configuration validation failed: {0}")]
    Invalid(String),
}

/// Storefront settings. Every field is optional in the TOML file.
///
/// ```toml
/// currency = "CAD"
/// stock_policy = "enforced"
/// mailbox_size = 16
/// log_level = "debug"
///
/// [[products]]
/// id = 1
/// name = "El DUCE Signature Hoodie"
/// price = 90
/// stock = 20
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub currency: String,
    pub stock_policy: StockPolicy,
    pub mailbox_size: usize,
    pub log_level: String,
    pub products: Vec<Product>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            currency: "CAD".to_string(),
            stock_policy: StockPolicy::default(),
            mailbox_size: DEFAULT_MAILBOX_SIZE,
            log_level: "info".to_string(),
            products: seed_products(),
        }
    }
}

impl StorefrontConfig {
    /// Reads `path` when given, otherwise returns defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mailbox_size == 0 {
            return Err(ConfigError::Invalid("mailbox_size must be greater than zero".to_string()));
        }
        if self.currency.trim().is_empty() {
            return Err(ConfigError::Invalid("currency must not be empty".to_string()));
        }
        let mut seen = HashSet::new();
        for product in &self.products {
            if product.name.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("product {} has an empty name", product.id)));
            }
            if !price_in_range(product.price) {
                return Err(ConfigError::Invalid(format!(
                    "product {} price must be between 0 and {}",
                    product.id, MAX_PRICE_UNITS
                )));
            }
            if !seen.insert(product.id) {
                return Err(ConfigError::Invalid(format!("duplicate product id {}", product.id)));
            }
        }
        Ok(())
    }
}
