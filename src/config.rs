use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::Level;

use crate::customer::NewCustomer;
use crate::error::{ConfigError, RegistryError};
use crate::store::{CustomerStore, DEFAULT_MAX_CUSTOMERS};

pub const DEFAULT_CONFIG_FILE: &str = "registry.toml";
pub const DEFAULT_TITLE: &str = "CUSTOMER REGISTRY";

/// A customer listed in the config file, loaded before the menu starts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedCustomer {
    pub name: String,
    pub address: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    pub title: String,
    pub max_customers: usize,
    pub log_level: String,
    pub color: bool,
    pub seed: Vec<SeedCustomer>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            title: DEFAULT_TITLE.to_string(),
            max_customers: DEFAULT_MAX_CUSTOMERS,
            log_level: "warn".to_string(),
            color: true,
            seed: Vec::new(),
        }
    }
}

impl RegistryConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RegistryConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_customers == 0 {
            return Err(ConfigError::invalid("max_customers", "must be at least 1"));
        }
        self.level()?;

        if self.seed.len() > self.max_customers {
            return Err(ConfigError::invalid(
                "seed",
                format!(
                    "{} seed customers exceed max_customers ({})",
                    self.seed.len(),
                    self.max_customers
                ),
            ));
        }

        let mut seen = HashSet::new();
        for seed in &self.seed {
            seed.to_new_customer()?;
            if !seen.insert(seed.name.as_str()) {
                return Err(ConfigError::Seed {
                    name: seed.name.clone(),
                    source: RegistryError::duplicate_name(&seed.name),
                });
            }
        }
        Ok(())
    }

    pub fn level(&self) -> Result<Level, ConfigError> {
        match self.log_level.to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            other => Err(ConfigError::invalid(
                "log_level",
                format!("unknown level '{other}', expected trace, debug, info, warn or error"),
            )),
        }
    }

    /// Creates the store with every seed customer already added.
    pub fn build_store(&self) -> Result<CustomerStore, ConfigError> {
        let mut store = CustomerStore::new(self.max_customers);
        for seed in &self.seed {
            let customer = seed.to_new_customer()?;
            store.add(customer).map_err(|source| ConfigError::Seed {
                name: seed.name.clone(),
                source,
            })?;
        }
        Ok(store)
    }
}

impl SeedCustomer {
    fn to_new_customer(&self) -> Result<NewCustomer, ConfigError> {
        NewCustomer::parse(&self.name, &self.address, &self.phone).map_err(|err| {
            ConfigError::Seed {
                name: self.name.clone(),
                source: err.into(),
            }
        })
    }
}
