//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading leave
//! policies from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{LeavePolicy, PolicyConfig, PolicyFile, PolicyMetadata, TiersConfig};

/// Loads and provides access to leave policy configuration.
///
/// # Directory Structure
///
/// ```text
/// config/statutory/
/// ├── policy.yaml   # Metadata, series start year, cap, days per year
/// └── tiers.yaml    # Accruing tier bands
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/statutory").unwrap();
/// println!("Policy: {}", loader.metadata().name);
/// println!("Cap: {}", loader.policy().annual_cap);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PolicyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML,
    /// or describes an inconsistent policy.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy_file = Self::load_yaml::<PolicyFile>(&path.join("policy.yaml"))?;
        let tiers = Self::load_yaml::<TiersConfig>(&path.join("tiers.yaml"))?;

        let policy = LeavePolicy {
            series_start_year: policy_file.series_start_year,
            annual_cap: policy_file.annual_cap,
            days_per_year: policy_file.days_per_year,
            tiers: tiers.tiers,
        };
        policy.validate()?;

        Ok(Self {
            config: PolicyConfig::new(policy_file.policy, policy),
        })
    }

    /// Builds a loader around the built-in statutory policy, without touching the filesystem.
    pub fn statutory() -> Self {
        let metadata = PolicyMetadata {
            code: "statutory".to_string(),
            name: "Statutory Annual Leave".to_string(),
            version: "2018-01-01".to_string(),
        };
        Self {
            config: PolicyConfig::new(metadata, LeavePolicy::statutory()),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying policy configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        self.config.metadata()
    }

    /// Returns the calculation rules.
    pub fn policy(&self) -> &LeavePolicy {
        self.config.policy()
    }
}
