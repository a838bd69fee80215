//! Application state for the Leave Entitlement Engine API.

use std::sync::Arc;

use crate::config::{ConfigLoader, LeavePolicy};

/// Shared application state.
///
/// The loaded policy is read-only after startup, so every request handler
/// shares one copy behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the calculation rules in force.
    pub fn policy(&self) -> &LeavePolicy {
        self.config.policy()
    }
}
