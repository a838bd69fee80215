//! Configuration loading and management for the Leave Entitlement Engine.
//!
//! Leave policy (series start year, annual cap, tier bands) is data, loaded
//! from YAML files or taken from the built-in statutory defaults.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/statutory").unwrap();
//! println!("Loaded policy: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LeavePolicy, PolicyConfig, PolicyFile, PolicyMetadata, TierBand, TiersConfig};
