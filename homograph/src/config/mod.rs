//! Configuration system for homograph.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (user config and project `homograph.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the values a scenario is built from
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`HOMOGRAPH_*`)
//! 3. Project config (nearest `homograph.yaml`)
//! 4. User config (`~/.homograph/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use homograph::config::{Config, ConfigBuilder};
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         forbidden: Some("/etc/shadow".to_string()),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! let scenario = config.scenario();
//! assert!(scenario.check("/etc/./shadow"));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_config_dir, ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{CaseDefinition, Config};
pub use validator::ConfigValidator;
