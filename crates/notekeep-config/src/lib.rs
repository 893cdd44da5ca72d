//! Configuration system for the notekeep service.
//!
//! Provides TOML-based configuration with:
//! - A `[server]` section (bind address, port, request logging, body limit)
//! - A `[logging]` section (console level, optional JSON log directory)
//! - Config file layering (user config dir + project-local overrides)
//!
//! CLI overrides are applied by the binary on top of the loaded config.

pub mod discovery;
pub mod error;
pub mod types;

pub use discovery::{
    ConfigSource, LoadedConfig, load_config, load_config_file, load_config_with_options,
    xdg_config_dir, xdg_config_path,
};
pub use error::{ConfigError, Result};
pub use types::*;
