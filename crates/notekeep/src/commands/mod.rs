//! CLI command handlers.

pub mod openapi;
pub mod start;

use notekeep_config::NotekeepConfig;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Merged configuration (config files, before CLI overrides).
    pub config: NotekeepConfig,
    /// Verbose output enabled.
    pub verbose: bool,
}
