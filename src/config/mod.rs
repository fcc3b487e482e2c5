//! Configuration module.
//!
//! Precedence: Defaults → Config File → Env Vars → CLI Args.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    BreakpointEntry, ConfigError, ConfigFile, ResolvedConfig,
};
