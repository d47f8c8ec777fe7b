//! Configuration module for gselect
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (GSELECT_*)
//! 3. Explicit config file (`--config`)
//! 4. User config (~/.config/gselect/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, LoadedConfig};
pub use types::{CatalogConfig, Config, OutputConfig, SelectorConfig, Verbosity};
