//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SelectResult;

use super::loader::{self, ConfigWarning, LoadedConfig};

/// Selector behaviour
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SelectorConfig {
    /// Allow more than one element to be selected
    #[serde(default)]
    pub multiple: bool,

    /// Mapsets to list, in search order. Empty means "ask the catalog".
    #[serde(default)]
    pub search_path: Vec<String>,
}

/// Commands used by the process-backed catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_list_command")]
    pub list_command: String,

    #[serde(default = "default_mapsets_command")]
    pub mapsets_command: String,

    #[serde(default = "default_gisenv_command")]
    pub gisenv_command: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            list_command: default_list_command(),
            mapsets_command: default_mapsets_command(),
            gisenv_command: default_gisenv_command(),
        }
    }
}

fn default_list_command() -> String {
    "g.list".to_string()
}

fn default_mapsets_command() -> String {
    "g.mapsets".to_string()
}

fn default_gisenv_command() -> String {
    "g.gisenv".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Default `tracing` filter directive for this level
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Main configuration struct
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub selector: SelectorConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SelectResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SelectResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from user config or defaults, then apply env overrides.
    ///
    /// Problems with the user config are returned, not logged: this runs
    /// before logging is set up.
    pub fn load_or_default() -> LoadedConfig {
        loader::load_or_default()
    }

    /// Apply environment variable overrides (GSELECT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Configured search path, `None` when the catalog should be asked
    pub fn search_path(&self) -> Option<&[String]> {
        if self.selector.search_path.is_empty() {
            None
        } else {
            Some(self.selector.search_path.as_slice())
        }
    }
}
