//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{SelectError, SelectResult};

use super::types::{Config, Verbosity};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SelectResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SelectError::InvalidToml {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Outcome of loading the user config file
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// User config file that was read, if one exists
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
    /// Set when the user config exists but could not be used; `config` is then the default
    pub error: Option<SelectError>,
}

/// Load from user config or defaults, then apply env overrides
pub fn load_or_default() -> LoadedConfig {
    let mut loaded = load_user_config(user_config_path());
    loaded.config = with_env_overrides(loaded.config);
    loaded
}

pub(super) fn load_user_config(user_config: Option<PathBuf>) -> LoadedConfig {
    let Some(path) = user_config.filter(|p| p.exists()) else {
        return LoadedConfig::default();
    };

    match load_with_warnings(&path) {
        Ok((config, warnings)) => {
            debug!(path = %path.display(), "loaded user config");
            LoadedConfig {
                config,
                source: Some(path),
                warnings,
                error: None,
            }
        }
        Err(e) => LoadedConfig {
            config: Config::default(),
            source: Some(path),
            warnings: Vec::new(),
            error: Some(e),
        },
    }
}

/// Apply environment variable overrides (GSELECT_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // GSELECT_MULTIPLE
    if let Ok(val) = std::env::var("GSELECT_MULTIPLE") {
        config.selector.multiple = parse_bool(&val);
    }

    // GSELECT_SEARCH_PATH (comma-separated)
    if let Ok(path) = std::env::var("GSELECT_SEARCH_PATH") {
        config.selector.search_path = path
            .split(',')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect();
    }

    // GSELECT_LIST_COMMAND
    if let Ok(command) = std::env::var("GSELECT_LIST_COMMAND") {
        if !command.trim().is_empty() {
            config.catalog.list_command = command;
        }
    }

    // GSELECT_VERBOSITY
    if let Ok(verbosity) = std::env::var("GSELECT_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    config
}

fn parse_bool(val: &str) -> bool {
    matches!(val.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

/// `$XDG_CONFIG_HOME/gselect/config.toml`, falling back to the platform config dir
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("gselect").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "selector",
        "multiple",
        "search_path",
        "catalog",
        "list_command",
        "mapsets_command",
        "gisenv_command",
        "output",
        "verbosity",
        "unicode",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
