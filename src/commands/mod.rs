//! Command handlers and the setup they share

pub mod pick;
pub mod tree;
pub mod types;

use std::path::Path;

use anyhow::{Context, Result};

use gselect::config::{Config, ConfigWarning};
use gselect::{ElementCatalog, ElementSelector, ProcessCatalog, SelectorOptions, StaticCatalog};

/// Load the explicit config file, or the user config / defaults
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        let loaded = Config::load_or_default();
        if let (Some(source), Some(e)) = (&loaded.source, &loaded.error) {
            eprintln!("⚠ Ignoring user config {}: {}", source.display(), e);
        }
        print_config_warnings(&loaded.warnings);
        return Ok(loaded.config);
    };

    let (config, warnings) = Config::load_with_warnings(path)
        .with_context(|| format!("failed to load config {}", path.display()))?;
    print_config_warnings(&warnings);
    Ok(config.with_env_overrides())
}

fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        match w.line {
            Some(line) => eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, w.file.display(), line),
            None => eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display()),
        }
        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
}

/// Catalog from a fixture file, or the GIS command line tools
pub fn open_catalog(fixture: Option<&Path>, config: &Config) -> Result<Box<dyn ElementCatalog>> {
    match fixture {
        Some(path) => {
            let catalog = StaticCatalog::load(path)
                .with_context(|| format!("failed to load catalog {}", path.display()))?;
            Ok(Box::new(catalog))
        }
        None => Ok(Box::new(ProcessCatalog::new(config.catalog.clone()))),
    }
}

/// Build a selector; explicit `mapsets` replace the configured search path
pub fn open_selector(
    catalog: Box<dyn ElementCatalog>,
    element_type: &str,
    mapsets: Vec<String>,
    multiple: bool,
    config: &Config,
) -> ElementSelector<Box<dyn ElementCatalog>> {
    let search_path = if mapsets.is_empty() {
        config.search_path().map(<[String]>::to_vec)
    } else {
        Some(mapsets)
    };

    ElementSelector::new(
        catalog,
        element_type,
        SelectorOptions {
            multiple: multiple || config.selector.multiple,
            search_path,
        },
    )
}
