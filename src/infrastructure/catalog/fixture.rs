//! Static in-memory catalog, loadable from a TOML fixture.
//!
//! ```toml
//! current_mapset = "user1"
//! mapsets = ["PERMANENT", "user1"]
//! failing = ["broken"]
//!
//! [elements.PERMANENT]
//! rast = ["elevation", "aspect"]
//! ```
//!
//! Element lists are keyed by mapset, then by catalog query type.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::ports::{CatalogError, CatalogResult, ElementCatalog};
use crate::domain::value_objects::ElementKind;
use crate::error::{SelectError, SelectResult};

/// Catalog backed by fixed data
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StaticCatalog {
    #[serde(default)]
    current_mapset: Option<String>,

    /// Search path; defaults to the mapsets that have elements
    #[serde(default)]
    mapsets: Vec<String>,

    #[serde(default)]
    elements: BTreeMap<String, BTreeMap<String, Vec<String>>>,

    /// Mapsets whose queries fail
    #[serde(default)]
    failing: Vec<String>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML fixture
    pub fn from_toml(content: &str, origin: &Path) -> SelectResult<Self> {
        toml::from_str(content).map_err(|e| SelectError::InvalidToml {
            file: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load a TOML fixture from disk
    pub fn load(path: &Path) -> SelectResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content, path)
    }

    pub fn with_current_mapset(mut self, mapset: impl Into<String>) -> Self {
        self.current_mapset = Some(mapset.into());
        self
    }

    pub fn with_mapsets<I, S>(mut self, mapsets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mapsets = mapsets.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_elements<I, S>(mut self, mapset: &str, kind: ElementKind, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.elements
            .entry(mapset.to_string())
            .or_default()
            .entry(kind.query_type().to_string())
            .or_default()
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_failing(mut self, mapset: impl Into<String>) -> Self {
        self.failing.push(mapset.into());
        self
    }

    fn knows(&self, mapset: &str) -> bool {
        self.mapsets.iter().any(|m| m == mapset) || self.elements.contains_key(mapset)
    }
}

impl ElementCatalog for StaticCatalog {
    fn list_mapsets(&self) -> CatalogResult<Vec<String>> {
        if self.mapsets.is_empty() {
            Ok(self.elements.keys().cloned().collect())
        } else {
            Ok(self.mapsets.clone())
        }
    }

    fn current_mapset(&self) -> CatalogResult<Option<String>> {
        Ok(self.current_mapset.clone())
    }

    fn list_elements(&self, kind: ElementKind, mapset: &str) -> CatalogResult<Vec<String>> {
        if self.failing.iter().any(|m| m == mapset) || !self.knows(mapset) {
            return Err(CatalogError::MapsetUnavailable(mapset.to_string()));
        }
        Ok(self
            .elements
            .get(mapset)
            .and_then(|by_kind| by_kind.get(kind.query_type()))
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const FIXTURE: &str = r#"
current_mapset = "user1"
mapsets = ["PERMANENT", "user1", "broken"]
failing = ["broken"]

[elements.PERMANENT]
rast = ["elevation", "aspect"]
vect = ["roads"]

[elements.user1]
rast = ["slope"]
"#;

    fn fixture() -> StaticCatalog {
        StaticCatalog::from_toml(FIXTURE, Path::new("fixture.toml")).unwrap()
    }

    #[test]
    fn parses_fixture() {
        let catalog = fixture();
        assert_eq!(
            catalog.list_mapsets().unwrap(),
            vec!["PERMANENT", "user1", "broken"]
        );
        assert_eq!(catalog.current_mapset().unwrap().as_deref(), Some("user1"));
        assert_eq!(
            catalog
                .list_elements(ElementKind::Raster, "PERMANENT")
                .unwrap(),
            vec!["elevation", "aspect"]
        );
    }

    #[test]
    fn missing_kind_lists_nothing() {
        let catalog = fixture();
        assert!(catalog
            .list_elements(ElementKind::Group, "user1")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn failing_and_unknown_mapsets_error() {
        let catalog = fixture();
        assert!(catalog.list_elements(ElementKind::Raster, "broken").is_err());
        assert!(catalog.list_elements(ElementKind::Raster, "nowhere").is_err());
    }

    #[test]
    fn mapsets_default_to_element_keys() {
        let catalog = StaticCatalog::new()
            .with_elements("b", ElementKind::Vector, ["x"])
            .with_elements("a", ElementKind::Vector, ["y"]);
        assert_eq!(catalog.list_mapsets().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn unknown_fixture_field_is_rejected() {
        let err = StaticCatalog::from_toml("mapset = []\n", &PathBuf::from("bad.toml"))
            .unwrap_err();
        assert!(err.to_string().starts_with("invalid TOML in bad.toml"));
    }
}
