//! Element catalog port - abstracts enumeration of mapsets and elements.

use thiserror::Error;

use crate::domain::value_objects::ElementKind;

/// Errors raised by a catalog adapter
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog command could not be started
    #[error("failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The catalog command ran but reported failure
    #[error("'{command}' exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// The catalog does not know the requested mapset
    #[error("mapset '{0}' is not accessible")]
    MapsetUnavailable(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Enumerates mapsets and the elements stored in them.
///
/// Implementations are blocking; the selector calls them synchronously while
/// rebuilding its tree.
pub trait ElementCatalog {
    /// Mapsets in the current search path, in search order.
    fn list_mapsets(&self) -> CatalogResult<Vec<String>>;

    /// The mapset the user is working in, if known.
    fn current_mapset(&self) -> CatalogResult<Option<String>>;

    /// Names of elements of `kind` stored in `mapset`, in any order.
    fn list_elements(&self, kind: ElementKind, mapset: &str) -> CatalogResult<Vec<String>>;
}

impl<C: ElementCatalog + ?Sized> ElementCatalog for &C {
    fn list_mapsets(&self) -> CatalogResult<Vec<String>> {
        (**self).list_mapsets()
    }

    fn current_mapset(&self) -> CatalogResult<Option<String>> {
        (**self).current_mapset()
    }

    fn list_elements(&self, kind: ElementKind, mapset: &str) -> CatalogResult<Vec<String>> {
        (**self).list_elements(kind, mapset)
    }
}

impl<C: ElementCatalog + ?Sized> ElementCatalog for Box<C> {
    fn list_mapsets(&self) -> CatalogResult<Vec<String>> {
        (**self).list_mapsets()
    }

    fn current_mapset(&self) -> CatalogResult<Option<String>> {
        (**self).current_mapset()
    }

    fn list_elements(&self, kind: ElementKind, mapset: &str) -> CatalogResult<Vec<String>> {
        (**self).list_elements(kind, mapset)
    }
}
