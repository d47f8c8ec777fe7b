//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod catalog;

pub use catalog::{CatalogError, CatalogResult, ElementCatalog};
