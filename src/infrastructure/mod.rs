//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `catalog/` - Element catalogs (GIS command line tools, static fixture)

pub mod catalog;

// Re-export for convenience
pub use catalog::{ProcessCatalog, StaticCatalog};
