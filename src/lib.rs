//! gselect - browse and pick GIS data elements grouped by mapset
//!
//! The core is a two-level tree (mapset → element) built from catalog
//! queries, and a single/multiple selection state machine layered on it.
//! Catalogs are pluggable: the GIS command line tools, or a static TOML
//! fixture.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

// Re-exports for convenience
pub use config::Config;
pub use domain::ports::{CatalogError, CatalogResult, ElementCatalog};
pub use domain::selection::{Selection, SelectionPhase};
pub use domain::tree::{build_tree, ElementTree, NodeKind, NodePath, TreeNode};
pub use domain::value_objects::ElementKind;
pub use error::{SelectError, SelectResult};
pub use infrastructure::{ProcessCatalog, StaticCatalog};
pub use ui::widgets::element_select::{
    ElementSelector, NoopEvents, PopupFocus, SelectorOptions, TreeEvents,
};
