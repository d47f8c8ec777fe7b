//! Element Select Widget
//!
//! A combo-style selector for GIS elements. The popup shows a tree of
//! mapsets, each listing the elements of one type stored in it; leaves are
//! picked singly or (with `multiple`) accumulated into a comma-joined value.
//!
//! # Module Structure
//!
//! - `selector` - ElementSelector state and the consumer-facing API
//! - `events` - optional view callbacks (expand, collapse, activate)
//! - `render` - terminal rendering of the tree

mod events;
mod render;
mod selector;

pub use events::{NoopEvents, TreeEvents};
pub use render::{render_status, render_tree};
pub use selector::{ElementSelector, PopupFocus, SelectorOptions};
